use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Cell index out of range")]
    InvalidIndex,
    #[error("Grid side length must be at least 1")]
    InvalidGridSize,
    #[error("Grid has an odd number of cells")]
    OddCellCount,
    #[error("Picture catalog is empty")]
    EmptyCatalog,
    #[error("A picture id occurs an odd number of times")]
    UnpairedPicture,
    #[error("Board size does not match the configured grid")]
    BoardSizeMismatch,
}

pub type Result<T> = core::result::Result<T, GameError>;
