use serde::{Deserialize, Serialize};

use crate::PictureId;

/// Canonical per-cell state stored by the engine.
///
/// `Closed -> Open` on tap; a resolution then moves both open cells to
/// `Matched` (terminal until reset) or back to `Closed`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum CellState {
    Closed,
    Open,
    Matched,
}

impl CellState {
    pub const fn is_closed(self) -> bool {
        matches!(self, Self::Closed)
    }
}

impl Default for CellState {
    fn default() -> Self {
        Self::Closed
    }
}

/// Player-visible cell. The picture id is only present on face-up variants,
/// so a closed cell's picture cannot be read through this type.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum CellView {
    Closed,
    Open(PictureId),
    Matched(PictureId),
}

impl CellView {
    pub const fn is_closed(self) -> bool {
        matches!(self, Self::Closed)
    }

    /// Picture id of a face-up cell.
    pub const fn picture(self) -> Option<PictureId> {
        match self {
            Self::Closed => None,
            Self::Open(id) => Some(id),
            Self::Matched(id) => Some(id),
        }
    }
}

impl Default for CellView {
    fn default() -> Self {
        Self::Closed
    }
}
