#![no_std]

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::ops::Index;
use core::time::Duration;
use serde::{Deserialize, Serialize};

pub use catalog::*;
pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use types::*;
pub use view::*;

mod catalog;
mod cell;
mod engine;
mod error;
mod generator;
mod types;
mod view;

pub const DEFAULT_GRID_SIZE: Coord = 6;
pub const DEFAULT_RESOLUTION_DELAY: Duration = Duration::from_millis(500);

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the square grid.
    pub grid_size: Coord,
    /// How long both cards of a pair stay face-up before the resolution is
    /// applied. The engine never sleeps; the caller owns the timer.
    pub resolution_delay: Duration,
    pub catalog: PictureCatalog,
}

impl GameConfig {
    pub fn new(grid_size: Coord) -> Result<Self> {
        let config = Self {
            grid_size,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_catalog(mut self, catalog: PictureCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_resolution_delay(mut self, delay: Duration) -> Self {
        self.resolution_delay = delay;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.grid_size < 1 {
            return Err(GameError::InvalidGridSize);
        }
        if self.total_cells() % 2 != 0 {
            return Err(GameError::OddCellCount);
        }
        if self.catalog.is_empty() {
            return Err(GameError::EmptyCatalog);
        }
        Ok(())
    }

    pub const fn total_cells(&self) -> CellCount {
        square(self.grid_size)
    }

    pub const fn pair_count(&self) -> CellCount {
        self.total_cells() / 2
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            resolution_delay: DEFAULT_RESOLUTION_DELAY,
            catalog: PictureCatalog::default(),
        }
    }
}

/// Picture assignment for one game, index-aligned with the cell states.
/// Invariant: every picture id occurs an even number of times.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pictures: Vec<PictureId>,
}

impl Board {
    pub fn from_pictures(pictures: Vec<PictureId>) -> Result<Self> {
        let mut occurrences: BTreeMap<PictureId, u32> = BTreeMap::new();
        for &id in &pictures {
            *occurrences.entry(id).or_insert(0) += 1;
        }
        if occurrences.values().any(|&count| count % 2 != 0) {
            return Err(GameError::UnpairedPicture);
        }
        Ok(Self { pictures })
    }

    pub fn validate_index(&self, index: CellIndex) -> Result<CellIndex> {
        if usize::from(index) < self.pictures.len() {
            Ok(index)
        } else {
            Err(GameError::InvalidIndex)
        }
    }

    pub fn total_cells(&self) -> CellCount {
        self.pictures.len().try_into().unwrap()
    }

    pub fn pair_count(&self) -> CellCount {
        self.total_cells() / 2
    }
}

impl Index<CellIndex> for Board {
    type Output = PictureId;

    fn index(&self, index: CellIndex) -> &Self::Output {
        &self.pictures[usize::from(index)]
    }
}

/// Outcome of tapping a cell
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TapOutcome {
    NoChange,
    Opened,
    PairOpened(ResolutionTicket),
}

impl TapOutcome {
    /// Whether this outcome could have caused an update to the game
    pub const fn has_update(self) -> bool {
        use TapOutcome::*;
        match self {
            NoChange => false,
            Opened => true,
            PairOpened(_) => true,
        }
    }
}

/// Outcome of applying a deferred resolution
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ResolveOutcome {
    /// The ticket belongs to a board that has since been reset, or the
    /// resolution was already applied.
    Stale,
    Mismatch,
    Match,
    /// The match cleared the last pair.
    Cleared,
}

impl ResolveOutcome {
    /// Whether this outcome could have caused an update to the game
    pub const fn has_update(self) -> bool {
        use ResolveOutcome::*;
        match self {
            Stale => false,
            Mismatch => true,
            Match => true,
            Cleared => true,
        }
    }

    pub const fn is_game_over(self) -> bool {
        matches!(self, Self::Cleared)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn config_rejects_zero_grid() {
        assert_eq!(GameConfig::new(0), Err(GameError::InvalidGridSize));
    }

    #[test]
    fn config_rejects_odd_cell_count() {
        assert_eq!(GameConfig::new(3), Err(GameError::OddCellCount));
        assert_eq!(GameConfig::new(5), Err(GameError::OddCellCount));
    }

    #[test]
    fn config_defaults_match_the_stock_game() {
        let config = GameConfig::default();

        assert_eq!(config.grid_size, 6);
        assert_eq!(config.resolution_delay, Duration::from_millis(500));
        assert_eq!(config.catalog.len(), 17);
        assert_eq!(config.pair_count(), 18);
        config.validate().unwrap();
    }

    #[test]
    fn config_builders_override_defaults() {
        let catalog = PictureCatalog::new(vec!["a".into()]).unwrap();
        let config = GameConfig::new(4)
            .unwrap()
            .with_catalog(catalog)
            .with_resolution_delay(Duration::from_millis(250));

        assert_eq!(config.resolution_delay, Duration::from_millis(250));
        assert_eq!(config.catalog.len(), 1);
        config.validate().unwrap();
    }

    #[test]
    fn board_rejects_unpaired_pictures() {
        assert_eq!(
            Board::from_pictures(vec![0, 0, 1]),
            Err(GameError::UnpairedPicture)
        );
        assert_eq!(
            Board::from_pictures(vec![0, 1, 2, 0]),
            Err(GameError::UnpairedPicture)
        );
    }

    #[test]
    fn board_accepts_even_multisets() {
        let board = Board::from_pictures(vec![0, 1, 0, 1]).unwrap();

        assert_eq!(board.total_cells(), 4);
        assert_eq!(board.pair_count(), 2);
        assert_eq!(board[2], 0);
    }

    #[test]
    fn board_validates_indices() {
        let board = Board::from_pictures(vec![0, 0]).unwrap();

        assert_eq!(board.validate_index(1), Ok(1));
        assert_eq!(board.validate_index(2), Err(GameError::InvalidIndex));
    }
}
