use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Read-only snapshot of a game for the presentation layer. Closed cells
/// carry no picture id, so a renderer (or a save of the snapshot) cannot
/// peek at face-down cards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardView {
    pub grid_size: Coord,
    pub state: GameState,
    pub cells: Vec<CellView>,
}

impl BoardView {
    pub fn from_game<G: BoardGenerator>(game: &Game<G>) -> Self {
        let total = game.config().total_cells();
        let cells = (0..total)
            .map(|index| game.cell_at(index).unwrap_or(CellView::Closed))
            .collect();
        Self {
            grid_size: game.grid_size(),
            state: game.state(),
            cells,
        }
    }

    pub fn cell(&self, index: CellIndex) -> Option<CellView> {
        self.cells.get(usize::from(index)).copied()
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_cleared()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    struct FixedBoardGenerator(Vec<PictureId>);

    impl BoardGenerator for FixedBoardGenerator {
        fn generate(&mut self, _config: &GameConfig) -> Board {
            Board::from_pictures(self.0.clone()).unwrap()
        }
    }

    fn game() -> Game<FixedBoardGenerator> {
        let config = GameConfig {
            grid_size: 2,
            ..GameConfig::default()
        };
        Game::with_generator(config, FixedBoardGenerator(vec![0, 1, 0, 1])).unwrap()
    }

    #[test]
    fn from_game_maps_open_and_matched_cells() {
        let mut game = game();
        game.tap(0).unwrap();

        let view = game.view();
        assert_eq!(view.grid_size, 2);
        assert_eq!(view.state, GameState::Active);
        assert_eq!(view.cell(0), Some(CellView::Open(0)));
        assert_eq!(view.cell(1), Some(CellView::Closed));
        assert_eq!(view.cell(4), None);
        assert!(!view.is_game_over());
    }

    #[test]
    fn closed_cells_never_expose_a_picture() {
        let game = game();

        let view = game.view();
        assert!(view.cells.iter().all(|cell| cell.picture().is_none()));
    }

    #[test]
    fn snapshot_round_trips_through_json() {
        let mut game = game();
        game.tap(2).unwrap();

        let view = game.view();
        let json = serde_json::to_string(&view).unwrap();
        let restored: BoardView = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, view);
    }
}
