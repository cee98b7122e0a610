use alloc::vec;
use alloc::vec::Vec;
use core::time::Duration;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameState {
    Ready,
    Active,
    Cleared,
}

impl GameState {
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    pub const fn is_cleared(self) -> bool {
        matches!(self, Self::Cleared)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::Ready
    }
}

/// Handle for a scheduled resolution. A tap that turns the second card
/// face-up returns one of these; the caller waits out the resolution delay
/// and hands it back to [`Game::resolve`]. The embedded epoch ties the
/// ticket to the board it was issued for, so a ticket outlives neither a
/// reset nor its own resolution.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ResolutionTicket {
    epoch: Epoch,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct PendingResolution {
    first: CellIndex,
    second: CellIndex,
}

/// Represents a game from start to finish
pub struct Game<G: BoardGenerator = RandomBoardGenerator> {
    config: GameConfig,
    generator: G,
    board: Board,
    cells: Vec<CellState>,
    matched_pairs: CellCount,
    state: GameState,
    pending: Option<PendingResolution>,
    epoch: Epoch,
}

impl Game<RandomBoardGenerator> {
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        Self::with_generator(config, RandomBoardGenerator::new(seed))
    }
}

impl<G: BoardGenerator> Game<G> {
    pub fn with_generator(config: GameConfig, mut generator: G) -> Result<Self> {
        config.validate()?;
        let board = generator.generate(&config);
        if board.total_cells() != config.total_cells() {
            return Err(GameError::BoardSizeMismatch);
        }
        let cells = vec![CellState::default(); usize::from(board.total_cells())];
        Ok(Self {
            config,
            generator,
            board,
            cells,
            matched_pairs: 0,
            state: Default::default(),
            pending: None,
            epoch: 0,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid_size(&self) -> Coord {
        self.config.grid_size
    }

    pub fn resolution_delay(&self) -> Duration {
        self.config.resolution_delay
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_cleared(&self) -> bool {
        self.state.is_cleared()
    }

    pub fn total_pairs(&self) -> CellCount {
        self.board.pair_count()
    }

    /// How many pairs have not been matched yet
    pub fn pairs_left(&self) -> CellCount {
        self.board.pair_count() - self.matched_pairs
    }

    pub fn cell_at(&self, index: CellIndex) -> Result<CellView> {
        let index = self.board.validate_index(index)?;
        Ok(match self.cells[usize::from(index)] {
            CellState::Closed => CellView::Closed,
            CellState::Open => CellView::Open(self.board[index]),
            CellState::Matched => CellView::Matched(self.board[index]),
        })
    }

    pub fn view(&self) -> BoardView {
        BoardView::from_game(self)
    }

    /// Turn a closed card face-up.
    ///
    /// Tapping an open or matched card is a no-op, as is any tap while a
    /// resolution is outstanding; only an out-of-range index is an error.
    /// When this tap turns the second card face-up the pair stays frozen
    /// until the returned ticket is passed to [`resolve`](Self::resolve)
    /// after [`resolution_delay`](Self::resolution_delay).
    pub fn tap(&mut self, index: CellIndex) -> Result<TapOutcome> {
        use TapOutcome::*;

        let index = self.board.validate_index(index)?;

        // a third card cannot turn face-up until the open pair resolves
        if self.pending.is_some() {
            log::trace!("tap {} ignored, resolution outstanding", index);
            return Ok(NoChange);
        }
        if !self.cells[usize::from(index)].is_closed() {
            log::trace!("tap {} ignored, cell not closed", index);
            return Ok(NoChange);
        }

        self.cells[usize::from(index)] = CellState::Open;
        self.mark_started();
        log::debug!("Opened cell {}", index);

        let open = self.open_indices();
        if let [first, second] = open.as_slice() {
            self.pending = Some(PendingResolution {
                first: *first,
                second: *second,
            });
            Ok(PairOpened(ResolutionTicket { epoch: self.epoch }))
        } else {
            Ok(Opened)
        }
    }

    /// Apply the deferred resolution for a previously returned ticket.
    ///
    /// Matching pictures remove both cards, different pictures flip both
    /// back. A stale ticket leaves the board untouched.
    pub fn resolve(&mut self, ticket: ResolutionTicket) -> ResolveOutcome {
        use ResolveOutcome::*;

        if ticket.epoch != self.epoch {
            log::trace!("stale resolution ticket (epoch {})", ticket.epoch);
            return Stale;
        }
        let Some(PendingResolution { first, second }) = self.pending.take() else {
            return Stale;
        };

        if self.board[first] == self.board[second] {
            self.cells[usize::from(first)] = CellState::Matched;
            self.cells[usize::from(second)] = CellState::Matched;
            self.matched_pairs += 1;
            log::debug!("Cells {} and {} matched ({:?})", first, second, self.board[first]);

            // game over once no cell is closed anymore
            if !self.cells.iter().any(|cell| cell.is_closed()) {
                self.state = GameState::Cleared;
                log::debug!("Board cleared after {} pairs", self.matched_pairs);
                Cleared
            } else {
                Match
            }
        } else {
            self.cells[usize::from(first)] = CellState::Closed;
            self.cells[usize::from(second)] = CellState::Closed;
            log::debug!("Cells {} and {} closed again", first, second);
            Mismatch
        }
    }

    /// Deal a fresh board for the same configuration. Every outstanding
    /// resolution ticket becomes stale.
    pub fn reset(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
        self.pending = None;
        self.board = self.generator.generate(&self.config);
        self.cells.clear();
        self.cells
            .resize(usize::from(self.board.total_cells()), CellState::default());
        self.matched_pairs = 0;
        self.state = Default::default();
        log::debug!("Board reset (epoch {})", self.epoch);
    }

    /// Validate a new configuration, adopt it, and deal a fresh board.
    /// The current game is left untouched when validation fails.
    pub fn reconfigure(&mut self, config: GameConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        self.reset();
        Ok(())
    }

    fn open_indices(&self) -> SmallVec<[CellIndex; 2]> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| matches!(cell, CellState::Open))
            .map(|(index, _)| index as CellIndex)
            .collect()
    }

    fn mark_started(&mut self) {
        if matches!(self.state, GameState::Ready) {
            self.state = GameState::Active;
        }
    }
}
