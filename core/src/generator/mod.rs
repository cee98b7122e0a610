use crate::*;
pub use random::*;

mod random;

/// Produces the picture assignment for a fresh board.
///
/// Contract: the returned board holds `config.pair_count() * 2` cells.
/// Takes `&mut self` so one generator instance can serve every reset of the
/// game that owns it.
pub trait BoardGenerator {
    fn generate(&mut self, config: &GameConfig) -> Board;
}
