/// Side length of the square grid.
pub type Coord = u8;

/// Count type used for cell totals and pair counts.
pub type CellCount = u16;

/// 0-based cell position in row-major order, stable for the game's lifetime.
pub type CellIndex = u16;

/// Opaque picture identifier; the engine only ever compares these for equality.
pub type PictureId = u16;

/// Reset generation counter, used to invalidate stale deferred resolutions.
pub type Epoch = u32;

pub const fn square(side: Coord) -> CellCount {
    let side = side as CellCount;
    side.saturating_mul(side)
}
