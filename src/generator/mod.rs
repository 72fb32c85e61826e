use ndarray::Array2;

pub use random::*;

mod random;

use crate::BoardConfig;
use crate::types::{CellCount, Coord2};

/// Produces the mine mask for a board, given the coordinates of the first
/// reveal. Consumed by value: placement happens exactly once per board.
///
/// Contract: the mask is shaped `rows x cols` and the clamped 3x3 block
/// around `anchor` is left mine-free, so the first reveal never hits a mine.
pub trait MineGenerator {
    fn generate(self, config: &BoardConfig, anchor: Coord2) -> Array2<bool>;
}

/// Whether `coords` lies in the clamped 3x3 block centered on `anchor`.
pub(crate) fn in_safe_zone(coords: Coord2, anchor: Coord2) -> bool {
    (coords.0 - anchor.0).abs() <= 1 && (coords.1 - anchor.1).abs() <= 1
}

/// Number of grid cells the safe zone actually covers once clamped to the
/// board edges (1, 2, or 3 per axis).
pub(crate) fn safe_zone_cell_count(config: &BoardConfig, anchor: Coord2) -> CellCount {
    let rows = (anchor.0 + 1).min(config.rows() - 1) - (anchor.0 - 1).max(0) + 1;
    let cols = (anchor.1 + 1).min(config.cols() - 1) - (anchor.1 - 1).max(0) + 1;
    (rows * cols) as CellCount
}
