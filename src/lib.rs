#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod generator;
mod types;

/// Validated board dimensions and mine count, fixed for the lifetime of a
/// [`Board`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    rows: Coord,
    cols: Coord,
    mines: CellCount,
}

impl BoardConfig {
    /// Rejects non-positive dimensions and negative mine counts. No upper
    /// bound relates `mines` to the board area; an oversized request is
    /// handled at placement time (see [`RandomMineGenerator`]).
    pub fn new(rows: Coord, cols: Coord, mines: Coord) -> Result<Self, ConfigError> {
        if rows <= 0 || cols <= 0 {
            return Err(ConfigError::NonPositiveDimensions { rows, cols });
        }
        if mines < 0 {
            return Err(ConfigError::NegativeMineCount { mines });
        }
        Ok(Self {
            rows,
            cols,
            mines: mines as CellCount,
        })
    }

    pub const fn rows(&self) -> Coord {
        self.rows
    }

    pub const fn cols(&self) -> Coord {
        self.cols
    }

    pub const fn mine_count(&self) -> CellCount {
        self.mines
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.cols)
    }

    /// How many non-mine cells must be revealed to win.
    pub const fn safe_cell_count(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2, InvalidMove> {
        let (row, col) = coords;
        if row >= 0 && row < self.rows && col >= 0 && col < self.cols {
            Ok(coords)
        } else {
            Err(InvalidMove::OutOfBounds { row, col })
        }
    }

    pub(crate) const fn grid_dim(&self) -> (usize, usize) {
        (self.rows as usize, self.cols as usize)
    }
}

/// Result of a single [`Board::reveal`] call. Failure and termination are
/// plain values, not exceptional control flow: the caller matches on this
/// and decides whether the session continues.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealOutcome {
    /// The move revealed at least one safe cell; the game goes on.
    Continue,
    /// The move revealed the last safe cell.
    Won,
    /// The target cell holds a mine. The cell itself stays unrevealed.
    Lost,
    /// The move was refused; the board is unchanged.
    Invalid(InvalidMove),
}

impl RevealOutcome {
    /// Won or Lost: the session is over.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    /// Whether this outcome mutated the board.
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Continue | Self::Won)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_non_positive_dimensions() {
        assert_eq!(
            BoardConfig::new(0, 5, 1),
            Err(ConfigError::NonPositiveDimensions { rows: 0, cols: 5 })
        );
        assert_eq!(
            BoardConfig::new(5, -2, 1),
            Err(ConfigError::NonPositiveDimensions { rows: 5, cols: -2 })
        );
    }

    #[test]
    fn config_rejects_negative_mine_count() {
        assert_eq!(
            BoardConfig::new(5, 5, -1),
            Err(ConfigError::NegativeMineCount { mines: -1 })
        );
    }

    #[test]
    fn config_accessors_and_counts() {
        let config = BoardConfig::new(4, 6, 5).unwrap();
        assert_eq!(config.rows(), 4);
        assert_eq!(config.cols(), 6);
        assert_eq!(config.mine_count(), 5);
        assert_eq!(config.total_cells(), 24);
        assert_eq!(config.safe_cell_count(), 19);

        // more mines than cells is accepted, the count saturates
        let overfull = BoardConfig::new(2, 2, 100).unwrap();
        assert_eq!(overfull.safe_cell_count(), 0);
    }

    #[test]
    fn coordinate_validation_covers_all_edges() {
        let config = BoardConfig::new(3, 4, 0).unwrap();
        assert_eq!(config.validate_coords((0, 0)), Ok((0, 0)));
        assert_eq!(config.validate_coords((2, 3)), Ok((2, 3)));
        assert!(config.validate_coords((-1, 0)).is_err());
        assert!(config.validate_coords((0, -1)).is_err());
        assert!(config.validate_coords((3, 0)).is_err());
        assert!(config.validate_coords((0, 4)).is_err());
    }

    #[test]
    fn board_snapshot_round_trips_through_serde() {
        let mut board = Board::with_seed(5, 5, 4, 99).unwrap();
        board.reveal(2, 2);

        let json = serde_json::to_string(&board).unwrap();
        let restored: Board = serde_json::from_str(&json).unwrap();

        assert_eq!(board, restored);
    }

    #[test]
    fn outcome_helpers_classify_variants() {
        assert!(RevealOutcome::Won.is_terminal());
        assert!(RevealOutcome::Lost.is_terminal());
        assert!(!RevealOutcome::Continue.is_terminal());

        assert!(RevealOutcome::Continue.has_update());
        assert!(!RevealOutcome::Lost.has_update());
        let invalid = RevealOutcome::Invalid(InvalidMove::OutOfBounds { row: -1, col: 0 });
        assert!(!invalid.is_terminal());
        assert!(!invalid.has_update());
    }
}
