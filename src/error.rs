use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::Coord;

/// Rejected construction parameters. Surfaced once, at construction time,
/// never recovered silently.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigError {
    #[error("board dimensions must be positive, got {rows}x{cols}")]
    NonPositiveDimensions { rows: Coord, cols: Coord },
    #[error("mine count must be non-negative, got {mines}")]
    NegativeMineCount { mines: Coord },
}

/// A reveal request the board refuses without mutating anything. The caller
/// may retry with different coordinates.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvalidMove {
    #[error("coordinates ({row}, {col}) are out of bounds")]
    OutOfBounds { row: Coord, col: Coord },
    #[error("cell ({row}, {col}) is already revealed")]
    AlreadyRevealed { row: Coord, col: Coord },
}
