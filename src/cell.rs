use ndarray::Array2;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::types::{Coord2, ToNdIndex};

/// A grid cell has at most 8 geometric neighbors.
pub const MAX_NEIGHBORS: usize = 8;

/// A single grid position. Whether it holds a mine is fixed at construction;
/// the revealed flag only ever goes from `false` to `true`. Neighbors are a
/// non-owning relation, stored as the coordinates of the adjacent cells and
/// wired exactly once by the board.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    has_mine: bool,
    revealed: bool,
    neighbors: SmallVec<[Coord2; MAX_NEIGHBORS]>,
}

impl Cell {
    pub fn new(has_mine: bool) -> Self {
        Self {
            has_mine,
            ..Default::default()
        }
    }

    pub const fn is_mine(&self) -> bool {
        self.has_mine
    }

    pub const fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Idempotent; a revealed cell stays revealed.
    pub fn mark_revealed(&mut self) {
        self.revealed = true;
    }

    /// Records an adjacent cell's coordinates. The wiring pass visits each
    /// of the 8 displacement directions once, so a 9th link can only come
    /// from a caller bug; it is reported and dropped.
    pub fn link_neighbor(&mut self, coords: Coord2) {
        if self.neighbors.len() >= MAX_NEIGHBORS {
            log::error!("neighbor list full, dropping link to {coords:?}");
            return;
        }
        self.neighbors.push(coords);
    }

    pub fn neighbors(&self) -> &[Coord2] {
        &self.neighbors
    }

    /// How many of the linked neighbors hold a mine. Recomputed on demand;
    /// bounded by 8, so caching buys nothing.
    pub fn adjacent_mine_count(&self, grid: &Array2<Cell>) -> u8 {
        self.neighbors
            .iter()
            .filter(|&&pos| grid[pos.to_nd_index()].has_mine)
            .count() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mark_revealed_is_idempotent() {
        let mut cell = Cell::default();
        assert!(!cell.is_revealed());

        cell.mark_revealed();
        cell.mark_revealed();
        assert!(cell.is_revealed());
    }

    #[test]
    fn link_neighbor_drops_links_beyond_capacity() {
        let mut cell = Cell::default();
        for col in 0..9 {
            cell.link_neighbor((0, col));
        }

        assert_eq!(cell.neighbors().len(), MAX_NEIGHBORS);
        assert_eq!(cell.neighbors().last(), Some(&(0, 7)));
    }

    #[test]
    fn adjacent_mine_count_follows_linked_coordinates() {
        let mut grid: Array2<Cell> = Array2::default((1, 3));
        grid[[0, 2]] = Cell::new(true);

        let mut cell = Cell::default();
        cell.link_neighbor((0, 0));
        cell.link_neighbor((0, 2));

        assert_eq!(cell.adjacent_mine_count(&grid), 1);
    }
}
