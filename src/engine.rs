use alloc::collections::VecDeque;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::cell::Cell;
use crate::error::{ConfigError, InvalidMove};
use crate::generator::{MineGenerator, RandomMineGenerator};
use crate::types::{CellCount, Coord, Coord2, NeighborIter, ToNdIndex};
use crate::{BoardConfig, RevealOutcome};

/// The playing field: a fixed-size grid of [`Cell`]s plus the bookkeeping
/// needed to decide win/loss.
///
/// The grid stays empty until the first [`reveal`](Board::reveal) call, whose
/// coordinates anchor the mine-free safe zone; mine placement and neighbor
/// wiring happen exactly once, then the consumed generator is gone. All
/// mutation goes through `reveal`, synchronously and single-threaded; a
/// concurrent host must serialize access externally.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board<G = RandomMineGenerator> {
    config: BoardConfig,
    grid: Array2<Cell>,
    revealed_safe_count: CellCount,
    initialized: bool,
    generator: Option<G>,
}

impl Board<RandomMineGenerator> {
    /// Random board from raw dimensions, seeded for reproducible placement.
    pub fn with_seed(
        rows: Coord,
        cols: Coord,
        mines: Coord,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        Ok(Self::new(
            BoardConfig::new(rows, cols, mines)?,
            RandomMineGenerator::new(seed),
        ))
    }
}

impl<G: MineGenerator> Board<G> {
    pub fn new(config: BoardConfig, generator: G) -> Self {
        Self {
            config,
            grid: Array2::default((0, 0)),
            revealed_safe_count: 0,
            initialized: false,
            generator: Some(generator),
        }
    }

    pub const fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub const fn rows(&self) -> Coord {
        self.config.rows()
    }

    pub const fn cols(&self) -> Coord {
        self.config.cols()
    }

    pub const fn mine_count(&self) -> CellCount {
        self.config.mine_count()
    }

    /// Running count of successful non-mine reveals, cascade included.
    pub const fn click_count(&self) -> CellCount {
        self.revealed_safe_count
    }

    pub const fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Bounds-checked cell lookup. Also `None` before the first reveal,
    /// while no cells exist yet.
    pub fn cell(&self, row: Coord, col: Coord) -> Option<&Cell> {
        let coords = self.config.validate_coords((row, col)).ok()?;
        self.grid.get(coords.to_nd_index())
    }

    /// First cell in row-major order that is neither revealed nor a mine.
    /// A stable scan, not a random pick, so hints are reproducible.
    pub fn find_hint(&self) -> Option<Coord2> {
        self.grid
            .indexed_iter()
            .find(|(_, cell)| !cell.is_revealed() && !cell.is_mine())
            .map(|((row, col), _)| (row as Coord, col as Coord))
    }

    /// Reveals the cell at `(row, col)` and reports how the move went.
    ///
    /// The very first valid call initializes the board, anchoring the safe
    /// zone at its coordinates, so it can never return `Lost`. `Invalid`
    /// moves and `Lost` leave the board untouched; in particular a mined
    /// target keeps its revealed flag, the loss is diagnosed before any
    /// mutation. A safe target cascades (see below) and yields `Won` on the
    /// call that reveals the last safe cell, `Continue` otherwise.
    ///
    /// A terminal board is not locked: further calls keep evaluating under
    /// the same rules, ending the session is the caller's job.
    pub fn reveal(&mut self, row: Coord, col: Coord) -> RevealOutcome {
        let coords = match self.config.validate_coords((row, col)) {
            Ok(coords) => coords,
            Err(invalid) => return RevealOutcome::Invalid(invalid),
        };

        if !self.initialized {
            self.initialize(coords);
        }

        let target = &self.grid[coords.to_nd_index()];
        if target.is_revealed() {
            return RevealOutcome::Invalid(InvalidMove::AlreadyRevealed { row, col });
        }
        if target.is_mine() {
            return RevealOutcome::Lost;
        }

        self.cascade_reveal(coords);

        if self.revealed_safe_count == self.config.safe_cell_count() {
            RevealOutcome::Won
        } else {
            RevealOutcome::Continue
        }
    }

    /// One-time board construction: allocate mine-free cells, swap in the
    /// generator's mines, wire the neighbor relation.
    fn initialize(&mut self, anchor: Coord2) {
        self.grid = Array2::default(self.config.grid_dim());

        if let Some(generator) = self.generator.take() {
            let mask = generator.generate(&self.config, anchor);
            if mask.dim() == self.config.grid_dim() {
                for (idx, &has_mine) in mask.indexed_iter() {
                    if has_mine {
                        self.grid[idx] = Cell::new(true);
                    }
                }
            } else {
                log::error!(
                    "generator produced a {:?} mask for a {:?} board, ignoring it",
                    mask.dim(),
                    self.config.grid_dim()
                );
            }
        }

        self.wire_neighbors();
        self.initialized = true;
        log::debug!(
            "initialized {}x{} board with {} mines, anchor {anchor:?}",
            self.config.rows(),
            self.config.cols(),
            self.config.mine_count()
        );
    }

    /// Links every cell to each of its in-bounds geometric neighbors. Every
    /// cell runs the same 8-direction pass, which is what makes the relation
    /// end up symmetric.
    fn wire_neighbors(&mut self) {
        let bounds = (self.config.rows(), self.config.cols());
        for row in 0..bounds.0 {
            for col in 0..bounds.1 {
                for neighbor in NeighborIter::new((row, col), bounds) {
                    self.grid[(row, col).to_nd_index()].link_neighbor(neighbor);
                }
            }
        }
    }

    /// Flood fill over an explicit work queue rather than recursion, so the
    /// expansion is bounded by heap and not call-stack depth. Each popped
    /// coordinate re-checks the rules: mines and already-revealed cells are
    /// skipped, zero-count cells enqueue their neighbors, positive-count
    /// cells are revealed as the region border and stop.
    fn cascade_reveal(&mut self, start: Coord2) {
        let mut to_visit = VecDeque::from([start]);

        while let Some(coords) = to_visit.pop_front() {
            let idx = coords.to_nd_index();
            if self.grid[idx].is_revealed() || self.grid[idx].is_mine() {
                continue;
            }

            let adjacent_mines = self.grid[idx].adjacent_mine_count(&self.grid);
            self.grid[idx].mark_revealed();
            self.revealed_safe_count += 1;

            if adjacent_mines == 0 {
                to_visit.extend(self.grid[idx].neighbors().iter().copied().filter(|&pos| {
                    let neighbor = &self.grid[pos.to_nd_index()];
                    !neighbor.is_revealed() && !neighbor.is_mine()
                }));
            }
        }
    }
}
