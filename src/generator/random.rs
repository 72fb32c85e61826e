use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use super::{MineGenerator, in_safe_zone, safe_zone_cell_count};
use crate::BoardConfig;
use crate::types::{Coord2, ToNdIndex};

/// Uniform random placement by rejection sampling: draw a coordinate, reject
/// it if it falls in the first-reveal safe zone or already holds a mine,
/// repeat until the requested count is placed. Seeded, so the same seed and
/// anchor reproduce the same layout.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomMineGenerator {
    seed: u64,
}

impl RandomMineGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(self, config: &BoardConfig, anchor: Coord2) -> Array2<bool> {
        use rand::prelude::*;

        let mut mask: Array2<bool> = Array2::default(config.grid_dim());

        // A request larger than the cells outside the safe zone would make
        // the sampling loop spin forever; cap it so placement terminates.
        let available = config
            .total_cells()
            .saturating_sub(safe_zone_cell_count(config, anchor));
        let mut target = config.mine_count();
        if target > available {
            log::warn!(
                "cannot place {target} mines outside the safe zone, capping at {available}"
            );
            target = available;
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut placed = 0;
        while placed < target {
            let coords = (
                rng.random_range(0..config.rows()),
                rng.random_range(0..config.cols()),
            );

            if in_safe_zone(coords, anchor) {
                continue;
            }

            let slot = &mut mask[coords.to_nd_index()];
            if !*slot {
                *slot = true;
                placed += 1;
            }
        }

        mask
    }
}

/// Places exactly the given coordinates, ignoring the anchor. Deliberately
/// exempt from the safe-zone contract; meant for tests and replays where the
/// layout must be known up front. Out-of-bounds entries are reported and
/// skipped.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetMineGenerator {
    mines: Vec<Coord2>,
}

impl PresetMineGenerator {
    pub fn new(mines: impl Into<Vec<Coord2>>) -> Self {
        Self {
            mines: mines.into(),
        }
    }
}

impl MineGenerator for PresetMineGenerator {
    fn generate(self, config: &BoardConfig, _anchor: Coord2) -> Array2<bool> {
        let mut mask: Array2<bool> = Array2::default(config.grid_dim());

        for coords in self.mines {
            if config.validate_coords(coords).is_err() {
                log::warn!("preset mine {coords:?} is out of bounds, skipping");
                continue;
            }
            mask[coords.to_nd_index()] = true;
        }

        mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mine_coords(mask: &Array2<bool>) -> Vec<(usize, usize)> {
        mask.indexed_iter()
            .filter(|&(_, &mine)| mine)
            .map(|(pos, _)| pos)
            .collect()
    }

    #[test]
    fn same_seed_and_anchor_reproduce_the_layout() {
        let config = BoardConfig::new(9, 9, 10).unwrap();

        let first = RandomMineGenerator::new(42).generate(&config, (4, 4));
        let second = RandomMineGenerator::new(42).generate(&config, (4, 4));

        assert_eq!(first, second);
        assert_eq!(mine_coords(&first).len(), 10);
    }

    #[test]
    fn different_seeds_diverge() {
        let config = BoardConfig::new(16, 16, 40).unwrap();

        let first = RandomMineGenerator::new(1).generate(&config, (8, 8));
        let second = RandomMineGenerator::new(2).generate(&config, (8, 8));

        assert_ne!(first, second);
    }

    #[test]
    fn safe_zone_stays_mine_free_for_any_anchor() {
        let config = BoardConfig::new(5, 5, 14).unwrap();

        for anchor in [(2, 2), (0, 0), (4, 0), (0, 4), (4, 4), (2, 0)] {
            let mask = RandomMineGenerator::new(7).generate(&config, anchor);

            assert_eq!(mine_coords(&mask).len(), 14);
            for ((row, col), &mine) in mask.indexed_iter() {
                if in_safe_zone((row as i32, col as i32), anchor) {
                    assert!(!mine, "mine in safe zone at ({row}, {col})");
                }
            }
        }
    }

    #[test]
    fn overfull_request_is_capped_and_terminates() {
        let config = BoardConfig::new(2, 2, 10).unwrap();

        let mask = RandomMineGenerator::new(0).generate(&config, (0, 0));

        // the safe zone covers the whole 2x2 board, nothing can be placed
        assert_eq!(mine_coords(&mask).len(), 0);

        let config = BoardConfig::new(3, 3, 99).unwrap();
        let mask = RandomMineGenerator::new(0).generate(&config, (0, 0));

        // 9 cells minus the 4-cell clamped safe zone
        assert_eq!(mine_coords(&mask).len(), 5);
    }

    #[test]
    fn preset_generator_places_given_coordinates_only() {
        let config = BoardConfig::new(3, 3, 2).unwrap();

        let mask = PresetMineGenerator::new([(0, 0), (2, 1), (9, 9)]).generate(&config, (1, 1));

        assert_eq!(mine_coords(&mask), [(0, 0), (2, 1)]);
    }
}
