use ndarray::Array2;

use super::*;

/// Uniform random placement: selects the configured number of distinct cells
/// without replacement, from an owned seedable source.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RandomMinefieldGenerator {
    seed: u64,
}

impl RandomMinefieldGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MinefieldGenerator for RandomMinefieldGenerator {
    fn generate(self, config: &BoardConfig) -> Minefield {
        use rand::prelude::*;

        let mut mine_mask: Array2<bool> = Array2::default([usize::from(config.size()); 2]);
        let mut free_cells = config.total_cells();
        let mut rng = SmallRng::seed_from_u64(self.seed);

        {
            let cells = mine_mask.as_slice_mut().expect("mask layout is standard");
            for _ in 0..config.mines() {
                // pick a position among the still-free cells, shifting past
                // occupied ones
                let mut place = rng.random_range(0..free_cells);
                for (i, cell) in cells.iter_mut().enumerate() {
                    if *cell {
                        place += 1;
                    }
                    if i as CellCount == place {
                        *cell = true;
                        free_cells -= 1;
                        break;
                    }
                }
            }
        }

        log::debug!(
            "placed {} mines on {} cells (seed {})",
            config.mines(),
            config.total_cells(),
            self.seed
        );

        Minefield::from_mine_mask(&mine_mask).expect("mask matches the validated config")
    }
}
