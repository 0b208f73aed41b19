#![no_std]

extern crate alloc;

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use generator::*;
pub use tile::*;
pub use types::*;

mod engine;
mod error;
mod generator;
mod tile;
mod types;

/// Validated board configuration: a square `size x size` grid holding `mines`
/// mines, with at least one safe cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    size: Coord,
    mines: CellCount,
}

impl BoardConfig {
    pub fn new(size: Coord, mines: CellCount) -> Result<Self> {
        if size == 0 || mines >= square_cells(size) {
            return Err(GameError::InvalidConfiguration);
        }
        Ok(Self { size, mines })
    }

    pub const fn size(&self) -> Coord {
        self.size
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    pub const fn total_cells(&self) -> CellCount {
        square_cells(self.size)
    }
}

impl Default for BoardConfig {
    /// The classic ten-by-ten board with ten mines.
    fn default() -> Self {
        Self { size: 10, mines: 10 }
    }
}

/// The immutable board: mine placement and adjacency counts are assigned once
/// at construction and never change afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Minefield {
    cells: Array2<CellValue>,
    mine_count: CellCount,
}

impl Minefield {
    /// Builds the field from a mine mask, assigning every safe cell the mine
    /// count of its clipped 3x3 neighborhood.
    pub fn from_mine_mask(mine_mask: &Array2<bool>) -> Result<Self> {
        let (rows, cols) = mine_mask.dim();
        if rows != cols || rows == 0 || rows > usize::from(Coord::MAX) {
            return Err(GameError::InvalidConfiguration);
        }
        let side = rows as Coord;

        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count() as CellCount;
        if mine_count >= square_cells(side) {
            return Err(GameError::InvalidConfiguration);
        }

        let cells = Array2::from_shape_fn((rows, cols), |(row, col)| {
            if mine_mask[(row, col)] {
                CellValue::Mine
            } else {
                let center = (row as Coord, col as Coord);
                let count = NeighborIter::new(center, side)
                    .filter(|&pos| mine_mask[pos.to_nd_index()])
                    .count() as u8;
                CellValue::Safe(count)
            }
        });

        Ok(Self { cells, mine_count })
    }

    /// Deterministic layout from an explicit mine list; duplicates collapse
    /// into a single mine.
    pub fn with_mines(size: Coord, mine_coords: &[Coord2]) -> Result<Self> {
        if size == 0 {
            return Err(GameError::InvalidConfiguration);
        }

        let mut mine_mask: Array2<bool> = Array2::default([usize::from(size); 2]);
        for &coords in mine_coords {
            if coords.0 >= size || coords.1 >= size {
                return Err(GameError::OutOfBounds);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Self::from_mine_mask(&mine_mask)
    }

    pub fn config(&self) -> BoardConfig {
        BoardConfig {
            size: self.size(),
            mines: self.mine_count,
        }
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size && coords.1 < size {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    pub fn size(&self) -> Coord {
        self.cells.dim().0 as Coord
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len() as CellCount
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.size())
    }
}

impl Index<Coord2> for Minefield {
    type Output = CellValue;

    fn index(&self, index: Coord2) -> &Self::Output {
        &self.cells[index.to_nd_index()]
    }
}
