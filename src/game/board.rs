use crate::{GameError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rectangular tile grid. Cells are stored row-major; 0 is an empty cell,
/// any positive value is a power of two (2, 4, 8, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub(crate) height: usize,
    pub(crate) width: usize,
    pub(crate) cells: Vec<u32>,
}

impl Board {
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Value of the tile at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<u32> {
        let index = self.index_of(row, col)?;
        Ok(self.cells[index])
    }

    /// Set the tile at (row, col). The value is not validated beyond a debug
    /// assertion; callers are expected to store 0 or a power of two >= 2.
    pub fn set(&mut self, row: usize, col: usize, value: u32) -> Result<()> {
        debug_assert!(
            value == 0 || (value >= 2 && value.is_power_of_two()),
            "tile value {value} is neither empty nor a power of two"
        );
        let index = self.index_of(row, col)?;
        self.cells[index] = value;
        Ok(())
    }

    pub fn is_empty(&self, row: usize, col: usize) -> Result<bool> {
        Ok(self.get(row, col)? == 0)
    }

    /// Get a reference to the raw cells, row-major.
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    fn index_of(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.height || col >= self.width {
            return Err(GameError::OutOfBounds {
                row,
                col,
                height: self.height,
                width: self.width,
            });
        }
        Ok(row * self.width + col)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                let value = self.cells[row * self.width + col];
                if value == 0 {
                    write!(f, "    .")?;
                } else {
                    write!(f, "{value:5}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
