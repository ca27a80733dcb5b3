use anyhow::{anyhow, Result};

use crate::{HEIGHT, WIDTH, WIN_LENGTH};

/// Board geometry for an engine instance
///
/// Every column owns `rows + 1` bits of the 64-bit board masks; the extra
/// padding bit keeps shift arithmetic from bleeding runs across columns.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Rules {
    columns: usize,
    rows: usize,
    win_length: usize,
}

impl Rules {
    /// Creates a validated board geometry
    pub fn new(columns: usize, rows: usize, win_length: usize) -> Result<Self> {
        if columns == 0 || rows == 0 {
            return Err(anyhow!("board must have at least one column and one row"));
        }
        if columns * (rows + 1) > 64 {
            return Err(anyhow!(
                "a {}x{} board does not fit the 64-bit board representation",
                columns,
                rows
            ));
        }
        if win_length < 2 || (win_length > columns && win_length > rows) {
            return Err(anyhow!(
                "a run of {} is unplayable on a {}x{} board",
                win_length,
                columns,
                rows
            ));
        }
        Ok(Self {
            columns,
            rows,
            win_length,
        })
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// Bits allocated to each column, including the padding bit
    pub fn stride(&self) -> usize {
        self.rows + 1
    }

    /// Number of playable cells on the board
    pub fn cell_count(&self) -> usize {
        self.columns * self.rows
    }

    /// Bit index of a cell, rows counted from the bottom
    pub fn bit(&self, column: usize, row: usize) -> usize {
        column * self.stride() + row
    }

    pub fn bottom_mask(&self, column: usize) -> u64 {
        1 << (column * self.stride())
    }

    pub fn top_mask(&self, column: usize) -> u64 {
        1 << (column * self.stride() + self.rows - 1)
    }

    pub fn column_mask(&self, column: usize) -> u64 {
        ((1 << self.rows) - 1) << (column * self.stride())
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            columns: WIDTH,
            rows: HEIGHT,
            win_length: WIN_LENGTH,
        }
    }
}
