//! Simulated board representation.

use crate::grid::{self, GridError};
use crate::{Block, GameConfig, EMPTY_BLOCK};
use std::fmt;

/// The simulated field for one player.
///
/// Row 0 is the top of the padding region above the visible field; the
/// last row is the bottom of the field. Cells are stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Block>,
}

impl Board {
    /// Creates a board of the simulated size with every cell empty.
    pub fn empty(config: &GameConfig) -> Self {
        let width = config.width();
        let height = config.simulation_height();
        Board {
            width,
            height,
            cells: vec![EMPTY_BLOCK; width * height],
        }
    }

    /// Builds a board from all of its rows, top to bottom.
    pub fn from_rows<R: AsRef<[Block]>>(config: &GameConfig, rows: &[R]) -> Result<Self, GridError> {
        let height = config.simulation_height();
        if rows.len() != height {
            return Err(GridError::RowCount {
                expected: height,
                found: rows.len(),
            });
        }
        let width = config.width();
        let cells = grid::flatten(rows, width)?;
        Ok(Board {
            width,
            height,
            cells,
        })
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows, including the padding region.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the block at `row`, `col`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Block {
        debug_assert!(row < self.height && col < self.width);
        self.cells[row * self.width + col]
    }

    /// Sets the block at `row`, `col`.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, block: Block) {
        debug_assert!(row < self.height && col < self.width);
        self.cells[row * self.width + col] = block;
    }

    /// Returns one row.
    #[inline]
    pub fn row(&self, row: usize) -> &[Block] {
        let start = row * self.width;
        &self.cells[start..start + self.width]
    }

    /// Overwrites one row. `blocks` must be exactly `width` long.
    pub fn set_row(&mut self, row: usize, blocks: &[Block]) {
        let start = row * self.width;
        self.cells[start..start + self.width].copy_from_slice(blocks);
    }

    /// Iterates over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Block]> {
        self.cells.chunks(self.width)
    }

    /// Drops one layer of obstacle blocks and returns the result.
    ///
    /// Nothing happens until `obstacle_count` covers a full row. Then every
    /// column gets one obstacle in its lowest empty cell; full columns are
    /// skipped. `self` is left unchanged.
    pub fn apply_obstacles(&self, config: &GameConfig, obstacle_count: u32) -> Board {
        let mut after = self.clone();
        if (obstacle_count as usize) < self.width {
            return after;
        }
        let obstacle = config.obstacle_block();
        for col in 0..self.width {
            if let Some(row) = (0..self.height)
                .rev()
                .find(|&row| self.get(row, col) == EMPTY_BLOCK)
            {
                after.set(row, col, obstacle);
            }
        }
        after
    }

    /// Number of contiguous non-empty cells at the bottom of `col`.
    pub fn stack_height(&self, col: usize) -> usize {
        (0..self.height)
            .rev()
            .take_while(|&row| self.get(row, col) != EMPTY_BLOCK)
            .count()
    }

    /// Stack heights for every column, left to right.
    pub fn stack_heights(&self) -> Vec<usize> {
        (0..self.width).map(|col| self.stack_height(col)).collect()
    }

    /// Returns true if any column stacks above the visible field.
    pub fn is_over_danger_line(&self, config: &GameConfig) -> bool {
        (0..self.width).any(|col| self.stack_height(col) > config.height())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        grid::write_grid(f, &self.cells, self.width)
    }
}
