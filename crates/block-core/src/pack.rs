//! Pack representation and rotation.

use crate::grid::{self, GridError};
use crate::Block;
use std::fmt;

/// A square group of blocks dropped onto the board in one turn.
///
/// Cells are stored row-major. A pack is never modified after it is read;
/// rotation returns a new pack.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pack {
    size: usize,
    blocks: Vec<Block>,
}

impl Pack {
    /// Builds a pack from its rows. Every row must be as long as the
    /// number of rows.
    pub fn from_rows<R: AsRef<[Block]>>(rows: &[R]) -> Result<Self, GridError> {
        let size = rows.len();
        let blocks = grid::flatten(rows, size)?;
        Ok(Pack { size, blocks })
    }

    /// Side length.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the block at `row`, `col`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Block {
        debug_assert!(row < self.size && col < self.size);
        self.blocks[row * self.size + col]
    }

    /// Iterates over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Block]> {
        self.blocks.chunks(self.size)
    }

    /// Returns the pack rotated 90 degrees clockwise.
    pub fn rotate_once(&self) -> Pack {
        let n = self.size;
        let mut blocks = vec![0; self.blocks.len()];
        for i in 0..n {
            for j in 0..n {
                blocks[j * n + (n - 1 - i)] = self.blocks[i * n + j];
            }
        }
        Pack { size: n, blocks }
    }

    /// Returns the pack rotated clockwise `rotation` times.
    pub fn rotate(&self, rotation: usize) -> Pack {
        let mut pack = self.clone();
        for _ in 0..rotation {
            pack = pack.rotate_once();
        }
        pack
    }
}

impl fmt::Display for Pack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        grid::write_grid(f, &self.blocks, self.size)
    }
}
