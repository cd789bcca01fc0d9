//! Shared helpers for row-major block grids.

use crate::Block;
use std::fmt;
use thiserror::Error;

/// Errors that can occur when building a grid from rows.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("expected {expected} rows, got {found}")]
    RowCount { expected: usize, found: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Flattens `rows` into a row-major buffer, checking every row has `width` cells.
pub(crate) fn flatten<R: AsRef<[Block]>>(rows: &[R], width: usize) -> Result<Vec<Block>, GridError> {
    let mut cells = Vec::with_capacity(rows.len() * width);
    for (i, row) in rows.iter().enumerate() {
        let row = row.as_ref();
        if row.len() != width {
            return Err(GridError::RaggedRow {
                row: i,
                expected: width,
                found: row.len(),
            });
        }
        cells.extend_from_slice(row);
    }
    Ok(cells)
}

/// Writes a grid as right-justified two-character columns.
pub(crate) fn write_grid(f: &mut fmt::Formatter<'_>, cells: &[Block], width: usize) -> fmt::Result {
    for (i, row) in cells.chunks(width).enumerate() {
        if i > 0 {
            writeln!(f)?;
        }
        for (j, block) in row.iter().enumerate() {
            if j > 0 {
                write!(f, " ")?;
            }
            write!(f, "{:>2}", block)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flatten_rows() {
        let cells = flatten(&[vec![1u8, 2], vec![3, 4]], 2).unwrap();
        assert_eq!(cells, vec![1, 2, 3, 4]);
    }

    #[test]
    fn flatten_rejects_short_row() {
        assert_eq!(
            flatten(&[vec![1u8, 2], vec![3]], 2),
            Err(GridError::RaggedRow {
                row: 1,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn error_display() {
        let err = GridError::RowCount {
            expected: 19,
            found: 3,
        };
        assert!(format!("{}", err).contains("19"));
    }
}
