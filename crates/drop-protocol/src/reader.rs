//! Line reader that skips blank lines and parses integer tokens.

use crate::ProtocolError;
use block_core::{Block, GameConfig};
use std::io::BufRead;
use std::str::FromStr;

const TERMINATOR: &str = "END";

/// Reads the server's line-oriented input.
///
/// Every read skips empty and whitespace-only lines. Running out of input
/// is always an error: the server never closes the stream mid-match on a
/// well-formed run.
pub struct ProtocolReader<R: BufRead> {
    inner: R,
    line: usize,
    buf: String,
}

impl<R: BufRead> ProtocolReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            line: 0,
            buf: String::new(),
        }
    }

    /// Number of physical lines consumed so far.
    pub fn line_number(&self) -> usize {
        self.line
    }

    /// Returns the next line that has any non-whitespace content, trimmed.
    pub fn next_non_blank_line(&mut self) -> Result<&str, ProtocolError> {
        self.advance()?;
        Ok(self.buf.trim())
    }

    /// Consumes the line that closes a pack or board section.
    pub fn consume_terminator(&mut self) -> Result<(), ProtocolError> {
        self.advance()?;
        let found = self.buf.trim();
        if found != TERMINATOR {
            tracing::warn!(
                "Expected '{}' at line {}, got '{}'",
                TERMINATOR,
                self.line,
                found
            );
        }
        Ok(())
    }

    /// Reads a line holding a single value.
    pub fn read_value<T: FromStr>(&mut self) -> Result<T, ProtocolError> {
        self.advance()?;
        let line = self.line;
        let tokens: Vec<&str> = self.buf.split_whitespace().collect();
        if tokens.len() != 1 {
            return Err(ProtocolError::WrongTokenCount {
                line,
                expected: 1,
                found: tokens.len(),
            });
        }
        tokens[0].parse().map_err(|_| ProtocolError::InvalidToken {
            line,
            token: tokens[0].to_string(),
        })
    }

    /// Reads a line of exactly `width` block codes.
    pub fn read_row(&mut self, width: usize, config: &GameConfig) -> Result<Vec<Block>, ProtocolError> {
        self.advance()?;
        let line = self.line;
        let tokens: Vec<&str> = self.buf.split_whitespace().collect();
        if tokens.len() != width {
            return Err(ProtocolError::WrongTokenCount {
                line,
                expected: width,
                found: tokens.len(),
            });
        }

        let mut row = Vec::with_capacity(width);
        for token in tokens {
            let block: Block = token.parse().map_err(|_| ProtocolError::InvalidToken {
                line,
                token: token.to_string(),
            })?;
            if !config.is_valid_block(block) {
                return Err(ProtocolError::InvalidBlock { line, block });
            }
            row.push(block);
        }
        Ok(row)
    }

    /// Loads the next non-blank line into the buffer.
    fn advance(&mut self) -> Result<(), ProtocolError> {
        loop {
            self.buf.clear();
            if self.inner.read_line(&mut self.buf)? == 0 {
                return Err(ProtocolError::EndOfStream { line: self.line });
            }
            self.line += 1;
            if !self.buf.trim().is_empty() {
                return Ok(());
            }
        }
    }
}
