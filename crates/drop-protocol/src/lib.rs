//! Line-oriented protocol for falling-block puzzle bots.
//!
//! The game server talks to a bot over standard streams.
//!
//! # Input
//!
//! - Startup: one pack per match turn, each `pack_size` lines of
//!   `pack_size` integers followed by an `END` line
//! - Each turn: the turn number, then the bot's own state and the
//!   opponent's state (remaining milliseconds, obstacle count, skill
//!   gauge, score, then `height` rows of `width` integers and `END`)
//!
//! Blank lines may appear anywhere and are skipped.
//!
//! # Output
//!
//! - Startup: the bot's name
//! - Each turn: `<position> <rotation>`, or `S` to fire the skill

mod packs;
mod reader;
mod turn;

pub use packs::PackStore;
pub use reader::ProtocolReader;
pub use turn::{read_board, PlayerState, TurnInput};

use block_core::{Command, GameConfig};
use std::io::{BufRead, Write};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("Unexpected end of input at line {line}")]
    EndOfStream { line: usize },
    #[error("Invalid token '{token}' at line {line}")]
    InvalidToken { line: usize, token: String },
    #[error("Line {line} has {found} tokens, expected {expected}")]
    WrongTokenCount {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("Block code {block} at line {line} is outside the block alphabet")]
    InvalidBlock { line: usize, block: u8 },
    #[error("Turn {turn} has no pack (only {packs} packs were declared)")]
    TurnOutOfRange { turn: usize, packs: usize },
    #[error("Malformed grid: {0}")]
    Grid(#[from] block_core::GridError),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Bot side of a match: reads server input and writes commands.
pub struct BotSession<R: BufRead, W: Write> {
    reader: ProtocolReader<R>,
    writer: W,
    config: GameConfig,
}

impl<R: BufRead, W: Write> BotSession<R, W> {
    pub fn new(reader: R, writer: W, config: GameConfig) -> Self {
        Self {
            reader: ProtocolReader::new(reader),
            writer,
            config,
        }
    }

    /// Game dimensions this session decodes with.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Send the bot's name. Must be the first line written.
    pub fn send_name(&mut self, name: &str) -> Result<(), ProtocolError> {
        self.send_line(name)
    }

    /// Send one turn's command.
    pub fn send_command(&mut self, command: &Command) -> Result<(), ProtocolError> {
        self.send_line(&command.to_wire())
    }

    /// Read the packs for the whole match.
    pub fn read_packs(&mut self) -> Result<PackStore, ProtocolError> {
        PackStore::load(&mut self.reader, &self.config)
    }

    /// Read one turn of server input.
    pub fn read_turn(&mut self) -> Result<TurnInput, ProtocolError> {
        TurnInput::read(&mut self.reader, &self.config)
    }

    fn send_line(&mut self, line: &str) -> Result<(), ProtocolError> {
        writeln!(self.writer, "{}", line)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Create a bot session using stdin/stdout.
pub fn stdio_session(
    config: GameConfig,
) -> BotSession<std::io::BufReader<std::io::Stdin>, std::io::Stdout> {
    BotSession::new(
        std::io::BufReader::new(std::io::stdin()),
        std::io::stdout(),
        config,
    )
}
