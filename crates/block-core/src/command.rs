//! Per-turn command sent to the game server.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when parsing a command line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("invalid command: {0}")]
    Invalid(String),

    #[error("rotation out of range: {0}")]
    RotationOutOfRange(u8),
}

/// One turn's action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Drop the current pack, rotated `rotation` quarter-turns clockwise,
    /// with its left edge at column `position`.
    Drop { position: usize, rotation: u8 },
    /// Fire the skill.
    Spell,
}

impl Command {
    /// Formats the command as a protocol line (without newline).
    pub fn to_wire(&self) -> String {
        match self {
            Command::Drop { position, rotation } => format!("{} {}", position, rotation),
            Command::Spell => "S".to_string(),
        }
    }

    /// Parses a protocol line.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts.as_slice() {
            [] => Err(CommandError::Empty),
            ["S"] => Ok(Command::Spell),
            [position, rotation] => {
                let position = position
                    .parse::<usize>()
                    .map_err(|_| CommandError::Invalid(line.trim().to_string()))?;
                let rotation = rotation
                    .parse::<u8>()
                    .map_err(|_| CommandError::Invalid(line.trim().to_string()))?;
                if rotation > 3 {
                    return Err(CommandError::RotationOutOfRange(rotation));
                }
                Ok(Command::Drop { position, rotation })
            }
            _ => Err(CommandError::Invalid(line.trim().to_string())),
        }
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Command::parse(s)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_wire())
    }
}
