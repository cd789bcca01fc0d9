//! Core types for the falling-block puzzle.
//!
//! This crate provides the fundamental types shared by the protocol layer
//! and the bots:
//! - [`Block`] codes and the fixed [`GameConfig`] dimensions
//! - [`Pack`] for the 2x2 piece dropped each turn, with rotation
//! - [`Board`] for the simulated field, with obstacle resolution
//! - [`Command`] for the per-turn output line

mod board;
mod command;
mod game;
mod grid;
mod pack;

pub use board::Board;
pub use command::{Command, CommandError};
pub use game::{Block, GameConfig, EMPTY_BLOCK};
pub use grid::GridError;
pub use pack::Pack;
