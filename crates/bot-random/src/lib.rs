//! Random falling-block bot.
//!
//! The simplest bot that speaks the full protocol, useful as a template
//! for bots that actually search.

pub mod config;
pub mod policy;
pub mod runner;

pub use config::{BotConfig, ConfigError};
pub use policy::{Move, RandomPolicy, RandomSource, RngSource};
pub use runner::{run, RunSummary};
