//! Random move selection.

use block_core::{Command, GameConfig, Pack};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform random draws.
///
/// The bot draws exactly twice per turn, rotation first, so a seeded
/// source replays the same match move for move.
pub trait RandomSource {
    /// Returns a value drawn uniformly from `0..bound`.
    fn below(&mut self, bound: usize) -> usize;
}

/// [`RandomSource`] backed by a `rand` generator.
pub struct RngSource<R: Rng>(R);

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        RngSource(rng)
    }
}

impl RngSource<StdRng> {
    /// Deterministic source for a given seed.
    pub fn seeded(seed: u64) -> Self {
        RngSource(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn below(&mut self, bound: usize) -> usize {
        self.0.gen_range(0..bound)
    }
}

/// A chosen drop, together with the pack as it will land.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    pub position: usize,
    pub rotation: u8,
    pub pack: Pack,
}

impl Move {
    pub fn command(&self) -> Command {
        Command::Drop {
            position: self.position,
            rotation: self.rotation,
        }
    }
}

/// Picks a uniformly random rotation and drop column.
///
/// No collision or legality checks are made against the board.
#[derive(Debug, Clone, Copy)]
pub struct RandomPolicy {
    config: GameConfig,
}

impl RandomPolicy {
    pub fn new(config: GameConfig) -> Self {
        RandomPolicy { config }
    }

    pub fn choose_move<S: RandomSource>(&self, pack: &Pack, turn: usize, source: &mut S) -> Move {
        let rotation = source.below(4);
        let position = source.below(self.config.max_position() + 1);
        tracing::debug!("Turn {}: drop at {} with rotation {}", turn, position, rotation);
        Move {
            position,
            rotation: rotation as u8,
            pack: pack.rotate(rotation),
        }
    }
}
