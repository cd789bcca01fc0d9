//! Match loop: read the server's input, answer with one move per turn.

use crate::policy::{RandomPolicy, RandomSource};
use drop_protocol::{BotSession, ProtocolError};
use std::io::{BufRead, Write};

/// Outcome of a match that ran to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of turns answered.
    pub turns: usize,
}

/// Plays one match over `session`.
///
/// Sends `name`, loads every pack, then answers up to `max_turn` turns.
/// Any protocol error, including the input ending early, stops the match.
pub fn run<R: BufRead, W: Write, S: RandomSource>(
    session: &mut BotSession<R, W>,
    name: &str,
    source: &mut S,
) -> Result<RunSummary, ProtocolError> {
    let config = *session.config();
    let policy = RandomPolicy::new(config);

    session.send_name(name)?;
    let packs = session.read_packs()?;
    tracing::info!("Loaded {} packs", packs.len());

    let mut turns = 0;
    while turns < config.max_turn() {
        let input = session.read_turn()?;
        let board = input.player.resolved_board(&config);
        let enemy_board = input.enemy.resolved_board(&config);

        let pack = packs.get(input.turn)?;
        let mv = policy.choose_move(pack, input.turn, source);

        tracing::debug!("turn: {}\n{}\n{}", input.turn, mv.pack, board);
        tracing::debug!(
            "Time left: {}ms, enemy heights: {:?}",
            input.player.millitime,
            enemy_board.stack_heights()
        );
        if board.is_over_danger_line(&config) {
            tracing::warn!("Turn {}: board is over the danger line", input.turn);
        }

        session.send_command(&mv.command())?;
        turns += 1;
    }

    tracing::info!("Match finished after {} turns", turns);
    Ok(RunSummary { turns })
}
