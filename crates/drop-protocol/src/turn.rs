//! Per-turn server input.

use crate::{ProtocolError, ProtocolReader};
use block_core::{Board, GameConfig};
use std::io::BufRead;

/// One player's state as reported at the start of a turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerState {
    /// Remaining thinking time in milliseconds.
    pub millitime: u64,
    /// Obstacle blocks queued against this player.
    pub obstacle_count: u32,
    /// Skill gauge.
    pub skill: u32,
    pub score: u32,
    /// Board as sent by the server, before obstacles fall.
    pub board: Board,
}

impl PlayerState {
    /// Reads the four counters and the board.
    pub fn read<R: BufRead>(
        reader: &mut ProtocolReader<R>,
        config: &GameConfig,
    ) -> Result<Self, ProtocolError> {
        let millitime = reader.read_value()?;
        let obstacle_count = reader.read_value()?;
        let skill = reader.read_value()?;
        let score = reader.read_value()?;
        let board = read_board(reader, config)?;
        Ok(PlayerState {
            millitime,
            obstacle_count,
            skill,
            score,
            board,
        })
    }

    /// The board after this turn's obstacle layer (if any) has fallen.
    pub fn resolved_board(&self, config: &GameConfig) -> Board {
        self.board.apply_obstacles(config, self.obstacle_count)
    }
}

/// Everything the server sends for one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnInput {
    /// Zero-based turn index; selects the pack to drop.
    pub turn: usize,
    pub player: PlayerState,
    pub enemy: PlayerState,
}

impl TurnInput {
    pub fn read<R: BufRead>(
        reader: &mut ProtocolReader<R>,
        config: &GameConfig,
    ) -> Result<Self, ProtocolError> {
        let turn = reader.read_value()?;
        let player = PlayerState::read(reader, config)?;
        let enemy = PlayerState::read(reader, config)?;
        Ok(TurnInput {
            turn,
            player,
            enemy,
        })
    }
}

/// Reads `height` rows into the visible part of a fresh board.
///
/// The padding rows above the visible field stay empty.
pub fn read_board<R: BufRead>(
    reader: &mut ProtocolReader<R>,
    config: &GameConfig,
) -> Result<Board, ProtocolError> {
    let mut board = Board::empty(config);
    for row in config.first_visible_row()..config.simulation_height() {
        let blocks = reader.read_row(config.width(), config)?;
        board.set_row(row, &blocks);
    }
    reader.consume_terminator()?;
    Ok(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use block_core::EMPTY_BLOCK;

    const CONFIG: GameConfig = GameConfig::STANDARD;

    fn board_text(rows: &[[u8; 10]]) -> String {
        let mut out = String::new();
        for row in rows {
            let cells: Vec<String> = row.iter().map(|b| b.to_string()).collect();
            out.push_str(&cells.join(" "));
            out.push('\n');
        }
        out.push_str("END\n");
        out
    }

    fn full_board(block: u8) -> String {
        board_text(&[[block; 10]; 16])
    }

    fn player_text(obstacles: u32, board: &str) -> String {
        format!("180000\n{}\n0\n0\n{}", obstacles, board)
    }

    #[test]
    fn board_padding_is_empty() {
        let text = full_board(3);
        let mut reader = ProtocolReader::new(text.as_bytes());
        let board = read_board(&mut reader, &CONFIG).unwrap();
        for row in 0..3 {
            assert!(board.row(row).iter().all(|&b| b == EMPTY_BLOCK));
        }
        for row in 3..19 {
            assert!(board.row(row).iter().all(|&b| b == 3));
        }
    }

    #[test]
    fn board_rows_keep_order() {
        let mut rows = [[0u8; 10]; 16];
        rows[0][0] = 1;
        rows[15][9] = 11;
        let text = board_text(&rows);
        let mut reader = ProtocolReader::new(text.as_bytes());
        let board = read_board(&mut reader, &CONFIG).unwrap();
        assert_eq!(board.get(3, 0), 1);
        assert_eq!(board.get(18, 9), 11);
    }

    #[test]
    fn board_short_row_is_fatal() {
        let mut text = full_board(0);
        text.insert_str(0, "0 0 0\n");
        let mut reader = ProtocolReader::new(text.as_bytes());
        assert!(matches!(
            read_board(&mut reader, &CONFIG),
            Err(ProtocolError::WrongTokenCount { line: 1, .. })
        ));
    }

    #[test]
    fn board_without_terminator_is_end_of_stream() {
        let text = full_board(0).replace("END\n", "");
        let mut reader = ProtocolReader::new(text.as_bytes());
        assert!(matches!(
            read_board(&mut reader, &CONFIG),
            Err(ProtocolError::EndOfStream { line: 16 })
        ));
    }

    #[test]
    fn reads_full_turn() {
        let empty = full_board(0);
        let text = format!(
            "7\n{}\n120000\n15\n42\n187\n{}",
            player_text(3, &empty),
            empty
        );
        let mut reader = ProtocolReader::new(text.as_bytes());
        let turn = TurnInput::read(&mut reader, &CONFIG).unwrap();
        assert_eq!(turn.turn, 7);
        assert_eq!(turn.player.millitime, 180000);
        assert_eq!(turn.player.obstacle_count, 3);
        assert_eq!(turn.enemy.millitime, 120000);
        assert_eq!(turn.enemy.obstacle_count, 15);
        assert_eq!(turn.enemy.skill, 42);
        assert_eq!(turn.enemy.score, 187);
        assert_eq!(turn.enemy.board, Board::empty(&CONFIG));
    }

    #[test]
    fn resolved_board_drops_obstacles_at_threshold() {
        let empty = full_board(0);
        let text = player_text(10, &empty);
        let mut reader = ProtocolReader::new(text.as_bytes());
        let player = PlayerState::read(&mut reader, &CONFIG).unwrap();
        let resolved = player.resolved_board(&CONFIG);
        assert!(resolved.row(18).iter().all(|&b| b == 11));
        assert_eq!(player.board, Board::empty(&CONFIG));
    }

    #[test]
    fn resolved_board_below_threshold() {
        let empty = full_board(0);
        let text = player_text(9, &empty);
        let mut reader = ProtocolReader::new(text.as_bytes());
        let player = PlayerState::read(&mut reader, &CONFIG).unwrap();
        assert_eq!(player.resolved_board(&CONFIG), player.board);
    }

    #[test]
    fn malformed_counter_is_fatal() {
        let text = "7\nfast\n";
        let mut reader = ProtocolReader::new(text.as_bytes());
        assert!(matches!(
            TurnInput::read(&mut reader, &CONFIG),
            Err(ProtocolError::InvalidToken { line: 2, .. })
        ));
    }
}
