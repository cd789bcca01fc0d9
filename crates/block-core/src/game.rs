//! Block codes and fixed game dimensions.

/// A single cell value on a board or in a pack.
///
/// `0` is empty, `1..=summation` are numbered blocks, and `summation + 1`
/// is the obstacle block.
pub type Block = u8;

/// The empty cell.
pub const EMPTY_BLOCK: Block = 0;

/// Immutable game dimensions, constructed once at startup and passed to
/// every component that needs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameConfig {
    width: usize,
    height: usize,
    pack_size: usize,
    summation: Block,
    max_turn: usize,
}

impl GameConfig {
    /// The dimensions used by the game server.
    pub const STANDARD: GameConfig = GameConfig {
        width: 10,
        height: 16,
        pack_size: 2,
        summation: 10,
        max_turn: 500,
    };

    /// Returns the standard dimensions.
    #[inline]
    pub const fn standard() -> Self {
        Self::STANDARD
    }

    /// Returns a copy with a different number of match turns.
    ///
    /// The protocol always declares exactly `max_turn` packs up front, so
    /// this also changes how many packs are read at startup.
    #[inline]
    pub const fn with_max_turn(mut self, max_turn: usize) -> Self {
        self.max_turn = max_turn;
        self
    }

    /// Number of columns.
    #[inline]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of visible rows sent by the server.
    #[inline]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Side length of a pack.
    #[inline]
    pub const fn pack_size(&self) -> usize {
        self.pack_size
    }

    /// Target sum for erasing adjacent blocks; also the highest numbered block.
    #[inline]
    pub const fn summation(&self) -> Block {
        self.summation
    }

    /// Number of turns in a match, and number of packs declared at startup.
    #[inline]
    pub const fn max_turn(&self) -> usize {
        self.max_turn
    }

    /// Rows in the simulated board: the visible field plus padding above it.
    #[inline]
    pub const fn simulation_height(&self) -> usize {
        self.height + self.pack_size + 1
    }

    /// Index of the first visible row in the simulated board.
    #[inline]
    pub const fn first_visible_row(&self) -> usize {
        self.simulation_height() - self.height
    }

    /// The obstacle block code.
    #[inline]
    pub const fn obstacle_block(&self) -> Block {
        self.summation + 1
    }

    /// Rightmost column a pack can be dropped at.
    #[inline]
    pub const fn max_position(&self) -> usize {
        self.width - self.pack_size
    }

    /// Returns true if `block` belongs to the block alphabet.
    #[inline]
    pub const fn is_valid_block(&self, block: Block) -> bool {
        block <= self.obstacle_block()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_dimensions() {
        let config = GameConfig::standard();
        assert_eq!(config.width(), 10);
        assert_eq!(config.height(), 16);
        assert_eq!(config.pack_size(), 2);
        assert_eq!(config.summation(), 10);
        assert_eq!(config.max_turn(), 500);
    }

    #[test]
    fn derived_dimensions() {
        let config = GameConfig::standard();
        assert_eq!(config.simulation_height(), 19);
        assert_eq!(config.first_visible_row(), 3);
        assert_eq!(config.obstacle_block(), 11);
        assert_eq!(config.max_position(), 8);
    }

    #[test]
    fn with_max_turn_keeps_dimensions() {
        let config = GameConfig::standard().with_max_turn(2);
        assert_eq!(config.max_turn(), 2);
        assert_eq!(config.width(), 10);
        assert_eq!(config.simulation_height(), 19);
    }

    #[test]
    fn block_alphabet() {
        let config = GameConfig::default();
        assert!(config.is_valid_block(EMPTY_BLOCK));
        assert!(config.is_valid_block(10));
        assert!(config.is_valid_block(11));
        assert!(!config.is_valid_block(12));
    }
}
