//! The packs declared at the start of a match.

use crate::{ProtocolError, ProtocolReader};
use block_core::{GameConfig, Pack};
use std::io::BufRead;

/// Every pack of the match, indexed by turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackStore {
    packs: Vec<Pack>,
}

impl PackStore {
    /// Reads `config.max_turn()` packs, each followed by a terminator line.
    pub fn load<R: BufRead>(
        reader: &mut ProtocolReader<R>,
        config: &GameConfig,
    ) -> Result<Self, ProtocolError> {
        let size = config.pack_size();
        let mut packs = Vec::with_capacity(config.max_turn());
        for _ in 0..config.max_turn() {
            let mut rows = Vec::with_capacity(size);
            for _ in 0..size {
                rows.push(reader.read_row(size, config)?);
            }
            reader.consume_terminator()?;
            packs.push(Pack::from_rows(&rows)?);
        }
        tracing::debug!("Loaded {} packs", packs.len());
        Ok(PackStore { packs })
    }

    /// Wraps an already-built pack sequence.
    pub fn from_packs(packs: Vec<Pack>) -> Self {
        PackStore { packs }
    }

    /// Returns the pack for `turn`.
    pub fn get(&self, turn: usize) -> Result<&Pack, ProtocolError> {
        self.packs.get(turn).ok_or(ProtocolError::TurnOutOfRange {
            turn,
            packs: self.packs.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.packs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pack> {
        self.packs.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(input: &str, max_turn: usize) -> Result<PackStore, ProtocolError> {
        let config = GameConfig::standard().with_max_turn(max_turn);
        let mut reader = ProtocolReader::new(input.as_bytes());
        PackStore::load(&mut reader, &config)
    }

    #[test]
    fn packs_are_indexed_in_read_order() {
        let input = "1 2\n3 4\nEND\n5 6\n7 8\nEND\n\n9 10\n0 11\nEND\n";
        let store = load(input, 3).unwrap();
        assert_eq!(store.len(), 3);
        assert_eq!(store.get(0).unwrap(), &Pack::from_rows(&[[1u8, 2], [3, 4]]).unwrap());
        assert_eq!(store.get(1).unwrap(), &Pack::from_rows(&[[5u8, 6], [7, 8]]).unwrap());
        assert_eq!(store.get(2).unwrap(), &Pack::from_rows(&[[9u8, 10], [0, 11]]).unwrap());
    }

    #[test]
    fn out_of_range_turn() {
        let store = load("1 1\n1 1\nEND\n", 1).unwrap();
        assert!(matches!(
            store.get(1),
            Err(ProtocolError::TurnOutOfRange { turn: 1, packs: 1 })
        ));
    }

    #[test]
    fn truncated_input() {
        assert!(matches!(
            load("1 1\n1 1\nEND\n2 2\n", 2),
            Err(ProtocolError::EndOfStream { .. })
        ));
    }

    #[test]
    fn missing_terminator_is_end_of_stream() {
        assert!(matches!(
            load("1 1\n1 1\n", 1),
            Err(ProtocolError::EndOfStream { line: 2 })
        ));
    }

    #[test]
    fn short_pack_row() {
        assert!(matches!(
            load("1\n1 1\nEND\n", 1),
            Err(ProtocolError::WrongTokenCount { line: 1, .. })
        ));
    }

    #[test]
    fn empty_store() {
        let store = load("", 0).unwrap();
        assert!(store.is_empty());
        assert_eq!(store.iter().count(), 0);
    }

    #[test]
    fn from_packs() {
        let pack = Pack::from_rows(&[[1u8, 2], [3, 4]]).unwrap();
        let store = PackStore::from_packs(vec![pack.clone()]);
        assert_eq!(store.get(0).unwrap(), &pack);
    }
}
