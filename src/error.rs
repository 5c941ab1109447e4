//! Error types for deck operations.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur when building or indexing a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Index outside the deck.
    #[error("index {index} is out of range for a deck of {len} cards")]
    OutOfRange {
        /// The requested index.
        index: usize,
        /// The number of cards in the deck.
        len: usize,
    },
    /// Wrong number of cards for a deck.
    #[error("a deck needs exactly 52 cards, got {0}")]
    WrongSize(usize),
    /// The same card appears more than once.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
    /// Card rank outside 1..=13.
    #[error("invalid rank {0}")]
    InvalidRank(u8),
}
