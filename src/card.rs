//! Card types and the rank comparison used by guesses.

use core::fmt;

/// Card suit.
///
/// Suits never influence a comparison; they only give each card its identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits, in the order a fresh deck enumerates them.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    const fn symbol(self) -> char {
        match self {
            Self::Clubs => '♣',
            Self::Diamonds => '♦',
            Self::Hearts => '♥',
            Self::Spades => '♠',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Lowest card rank (Ace).
pub const MIN_RANK: u8 = 1;
/// Highest card rank (King).
pub const MAX_RANK: u8 = 13;

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. A [`Deck`](crate::Deck)
    /// only ever holds ranks in `1..=13`.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rank {
            1 => write!(f, "A{}", self.suit),
            11 => write!(f, "J{}", self.suit),
            12 => write!(f, "Q{}", self.suit),
            13 => write!(f, "K{}", self.suit),
            rank => write!(f, "{rank}{}", self.suit),
        }
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// The prediction a player makes about the next card.
///
/// The names follow the on-screen buttons, not the direction that is tested:
/// the "up" button is [`Guess::Higher`] and scores when the next rank is
/// *lower*, the "down" button is [`Guess::Lower`] and scores when the next
/// rank is *higher*.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Guess {
    /// The "up" button. Holds when `next.rank < current.rank`.
    Higher,
    /// The "down" button. Holds when `next.rank > current.rank`.
    Lower,
}

impl Guess {
    /// Returns whether the guess holds for the revealed pair.
    ///
    /// Both checks are strict, so equal ranks never score.
    #[must_use]
    pub const fn holds(self, current: Card, next: Card) -> bool {
        match self {
            Self::Higher => next.rank < current.rank,
            Self::Lower => next.rank > current.rank,
        }
    }
}
