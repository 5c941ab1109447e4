//! The 52-card deck a round is played with.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, MAX_RANK, MIN_RANK, Suit};
use crate::error::DeckError;

/// An ordered set of exactly one card per suit and rank.
///
/// A deck is never mutated element-wise: once built it can only be reordered
/// by [`Deck::shuffle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates an unshuffled deck.
    ///
    /// Cards are ordered by rank first, then by suit in [`Suit::ALL`] order.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for rank in MIN_RANK..=MAX_RANK {
            for suit in Suit::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        Self { cards }
    }

    /// Creates a deck in the given order.
    ///
    /// # Errors
    ///
    /// Returns an error unless `cards` holds each of the 52 cards exactly once.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, DeckError> {
        if cards.len() != DECK_SIZE {
            return Err(DeckError::WrongSize(cards.len()));
        }

        let mut seen = [false; DECK_SIZE];
        for card in &cards {
            if !(MIN_RANK..=MAX_RANK).contains(&card.rank) {
                return Err(DeckError::InvalidRank(card.rank));
            }
            let slot = &mut seen[slot_of(*card)];
            if *slot {
                return Err(DeckError::DuplicateCard(*card));
            }
            *slot = true;
        }

        Ok(Self { cards })
    }

    /// Shuffles the deck in place.
    ///
    /// Every ordering is equally likely given a uniform `rng`.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Returns the card at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::OutOfRange`] if `index` is past the last card.
    pub fn card_at(&self, index: usize) -> Result<Card, DeckError> {
        self.cards.get(index).copied().ok_or(DeckError::OutOfRange {
            index,
            len: self.cards.len(),
        })
    }

    /// Returns the number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always `false`; a deck holds 52 cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the cards in deck order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

const fn slot_of(card: Card) -> usize {
    let suit = match card.suit {
        Suit::Clubs => 0,
        Suit::Diamonds => 1,
        Suit::Hearts => 2,
        Suit::Spades => 3,
    };
    (card.rank - MIN_RANK) as usize * Suit::ALL.len() + suit
}
