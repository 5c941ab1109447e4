//! A higher-or-lower card guessing game engine with optional `no_std` support.
//!
//! A [`Round`] shows one card of a shuffled 52-card deck at a time. The player
//! guesses how the next card compares, every right guess scores a point, and
//! the round finishes when the last card is showing.
//!
//! # Example
//!
//! ```
//! use hogerlager::{Round, RoundOptions};
//!
//! let mut round = Round::new(RoundOptions::default(), 42);
//! while !round.is_finished() {
//!     round.guess_higher();
//! }
//! assert_eq!(round.cursor(), 51);
//! println!("{}", round.result_text());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod options;
pub mod result;
pub mod shared;
mod sync;
pub mod view;

// Re-export main types
pub use card::{Card, DECK_SIZE, Guess, MAX_RANK, MIN_RANK, Suit};
pub use deck::Deck;
pub use error::DeckError;
pub use game::{LAST_INDEX, Phase, Press, Response, Round};
pub use options::{Locale, RoundOptions};
pub use result::{GuessOutcome, RoundResult};
pub use shared::SharedRound;
pub use view::View;
