//! Outcome types for guesses and finished rounds.

use core::fmt;

use crate::card::{Card, Guess};
use crate::game::Phase;
use crate::options::Locale;

/// What happened when a guess was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessOutcome {
    /// The guess that was made.
    pub guess: Guess,
    /// The card shown when the guess was made.
    pub previous: Card,
    /// The card revealed by the guess, now the current card.
    pub revealed: Card,
    /// Whether the guess scored a point.
    pub correct: bool,
    /// Score after the guess.
    pub score: usize,
    /// Phase after the guess.
    pub phase: Phase,
}

/// Summary frozen when a round finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// Final score.
    pub score: usize,
    /// Number of comparisons made (always 51 for a full deck).
    pub guesses: usize,
    /// Language used by the [`Display`](fmt::Display) impl.
    pub locale: Locale,
}

impl fmt::Display for RoundResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.locale {
            Locale::Dutch => write!(
                f,
                "Gedaan! Je hebt {} punten. Click to restart.",
                self.score
            ),
            Locale::English => write!(
                f,
                "Done! You scored {} points. Click to restart.",
                self.score
            ),
        }
    }
}
