//! Read-only projection for front-ends.

extern crate alloc;

use alloc::string::String;

use crate::card::Card;
use crate::game::Round;

/// What a front-end draws for one frame.
///
/// Built fresh from the round on every call; nothing here is updated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// The shown card, the two buttons and the score label.
    Playing {
        /// The card being shown.
        card: Card,
        /// Correct guesses so far.
        score: usize,
    },
    /// The result message.
    Finished {
        /// Final score.
        score: usize,
        /// End-of-round message.
        text: String,
    },
}

impl View {
    /// Returns whether this is the result screen.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(self, Self::Finished { .. })
    }
}

impl Round {
    /// Projects the round into what should be drawn.
    #[must_use]
    pub fn view(&self) -> View {
        if self.is_finished() {
            View::Finished {
                score: self.score(),
                text: self.result_text(),
            }
        } else {
            View::Playing {
                card: self.current_card(),
                score: self.score(),
            }
        }
    }
}
