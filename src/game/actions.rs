use tracing::trace;

use crate::card::Guess;
use crate::result::GuessOutcome;

use super::{LAST_INDEX, Phase, Round};

impl Round {
    /// Player action: the "up" button.
    ///
    /// Scores when the next card's rank is lower than the current one. See
    /// [`Round::guess`].
    pub fn guess_higher(&mut self) -> Option<GuessOutcome> {
        self.guess(Guess::Higher)
    }

    /// Player action: the "down" button.
    ///
    /// Scores when the next card's rank is higher than the current one. See
    /// [`Round::guess`].
    pub fn guess_lower(&mut self) -> Option<GuessOutcome> {
        self.guess(Guess::Lower)
    }

    /// Reveals the next card and scores `guess` against it.
    ///
    /// The cursor advances whether or not the guess was right. Revealing the
    /// last card finishes the round.
    ///
    /// Returns `None` without touching any state if the round is finished.
    pub fn guess(&mut self, guess: Guess) -> Option<GuessOutcome> {
        if self.phase == Phase::Finished {
            trace!(?guess, "guess ignored, round is finished");
            return None;
        }

        let previous = self.card(self.cursor);
        let revealed = self.card(self.cursor + 1);

        let correct = guess.holds(previous, revealed);
        if correct {
            self.score += 1;
        }
        self.cursor += 1;

        trace!(
            ?guess,
            %previous,
            %revealed,
            correct,
            cursor = self.cursor,
            score = self.score,
            "guess resolved"
        );

        if self.cursor == LAST_INDEX {
            self.finish();
        }

        Some(GuessOutcome {
            guess,
            previous,
            revealed,
            correct,
            score: self.score,
            phase: self.phase,
        })
    }
}
