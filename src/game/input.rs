//! Logical button presses.
//!
//! Hit-testing pointer coordinates against the on-screen buttons belongs to
//! the front-end. It reports one [`Press`] per click and the round decides
//! what that click means in its current phase.

use tracing::trace;

use crate::result::GuessOutcome;

use super::{Phase, Round};

/// Where a click landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Press {
    /// The "up" button.
    Up,
    /// The "down" button.
    Down,
    /// Anywhere else on the screen.
    Elsewhere,
}

/// What a press did to the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    /// The round was finished and a new one started.
    Restarted,
    /// A guess was resolved.
    Guessed(GuessOutcome),
    /// Nothing happened.
    Ignored,
}

impl Round {
    /// Handles a click.
    ///
    /// While the round is finished any click restarts it. While playing,
    /// [`Press::Up`] guesses higher, [`Press::Down`] guesses lower and
    /// other clicks are ignored.
    pub fn press(&mut self, press: Press) -> Response {
        if self.phase == Phase::Finished {
            self.restart();
            return Response::Restarted;
        }

        let outcome = match press {
            Press::Up => self.guess_higher(),
            Press::Down => self.guess_lower(),
            Press::Elsewhere => {
                trace!("press outside the buttons ignored");
                None
            }
        };

        outcome.map_or(Response::Ignored, Response::Guessed)
    }
}
