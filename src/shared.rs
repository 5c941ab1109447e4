//! A round that can be driven from several threads.

use crate::game::{Press, Response, Round};
use crate::result::GuessOutcome;
use crate::sync::Mutex;
use crate::view::View;

/// A [`Round`] behind a single lock.
///
/// Hosts that read the round from a render thread while another thread
/// handles input share one `SharedRound`. Every method takes the lock once,
/// so an action and a read never interleave.
pub struct SharedRound {
    round: Mutex<Round>,
}

impl SharedRound {
    /// Wraps `round`.
    #[must_use]
    pub const fn new(round: Round) -> Self {
        Self {
            round: Mutex::new(round),
        }
    }

    /// Runs `f` with exclusive access to the round.
    pub fn with<T>(&self, f: impl FnOnce(&mut Round) -> T) -> T {
        let mut round = self.round.lock();
        f(&mut *round)
    }

    /// See [`Round::press`].
    pub fn press(&self, press: Press) -> Response {
        self.with(|round| round.press(press))
    }

    /// See [`Round::guess_higher`].
    pub fn guess_higher(&self) -> Option<GuessOutcome> {
        self.with(Round::guess_higher)
    }

    /// See [`Round::guess_lower`].
    pub fn guess_lower(&self) -> Option<GuessOutcome> {
        self.with(Round::guess_lower)
    }

    /// See [`Round::restart`].
    pub fn restart(&self) {
        self.with(Round::restart);
    }

    /// See [`Round::view`].
    pub fn view(&self) -> View {
        self.with(|round| round.view())
    }

    /// Returns a copy of the round as it is now.
    pub fn snapshot(&self) -> Round {
        self.with(|round| round.clone())
    }

    /// Unwraps the round.
    pub fn into_inner(self) -> Round {
        self.round.into_inner()
    }
}

impl From<Round> for SharedRound {
    fn from(round: Round) -> Self {
        Self::new(round)
    }
}
