//! Round phase.

/// Coarse state of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Guesses are accepted.
    Playing,
    /// The last card is showing; guesses are ignored until a restart.
    Finished,
}
