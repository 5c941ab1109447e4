//! Round engine and state management.

use alloc::string::{String, ToString};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::card::{Card, DECK_SIZE};
use crate::deck::Deck;
use crate::options::RoundOptions;
use crate::result::RoundResult;

mod actions;
mod input;
pub mod state;

pub use input::{Press, Response};
pub use state::Phase;

/// Index of the last card; reaching it ends the round.
pub const LAST_INDEX: usize = DECK_SIZE - 1;

/// A higher-or-lower round over one shuffled deck.
///
/// The round owns its deck, the cursor of the card being shown, the score and
/// the phase. It is always started: constructors deal the first card, so there
/// is no state in which a query has nothing to answer.
///
/// The cursor only moves forward, one card per resolved guess, and the score
/// never exceeds the cursor.
#[derive(Debug, Clone)]
pub struct Round {
    /// Cards of the current round.
    deck: Deck,
    /// Index of the card being shown.
    cursor: usize,
    /// Correct guesses so far.
    score: usize,
    /// Current phase.
    phase: Phase,
    /// Summary frozen when the round finished.
    result: Option<RoundResult>,
    /// Round options.
    options: RoundOptions,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Round {
    /// Creates a started round with a deck shuffled from `seed`.
    ///
    /// # Example
    ///
    /// ```
    /// use hogerlager::{Phase, Round, RoundOptions};
    ///
    /// let round = Round::new(RoundOptions::default(), 42);
    /// assert_eq!(round.phase(), Phase::Playing);
    /// assert_eq!(round.cursor(), 0);
    /// ```
    #[must_use]
    pub fn new(options: RoundOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Self::create_deck(&mut rng);
        Self::started(options, rng, deck)
    }

    /// Creates a started round that plays `deck` in its given order.
    ///
    /// Only the first round uses `deck`; every restart shuffles a fresh deck
    /// with the generator seeded from `seed`.
    #[must_use]
    pub fn with_deck(options: RoundOptions, seed: u64, deck: Deck) -> Self {
        Self::started(options, ChaCha8Rng::seed_from_u64(seed), deck)
    }

    fn started(options: RoundOptions, rng: ChaCha8Rng, deck: Deck) -> Self {
        let first = deck.cards()[0];
        debug!(%first, "round started");
        Self {
            deck,
            cursor: 0,
            score: 0,
            phase: Phase::Playing,
            result: None,
            options,
            rng,
        }
    }

    /// Creates and shuffles a fresh deck.
    fn create_deck(rng: &mut ChaCha8Rng) -> Deck {
        let mut deck = Deck::new();
        deck.shuffle(rng);
        deck
    }

    /// Abandons the current round and starts a new one on a fresh shuffle.
    ///
    /// This is the only way to leave [`Phase::Finished`]; calling it while
    /// playing is allowed too.
    pub fn restart(&mut self) {
        let deck = Self::create_deck(&mut self.rng);
        let first = deck.cards()[0];
        let abandoned = self.phase == Phase::Playing;
        debug!(abandoned, %first, "round restarted");
        self.deck = deck;
        self.cursor = 0;
        self.score = 0;
        self.phase = Phase::Playing;
        self.result = None;
    }

    /// Returns the card at `index`.
    ///
    /// The cursor never leaves the deck, so a miss is a broken invariant.
    fn card(&self, index: usize) -> Card {
        self.deck
            .card_at(index)
            .expect("round cursor stays within the deck")
    }

    /// Ends the round and freezes the result message.
    fn finish(&mut self) {
        self.phase = Phase::Finished;
        self.result = Some(RoundResult {
            score: self.score,
            guesses: self.cursor,
            locale: self.options.locale,
        });
        debug!(score = self.score, "round finished");
    }

    /// Returns the card being shown.
    ///
    /// After the round finishes this is the last card of the deck.
    #[must_use]
    pub fn current_card(&self) -> Card {
        self.card(self.cursor)
    }

    /// Returns the index of the card being shown.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the number of correct guesses.
    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    /// Returns the score as shown on the score label.
    #[must_use]
    pub fn score_text(&self) -> String {
        self.score.to_string()
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns whether the round is finished.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// Returns whether a guess would reveal another card.
    #[must_use]
    pub fn can_guess(&self) -> bool {
        self.phase == Phase::Playing
    }

    /// Returns the number of cards still face down.
    #[must_use]
    pub const fn cards_remaining(&self) -> usize {
        LAST_INDEX - self.cursor
    }

    /// Returns the summary of a finished round.
    ///
    /// Returns `None` while the round is being played.
    #[must_use]
    pub const fn result(&self) -> Option<&RoundResult> {
        self.result.as_ref()
    }

    /// Returns the end-of-round message.
    ///
    /// Returns an empty string while the round is being played.
    #[must_use]
    pub fn result_text(&self) -> String {
        self.result.map(|result| result.to_string()).unwrap_or_default()
    }

    /// Returns the round options.
    #[must_use]
    pub const fn options(&self) -> &RoundOptions {
        &self.options
    }

    /// Returns the deck of the current round.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }
}
