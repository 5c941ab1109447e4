//! Round configuration options.

/// Language of the end-of-round message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum Locale {
    /// "Gedaan! Je hebt 12 punten. Click to restart."
    #[default]
    Dutch,
    /// "Done! You scored 12 points. Click to restart."
    English,
}

/// Configuration options for a round.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use hogerlager::{Locale, RoundOptions};
///
/// let options = RoundOptions::default().with_locale(Locale::English);
/// assert_eq!(options.locale, Locale::English);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RoundOptions {
    /// Language of the result message.
    pub locale: Locale,
}

impl RoundOptions {
    /// Sets the language of the result message.
    #[must_use]
    pub const fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }
}
