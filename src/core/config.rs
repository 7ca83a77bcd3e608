//! Game configuration.
//!
//! A `GameConfig` fixes everything a session needs at startup:
//! - `alphabet`: the symbols dealt, two cards each
//! - `resolve_delay`: pause between the second reveal and its resolution
//! - `seed`: optional RNG seed for reproducible deals
//!
//! The default is the reference game: eight emoji pairs and an 850 ms pause.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cards::Alphabet;

/// Pause between the second reveal of a turn and its resolution.
pub const DEFAULT_RESOLVE_DELAY: Duration = Duration::from_millis(850);

/// Session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Symbols dealt into every deck.
    pub alphabet: Alphabet,

    /// Delay before a pair of reveals is adjudicated.
    #[serde(default = "default_resolve_delay")]
    pub resolve_delay: Duration,

    /// RNG seed. `None` draws a fresh seed when the session starts.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_resolve_delay() -> Duration {
    DEFAULT_RESOLVE_DELAY
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            alphabet: Alphabet::default(),
            resolve_delay: DEFAULT_RESOLVE_DELAY,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a configuration for the given alphabet with default timing.
    #[must_use]
    pub fn new(alphabet: Alphabet) -> Self {
        Self {
            alphabet,
            ..Self::default()
        }
    }

    /// Replace the alphabet.
    #[must_use]
    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    /// Set the resolution delay.
    #[must_use]
    pub fn with_resolve_delay(mut self, delay: Duration) -> Self {
        self.resolve_delay = delay;
        self
    }

    /// Fix the RNG seed for reproducible deals.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of distinct pairs in a deck.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.alphabet.len()
    }

    /// Number of cards in a deck.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.alphabet.len() * 2
    }
}
