//! Error types.
//!
//! Gameplay itself never fails: invalid selections are ignored and stale
//! resolutions are dropped. Only building a configuration can be rejected.

use crate::cards::Symbol;

/// Errors raised while building a game configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The alphabet has no symbols.
    #[error("Alphabet must contain at least one symbol")]
    EmptyAlphabet,

    /// A symbol appears more than once in the alphabet.
    #[error("Duplicate symbol in alphabet: {0}")]
    DuplicateSymbol(Symbol),
}
