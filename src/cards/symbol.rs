//! Card face symbols and the alphabet they are drawn from.
//!
//! An `Alphabet` is a non-empty ordered set of distinct symbols. Every deck
//! holds exactly two cards per symbol, so distinctness is checked once here
//! and never again during play.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// The reference alphabet: eight emoji faces.
pub const REFERENCE_SYMBOLS: [&str; 8] = ["🍎", "🚗", "🐶", "⚽", "🎵", "🌟", "🍕", "👑"];

/// The matching value printed on a card face.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Create a symbol from any string-like value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The symbol text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for Symbol {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Non-empty ordered set of distinct symbols.
///
/// ```
/// use memory_match::cards::Alphabet;
/// use memory_match::ConfigError;
///
/// let alphabet = Alphabet::new(["X", "Y"]).unwrap();
/// assert_eq!(alphabet.len(), 2);
///
/// assert_eq!(Alphabet::new(Vec::<&str>::new()), Err(ConfigError::EmptyAlphabet));
/// assert!(Alphabet::new(["X", "X"]).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Symbol>", into = "Vec<Symbol>")]
pub struct Alphabet {
    symbols: Vec<Symbol>,
}

impl Alphabet {
    /// Build an alphabet, rejecting empty input and repeated symbols.
    pub fn new<I, S>(symbols: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
    {
        let symbols: Vec<Symbol> = symbols.into_iter().map(Into::into).collect();
        if symbols.is_empty() {
            return Err(ConfigError::EmptyAlphabet);
        }

        let mut seen = FxHashSet::default();
        for symbol in &symbols {
            if !seen.insert(symbol) {
                return Err(ConfigError::DuplicateSymbol(symbol.clone()));
            }
        }

        Ok(Self { symbols })
    }

    /// Number of symbols (and therefore pairs in a deck).
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Iterate over the symbols in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.iter()
    }

    /// Check whether a symbol belongs to this alphabet.
    #[must_use]
    pub fn contains(&self, symbol: &Symbol) -> bool {
        self.symbols.contains(symbol)
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self {
            symbols: REFERENCE_SYMBOLS.iter().map(|&s| Symbol::from(s)).collect(),
        }
    }
}

impl TryFrom<Vec<Symbol>> for Alphabet {
    type Error = ConfigError;

    fn try_from(symbols: Vec<Symbol>) -> Result<Self, Self::Error> {
        Self::new(symbols)
    }
}

impl From<Alphabet> for Vec<Symbol> {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.symbols
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_alphabet() {
        let alphabet = Alphabet::default();

        assert_eq!(alphabet.len(), 8);
        assert!(alphabet.contains(&Symbol::from("🍎")));
        assert!(alphabet.contains(&Symbol::from("👑")));
        assert!(!alphabet.is_empty());
    }

    #[test]
    fn test_empty_rejected() {
        let result = Alphabet::new(Vec::<Symbol>::new());
        assert_eq!(result, Err(ConfigError::EmptyAlphabet));
    }

    #[test]
    fn test_duplicate_rejected() {
        let result = Alphabet::new(["A", "B", "A"]);
        assert_eq!(result, Err(ConfigError::DuplicateSymbol(Symbol::from("A"))));
    }

    #[test]
    fn test_order_preserved() {
        let alphabet = Alphabet::new(["C", "A", "B"]).unwrap();
        let names: Vec<_> = alphabet.iter().map(Symbol::as_str).collect();
        assert_eq!(names, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_serde_as_plain_list() {
        let alphabet = Alphabet::new(["X", "Y"]).unwrap();
        let json = serde_json::to_string(&alphabet).unwrap();
        assert_eq!(json, r#"["X","Y"]"#);

        let back: Alphabet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, alphabet);
    }

    #[test]
    fn test_error_display() {
        let err = ConfigError::DuplicateSymbol(Symbol::from("🍕"));
        assert_eq!(err.to_string(), "Duplicate symbol in alphabet: 🍕");
    }
}
