//! Card instances - runtime card state.
//!
//! A card moves `unrevealed → revealed → (matched | unrevealed)`. Once
//! matched it stays revealed and never changes again for the life of the deck.

use serde::{Deserialize, Serialize};

use super::symbol::Symbol;
use crate::core::entity::CardId;

/// A card in a dealt deck.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Unique id for this card.
    pub id: CardId,

    /// Face symbol. Exactly one other card in the deck shares it.
    pub symbol: Symbol,

    /// Shown face-up by the player this turn.
    pub revealed: bool,

    /// Permanently resolved as part of a pair.
    pub matched: bool,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub fn new(id: CardId, symbol: Symbol) -> Self {
        Self {
            id,
            symbol,
            revealed: false,
            matched: false,
        }
    }

    /// Whether the face is showing, either this turn or permanently.
    #[must_use]
    pub fn is_face_up(&self) -> bool {
        self.revealed || self.matched
    }

    /// Whether a selection could reveal this card.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        !self.is_face_up()
    }

    /// Whether this card has the same face as another.
    #[must_use]
    pub fn pairs_with(&self, other: &Card) -> bool {
        self.symbol == other.symbol
    }

    pub(crate) fn reveal(&mut self) {
        self.revealed = true;
    }

    pub(crate) fn conceal(&mut self) {
        if !self.matched {
            self.revealed = false;
        }
    }

    pub(crate) fn mark_matched(&mut self) {
        self.revealed = true;
        self.matched = true;
    }
}
