//! Deck generation.
//!
//! `Deck::generate` deals two face-down cards per alphabet symbol, gives each
//! a fresh id, and shuffles the lot with Fisher–Yates so every one of the
//! `(2n)!` orders is equally likely.
//!
//! ```
//! use memory_match::cards::{Alphabet, Deck};
//! use memory_match::core::{CardIdAllocator, GameRng};
//!
//! let alphabet = Alphabet::new(["X", "Y"]).unwrap();
//! let mut rng = GameRng::new(42);
//! let mut ids = CardIdAllocator::new();
//!
//! let deck = Deck::generate(&alphabet, &mut rng, &mut ids);
//! assert_eq!(deck.len(), 4);
//! assert!(deck.iter().all(|card| !card.revealed && !card.matched));
//! ```

use std::ops::Index;

use serde::{Deserialize, Serialize};

use super::card::Card;
use super::symbol::{Alphabet, Symbol};
use crate::core::entity::CardIdAllocator;
use crate::core::rng::GameRng;

/// An ordered, shuffled sequence of paired cards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Deal a fresh shuffled deck with two cards per symbol.
    ///
    /// Only the RNG and the id allocator are advanced; calling this again
    /// yields an independent deck.
    pub fn generate(alphabet: &Alphabet, rng: &mut GameRng, ids: &mut CardIdAllocator) -> Self {
        let mut cards = Vec::with_capacity(alphabet.len() * 2);
        for _ in 0..2 {
            for symbol in alphabet.iter() {
                cards.push(Card::new(ids.alloc(), symbol.clone()));
            }
        }

        rng.shuffle(&mut cards);

        Self { cards }
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Card at a position, if in range.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Card> {
        self.cards.get(position)
    }

    pub(crate) fn get_mut(&mut self, position: usize) -> Option<&mut Card> {
        self.cards.get_mut(position)
    }

    /// Iterate over cards in deal order.
    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// All cards as a slice.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Positions of the cards carrying `symbol`, in deal order.
    #[must_use]
    pub fn positions_of(&self, symbol: &Symbol) -> Vec<usize> {
        self.cards
            .iter()
            .enumerate()
            .filter(|(_, card)| &card.symbol == symbol)
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of matched cards.
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.cards.iter().filter(|card| card.matched).count()
    }
}

impl Index<usize> for Deck {
    type Output = Card;

    fn index(&self, position: usize) -> &Card {
        &self.cards[position]
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
