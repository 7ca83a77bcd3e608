//! Cards, symbols, and deck generation.
//!
//! - `Symbol` / `Alphabet`: the faces a deck is dealt from
//! - `Card`: one dealt card and its revealed/matched flags
//! - `Deck`: a shuffled sequence with exactly two cards per symbol

pub mod symbol;
pub mod card;
pub mod deck;

pub use symbol::{Alphabet, Symbol, REFERENCE_SYMBOLS};
pub use card::Card;
pub use deck::Deck;
