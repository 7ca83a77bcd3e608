//! # memory-match
//!
//! Presentation-independent core for a memory-matching card game.
//!
//! A grid of face-down cards is revealed two at a time. Pairs with equal
//! symbols stay face-up; others turn back over after a short pause. The
//! session counts moves and found pairs, and the game is won when every pair
//! is found.
//!
//! ## Design Principles
//!
//! 1. **Owned session**: All state lives in one `GameSession` with an explicit
//!    mutation API (`select_card`, `reset`, `toggle_theme`).
//!
//! 2. **Explicit time**: The pause before a pair is adjudicated is a
//!    cancellable scheduled task on a logical clock, keyed to a session
//!    generation. Stale resolutions are ignored, never applied.
//!
//! 3. **Deterministic deals**: Seeded ChaCha8 RNG with an explicit Fisher–Yates
//!    shuffle, so any game can be replayed from its seed.
//!
//! ## Modules
//!
//! - `core`: Card ids, RNG, configuration, theme
//! - `cards`: Symbols, alphabets, cards, deck generation
//! - `session`: Turn protocol, resolution timer, render views
//! - `error`: Configuration errors

pub mod core;
pub mod cards;
pub mod session;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    CardId, CardIdAllocator,
    GameRng, GameRngState,
    GameConfig, DEFAULT_RESOLVE_DELAY,
    Theme,
};

pub use crate::cards::{Alphabet, Card, Deck, Symbol, REFERENCE_SYMBOLS};

pub use crate::session::{
    GameSession, TurnPhase, Selection,
    SelectOutcome, IgnoreReason, Resolution,
    Generation, ResolutionTicket, ResolutionTimer,
    CardView, SessionView,
};

pub use crate::error::ConfigError;
