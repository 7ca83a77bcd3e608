//! Core types: card ids, RNG, configuration, theme.
//!
//! Everything here is independent of the turn rules; the `cards` and
//! `session` modules build on these.

pub mod entity;
pub mod rng;
pub mod config;
pub mod theme;

pub use entity::{CardId, CardIdAllocator};
pub use rng::{GameRng, GameRngState};
pub use config::{GameConfig, DEFAULT_RESOLVE_DELAY};
pub use theme::Theme;
