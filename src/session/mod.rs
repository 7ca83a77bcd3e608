//! Game sessions: the turn protocol, deferred resolution, and render views.
//!
//! `GameSession` owns the deck and all turn state. Time enters only through
//! the `ResolutionTimer`, which holds at most one pending resolution keyed to
//! the session generation so a reset cleanly orphans it.

mod controller;
mod phase;
mod timer;
mod view;

pub use controller::GameSession;
pub use phase::{IgnoreReason, Resolution, SelectOutcome, Selection, TurnPhase};
pub use timer::{Generation, ResolutionTicket, ResolutionTimer};
pub use view::{CardView, SessionView};
