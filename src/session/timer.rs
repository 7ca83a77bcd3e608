//! Deferred resolution scheduling.
//!
//! The pause between a second reveal and its resolution is modeled as a
//! single scheduled task on a logical clock. The owner drives time with
//! `advance`; a front end with its own timer can instead read `remaining` and
//! deliver the ticket itself.
//!
//! Tickets carry the session `Generation` and turn number, so a ticket that
//! outlives a reset (or its own turn) is recognizably stale.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Session generation, bumped on every reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Generation(pub u64);

impl Generation {
    /// The generation after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl std::fmt::Display for Generation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Gen({})", self.0)
    }
}

/// Handle for one scheduled resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolutionTicket {
    /// Generation of the deck the reveals were made on.
    pub generation: Generation,
    /// Move number this resolution completes (1-based).
    pub turn: u32,
    /// Position revealed first.
    pub first: usize,
    /// Position revealed second.
    pub second: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Scheduled {
    ticket: ResolutionTicket,
    due_at: Duration,
}

/// Logical clock holding at most one pending resolution.
#[derive(Clone, Debug, Default)]
pub struct ResolutionTimer {
    clock: Duration,
    pending: Option<Scheduled>,
}

impl ResolutionTimer {
    /// Create an idle timer at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current logical time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.clock
    }

    /// Schedule `ticket` to fire after `delay`, replacing anything pending.
    pub fn schedule(&mut self, ticket: ResolutionTicket, delay: Duration) {
        self.pending = Some(Scheduled {
            ticket,
            due_at: self.clock.saturating_add(delay),
        });
    }

    /// Drop the pending ticket, returning it.
    pub fn cancel(&mut self) -> Option<ResolutionTicket> {
        self.pending.take().map(|s| s.ticket)
    }

    /// The pending ticket, if any.
    #[must_use]
    pub fn pending(&self) -> Option<ResolutionTicket> {
        self.pending.map(|s| s.ticket)
    }

    /// Time left before the pending ticket fires.
    #[must_use]
    pub fn remaining(&self) -> Option<Duration> {
        self.pending.map(|s| s.due_at.saturating_sub(self.clock))
    }

    /// Move the clock forward; returns the pending ticket once it is due.
    pub fn advance(&mut self, elapsed: Duration) -> Option<ResolutionTicket> {
        self.clock = self.clock.saturating_add(elapsed);
        let clock = self.clock;
        if self.pending.is_some_and(|s| s.due_at <= clock) {
            self.cancel()
        } else {
            None
        }
    }

    /// Fire the pending ticket immediately, jumping the clock to its due time.
    pub fn fire_now(&mut self) -> Option<ResolutionTicket> {
        let scheduled = self.pending.take()?;
        self.clock = self.clock.max(scheduled.due_at);
        Some(scheduled.ticket)
    }
}
