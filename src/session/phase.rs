//! Turn phases and selection outcomes.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::timer::ResolutionTicket;

/// Positions revealed this turn. Never more than two.
pub type Selection = SmallVec<[usize; 2]>;

/// Where the current turn stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Nothing revealed this turn.
    #[default]
    Idle,
    /// One card revealed, waiting for the second.
    OneRevealed { first: usize },
    /// Two cards revealed, input locked until resolution.
    Resolving { first: usize, second: usize },
}

impl TurnPhase {
    /// Input is locked while a resolution is pending.
    #[must_use]
    pub const fn is_busy(self) -> bool {
        matches!(self, TurnPhase::Resolving { .. })
    }

    /// Positions revealed this turn, in selection order.
    #[must_use]
    pub fn selection(self) -> Selection {
        let mut selection = Selection::new();
        match self {
            TurnPhase::Idle => {}
            TurnPhase::OneRevealed { first } => selection.push(first),
            TurnPhase::Resolving { first, second } => {
                selection.push(first);
                selection.push(second);
            }
        }
        selection
    }
}

/// Why a selection changed nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// A resolution is pending.
    Busy,
    /// No card at that position.
    OutOfRange,
    /// The card is already part of a resolved pair.
    AlreadyMatched,
    /// The card is already face-up this turn.
    AlreadyRevealed,
}

/// Result of `GameSession::select_card`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectOutcome {
    /// No state changed.
    Ignored(IgnoreReason),
    /// First card of the turn is now revealed.
    FirstRevealed,
    /// Second card revealed; the move is counted and resolution scheduled.
    ResolutionScheduled(ResolutionTicket),
}

impl SelectOutcome {
    /// Whether the selection was a no-op.
    #[must_use]
    pub const fn is_ignored(&self) -> bool {
        matches!(self, SelectOutcome::Ignored(_))
    }

    /// The scheduled ticket, if this selection completed a pair.
    #[must_use]
    pub const fn ticket(&self) -> Option<ResolutionTicket> {
        match self {
            SelectOutcome::ResolutionScheduled(ticket) => Some(*ticket),
            _ => None,
        }
    }
}

/// What a resolution did to the two revealed cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resolution {
    /// Symbols equal: both cards stay up as a matched pair.
    Matched { first: usize, second: usize },
    /// Symbols differ: both cards turned back down.
    Mismatched { first: usize, second: usize },
}

impl Resolution {
    /// Whether the pair matched.
    #[must_use]
    pub const fn is_match(&self) -> bool {
        matches!(self, Resolution::Matched { .. })
    }

    /// The two positions resolved.
    #[must_use]
    pub const fn positions(&self) -> (usize, usize) {
        match *self {
            Resolution::Matched { first, second } | Resolution::Mismatched { first, second } => {
                (first, second)
            }
        }
    }
}
