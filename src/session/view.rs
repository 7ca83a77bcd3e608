//! Render snapshot for presentation layers.
//!
//! A `SessionView` is everything a front end needs to draw one frame. Face-down
//! cards carry no symbol, so a view can be handed to an untrusted renderer
//! without leaking the layout.

use serde::{Deserialize, Serialize};

use super::controller::GameSession;
use crate::cards::{Card, Symbol};
use crate::core::{CardId, Theme};

/// One card as drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub id: CardId,
    /// Present only while the card is face-up.
    pub symbol: Option<Symbol>,
    pub face_up: bool,
    pub matched: bool,
    /// Whether clicking this card would reveal it.
    pub selectable: bool,
}

impl CardView {
    fn from_card(card: &Card, input_open: bool) -> Self {
        let face_up = card.is_face_up();
        Self {
            id: card.id,
            symbol: face_up.then(|| card.symbol.clone()),
            face_up,
            matched: card.matched,
            selectable: input_open && !face_up,
        }
    }

    /// Accessible label: the symbol when face-up, otherwise a placeholder.
    #[must_use]
    pub fn label(&self) -> &str {
        self.symbol.as_ref().map_or("Hidden card", Symbol::as_str)
    }
}

/// Snapshot of a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionView {
    pub cards: Vec<CardView>,
    pub moves: u32,
    pub matches: u32,
    pub pairs: usize,
    pub won: bool,
    pub busy: bool,
    pub theme: Theme,
}

impl SessionView {
    pub(crate) fn from_session(session: &GameSession) -> Self {
        let input_open = !session.is_busy() && session.selection().len() < 2;
        Self {
            cards: session
                .deck()
                .iter()
                .map(|card| CardView::from_card(card, input_open))
                .collect(),
            moves: session.moves(),
            matches: session.matches(),
            pairs: session.pairs(),
            won: session.is_won(),
            busy: session.is_busy(),
            theme: session.theme(),
        }
    }

    /// Label for the reset control.
    #[must_use]
    pub fn reset_label(&self) -> &'static str {
        if self.won {
            "Play Again"
        } else {
            "Reset"
        }
    }
}

/// Status line: win banner or running score.
impl std::fmt::Display for SessionView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.won {
            write!(f, "You Win! Moves: {}", self.moves)
        } else {
            write!(f, "Moves: {} • Matches: {}/{}", self.moves, self.matches, self.pairs)
        }
    }
}
