//! The game session: deck, turn phase, counters, and the resolve protocol.
//!
//! ## Turn protocol
//!
//! 1. `select_card` reveals a first card (`Idle → OneRevealed`).
//! 2. `select_card` reveals a second card (`OneRevealed → Resolving`). The
//!    move is counted immediately and a resolution is scheduled after the
//!    configured delay. Input is locked until it runs.
//! 3. The resolution compares the two symbols, keeps a match face-up or turns
//!    a miss back down, and returns to `Idle`.
//!
//! Invalid selections are silent no-ops reported as `SelectOutcome::Ignored`.
//! `reset` deals a fresh deck at any point, and any ticket from before the
//! reset is ignored when it arrives.
//!
//! ```
//! use std::time::Duration;
//! use memory_match::cards::{Alphabet, Symbol};
//! use memory_match::core::GameConfig;
//! use memory_match::session::GameSession;
//!
//! let config = GameConfig::new(Alphabet::new(["X"]).unwrap()).with_seed(1);
//! let mut session = GameSession::new(config);
//!
//! let pair = session.deck().positions_of(&Symbol::from("X"));
//! session.select_card(pair[0]);
//! session.select_card(pair[1]);
//! assert!(session.is_busy());
//!
//! let resolution = session.advance(Duration::from_millis(850)).unwrap();
//! assert!(resolution.is_match());
//! assert!(session.is_won());
//! ```

use std::time::Duration;

use tracing::{debug, info, trace};

use super::phase::{IgnoreReason, Resolution, SelectOutcome, Selection, TurnPhase};
use super::timer::{Generation, ResolutionTicket, ResolutionTimer};
use super::view::SessionView;
use crate::cards::{Card, Deck};
use crate::core::{CardIdAllocator, GameConfig, GameRng, Theme};

/// One player's game: an owned deck plus the state of the current turn.
#[derive(Clone, Debug)]
pub struct GameSession {
    config: GameConfig,
    rng: GameRng,
    ids: CardIdAllocator,
    deck: Deck,
    phase: TurnPhase,
    moves: u32,
    matches: u32,
    generation: Generation,
    timer: ResolutionTimer,
    theme: Theme,
}

impl GameSession {
    /// Start a session and deal the first deck.
    ///
    /// Uses `config.seed` when set, otherwise a freshly drawn seed.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let mut rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let mut ids = CardIdAllocator::new();
        let deck = Deck::generate(&config.alphabet, &mut rng, &mut ids);

        debug!(seed = rng.seed(), cards = deck.len(), "session started");

        Self {
            config,
            rng,
            ids,
            deck,
            phase: TurnPhase::Idle,
            moves: 0,
            matches: 0,
            generation: Generation::default(),
            timer: ResolutionTimer::new(),
            theme: Theme::default(),
        }
    }

    // === Actions ===

    /// Reveal the card at `position`.
    ///
    /// Ignored (no state change) while busy, for out-of-range positions, and
    /// for cards that are already revealed or matched.
    pub fn select_card(&mut self, position: usize) -> SelectOutcome {
        if let Err(reason) = self.check_selectable(position) {
            debug!(position, ?reason, "selection ignored");
            return SelectOutcome::Ignored(reason);
        }

        if let Some(card) = self.deck.get_mut(position) {
            card.reveal();
        }
        trace!(position, "card revealed");

        match self.phase {
            TurnPhase::Idle => {
                self.phase = TurnPhase::OneRevealed { first: position };
                SelectOutcome::FirstRevealed
            }
            TurnPhase::OneRevealed { first } => {
                self.phase = TurnPhase::Resolving { first, second: position };
                self.moves += 1;

                let ticket = ResolutionTicket {
                    generation: self.generation,
                    turn: self.moves,
                    first,
                    second: position,
                };
                self.timer.schedule(ticket, self.config.resolve_delay);
                trace!(first, second = position, moves = self.moves, "resolution scheduled");

                SelectOutcome::ResolutionScheduled(ticket)
            }
            TurnPhase::Resolving { .. } => SelectOutcome::Ignored(IgnoreReason::Busy),
        }
    }

    /// Advance the session clock, running the pending resolution if it is due.
    pub fn advance(&mut self, elapsed: Duration) -> Option<Resolution> {
        let ticket = self.timer.advance(elapsed)?;
        self.apply_resolution(ticket)
    }

    /// Run the pending resolution now, skipping the rest of the pause.
    pub fn resolve_pending(&mut self) -> Option<Resolution> {
        let ticket = self.timer.fire_now()?;
        self.apply_resolution(ticket)
    }

    /// Run a resolution delivered by an external timer.
    ///
    /// Returns `None` without touching state when the ticket is stale: issued
    /// before a reset, already resolved, or not the pending turn.
    pub fn resolve(&mut self, ticket: ResolutionTicket) -> Option<Resolution> {
        if self.timer.pending() == Some(ticket) {
            self.timer.cancel();
        }
        self.apply_resolution(ticket)
    }

    /// Deal a fresh deck and clear every counter, even mid-resolution.
    pub fn reset(&mut self) {
        if let Some(stale) = self.timer.cancel() {
            debug!(turn = stale.turn, "pending resolution cancelled by reset");
        }

        self.generation = self.generation.next();
        self.deck = Deck::generate(&self.config.alphabet, &mut self.rng, &mut self.ids);
        self.phase = TurnPhase::Idle;
        self.moves = 0;
        self.matches = 0;

        info!(generation = %self.generation, "game reset");
    }

    /// Flip between light and dark. Returns the new theme.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    /// Set the theme directly.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    // === Queries ===

    /// Every pair has been found.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.matches as usize == self.config.pair_count()
    }

    /// Input is locked waiting for a resolution.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.phase.is_busy()
    }

    /// Completed pairs of reveals.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Pairs found.
    #[must_use]
    pub fn matches(&self) -> u32 {
        self.matches
    }

    /// Pairs in the deck.
    #[must_use]
    pub fn pairs(&self) -> usize {
        self.config.pair_count()
    }

    /// The current deck.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Card at a position, if in range.
    #[must_use]
    pub fn card(&self, position: usize) -> Option<&Card> {
        self.deck.get(position)
    }

    /// The current turn phase.
    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Positions revealed this turn.
    #[must_use]
    pub fn selection(&self) -> Selection {
        self.phase.selection()
    }

    /// The pending resolution ticket, if any.
    #[must_use]
    pub fn pending_resolution(&self) -> Option<ResolutionTicket> {
        self.timer.pending()
    }

    /// Time until the pending resolution runs.
    #[must_use]
    pub fn time_until_resolution(&self) -> Option<Duration> {
        self.timer.remaining()
    }

    /// Current generation; bumped by every reset.
    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Current theme.
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Seed of the session RNG, for replaying the same deals.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Session configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Snapshot of everything a front end draws.
    #[must_use]
    pub fn view(&self) -> SessionView {
        SessionView::from_session(self)
    }

    // === Internals ===

    fn check_selectable(&self, position: usize) -> Result<(), IgnoreReason> {
        if self.phase.is_busy() {
            return Err(IgnoreReason::Busy);
        }
        let card = self.deck.get(position).ok_or(IgnoreReason::OutOfRange)?;
        if card.matched {
            return Err(IgnoreReason::AlreadyMatched);
        }
        if card.revealed {
            return Err(IgnoreReason::AlreadyRevealed);
        }
        Ok(())
    }

    fn is_current(&self, ticket: &ResolutionTicket) -> bool {
        ticket.generation == self.generation
            && ticket.turn == self.moves
            && self.phase
                == (TurnPhase::Resolving {
                    first: ticket.first,
                    second: ticket.second,
                })
    }

    fn apply_resolution(&mut self, ticket: ResolutionTicket) -> Option<Resolution> {
        if !self.is_current(&ticket) {
            debug!(
                generation = %ticket.generation,
                turn = ticket.turn,
                "stale resolution ignored"
            );
            return None;
        }

        let (first, second) = (ticket.first, ticket.second);
        let is_match = match (self.deck.get(first), self.deck.get(second)) {
            (Some(a), Some(b)) => a.pairs_with(b),
            _ => false,
        };

        let resolution = if is_match {
            for position in [first, second] {
                if let Some(card) = self.deck.get_mut(position) {
                    card.mark_matched();
                }
            }
            self.matches += 1;
            Resolution::Matched { first, second }
        } else {
            for position in [first, second] {
                if let Some(card) = self.deck.get_mut(position) {
                    card.conceal();
                }
            }
            Resolution::Mismatched { first, second }
        };

        self.phase = TurnPhase::Idle;
        debug!(first, second, matched = is_match, matches = self.matches, "pair resolved");

        if self.is_won() {
            info!(moves = self.moves, "all pairs found");
        }

        Some(resolution)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
