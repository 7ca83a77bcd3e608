//! Session protocol tests.
//!
//! These tests drive whole games through the public API:
//! - Match and mismatch resolution after the pause
//! - Ignored selections while busy, revealed, or matched
//! - Reset at any point, including with a resolution pending
//! - Win detection from the pair counter

use std::time::Duration;

use memory_match::cards::{Alphabet, Symbol};
use memory_match::core::{GameConfig, DEFAULT_RESOLVE_DELAY};
use memory_match::session::{GameSession, IgnoreReason, Resolution, SelectOutcome, TurnPhase};

fn two_symbol_session(seed: u64) -> GameSession {
    let alphabet = Alphabet::new(["X", "Y"]).unwrap();
    GameSession::new(GameConfig::new(alphabet).with_seed(seed))
}

fn positions(session: &GameSession, symbol: &str) -> Vec<usize> {
    session.deck().positions_of(&Symbol::from(symbol))
}

/// Reveal two positions and let the pause elapse.
fn play_pair(session: &mut GameSession, first: usize, second: usize) -> Option<Resolution> {
    session.select_card(first);
    session.select_card(second);
    session.advance(DEFAULT_RESOLVE_DELAY)
}

/// The X/Y walkthrough: miss, match X, match Y.
#[test]
fn test_two_symbol_walkthrough() {
    let mut session = two_symbol_session(42);

    let mut layout: Vec<String> = session.deck().iter().map(|c| c.symbol.to_string()).collect();
    layout.sort();
    assert_eq!(layout, vec!["X", "X", "Y", "Y"]);

    let xs = positions(&session, "X");
    let ys = positions(&session, "Y");

    // First X with first Y: a miss
    let resolution = play_pair(&mut session, xs[0], ys[0]).unwrap();
    assert!(!resolution.is_match());
    assert_eq!(session.moves(), 1);
    assert_eq!(session.matches(), 0);
    assert!(!session.card(xs[0]).unwrap().revealed);
    assert!(!session.card(ys[0]).unwrap().revealed);

    // Both Xs
    assert!(play_pair(&mut session, xs[0], xs[1]).unwrap().is_match());
    assert_eq!(session.moves(), 2);
    assert_eq!(session.matches(), 1);
    assert!(!session.is_won());

    // Both Ys
    assert!(play_pair(&mut session, ys[0], ys[1]).unwrap().is_match());
    assert_eq!(session.moves(), 3);
    assert_eq!(session.matches(), 2);
    assert!(session.is_won());
}

/// Nothing changes until the full pause has elapsed.
#[test]
fn test_resolution_waits_for_delay() {
    let alphabet = Alphabet::new(["X", "Y"]).unwrap();
    let config = GameConfig::new(alphabet)
        .with_seed(5)
        .with_resolve_delay(Duration::from_millis(200));
    let mut session = GameSession::new(config);
    let xs = positions(&session, "X");

    session.select_card(xs[0]);
    session.select_card(xs[1]);

    for _ in 0..19 {
        assert_eq!(session.advance(Duration::from_millis(10)), None);
        assert!(session.is_busy());
        assert_eq!(session.matches(), 0);
    }

    assert_eq!(
        session.advance(Duration::from_millis(10)),
        Some(Resolution::Matched { first: xs[0], second: xs[1] })
    );
    assert!(!session.is_busy());
    assert_eq!(session.time_until_resolution(), None);
}

/// A third selection during the pause is dropped, not queued.
#[test]
fn test_third_selection_is_ignored_not_queued() {
    let mut session = two_symbol_session(3);
    let xs = positions(&session, "X");
    let ys = positions(&session, "Y");

    session.select_card(xs[0]);
    session.select_card(ys[0]);

    assert_eq!(
        session.select_card(xs[1]),
        SelectOutcome::Ignored(IgnoreReason::Busy)
    );
    assert!(!session.card(xs[1]).unwrap().revealed);

    session.advance(DEFAULT_RESOLVE_DELAY);

    // The dropped click left no trace
    assert_eq!(session.phase(), TurnPhase::Idle);
    assert!(session.deck().iter().all(|c| !c.revealed));
    assert_eq!(session.moves(), 1);
}

/// Reset with a resolution pending: the old resolution never touches the new deck.
#[test]
fn test_reset_mid_resolution() {
    let mut session = two_symbol_session(11);
    let xs = positions(&session, "X");

    session.select_card(xs[0]);
    let ticket = session.select_card(xs[1]).ticket().unwrap();
    session.advance(Duration::from_millis(400));

    let old_ids: Vec<_> = session.deck().iter().map(|c| c.id).collect();
    session.reset();

    assert_eq!(session.deck().len(), 4);
    assert_eq!(session.moves(), 0);
    assert_eq!(session.matches(), 0);
    assert!(!session.is_busy());
    assert!(session.selection().is_empty());
    assert!(session.deck().iter().all(|c| !c.revealed && !c.matched));
    assert!(session.deck().iter().all(|c| !old_ids.contains(&c.id)));

    // Neither the internal timer nor a late external delivery has any effect
    assert_eq!(session.advance(Duration::from_secs(5)), None);
    assert_eq!(session.resolve(ticket), None);
    assert!(session.deck().iter().all(|c| !c.revealed && !c.matched));
    assert_eq!(session.matches(), 0);
}

/// Reset after a win starts a playable game.
#[test]
fn test_reset_after_win() {
    let mut session = two_symbol_session(8);
    for symbol in ["X", "Y"] {
        let p = positions(&session, symbol);
        play_pair(&mut session, p[0], p[1]);
    }
    assert!(session.is_won());

    session.reset();
    assert!(!session.is_won());

    let xs = positions(&session, "X");
    assert!(play_pair(&mut session, xs[0], xs[1]).unwrap().is_match());
    assert_eq!(session.matches(), 1);
}

/// Reference game: eight pairs, won after eight matches regardless of misses.
#[test]
fn test_reference_game_win_with_misses() {
    let mut session = GameSession::new(GameConfig::default().with_seed(77));
    assert_eq!(session.deck().len(), 16);

    let symbols: Vec<Symbol> = session.config().alphabet.iter().cloned().collect();

    // Three deliberate misses first
    for window in symbols.windows(2).take(3) {
        let a = session.deck().positions_of(&window[0])[0];
        let b = session.deck().positions_of(&window[1])[0];
        assert!(!play_pair(&mut session, a, b).unwrap().is_match());
    }
    assert_eq!(session.moves(), 3);

    for (found, symbol) in symbols.iter().enumerate() {
        assert!(!session.is_won());
        let p = session.deck().positions_of(symbol);
        assert!(play_pair(&mut session, p[0], p[1]).unwrap().is_match());
        assert_eq!(session.matches() as usize, found + 1);
    }

    assert!(session.is_won());
    assert_eq!(session.moves(), 11);
    assert_eq!(session.view().to_string(), "You Win! Moves: 11");
}

/// Matched and revealed cards reject selection without changing state.
#[test]
fn test_no_op_selections_preserve_state() {
    let mut session = two_symbol_session(21);
    let xs = positions(&session, "X");
    let ys = positions(&session, "Y");

    play_pair(&mut session, xs[0], xs[1]);
    session.select_card(ys[0]);

    let deck_before = session.deck().clone();
    let phase_before = session.phase();

    for position in [xs[0], xs[1]] {
        assert_eq!(
            session.select_card(position),
            SelectOutcome::Ignored(IgnoreReason::AlreadyMatched)
        );
    }
    assert_eq!(
        session.select_card(ys[0]),
        SelectOutcome::Ignored(IgnoreReason::AlreadyRevealed)
    );

    assert_eq!(session.deck(), &deck_before);
    assert_eq!(session.phase(), phase_before);
    assert_eq!(session.moves(), 1);
    assert_eq!(session.matches(), 1);
}

/// Same seed, same sequence of deals across resets.
#[test]
fn test_seeded_sessions_replay() {
    let mut a = two_symbol_session(1234);
    let mut b = two_symbol_session(1234);

    for _ in 0..5 {
        let layout_a: Vec<_> = a.deck().iter().map(|c| c.symbol.clone()).collect();
        let layout_b: Vec<_> = b.deck().iter().map(|c| c.symbol.clone()).collect();
        assert_eq!(layout_a, layout_b);
        a.reset();
        b.reset();
    }
}
