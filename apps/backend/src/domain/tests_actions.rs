use crate::domain::actions::{ban, force_advance, pick, reset, set_mode};
use crate::domain::state::{HistoryAction, MatchState, Mode, Phase};
use crate::domain::test_catalog::catalog;
use crate::errors::domain::DomainError;

#[test]
fn first_game_full_ritual() {
    let catalog = catalog();
    let mut state = MatchState::new(Mode::FirstGame);
    assert_eq!(state.phase, Phase::WinnerBan);

    // Winner strikes three.
    for id in ["battlefield", "smashville", "ps2"] {
        ban(&mut state, &catalog, id).unwrap();
    }
    assert_eq!(state.phase, Phase::LoserBan);
    assert_eq!(state.bans.len(), 3);

    // Loser strikes four more.
    for id in ["tac", "kalos", "yoshis", "hollow"] {
        ban(&mut state, &catalog, id).unwrap();
    }
    assert_eq!(state.phase, Phase::WinnerPick);
    assert_eq!(state.bans.len(), 7);

    pick(&mut state, &catalog, "fd").unwrap();
    assert_eq!(state.phase, Phase::Done);
    assert_eq!(state.pick.as_deref(), Some("fd"));
    assert_eq!(
        state.bans,
        vec!["battlefield", "smashville", "ps2", "tac", "kalos", "yoshis", "hollow"]
    );
}

#[test]
fn later_game_skips_loser_ban() {
    let catalog = catalog();
    let mut state = MatchState::new(Mode::LaterGame);

    for id in ["battlefield", "smashville", "ps2"] {
        ban(&mut state, &catalog, id).unwrap();
    }
    assert_eq!(state.phase, Phase::LoserPick);

    // The quota is spent; a fourth strike is gated by the pick phase.
    assert_eq!(
        ban(&mut state, &catalog, "tac").unwrap_err(),
        DomainError::PhaseMismatch
    );

    pick(&mut state, &catalog, "fd").unwrap();
    assert_eq!(state.phase, Phase::Done);
}

#[test]
fn ban_rejects_unknown_stage() {
    let catalog = catalog();
    let mut state = MatchState::new(Mode::FirstGame);
    assert_eq!(
        ban(&mut state, &catalog, "fountain").unwrap_err(),
        DomainError::InvalidStage
    );
    assert_eq!(
        ban(&mut state, &catalog, "").unwrap_err(),
        DomainError::InvalidStage
    );
    assert!(state.bans.is_empty());
    assert!(state.history.is_empty());
}

#[test]
fn duplicate_ban_rejected_identically_in_every_phase() {
    let catalog = catalog();
    let mut state = MatchState::new(Mode::LaterGame);
    ban(&mut state, &catalog, "battlefield").unwrap();

    // Still in a ban phase.
    assert_eq!(
        ban(&mut state, &catalog, "battlefield").unwrap_err(),
        DomainError::AlreadyBanned
    );

    // In the pick phase and in Done the answer does not change.
    ban(&mut state, &catalog, "smashville").unwrap();
    ban(&mut state, &catalog, "ps2").unwrap();
    assert_eq!(state.phase, Phase::LoserPick);
    assert_eq!(
        ban(&mut state, &catalog, "battlefield").unwrap_err(),
        DomainError::AlreadyBanned
    );

    pick(&mut state, &catalog, "fd").unwrap();
    assert_eq!(state.phase, Phase::Done);
    assert_eq!(
        ban(&mut state, &catalog, "battlefield").unwrap_err(),
        DomainError::AlreadyBanned
    );
}

#[test]
fn ban_rejected_outside_ban_phases() {
    let catalog = catalog();
    let mut state = MatchState::new(Mode::FirstGame);
    for id in ["battlefield", "smashville", "ps2", "tac", "kalos", "yoshis", "hollow"] {
        ban(&mut state, &catalog, id).unwrap();
    }
    assert_eq!(state.phase, Phase::WinnerPick);
    assert_eq!(
        ban(&mut state, &catalog, "fd").unwrap_err(),
        DomainError::PhaseMismatch
    );
}

#[test]
fn ban_quota_guard_on_hand_built_states() {
    let catalog = catalog();

    // A LoserBan machine that already holds the full seven.
    let mut state = MatchState::new(Mode::FirstGame);
    state.phase = Phase::LoserBan;
    state.bans = ["battlefield", "smashville", "ps2", "tac", "kalos", "yoshis", "hollow"]
        .iter()
        .map(|id| (*id).to_string())
        .collect();
    assert_eq!(
        ban(&mut state, &catalog, "fd").unwrap_err(),
        DomainError::QuotaExhausted
    );

    // LoserBan is foreign to the LaterGame graph: no headroom at all.
    let mut state = MatchState::new(Mode::LaterGame);
    state.phase = Phase::LoserBan;
    assert_eq!(
        ban(&mut state, &catalog, "fd").unwrap_err(),
        DomainError::QuotaExhausted
    );
}

#[test]
fn pick_validation_order() {
    let catalog = catalog();
    let mut state = MatchState::new(Mode::FirstGame);
    ban(&mut state, &catalog, "battlefield").unwrap();

    // Unknown stage wins over everything.
    assert_eq!(
        pick(&mut state, &catalog, "fountain").unwrap_err(),
        DomainError::InvalidStage
    );
    // A struck stage is reported as banned even while the phase is wrong.
    assert_eq!(
        pick(&mut state, &catalog, "battlefield").unwrap_err(),
        DomainError::StageBanned
    );
    // Otherwise the phase gate applies.
    assert_eq!(
        pick(&mut state, &catalog, "fd").unwrap_err(),
        DomainError::PhaseMismatch
    );
    assert!(state.pick.is_none());

    // A pick-phase machine that somehow already holds a pick.
    let mut state = MatchState::new(Mode::FirstGame);
    state.phase = Phase::WinnerPick;
    state.pick = Some("fd".to_string());
    assert_eq!(
        pick(&mut state, &catalog, "smashville").unwrap_err(),
        DomainError::AlreadyPicked
    );
}

#[test]
fn pick_never_lands_on_a_banned_stage() {
    let catalog = catalog();
    let mut state = MatchState::new(Mode::LaterGame);
    for id in ["battlefield", "smashville", "ps2"] {
        ban(&mut state, &catalog, id).unwrap();
    }
    assert_eq!(
        pick(&mut state, &catalog, "ps2").unwrap_err(),
        DomainError::StageBanned
    );
    pick(&mut state, &catalog, "fd").unwrap();
    assert!(!state.has_banned("fd"));
}

#[test]
fn set_mode_is_an_unconditional_reset() {
    let catalog = catalog();
    let mut state = MatchState::new(Mode::FirstGame);
    ban(&mut state, &catalog, "battlefield").unwrap();
    ban(&mut state, &catalog, "smashville").unwrap();

    set_mode(&mut state, "LATER_GAME").unwrap();
    assert_eq!(state.mode, Mode::LaterGame);
    assert_eq!(state.phase, Phase::WinnerBan);
    assert!(state.bans.is_empty());
    assert!(state.pick.is_none());
    assert!(state.history.is_empty());

    // Re-selecting the current mode still wipes progress.
    ban(&mut state, &catalog, "battlefield").unwrap();
    set_mode(&mut state, "LATER_GAME").unwrap();
    assert!(state.bans.is_empty());
}

#[test]
fn set_mode_rejects_unrecognized_values() {
    let catalog = catalog();
    let mut state = MatchState::new(Mode::FirstGame);
    ban(&mut state, &catalog, "battlefield").unwrap();

    for bad in ["", "first_game", "GAME_THREE"] {
        assert_eq!(set_mode(&mut state, bad).unwrap_err(), DomainError::InvalidMode);
    }
    // Failed mode changes leave progress untouched.
    assert_eq!(state.bans, vec!["battlefield"]);
    assert_eq!(state.mode, Mode::FirstGame);
}

#[test]
fn force_advance_walks_the_table_without_counts() {
    let mut state = MatchState::new(Mode::FirstGame);

    force_advance(&mut state).unwrap();
    assert_eq!(state.phase, Phase::LoserBan);
    assert!(state.bans.is_empty());

    force_advance(&mut state).unwrap();
    assert_eq!(state.phase, Phase::WinnerPick);

    force_advance(&mut state).unwrap();
    assert_eq!(state.phase, Phase::Done);

    assert_eq!(force_advance(&mut state).unwrap_err(), DomainError::CannotAdvance);
    assert_eq!(state.history.len(), 3);
    assert!(state
        .history
        .iter()
        .all(|entry| entry.action == HistoryAction::ForceAdvance));
}

#[test]
fn force_advance_in_later_game() {
    let mut state = MatchState::new(Mode::LaterGame);
    force_advance(&mut state).unwrap();
    assert_eq!(state.phase, Phase::LoserPick);
    force_advance(&mut state).unwrap();
    assert_eq!(state.phase, Phase::Done);
    assert_eq!(force_advance(&mut state).unwrap_err(), DomainError::CannotAdvance);
}

#[test]
fn reset_preserves_mode() {
    let catalog = catalog();
    let mut state = MatchState::new(Mode::FirstGame);
    set_mode(&mut state, "LATER_GAME").unwrap();
    ban(&mut state, &catalog, "battlefield").unwrap();
    ban(&mut state, &catalog, "smashville").unwrap();
    ban(&mut state, &catalog, "ps2").unwrap();
    pick(&mut state, &catalog, "fd").unwrap();

    reset(&mut state);
    assert_eq!(state.mode, Mode::LaterGame);
    assert_eq!(state.phase, Phase::WinnerBan);
    assert!(state.bans.is_empty());
    assert!(state.pick.is_none());
    assert!(state.history.is_empty());
}
