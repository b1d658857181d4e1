use serde_json::json;

use crate::domain::actions::{ban, force_advance, pick, undo};
use crate::domain::snapshot::snapshot;
use crate::domain::state::{MatchState, Mode, Phase};
use crate::domain::test_catalog::{catalog, TEST_STAGE_IDS};

#[test]
fn fresh_machine_projects_the_whole_catalog() {
    let catalog = catalog();
    let state = MatchState::new(Mode::FirstGame);
    let snap = snapshot(&catalog, &state, "default");

    assert_eq!(snap.match_id, "default");
    assert_eq!(snap.mode, Mode::FirstGame);
    assert_eq!(snap.phase, Phase::WinnerBan);
    assert!(snap.bans.is_empty());
    assert_eq!(snap.pick, None);
    assert_eq!(snap.available, TEST_STAGE_IDS.to_vec());
    assert_eq!(snap.bans_remaining, 3);
    assert_eq!(snap.picks_remaining, 0);
    assert!(!snap.can_undo);
}

#[test]
fn available_tracks_bans_in_catalog_order() {
    let catalog = catalog();
    let mut state = MatchState::new(Mode::FirstGame);
    ban(&mut state, &catalog, "smashville").unwrap();
    ban(&mut state, &catalog, "battlefield").unwrap();

    let snap = snapshot(&catalog, &state, "default");
    // Ban order is preserved in `bans`, catalog order in `available`.
    assert_eq!(snap.bans, vec!["smashville", "battlefield"]);
    assert_eq!(
        snap.available,
        vec!["smallbattlefield", "fd", "tac", "ps2", "kalos", "yoshis", "hollow"]
    );
    assert_eq!(snap.bans_remaining, 1);
    assert!(snap.can_undo);
}

#[test]
fn counters_across_the_first_game_ritual() {
    let catalog = catalog();
    let mut state = MatchState::new(Mode::FirstGame);
    for id in ["battlefield", "smashville", "ps2"] {
        ban(&mut state, &catalog, id).unwrap();
    }

    let snap = snapshot(&catalog, &state, "default");
    assert_eq!(snap.phase, Phase::LoserBan);
    assert_eq!(snap.bans_remaining, 4);
    assert_eq!(snap.picks_remaining, 0);

    for id in ["tac", "kalos", "yoshis", "hollow"] {
        ban(&mut state, &catalog, id).unwrap();
    }
    let snap = snapshot(&catalog, &state, "default");
    assert_eq!(snap.phase, Phase::WinnerPick);
    assert_eq!(snap.bans_remaining, 0);
    assert_eq!(snap.picks_remaining, 1);

    pick(&mut state, &catalog, "fd").unwrap();
    let snap = snapshot(&catalog, &state, "default");
    assert_eq!(snap.phase, Phase::Done);
    assert_eq!(snap.pick.as_deref(), Some("fd"));
    assert_eq!(snap.picks_remaining, 0);

    undo(&mut state).unwrap();
    let snap = snapshot(&catalog, &state, "default");
    assert_eq!(snap.phase, Phase::WinnerPick);
    assert_eq!(snap.pick, None);
    assert_eq!(snap.picks_remaining, 1);
}

#[test]
fn force_advanced_loser_ban_exposes_the_full_remainder() {
    let catalog = catalog();
    let mut state = MatchState::new(Mode::FirstGame);
    ban(&mut state, &catalog, "battlefield").unwrap();
    force_advance(&mut state).unwrap();

    let snap = snapshot(&catalog, &state, "default");
    assert_eq!(snap.phase, Phase::LoserBan);
    assert_eq!(snap.bans_remaining, 6);
}

#[test]
fn wire_shape_is_camel_case_with_screaming_enums() {
    let catalog = catalog();
    let mut state = MatchState::new(Mode::LaterGame);
    ban(&mut state, &catalog, "battlefield").unwrap();

    let value = serde_json::to_value(snapshot(&catalog, &state, "m1")).unwrap();
    assert_eq!(value["matchId"], json!("m1"));
    assert_eq!(value["mode"], json!("LATER_GAME"));
    assert_eq!(value["phase"], json!("WINNER_BAN"));
    assert_eq!(value["bans"], json!(["battlefield"]));
    // A missing pick serializes as an explicit null, not an absent key.
    assert!(value.as_object().unwrap().contains_key("pick"));
    assert_eq!(value["pick"], json!(null));
    assert_eq!(value["bansRemaining"], json!(2));
    assert_eq!(value["picksRemaining"], json!(0));
    assert_eq!(value["canUndo"], json!(true));
}
