//! Public snapshot API for observing match state without exposing internals.

use serde::{Deserialize, Serialize};

use crate::domain::rules::{bans_remaining, is_pick_phase};
use crate::domain::stages::StageCatalog;
use crate::domain::state::{MatchState, Mode, Phase, StageId};

/// Read-only projection of one match, broadcast to observers. Computed on
/// demand and never stored; the raw `MatchState` stays the source of truth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSnapshot {
    pub match_id: String,
    pub mode: Mode,
    pub phase: Phase,
    /// Struck stages in ban order.
    pub bans: Vec<StageId>,
    /// Selected stage, `null` until picked.
    pub pick: Option<StageId>,
    /// Catalog order minus current bans.
    pub available: Vec<StageId>,
    pub bans_remaining: usize,
    pub picks_remaining: usize,
    pub can_undo: bool,
}

/// Entry point: project the current state of a match for its observers.
pub fn snapshot(catalog: &StageCatalog, state: &MatchState, match_id: &str) -> MatchSnapshot {
    let available = catalog
        .stages()
        .iter()
        .filter(|stage| !state.has_banned(&stage.id))
        .map(|stage| stage.id.clone())
        .collect();

    MatchSnapshot {
        match_id: match_id.to_string(),
        mode: state.mode,
        phase: state.phase,
        bans: state.bans.clone(),
        pick: state.pick.clone(),
        available,
        bans_remaining: bans_remaining(state.mode, state.phase, state.bans.len()),
        picks_remaining: usize::from(is_pick_phase(state.phase) && state.pick.is_none()),
        can_undo: !state.history.is_empty(),
    }
}
