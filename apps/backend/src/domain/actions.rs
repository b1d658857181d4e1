//! Action handlers for the ban/pick ritual.
//!
//! Each handler validates, mutates the `MatchState` in place, and records a
//! reversible history entry. Handlers never apply partial mutations: every
//! check happens before the first write.

use crate::domain::rules::{
    forced_successor, is_ban_phase, is_pick_phase, phase_after_ban, phase_ban_quota,
};
use crate::domain::stages::StageCatalog;
use crate::domain::state::{HistoryAction, HistoryEntry, MatchState, Mode, Phase};
use crate::errors::domain::DomainError;

/// Strike a stage. Validation order: catalog membership, duplicate ban,
/// phase gate, quota.
///
/// The duplicate check runs before the phase gate so re-banning a struck
/// stage is rejected identically in every phase.
pub fn ban(
    state: &mut MatchState,
    catalog: &StageCatalog,
    stage_id: &str,
) -> Result<(), DomainError> {
    if !catalog.contains(stage_id) {
        return Err(DomainError::InvalidStage);
    }
    if state.has_banned(stage_id) {
        return Err(DomainError::AlreadyBanned);
    }
    if !is_ban_phase(state.phase) {
        return Err(DomainError::PhaseMismatch);
    }
    // LoserBan is not part of the LaterGame graph; treat the foreign pair as
    // having no headroom rather than panicking on an unreachable state.
    let Some(quota) = phase_ban_quota(state.mode, state.phase) else {
        return Err(DomainError::QuotaExhausted);
    };
    if state.bans.len() >= quota {
        return Err(DomainError::QuotaExhausted);
    }

    let prev_phase = state.phase;
    state.bans.push(stage_id.to_string());
    state.history.push(HistoryEntry {
        action: HistoryAction::Ban {
            stage_id: stage_id.to_string(),
        },
        prev_phase,
    });
    state.phase = phase_after_ban(state.mode, prev_phase, state.bans.len());
    Ok(())
}

/// Select the stage, ending the ritual. Validation order: catalog
/// membership, struck stage, phase gate, existing pick.
pub fn pick(
    state: &mut MatchState,
    catalog: &StageCatalog,
    stage_id: &str,
) -> Result<(), DomainError> {
    if !catalog.contains(stage_id) {
        return Err(DomainError::InvalidStage);
    }
    if state.has_banned(stage_id) {
        return Err(DomainError::StageBanned);
    }
    if !is_pick_phase(state.phase) {
        return Err(DomainError::PhaseMismatch);
    }
    if state.pick.is_some() {
        return Err(DomainError::AlreadyPicked);
    }

    let prev_phase = state.phase;
    state.pick = Some(stage_id.to_string());
    state.history.push(HistoryEntry {
        action: HistoryAction::Pick {
            stage_id: stage_id.to_string(),
        },
        prev_phase,
    });
    state.phase = Phase::Done;
    Ok(())
}

/// Reverse the most recent ban, pick, or force-advance. Single step only;
/// repeated calls walk the stack strictly backward.
pub fn undo(state: &mut MatchState) -> Result<(), DomainError> {
    let Some(entry) = state.history.pop() else {
        return Err(DomainError::NothingToUndo);
    };
    match entry.action {
        HistoryAction::Ban { stage_id } => {
            state.bans.retain(|banned| *banned != stage_id);
        }
        HistoryAction::Pick { .. } => {
            state.pick = None;
        }
        HistoryAction::ForceAdvance => {}
    }
    state.phase = entry.prev_phase;
    Ok(())
}

/// Replace the machine with a fresh one seeded with the given wire-level
/// mode. Unconditional: in-progress bans and picks are discarded even when
/// the mode is unchanged.
pub fn set_mode(state: &mut MatchState, mode: &str) -> Result<(), DomainError> {
    let Some(mode) = Mode::parse(mode) else {
        return Err(DomainError::InvalidMode);
    };
    *state = MatchState::new(mode);
    Ok(())
}

/// Arbitration override: move to the fixed successor of the current
/// (mode, phase) pair without requiring the counts to satisfy the
/// derivation. Recorded in history so undo can restore the prior phase.
pub fn force_advance(state: &mut MatchState) -> Result<(), DomainError> {
    let Some(next) = forced_successor(state.mode, state.phase) else {
        return Err(DomainError::CannotAdvance);
    };
    state.history.push(HistoryEntry {
        action: HistoryAction::ForceAdvance,
        prev_phase: state.phase,
    });
    state.phase = next;
    Ok(())
}

/// Replace the machine with a fresh one, preserving the current mode.
pub fn reset(state: &mut MatchState) {
    *state = MatchState::new(state.mode);
}
