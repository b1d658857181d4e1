use crate::domain::state::{Mode, Phase};

/// Winner-side ban quota, both modes.
pub const WINNER_BANS: usize = 3;
/// Total accumulated bans before the pick in FirstGame (3 winner + 4 loser).
pub const FIRST_GAME_TOTAL_BANS: usize = 7;

/// Total ban quota for a whole ritual in the given mode.
pub const fn total_ban_quota(mode: Mode) -> usize {
    match mode {
        Mode::FirstGame => FIRST_GAME_TOTAL_BANS,
        Mode::LaterGame => WINNER_BANS,
    }
}

pub const fn is_ban_phase(phase: Phase) -> bool {
    matches!(phase, Phase::WinnerBan | Phase::LoserBan)
}

pub const fn is_pick_phase(phase: Phase) -> bool {
    matches!(phase, Phase::WinnerPick | Phase::LoserPick)
}

/// Accumulated-ban ceiling for the phase the machine currently sits in.
///
/// `None` outside ban phases and for pairs foreign to the mode's graph
/// (LoserBan only exists in FirstGame). The LoserBan ceiling is the total
/// accumulated count, with no phase-local offset, so a force-advanced early
/// entry into LoserBan simply exposes a larger remainder.
pub const fn phase_ban_quota(mode: Mode, phase: Phase) -> Option<usize> {
    match (mode, phase) {
        (_, Phase::WinnerBan) => Some(WINNER_BANS),
        (Mode::FirstGame, Phase::LoserBan) => Some(FIRST_GAME_TOTAL_BANS),
        _ => None,
    }
}

/// Bans still owed in the current phase; 0 outside ban phases.
pub fn bans_remaining(mode: Mode, phase: Phase, ban_count: usize) -> usize {
    match phase_ban_quota(mode, phase) {
        Some(quota) => quota.saturating_sub(ban_count),
        None => 0,
    }
}

/// Threshold-driven advance applied after a successful ban.
///
/// Only the phase the machine currently sits in can advance; a machine that
/// was force-advanced keeps its phase until that phase's own threshold is
/// crossed.
pub fn phase_after_ban(mode: Mode, phase: Phase, ban_count: usize) -> Phase {
    match (mode, phase) {
        (Mode::FirstGame, Phase::WinnerBan) if ban_count >= WINNER_BANS => Phase::LoserBan,
        (Mode::LaterGame, Phase::WinnerBan) if ban_count >= WINNER_BANS => Phase::LoserPick,
        (Mode::FirstGame, Phase::LoserBan) if ban_count >= FIRST_GAME_TOTAL_BANS => {
            Phase::WinnerPick
        }
        _ => phase,
    }
}

/// Arbitration override table: the distinct successor of (mode, phase).
///
/// `None` when the phase has no successor in the mode's graph (Done, or a
/// pair the graph never produces).
pub const fn forced_successor(mode: Mode, phase: Phase) -> Option<Phase> {
    match (mode, phase) {
        (Mode::FirstGame, Phase::WinnerBan) => Some(Phase::LoserBan),
        (Mode::FirstGame, Phase::LoserBan) => Some(Phase::WinnerPick),
        (Mode::FirstGame, Phase::WinnerPick) => Some(Phase::Done),
        (Mode::LaterGame, Phase::WinnerBan) => Some(Phase::LoserPick),
        (Mode::LaterGame, Phase::LoserPick) => Some(Phase::Done),
        _ => None,
    }
}

/// Pure derivation of the phase from accumulated selections.
///
/// Matches the authoritative phase everywhere except immediately after a
/// force-advance or an undo of one.
pub fn derived_phase(mode: Mode, ban_count: usize, picked: bool) -> Phase {
    if picked {
        return Phase::Done;
    }
    match mode {
        Mode::FirstGame => {
            if ban_count >= FIRST_GAME_TOTAL_BANS {
                Phase::WinnerPick
            } else if ban_count >= WINNER_BANS {
                Phase::LoserBan
            } else {
                Phase::WinnerBan
            }
        }
        Mode::LaterGame => {
            if ban_count >= WINNER_BANS {
                Phase::LoserPick
            } else {
                Phase::WinnerBan
            }
        }
    }
}
