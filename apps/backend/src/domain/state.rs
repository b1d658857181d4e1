use serde::{Deserialize, Serialize};

pub type StageId = String;

/// Which transition graph and ban quotas govern the match.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Mode {
    /// Opening game: 3 winner bans, then 4 loser bans, then the winner picks.
    FirstGame,
    /// Any later game: 3 winner bans, then the loser picks.
    LaterGame,
}

impl Mode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Mode::FirstGame => "FIRST_GAME",
            Mode::LaterGame => "LATER_GAME",
        }
    }

    /// Parse a wire-level mode string; `None` for anything unrecognized.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "FIRST_GAME" => Some(Mode::FirstGame),
            "LATER_GAME" => Some(Mode::LaterGame),
            _ => None,
        }
    }
}

/// Current legal-action gate for the match.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    /// Winner of the previous game strikes stages.
    WinnerBan,
    /// Loser strikes stages (FirstGame graph only).
    LoserBan,
    /// Winner selects the stage (FirstGame graph).
    WinnerPick,
    /// Loser selects the stage (LaterGame graph).
    LoserPick,
    /// Ritual complete; terminal except via undo or reset.
    Done,
}

impl Phase {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Phase::WinnerBan => "WINNER_BAN",
            Phase::LoserBan => "LOSER_BAN",
            Phase::WinnerPick => "WINNER_PICK",
            Phase::LoserPick => "LOSER_PICK",
            Phase::Done => "DONE",
        }
    }
}

/// What a history entry reverses when undone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryAction {
    Ban { stage_id: StageId },
    Pick { stage_id: StageId },
    ForceAdvance,
}

/// One reversible step, recorded after every successful mutating action.
///
/// `prev_phase` is the phase immediately before the action was applied;
/// undo restores it verbatim, which is what keeps force-advanced phases
/// reversible even though they diverge from the count-based derivation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub action: HistoryAction,
    pub prev_phase: Phase,
}

/// One match's state machine, sufficient for all pure ritual operations.
///
/// `phase` is authoritative mutated state, not a value re-derived on read:
/// force-advance and undo may legitimately leave it diverged from the
/// count-based formula, and every operation advances it explicitly.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchState {
    /// Transition graph / quota selector.
    pub mode: Mode,
    /// Current legal-action gate.
    pub phase: Phase,
    /// Struck stage ids, insertion order = ban order, no duplicates.
    pub bans: Vec<StageId>,
    /// The single selected stage, at most one per instance lifetime.
    pub pick: Option<StageId>,
    /// LIFO undo stack; never read except by undo.
    pub history: Vec<HistoryEntry>,
}

impl MatchState {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            phase: Phase::WinnerBan,
            bans: Vec::new(),
            pick: None,
            history: Vec::new(),
        }
    }

    pub fn has_banned(&self, stage_id: &str) -> bool {
        self.bans.iter().any(|banned| banned == stage_id)
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new(Mode::FirstGame)
    }
}
