//! Get-or-create storage for per-match state machines.

use dashmap::DashMap;

use crate::domain::state::MatchState;

/// Fallback identifier when a request names no match.
pub const DEFAULT_MATCH_ID: &str = "default";

/// Pure mapping from match identifier to state machine.
///
/// Entries are created lazily on first reference and live for the process
/// lifetime; matches are fully independent of each other.
#[derive(Debug, Default)]
pub struct MatchStore {
    matches: DashMap<String, MatchState>,
}

impl MatchStore {
    pub fn new() -> Self {
        Self {
            matches: DashMap::new(),
        }
    }

    /// Run `f` with exclusive access to the match's state machine, creating a
    /// fresh instance on first reference.
    ///
    /// The entry guard is held for the whole closure, so actions on one match
    /// never interleave mid-mutation. Keep broadcasting outside the closure.
    pub fn with_match<R>(&self, match_id: &str, f: impl FnOnce(&mut MatchState) -> R) -> R {
        let mut entry = self.matches.entry(match_id.to_string()).or_default();
        f(entry.value_mut())
    }

    /// Number of matches referenced so far.
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}
