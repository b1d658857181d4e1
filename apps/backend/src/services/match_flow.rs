//! Action dispatcher.
//!
//! Resolves the target match, routes wire-level actions to the domain
//! handlers, and assembles the requester's result plus the frames to fan out
//! to the match group. Transport stays out of this module; the WebSocket
//! session and the HTTP routes both drive it.

use time::OffsetDateTime;

use crate::domain::actions;
use crate::domain::snapshot::{snapshot, MatchSnapshot};
use crate::domain::stages::StageCatalog;
use crate::domain::state::MatchState;
use crate::errors::domain::DomainError;
use crate::state::app_state::AppState;
use crate::state::match_store::DEFAULT_MATCH_ID;
use crate::ws::protocol::{ActionKind, ActionResult, ClientRequest, ServerMsg, StageEvent};

/// Frames produced by a successful action, addressed to a match group.
#[derive(Debug, Clone)]
pub struct BroadcastBundle {
    pub match_id: String,
    /// Fresh derived view for every observer.
    pub state: ServerMsg,
    /// Discrete BAN/PICK notification, sent after the state.
    pub event: Option<ServerMsg>,
}

/// What one dispatched action produced.
#[derive(Debug, Clone)]
pub struct DispatchOutcome {
    /// Answer for the requester, success or failure.
    pub result: ActionResult,
    /// Present only when the action succeeded; failures broadcast nothing.
    pub broadcast: Option<BroadcastBundle>,
}

/// Route one action request. Never panics and never returns an error:
/// failures are encoded in the result and leave the match untouched.
pub fn dispatch(app_state: &AppState, req: &ClientRequest) -> DispatchOutcome {
    let match_id = req
        .match_id
        .clone()
        .unwrap_or_else(|| DEFAULT_MATCH_ID.to_string());

    let Some(kind) = ActionKind::parse(&req.kind) else {
        return DispatchOutcome {
            result: ActionResult::err(&req.kind, DomainError::UnknownAction.code()),
            broadcast: None,
        };
    };

    let catalog = &app_state.catalog;
    let applied = app_state.matches.with_match(&match_id, |state| {
        let event = apply(state, catalog, kind, req)?;
        Ok::<_, DomainError>((snapshot(catalog, state, &match_id), event))
    });

    match applied {
        Ok((snap, event)) => DispatchOutcome {
            result: ActionResult::ok(kind.as_str()),
            broadcast: Some(BroadcastBundle {
                match_id,
                state: ServerMsg::State(snap),
                event,
            }),
        },
        Err(err) => DispatchOutcome {
            result: ActionResult::err(kind.as_str(), err.code()),
            broadcast: None,
        },
    }
}

/// Read-only derived view of a match; like any other reference this lazily
/// creates the machine on first use.
pub fn current_snapshot(app_state: &AppState, match_id: &str) -> MatchSnapshot {
    let catalog = &app_state.catalog;
    app_state
        .matches
        .with_match(match_id, |state| snapshot(catalog, state, match_id))
}

/// Apply one action to the exclusively held state machine; Ban/Pick yield
/// their discrete event frame.
fn apply(
    state: &mut MatchState,
    catalog: &StageCatalog,
    kind: ActionKind,
    req: &ClientRequest,
) -> Result<Option<ServerMsg>, DomainError> {
    match kind {
        ActionKind::Ban => {
            let stage_id = req.stage_id.as_deref().unwrap_or_default();
            actions::ban(state, catalog, stage_id)?;
            Ok(Some(ServerMsg::Ban(stage_event(stage_id))))
        }
        ActionKind::Pick => {
            let stage_id = req.stage_id.as_deref().unwrap_or_default();
            actions::pick(state, catalog, stage_id)?;
            Ok(Some(ServerMsg::Pick(stage_event(stage_id))))
        }
        ActionKind::Undo => {
            actions::undo(state)?;
            Ok(None)
        }
        ActionKind::Reset => {
            actions::reset(state);
            Ok(None)
        }
        ActionKind::SetMode => {
            actions::set_mode(state, req.mode.as_deref().unwrap_or_default())?;
            Ok(None)
        }
        ActionKind::ForceNextPhase => {
            actions::force_advance(state)?;
            Ok(None)
        }
    }
}

fn stage_event(stage_id: &str) -> StageEvent {
    StageEvent {
        stage_id: stage_id.to_string(),
        timestamp: now_millis(),
    }
}

fn now_millis() -> i64 {
    (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64
}
