use serde::{Deserialize, Serialize};

use crate::domain::snapshot::MatchSnapshot;
use crate::errors::ErrorCode;

/// Inbound frame type that subscribes the connection to a match group.
pub const JOIN_KIND: &str = "JOIN";

/// Wire-level action kinds accepted from controllers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Ban,
    Pick,
    Undo,
    Reset,
    SetMode,
    ForceNextPhase,
}

impl ActionKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Ban => "BAN",
            ActionKind::Pick => "PICK",
            ActionKind::Undo => "UNDO",
            ActionKind::Reset => "RESET",
            ActionKind::SetMode => "SET_MODE",
            ActionKind::ForceNextPhase => "FORCE_NEXT_PHASE",
        }
    }

    /// Parse a wire-level action type; `None` for anything unrecognized so
    /// the dispatcher can answer UNKNOWN_ACTION instead of dropping the
    /// frame at the parser.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "BAN" => Some(ActionKind::Ban),
            "PICK" => Some(ActionKind::Pick),
            "UNDO" => Some(ActionKind::Undo),
            "RESET" => Some(ActionKind::Reset),
            "SET_MODE" => Some(ActionKind::SetMode),
            "FORCE_NEXT_PHASE" => Some(ActionKind::ForceNextPhase),
            _ => None,
        }
    }
}

/// Raw inbound frame. `type` stays a plain string here for the same reason.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRequest {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub match_id: Option<String>,
    #[serde(default)]
    pub stage_id: Option<String>,
    #[serde(default)]
    pub mode: Option<String>,
}

/// Per-request outcome, delivered to the requester only. `type` echoes the
/// request's type.
#[derive(Debug, Clone, Serialize)]
pub struct ActionResult {
    #[serde(rename = "type")]
    pub kind: String,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ActionResult {
    pub fn ok(kind: &str) -> Self {
        Self {
            kind: kind.to_string(),
            ok: true,
            error: None,
        }
    }

    pub fn err(kind: &str, code: ErrorCode) -> Self {
        Self {
            kind: kind.to_string(),
            ok: false,
            error: Some(code.as_str().to_string()),
        }
    }
}

/// Discrete ban/pick notification, broadcast separately from the state so
/// observers can treat it as a transient cue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageEvent {
    pub stage_id: String,
    /// Unix milliseconds.
    pub timestamp: i64,
}

/// Frames fanned out to a match group (plus the transport error frame).
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum ServerMsg {
    /// Authoritative derived view of the match.
    #[serde(rename = "STATE")]
    State(MatchSnapshot),

    /// A stage was just struck.
    #[serde(rename = "BAN")]
    Ban(StageEvent),

    /// A stage was just selected.
    #[serde(rename = "PICK")]
    Pick(StageEvent),

    /// Transport-level failure; the session closes after sending this.
    #[serde(rename = "ERROR")]
    Error { code: String, message: String },
}
