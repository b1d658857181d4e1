//! Error codes for the Strikeboard backend API.
//!
//! This module defines all error codes used throughout the application.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings that
//! appear on the wire, both in WebSocket action results and in HTTP
//! problem+json responses.

use core::fmt;

/// Centralized error codes for the Strikeboard backend API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Ritual validation
    /// Stage id not present in the catalog
    InvalidStage,
    /// Stage was already struck
    AlreadyBanned,
    /// Stage is struck and cannot be picked
    StageBanned,
    /// A stage was already picked this ritual
    AlreadyPicked,
    /// Action is not legal in the current phase
    PhaseMismatch,
    /// Ban quota for the current phase is spent
    QuotaExhausted,
    /// Undo requested with an empty history
    NothingToUndo,
    /// Unrecognized mode value
    InvalidMode,
    /// Current phase has no successor to force
    CannotAdvance,
    /// Unrecognized action type
    UnknownAction,

    // Request validation
    /// General bad request error
    BadRequest,

    // Resource Not Found
    /// General not found error
    NotFound,

    // System Errors
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    ///
    /// This is the exact string that appears on the wire.
    pub const fn as_str(&self) -> &'static str {
        match self {
            // Ritual validation
            Self::InvalidStage => "INVALID_STAGE",
            Self::AlreadyBanned => "ALREADY_BANNED",
            Self::StageBanned => "STAGE_BANNED",
            Self::AlreadyPicked => "ALREADY_PICKED",
            Self::PhaseMismatch => "PHASE_MISMATCH",
            Self::QuotaExhausted => "QUOTA_EXHAUSTED",
            Self::NothingToUndo => "NOTHING_TO_UNDO",
            Self::InvalidMode => "INVALID_MODE",
            Self::CannotAdvance => "CANNOT_ADVANCE",
            Self::UnknownAction => "UNKNOWN_ACTION",

            // Request validation
            Self::BadRequest => "BAD_REQUEST",

            // Resource Not Found
            Self::NotFound => "NOT_FOUND",

            // System Errors
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
