//! Domain-level error type used across the ritual handlers.
//!
//! This error type is HTTP- and transport-agnostic. Route handlers should
//! return `Result<T, crate::error::AppError>` and convert from `DomainError`
//! using the provided `From<DomainError> for AppError` implementation; the
//! WebSocket dispatcher sends `DomainError::code()` to the requester.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::errors::error_code::ErrorCode;

/// Validation failures for ritual actions.
///
/// All variants are local, recoverable, and caller-facing; none are fatal to
/// the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainError {
    InvalidStage,
    AlreadyBanned,
    StageBanned,
    AlreadyPicked,
    PhaseMismatch,
    QuotaExhausted,
    NothingToUndo,
    InvalidMode,
    CannotAdvance,
    UnknownAction,
}

impl DomainError {
    /// Canonical wire code for this error.
    pub const fn code(&self) -> ErrorCode {
        match self {
            DomainError::InvalidStage => ErrorCode::InvalidStage,
            DomainError::AlreadyBanned => ErrorCode::AlreadyBanned,
            DomainError::StageBanned => ErrorCode::StageBanned,
            DomainError::AlreadyPicked => ErrorCode::AlreadyPicked,
            DomainError::PhaseMismatch => ErrorCode::PhaseMismatch,
            DomainError::QuotaExhausted => ErrorCode::QuotaExhausted,
            DomainError::NothingToUndo => ErrorCode::NothingToUndo,
            DomainError::InvalidMode => ErrorCode::InvalidMode,
            DomainError::CannotAdvance => ErrorCode::CannotAdvance,
            DomainError::UnknownAction => ErrorCode::UnknownAction,
        }
    }
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::InvalidStage => write!(f, "stage not in catalog"),
            DomainError::AlreadyBanned => write!(f, "stage already banned"),
            DomainError::StageBanned => write!(f, "stage is banned"),
            DomainError::AlreadyPicked => write!(f, "a stage was already picked"),
            DomainError::PhaseMismatch => write!(f, "phase mismatch"),
            DomainError::QuotaExhausted => write!(f, "ban quota exhausted"),
            DomainError::NothingToUndo => write!(f, "nothing to undo"),
            DomainError::InvalidMode => write!(f, "invalid mode"),
            DomainError::CannotAdvance => write!(f, "no next phase to force"),
            DomainError::UnknownAction => write!(f, "unknown action"),
        }
    }
}

impl Error for DomainError {}
