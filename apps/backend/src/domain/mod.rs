//! Domain layer: pure ritual logic, catalog types, and the derived view.

pub mod actions;
pub mod rules;
pub mod snapshot;
pub mod stages;
pub mod state;

#[cfg(test)]
mod tests_actions;
#[cfg(test)]
mod tests_snapshot;

// Re-exports for ergonomics
pub use snapshot::{snapshot, MatchSnapshot};
pub use stages::{Stage, StageCatalog};
pub use state::{MatchState, Mode, Phase, StageId};
