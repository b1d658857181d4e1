use std::sync::Arc;

use crate::domain::stages::StageCatalog;
use crate::state::match_store::MatchStore;
use crate::ws::hub::WsRegistry;

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    /// Immutable stage catalog, loaded once at startup.
    pub catalog: Arc<StageCatalog>,
    /// Per-match state machines, created lazily.
    pub matches: Arc<MatchStore>,
    /// Match-group registry for WebSocket broadcasts.
    registry: Arc<WsRegistry>,
}

impl AppState {
    /// Create a new AppState around the loaded catalog
    pub fn new(catalog: StageCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
            matches: Arc::new(MatchStore::new()),
            registry: Arc::new(WsRegistry::new()),
        }
    }

    pub fn registry(&self) -> Arc<WsRegistry> {
        self.registry.clone()
    }

    /// Create a test AppState with the shared domain test catalog
    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self::new(crate::domain::test_catalog::catalog())
    }
}
