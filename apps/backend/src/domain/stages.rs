//! Stage catalog: the immutable, ordered list of selectable stages.

use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// A selectable stage as shown to the controller and overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stage {
    /// Unique, stable identifier used in every action and broadcast.
    pub id: String,
    pub name: String,
    pub short_name: String,
}

/// Rejected catalog input. Only ever surfaced at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogError(pub String);

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "invalid stage catalog: {}", self.0)
    }
}

impl Error for CatalogError {}

/// Ordered stage list with id lookup. Built once at startup, immutable after.
#[derive(Debug, Clone)]
pub struct StageCatalog {
    stages: Vec<Stage>,
    ids: HashSet<String>,
}

impl StageCatalog {
    pub fn new(stages: Vec<Stage>) -> Result<Self, CatalogError> {
        if stages.is_empty() {
            return Err(CatalogError("stage list is empty".to_string()));
        }
        let mut ids = HashSet::with_capacity(stages.len());
        for stage in &stages {
            if stage.id.is_empty() {
                return Err(CatalogError(format!("stage {:?} has an empty id", stage.name)));
            }
            if !ids.insert(stage.id.clone()) {
                return Err(CatalogError(format!("duplicate stage id {:?}", stage.id)));
            }
        }
        Ok(Self { stages, ids })
    }

    /// Parse a JSON array of stages, preserving order.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let stages: Vec<Stage> =
            serde_json::from_str(raw).map_err(|err| CatalogError(err.to_string()))?;
        Self::new(stages)
    }

    pub fn contains(&self, stage_id: &str) -> bool {
        self.ids.contains(stage_id)
    }

    pub fn get(&self, stage_id: &str) -> Option<&Stage> {
        self.stages.iter().find(|stage| stage.id == stage_id)
    }

    /// All stages, in catalog order.
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}
