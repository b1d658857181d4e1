//! Stage catalog configuration.
//!
//! The binary ships with an embedded default list; deployments can replace
//! it by pointing `STAGE_FILE` at a JSON file of the same shape. The catalog
//! is loaded exactly once at startup and never reloaded.

use std::env;
use std::fs;
use std::path::Path;

use crate::domain::stages::StageCatalog;
use crate::error::AppError;

/// Embedded default stage list (current competitive rotation).
const DEFAULT_STAGES: &str = include_str!("../../assets/stages.json");

/// Load the catalog from `STAGE_FILE` when set, otherwise from the embedded
/// default list.
pub fn load_catalog() -> Result<StageCatalog, AppError> {
    match env::var("STAGE_FILE") {
        Ok(path) if !path.trim().is_empty() => load_from_file(Path::new(&path)),
        _ => default_catalog(),
    }
}

/// The embedded default list, parsed.
pub fn default_catalog() -> Result<StageCatalog, AppError> {
    StageCatalog::from_json(DEFAULT_STAGES)
        .map_err(|err| AppError::config(format!("Invalid embedded stage list: {err}")))
}

fn load_from_file(path: &Path) -> Result<StageCatalog, AppError> {
    let raw = fs::read_to_string(path).map_err(|err| {
        AppError::config(format!("Unable to read STAGE_FILE {}: {err}", path.display()))
    })?;
    StageCatalog::from_json(&raw).map_err(|err| {
        AppError::config(format!("Invalid stage list in {}: {err}", path.display()))
    })
}
