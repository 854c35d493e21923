//! Deserializable representation of an orchestrator version catalog file.
//!
//! The types mirror `schema/orchestrator_catalog.schema.json` so tooling can
//! swap in a synthetic catalog without ad-hoc JSON handling. Use
//! `VersionRegistry` for validation and resolution; use these structs when
//! the raw catalog surface is required.

use crate::catalog::identity::Orchestrator;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Serialize, Deserialize)]
/// Full version catalog as stored on disk.
pub struct CatalogFile {
    pub schema_version: String,
    pub orchestrators: BTreeMap<Orchestrator, FamilyEntry>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
/// Supported versions and designated default for one orchestrator family.
pub struct FamilyEntry {
    pub versions: Vec<String>,
    pub default: String,
    /// Narrowed version set used when Windows node support is required.
    /// Only meaningful for the semantic-version family; absent elsewhere.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub windows: Option<WindowsEntry>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
/// Windows-capable subset of a family's versions, with its own default.
pub struct WindowsEntry {
    pub versions: Vec<String>,
    pub default: String,
}

/// Read and parse a catalog file from disk without additional validation.
pub fn load_catalog_from_path(path: &Path) -> Result<CatalogFile> {
    let data = fs::read_to_string(path)?;
    let catalog: CatalogFile = serde_json::from_str(&data)?;
    Ok(catalog)
}
