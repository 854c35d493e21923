//! Orchestrator version catalog wiring.
//!
//! This module owns the family identifiers, the on-disk catalog shape, and
//! the validated registry built from either. Resolution code takes a
//! `VersionRegistry` by reference; nothing here mutates after construction.

pub mod identity;
pub mod model;
pub mod registry;

pub use identity::{ALL_ORCHESTRATORS, Orchestrator};
pub use model::{CatalogFile, FamilyEntry, WindowsEntry, load_catalog_from_path};
pub use registry::VersionRegistry;
