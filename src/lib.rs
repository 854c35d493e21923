//! Orchestrator version and upgrade-path resolution.
//!
//! The crate answers three questions for cluster lifecycle tooling before it
//! provisions or upgrades anything: is this orchestrator/version pair valid,
//! which version is the family default, and which versions are legal upgrade
//! targets from here. Everything is a pure function over an immutable
//! [`VersionRegistry`] built once at startup; no call performs I/O or keeps
//! state between requests, so resolutions can run concurrently without
//! coordination.
//!
//! The public surface mirrors the upstream API: [`profile_list`] for the
//! one-per-version listing (optionally scoped to a family or a concrete
//! version) and [`exact_profile`] for single-version upgrade queries. The
//! `wire` module maps internal records onto the versioned JSON schema.

pub mod catalog;
pub mod error;
pub mod profile;
pub mod upgrade;
pub mod versions;
pub mod wire;

pub use catalog::{
    ALL_ORCHESTRATORS, CatalogFile, FamilyEntry, Orchestrator, VersionRegistry, WindowsEntry,
    load_catalog_from_path,
};
pub use error::ResolveError;
pub use profile::{
    OrchestratorProfile, OrchestratorVersionProfile, exact_profile, profile_list,
    resolve_orchestrator,
};
pub use upgrade::{single_minor_step_targets, upgrade_targets};
pub use versions::{VersionScheme, min_version, versions_between, versions_gt};
pub use wire::{WireProfile, WireVersionProfile, WireVersionProfileList, to_wire_list};
