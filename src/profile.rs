//! Orchestrator version profiles and the request-level resolution entry
//! points.
//!
//! A profile names one orchestrator/version pair; a version profile adds the
//! default flag and the legal upgrade targets. Records are built fresh per
//! request from an immutable [`VersionRegistry`] and owned by the caller, so
//! concurrent resolutions share nothing mutable.

use crate::catalog::identity::{ALL_ORCHESTRATORS, Orchestrator};
use crate::catalog::registry::VersionRegistry;
use crate::error::ResolveError;
use crate::upgrade::upgrade_targets;

/// One orchestrator/version pair.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OrchestratorProfile {
    pub orchestrator: Orchestrator,
    pub version: String,
}

impl OrchestratorProfile {
    pub fn new(orchestrator: Orchestrator, version: impl Into<String>) -> Self {
        Self {
            orchestrator,
            version: version.into(),
        }
    }
}

/// A supported version together with its default flag and upgrade targets.
///
/// Invariants upheld by construction: `upgrades` never contains the profile's
/// own version, every entry belongs to the same family, and each is strictly
/// greater than the profile's version under the family's ordering.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OrchestratorVersionProfile {
    pub profile: OrchestratorProfile,
    pub default: bool,
    pub upgrades: Vec<OrchestratorProfile>,
}

/// Validate a caller-supplied orchestrator name.
///
/// Matching is case-insensitive against the closed family set. `Ok(None)`
/// means "resolve for all families" and is only reachable when both `name`
/// and `version` are empty; a version without a family is an invalid request.
pub fn resolve_orchestrator(
    name: &str,
    version: &str,
) -> Result<Option<Orchestrator>, ResolveError> {
    if name.is_empty() {
        if !version.is_empty() {
            return Err(ResolveError::InvalidRequest {
                version: version.to_string(),
            });
        }
        return Ok(None);
    }
    match Orchestrator::parse(name) {
        Some(orch) => Ok(Some(orch)),
        None => Err(ResolveError::UnsupportedOrchestrator {
            name: name.to_string(),
        }),
    }
}

/// Build version profiles for an (optionally) specified orchestrator and
/// version.
///
/// With an empty name, every family is listed independently with the Windows
/// flag cleared; cross-family order follows the fixed family declaration
/// order but callers should not rely on it. With a concrete family, an empty
/// version lists the whole supported set and a concrete version yields
/// exactly one profile or [`ResolveError::UnsupportedVersion`].
pub fn profile_list(
    registry: &VersionRegistry,
    orchestrator: &str,
    version: &str,
    windows: bool,
) -> Result<Vec<OrchestratorVersionProfile>, ResolveError> {
    match resolve_orchestrator(orchestrator, version)? {
        None => {
            let mut profiles = Vec::new();
            for orch in ALL_ORCHESTRATORS {
                profiles.extend(family_profiles(registry, orch, "", false)?);
            }
            Ok(profiles)
        }
        Some(orch) => family_profiles(registry, orch, version, windows),
    }
}

/// Look up the single version profile for a concrete orchestrator/version.
///
/// Only the families with upgrade semantics accept exact lookups; the
/// one-element check is an internal consistency guard on the builder.
pub fn exact_profile(
    registry: &VersionRegistry,
    profile: &OrchestratorProfile,
    windows: bool,
) -> Result<OrchestratorVersionProfile, ResolveError> {
    if profile.version.is_empty() {
        return Err(ResolveError::MissingVersion);
    }
    if !profile.orchestrator.supports_upgrades() {
        return Err(ResolveError::UnsupportedUpgradeOperation {
            orchestrator: profile.orchestrator,
        });
    }

    let mut profiles = family_profiles(registry, profile.orchestrator, &profile.version, windows)?;
    if profiles.len() != 1 {
        return Err(ResolveError::AmbiguousResult {
            orchestrator: profile.orchestrator,
            version: profile.version.clone(),
            count: profiles.len(),
        });
    }
    Ok(profiles.remove(0))
}

/// Build the profile list for one family.
fn family_profiles(
    registry: &VersionRegistry,
    orchestrator: Orchestrator,
    version: &str,
    windows: bool,
) -> Result<Vec<OrchestratorVersionProfile>, ResolveError> {
    if version.is_empty() {
        let versions: Vec<String> = registry.supported_versions(orchestrator, windows).to_vec();
        let mut profiles = Vec::with_capacity(versions.len());
        for ver in versions {
            profiles.push(build_profile(registry, orchestrator, &ver, windows)?);
        }
        return Ok(profiles);
    }

    if !registry.is_supported(orchestrator, version, windows) {
        return Err(ResolveError::UnsupportedVersion {
            orchestrator,
            version: version.to_string(),
        });
    }
    Ok(vec![build_profile(registry, orchestrator, version, windows)?])
}

fn build_profile(
    registry: &VersionRegistry,
    orchestrator: Orchestrator,
    version: &str,
    windows: bool,
) -> Result<OrchestratorVersionProfile, ResolveError> {
    let upgrades = upgrade_targets(registry, orchestrator, version, windows)?
        .into_iter()
        .map(|ver| OrchestratorProfile::new(orchestrator, ver))
        .collect();
    Ok(OrchestratorVersionProfile {
        profile: OrchestratorProfile::new(orchestrator, version),
        default: version == registry.default_version(orchestrator, windows),
        upgrades,
    })
}
