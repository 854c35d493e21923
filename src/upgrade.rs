//! Legal upgrade targets per orchestrator family.
//!
//! The semantic family advances at most one minor version per upgrade step;
//! the DCOS family has a single hardcoded patch bump; the remaining families
//! have no upgrade concept. The single-minor-step rule is a pure function
//! over parsed version lists so it can be exercised without a registry.

use crate::catalog::identity::Orchestrator;
use crate::catalog::registry::VersionRegistry;
use crate::error::ResolveError;
use crate::versions::{min_version, versions_between, versions_gt};
use semver::{Prerelease, Version};

// The one DCOS release with a certified successor. This is an explicit
// override list, not an algorithm over ranges: any version absent from it
// has no upgrade path.
const DCOS_1_11_0: &str = "1.11.0";
const DCOS_1_11_2: &str = "1.11.2";

/// Compute the ordered upgrade targets for `version` within its family.
///
/// Fails with [`ResolveError::MalformedVersion`] when a semantic-family
/// version does not parse. The result never contains `version` itself and,
/// for the semantic family, is ascending by semver order.
pub fn upgrade_targets(
    registry: &VersionRegistry,
    orchestrator: Orchestrator,
    version: &str,
    windows: bool,
) -> Result<Vec<String>, ResolveError> {
    match orchestrator {
        Orchestrator::Kubernetes => {
            let current = Version::parse(version).map_err(|source| {
                ResolveError::MalformedVersion {
                    version: version.to_string(),
                    source,
                }
            })?;
            let supported = registry.parsed_versions(orchestrator, windows);
            let targets = single_minor_step_targets(&current, supported)?;
            Ok(targets.iter().map(Version::to_string).collect())
        }
        Orchestrator::Dcos => Ok(dcos_upgrades(version)),
        Orchestrator::Swarm | Orchestrator::SwarmMode => Ok(Vec::new()),
    }
}

/// Supported versions reachable from `current` in one upgrade step.
///
/// The exclusive upper boundary is a synthetic `-alpha.0` marker one minor
/// line beyond the furthest minor a single step may reach. When the nearest
/// greater version already jumps more than one minor ahead (a deprecated
/// minor line in the catalog), the boundary anchors to that nearest version's
/// minor line instead of the current version's.
pub fn single_minor_step_targets(
    current: &Version,
    supported: &[Version],
) -> Result<Vec<Version>, ResolveError> {
    let greater = versions_gt(supported, current, false);
    let Some(nearest) = min_version(&greater) else {
        // Already at the newest supported version; upgrades are terminal.
        return Ok(Vec::new());
    };

    let boundary = if current.major == nearest.major && current.minor + 1 < nearest.minor {
        alpha_boundary(nearest.major, nearest.minor + 1)?
    } else {
        alpha_boundary(current.major, current.minor + 2)?
    };

    Ok(versions_between(supported, current, &boundary, false))
}

/// The hardcoded DCOS successor table.
fn dcos_upgrades(version: &str) -> Vec<String> {
    if version == DCOS_1_11_0 {
        vec![DCOS_1_11_2.to_string()]
    } else {
        Vec::new()
    }
}

/// Synthetic pre-release boundary `major.minor.0-alpha.0`.
fn alpha_boundary(major: u64, minor: u64) -> Result<Version, ResolveError> {
    let mut boundary = Version::new(major, minor, 0);
    boundary.pre =
        Prerelease::new("alpha.0").map_err(|source| ResolveError::MalformedVersion {
            version: format!("{major}.{minor}.0-alpha.0"),
            source,
        })?;
    Ok(boundary)
}
