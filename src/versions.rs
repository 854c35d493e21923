//! Version ordering helpers shared by the catalog and the upgrade calculator.
//!
//! Two comparison strategies exist: the semantic scheme parses versions as
//! semver and orders them by the semver total order (pre-releases included),
//! while the opaque scheme recognizes versions only by exact token match.
//! Keeping the choice explicit per family lets the upgrade boundary logic be
//! tested against plain version lists, independent of any one family's
//! quirks.

use crate::catalog::identity::Orchestrator;
use semver::Version;

/// How a family's version strings are compared.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VersionScheme {
    /// major.minor.patch[-prerelease] with the semver total order.
    Semantic,
    /// Opaque tokens; equality is the only defined relation.
    Opaque,
}

impl Orchestrator {
    /// The comparison strategy for this family's version strings.
    pub fn version_scheme(&self) -> VersionScheme {
        match self {
            Orchestrator::Kubernetes => VersionScheme::Semantic,
            Orchestrator::Dcos | Orchestrator::Swarm | Orchestrator::SwarmMode => {
                VersionScheme::Opaque
            }
        }
    }
}

/// Versions from `versions` greater than `floor`, ascending.
///
/// With `inclusive` set, `floor` itself qualifies. Pre-release versions are
/// always considered; the caller's catalog decides whether any are present.
pub fn versions_gt(versions: &[Version], floor: &Version, inclusive: bool) -> Vec<Version> {
    let mut out: Vec<Version> = versions
        .iter()
        .filter(|v| if inclusive { *v >= floor } else { *v > floor })
        .cloned()
        .collect();
    out.sort();
    out
}

/// The smallest version in `versions`, or `None` when the list is empty.
pub fn min_version(versions: &[Version]) -> Option<&Version> {
    versions.iter().min()
}

/// Versions from `versions` within the `floor..ceiling` window, ascending.
///
/// With `inclusive` set the bounds themselves qualify; otherwise both bounds
/// are exclusive.
pub fn versions_between(
    versions: &[Version],
    floor: &Version,
    ceiling: &Version,
    inclusive: bool,
) -> Vec<Version> {
    let mut out: Vec<Version> = versions
        .iter()
        .filter(|v| {
            if inclusive {
                *v >= floor && *v <= ceiling
            } else {
                *v > floor && *v < ceiling
            }
        })
        .cloned()
        .collect();
    out.sort();
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_all(raw: &[&str]) -> Vec<Version> {
        raw.iter().map(|s| Version::parse(s).unwrap()).collect()
    }

    #[test]
    fn gt_is_strict_unless_inclusive() {
        let versions = parse_all(&["1.9.9", "1.10.0", "1.10.5", "1.11.0"]);
        let floor = Version::parse("1.10.0").unwrap();

        let strict = versions_gt(&versions, &floor, false);
        assert_eq!(strict, parse_all(&["1.10.5", "1.11.0"]));

        let inclusive = versions_gt(&versions, &floor, true);
        assert_eq!(inclusive, parse_all(&["1.10.0", "1.10.5", "1.11.0"]));
    }

    #[test]
    fn gt_orders_prereleases_before_their_release() {
        let versions = parse_all(&["1.12.0-alpha.0", "1.12.0", "1.11.2"]);
        let floor = Version::parse("1.11.5").unwrap();
        let got = versions_gt(&versions, &floor, false);
        assert_eq!(got, parse_all(&["1.12.0-alpha.0", "1.12.0"]));
    }

    #[test]
    fn min_version_handles_empty_and_prerelease() {
        assert_eq!(min_version(&[]), None);
        let versions = parse_all(&["1.11.0", "1.10.5-beta.1", "1.10.5"]);
        assert_eq!(
            min_version(&versions),
            Some(&Version::parse("1.10.5-beta.1").unwrap())
        );
    }

    #[test]
    fn between_window_bounds() {
        let versions = parse_all(&["1.10.0", "1.10.5", "1.11.0", "1.11.2", "1.12.0-alpha.0"]);
        let floor = Version::parse("1.10.0").unwrap();
        let ceiling = Version::parse("1.12.0-alpha.0").unwrap();

        let exclusive = versions_between(&versions, &floor, &ceiling, false);
        assert_eq!(exclusive, parse_all(&["1.10.5", "1.11.0", "1.11.2"]));

        let inclusive = versions_between(&versions, &floor, &ceiling, true);
        assert_eq!(
            inclusive,
            parse_all(&["1.10.0", "1.10.5", "1.11.0", "1.11.2", "1.12.0-alpha.0"])
        );
    }

    #[test]
    fn scheme_per_family() {
        assert_eq!(
            Orchestrator::Kubernetes.version_scheme(),
            VersionScheme::Semantic
        );
        assert_eq!(Orchestrator::Dcos.version_scheme(), VersionScheme::Opaque);
        assert_eq!(Orchestrator::Swarm.version_scheme(), VersionScheme::Opaque);
        assert_eq!(
            Orchestrator::SwarmMode.version_scheme(),
            VersionScheme::Opaque
        );
    }
}
