//! Failure kinds surfaced by resolution calls.
//!
//! These are returned immediately with no retry and no partial result;
//! callers decide whether to retry with corrected input. Catalog construction
//! failures live on the `anyhow` side (see `catalog::registry`) because a
//! malformed catalog prevents serving any request at all.

use crate::catalog::identity::Orchestrator;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolveError {
    /// A version was supplied without naming an orchestrator family.
    #[error("must specify an orchestrator for version '{version}'")]
    InvalidRequest { version: String },

    /// The requested name matches no known family.
    #[error("unsupported orchestrator '{name}'")]
    UnsupportedOrchestrator { name: String },

    /// The requested version is not in the family's supported set.
    #[error("{orchestrator} version {version} is not supported")]
    UnsupportedVersion {
        orchestrator: Orchestrator,
        version: String,
    },

    /// Exact lookup requested with no version specified.
    #[error("missing orchestrator version")]
    MissingVersion,

    /// Upgrade query against a family with no upgrade semantics.
    #[error("upgrade operation is not supported for '{orchestrator}'")]
    UnsupportedUpgradeOperation { orchestrator: Orchestrator },

    /// Internal consistency check: a concrete-version request produced other
    /// than exactly one profile.
    #[error("ambiguous versions for {orchestrator} {version}: expected one profile, built {count}")]
    AmbiguousResult {
        orchestrator: Orchestrator,
        version: String,
        count: usize,
    },

    /// A semantic-family version string failed to parse.
    #[error("malformed version '{version}'")]
    MalformedVersion {
        version: String,
        #[source]
        source: semver::Error,
    },
}
