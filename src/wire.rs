//! Public JSON shape for version profiles.
//!
//! This is the conversion boundary between internal records and the
//! versioned API schema consumed by lifecycle tooling: camelCase field
//! names, `default` omitted when false, upgrades flattened to bare
//! orchestrator/version pairs. The mapping is lossless in both directions
//! for every field the internal records carry.

use crate::catalog::identity::Orchestrator;
use crate::profile::{OrchestratorProfile, OrchestratorVersionProfile};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
/// Wire form of one orchestrator/version pair.
pub struct WireProfile {
    #[serde(rename = "orchestratorType")]
    pub orchestrator_type: Orchestrator,
    #[serde(rename = "orchestratorVersion")]
    pub orchestrator_version: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
/// Wire form of a version profile with default flag and upgrade targets.
pub struct WireVersionProfile {
    #[serde(flatten)]
    pub profile: WireProfile,
    #[serde(default, skip_serializing_if = "is_false")]
    pub default: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub upgrades: Vec<WireProfile>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
/// Top-level list payload returned by the public endpoints.
pub struct WireVersionProfileList {
    pub orchestrators: Vec<WireVersionProfile>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl From<&OrchestratorProfile> for WireProfile {
    fn from(profile: &OrchestratorProfile) -> Self {
        Self {
            orchestrator_type: profile.orchestrator,
            orchestrator_version: profile.version.clone(),
        }
    }
}

impl From<&OrchestratorVersionProfile> for WireVersionProfile {
    fn from(profile: &OrchestratorVersionProfile) -> Self {
        Self {
            profile: WireProfile::from(&profile.profile),
            default: profile.default,
            upgrades: profile.upgrades.iter().map(WireProfile::from).collect(),
        }
    }
}

impl From<WireProfile> for OrchestratorProfile {
    fn from(wire: WireProfile) -> Self {
        OrchestratorProfile::new(wire.orchestrator_type, wire.orchestrator_version)
    }
}

impl From<WireVersionProfile> for OrchestratorVersionProfile {
    fn from(wire: WireVersionProfile) -> Self {
        OrchestratorVersionProfile {
            profile: wire.profile.into(),
            default: wire.default,
            upgrades: wire.upgrades.into_iter().map(Into::into).collect(),
        }
    }
}

/// Convert a batch of internal records into the list payload.
pub fn to_wire_list(profiles: &[OrchestratorVersionProfile]) -> WireVersionProfileList {
    WireVersionProfileList {
        orchestrators: profiles.iter().map(WireVersionProfile::from).collect(),
    }
}
