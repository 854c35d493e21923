use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Orchestrator family recognized by the resolver.
///
/// The set is closed: dispatch over families is an exhaustive `match`, so a
/// new family fails to compile until every resolution path handles it.
/// Unknown names are rejected at the request boundary rather than carried
/// through as an opaque variant.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Orchestrator {
    Kubernetes,
    Dcos,
    Swarm,
    SwarmMode,
}

/// All known families, in the fixed order used for aggregate listings.
pub const ALL_ORCHESTRATORS: [Orchestrator; 4] = [
    Orchestrator::Kubernetes,
    Orchestrator::Dcos,
    Orchestrator::Swarm,
    Orchestrator::SwarmMode,
];

impl Orchestrator {
    /// Canonical name as it appears in catalogs and API payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            Orchestrator::Kubernetes => "Kubernetes",
            Orchestrator::Dcos => "DCOS",
            Orchestrator::Swarm => "Swarm",
            Orchestrator::SwarmMode => "SwarmMode",
        }
    }

    /// Case-insensitive lookup of a family by name.
    ///
    /// Returns `None` for the empty string as well as unrecognized names;
    /// callers decide whether "no family" means "all families" or an error.
    pub fn parse(name: &str) -> Option<Self> {
        for orch in ALL_ORCHESTRATORS {
            if name.eq_ignore_ascii_case(orch.as_str()) {
                return Some(orch);
            }
        }
        None
    }

    /// Whether exact single-version lookups (and therefore upgrade queries)
    /// are defined for this family.
    pub fn supports_upgrades(&self) -> bool {
        matches!(self, Orchestrator::Kubernetes | Orchestrator::Dcos)
    }
}

impl fmt::Display for Orchestrator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Orchestrator {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Orchestrator {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Orchestrator::parse(&value)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown orchestrator '{value}'")))
    }
}
