//! Validated, immutable view of an orchestrator version catalog.
//!
//! The registry is built exactly once (from the builtin data or a catalog
//! file) and then passed by reference to every resolution call. It is
//! intentionally strict about duplicates, missing defaults, and unparseable
//! semantic versions so resolution code never has to re-check catalog
//! integrity mid-request.

use crate::catalog::identity::{ALL_ORCHESTRATORS, Orchestrator};
use crate::catalog::model::{CatalogFile, FamilyEntry, load_catalog_from_path};
use crate::versions::VersionScheme;
use anyhow::{Context, Result, anyhow, bail};
use semver::Version;
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

// Catalog files must declare this schema version; reject anything else rather
// than risk resolving against a shape this build does not understand.
const CATALOG_SCHEMA_VERSION: &str = "orchestrator_catalog_v1";

/// Immutable per-family version data with pre-parsed semantic versions.
#[derive(Debug)]
struct FamilyData {
    versions: Vec<String>,
    default: String,
    /// Ascending parsed versions; empty for opaque-scheme families.
    parsed: Vec<Version>,
    windows: Option<WindowsData>,
}

#[derive(Debug)]
struct WindowsData {
    versions: Vec<String>,
    default: String,
    parsed: Vec<Version>,
}

/// Validated version catalog covering every known orchestrator family.
#[derive(Debug)]
pub struct VersionRegistry {
    families: BTreeMap<Orchestrator, FamilyData>,
}

impl VersionRegistry {
    /// Load and validate a catalog file from disk.
    ///
    /// The file is checked against the shipped JSON Schema before
    /// deserialization, then structurally validated by [`Self::from_catalog`].
    pub fn load(path: &Path) -> Result<Self> {
        validate_against_schema(path)?;
        let catalog =
            load_catalog_from_path(path).with_context(|| format!("loading {}", path.display()))?;
        Self::from_catalog(&catalog)
    }

    /// Build a registry from an in-memory catalog.
    ///
    /// Enforces: declared schema version, every known family present, version
    /// lists non-empty and duplicate-free, the default a member of its list,
    /// and (for the semantic family) every version semver-parseable. Windows
    /// overrides are accepted only where the family's scheme is semantic.
    pub fn from_catalog(catalog: &CatalogFile) -> Result<Self> {
        if catalog.schema_version != CATALOG_SCHEMA_VERSION {
            bail!(
                "catalog schema_version '{}' not supported (expected '{}')",
                catalog.schema_version,
                CATALOG_SCHEMA_VERSION
            );
        }

        let mut families = BTreeMap::new();
        for orch in ALL_ORCHESTRATORS {
            let entry = catalog
                .orchestrators
                .get(&orch)
                .ok_or_else(|| anyhow!("catalog has no entry for {orch}"))?;
            families.insert(orch, validate_family(orch, entry)?);
        }
        Ok(Self { families })
    }

    /// The compiled-in catalog the original tooling ships with.
    pub fn builtin() -> Self {
        builtin_registry()
    }

    /// Supported version strings for a family, in catalog order.
    ///
    /// For the semantic family the order is ascending by semver; opaque
    /// families keep their declaration order. The `windows` flag narrows the
    /// set where a Windows override exists and is ignored elsewhere.
    pub fn supported_versions(&self, orchestrator: Orchestrator, windows: bool) -> &[String] {
        let data = self.family(orchestrator);
        match (&data.windows, windows) {
            (Some(w), true) => &w.versions,
            _ => &data.versions,
        }
    }

    /// The designated default version for a family.
    pub fn default_version(&self, orchestrator: Orchestrator, windows: bool) -> &str {
        let data = self.family(orchestrator);
        match (&data.windows, windows) {
            (Some(w), true) => &w.default,
            _ => &data.default,
        }
    }

    /// Exact-match membership test against the family's supported set.
    pub fn is_supported(&self, orchestrator: Orchestrator, version: &str, windows: bool) -> bool {
        self.supported_versions(orchestrator, windows)
            .iter()
            .any(|v| v == version)
    }

    /// Pre-parsed ascending versions for semantic-scheme families.
    ///
    /// Empty for opaque families, which have no defined order.
    pub fn parsed_versions(&self, orchestrator: Orchestrator, windows: bool) -> &[Version] {
        let data = self.family(orchestrator);
        match (&data.windows, windows) {
            (Some(w), true) => &w.parsed,
            _ => &data.parsed,
        }
    }

    fn family(&self, orchestrator: Orchestrator) -> &FamilyData {
        // from_catalog inserts every ALL_ORCHESTRATORS member, so the lookup
        // cannot miss; the empty sentinel keeps the accessors infallible.
        static EMPTY: FamilyData = FamilyData {
            versions: Vec::new(),
            default: String::new(),
            parsed: Vec::new(),
            windows: None,
        };
        self.families.get(&orchestrator).unwrap_or(&EMPTY)
    }
}

fn validate_family(orch: Orchestrator, entry: &FamilyEntry) -> Result<FamilyData> {
    let (versions, parsed) = validate_version_list(orch, &entry.versions, &entry.default)?;

    let windows = match &entry.windows {
        None => None,
        Some(w) => {
            if orch.version_scheme() != VersionScheme::Semantic {
                bail!("{orch} catalog entry carries a windows override but is not semver-ordered");
            }
            let (versions, parsed) = validate_version_list(orch, &w.versions, &w.default)?;
            Some(WindowsData {
                versions,
                default: w.default.clone(),
                parsed,
            })
        }
    };

    Ok(FamilyData {
        versions,
        default: entry.default.clone(),
        parsed,
        windows,
    })
}

/// Check one version list and return it in canonical order alongside the
/// parsed versions (semantic families only).
fn validate_version_list(
    orch: Orchestrator,
    versions: &[String],
    default: &str,
) -> Result<(Vec<String>, Vec<Version>)> {
    if versions.is_empty() {
        bail!("{orch} catalog entry lists no versions");
    }
    let mut seen = BTreeSet::new();
    for version in versions {
        if version.trim().is_empty() {
            bail!("{orch} catalog entry contains an empty version");
        }
        if !seen.insert(version.as_str()) {
            bail!("{orch} catalog entry lists version {version} twice");
        }
    }
    if !versions.iter().any(|v| v == default) {
        bail!("{orch} default version {default} is not in its supported set");
    }

    match orch.version_scheme() {
        VersionScheme::Opaque => Ok((versions.to_vec(), Vec::new())),
        VersionScheme::Semantic => {
            let mut parsed = Vec::with_capacity(versions.len());
            for version in versions {
                let v = Version::parse(version)
                    .with_context(|| format!("{orch} catalog version '{version}'"))?;
                parsed.push(v);
            }
            parsed.sort();
            let ordered = parsed.iter().map(Version::to_string).collect();
            Ok((ordered, parsed))
        }
    }
}

fn validate_against_schema(catalog_path: &Path) -> Result<()> {
    let catalog_file = File::open(catalog_path)
        .with_context(|| format!("opening catalog {}", catalog_path.display()))?;
    let catalog_value: Value = serde_json::from_reader(BufReader::new(catalog_file))
        .with_context(|| format!("parsing catalog {}", catalog_path.display()))?;

    let schema_path = canonical_catalog_schema_path();
    let schema_file = File::open(&schema_path)
        .with_context(|| format!("opening catalog schema {}", schema_path.display()))?;
    let schema_value: Value = serde_json::from_reader(BufReader::new(schema_file))
        .with_context(|| format!("parsing catalog schema {}", schema_path.display()))?;
    let compiled = jsonschema::JSONSchema::compile(&schema_value)
        .map_err(|err| anyhow!("compiling catalog schema: {err}"))?;

    if let Err(errors) = compiled.validate(&catalog_value) {
        let details = errors
            .map(|err| err.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        bail!(
            "catalog {} failed schema validation:\n{}",
            catalog_path.display(),
            details
        );
    }
    Ok(())
}

fn canonical_catalog_schema_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("schema/orchestrator_catalog.schema.json")
}

/// Builtin catalog data, mirroring the release window the tooling targets.
///
/// Lists are stored pre-sorted in each family's canonical order; the test
/// below pins them to the same validation path as file-loaded catalogs.
fn builtin_registry() -> VersionRegistry {
    let mut families = BTreeMap::new();

    let kubernetes = &[
        "1.7.15", "1.7.16", "1.8.14", "1.8.15", "1.9.9", "1.9.10", "1.10.7", "1.10.8", "1.11.2",
        "1.11.3", "1.12.0-beta.0",
    ];
    // Windows support lags the newest minor lines.
    let kubernetes_windows = &[
        "1.8.14", "1.8.15", "1.9.9", "1.9.10", "1.10.7", "1.10.8", "1.11.2", "1.11.3",
    ];
    families.insert(
        Orchestrator::Kubernetes,
        FamilyData {
            versions: owned(kubernetes),
            default: "1.10.8".to_string(),
            parsed: parsed_or_empty(kubernetes),
            windows: Some(WindowsData {
                versions: owned(kubernetes_windows),
                default: "1.10.8".to_string(),
                parsed: parsed_or_empty(kubernetes_windows),
            }),
        },
    );

    let dcos = &["1.11.2", "1.11.0", "1.10.0", "1.9.8", "1.9.0", "1.8.8"];
    families.insert(
        Orchestrator::Dcos,
        FamilyData {
            versions: owned(dcos),
            default: "1.11.0".to_string(),
            parsed: Vec::new(),
            windows: None,
        },
    );

    families.insert(
        Orchestrator::Swarm,
        FamilyData {
            versions: owned(&["swarm:1.1.0"]),
            default: "swarm:1.1.0".to_string(),
            parsed: Vec::new(),
            windows: None,
        },
    );

    families.insert(
        Orchestrator::SwarmMode,
        FamilyData {
            versions: owned(&["17.03.*"]),
            default: "17.03.*".to_string(),
            parsed: Vec::new(),
            windows: None,
        },
    );

    VersionRegistry { families }
}

fn owned(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

fn parsed_or_empty(raw: &[&str]) -> Vec<Version> {
    raw.iter().filter_map(|s| Version::parse(s).ok()).collect()
}
