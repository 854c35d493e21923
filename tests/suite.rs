// Centralized integration suite for version resolution: exercises catalog file
// loading against the shipped schema, the single-minor-step upgrade rule, the
// request-level entry points, and the wire-schema boundary so changes surface
// in one place.

use anyhow::{Context, Result};
use orchver::{
    ALL_ORCHESTRATORS, Orchestrator, OrchestratorProfile, OrchestratorVersionProfile,
    ResolveError, VersionRegistry, exact_profile, profile_list, to_wire_list,
    wire::WireVersionProfileList,
};
use semver::Version;
use serde_json::{Value, json};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_catalog(dir: &Path, value: &Value) -> Result<std::path::PathBuf> {
    let path = dir.join("catalog.json");
    fs::write(&path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// Catalog fixture matching the documented upgrade scenario.
fn scenario_catalog() -> Value {
    json!({
        "schema_version": "orchestrator_catalog_v1",
        "orchestrators": {
            "Kubernetes": {
                "versions": ["1.10.0", "1.10.5", "1.11.0", "1.11.2", "1.12.0-alpha.0"],
                "default": "1.10.5",
                "windows": {
                    "versions": ["1.10.0", "1.10.5"],
                    "default": "1.10.5"
                }
            },
            "DCOS": {
                "versions": ["1.11.2", "1.11.0", "1.10.0"],
                "default": "1.11.0"
            },
            "Swarm": {
                "versions": ["swarm:1.1.0"],
                "default": "swarm:1.1.0"
            },
            "SwarmMode": {
                "versions": ["17.03.*"],
                "default": "17.03.*"
            }
        }
    })
}

#[test]
fn catalog_file_loads_and_resolves() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_catalog(dir.path(), &scenario_catalog())?;
    let registry = VersionRegistry::load(&path)?;

    let profiles = profile_list(&registry, "kubernetes", "1.10.0", false)
        .context("resolving 1.10.0 profiles")?;
    assert_eq!(profiles.len(), 1);
    let upgrades: Vec<&str> = profiles[0]
        .upgrades
        .iter()
        .map(|p| p.version.as_str())
        .collect();
    // The boundary 1.12.0-alpha.0 is exclusive, so the alpha itself is out.
    assert_eq!(upgrades, ["1.10.5", "1.11.0", "1.11.2"]);
    assert!(!profiles[0].default);
    Ok(())
}

#[test]
fn catalog_file_failing_schema_validation_is_rejected() -> Result<()> {
    let dir = TempDir::new()?;
    let mut bad = scenario_catalog();
    bad["orchestrators"]["Kubernetes"]
        .as_object_mut()
        .expect("object")
        .remove("default");
    let path = write_catalog(dir.path(), &bad)?;

    let err = VersionRegistry::load(&path).unwrap_err();
    assert!(
        err.to_string().contains("schema validation"),
        "unexpected error: {err:#}"
    );
    Ok(())
}

#[test]
fn catalog_file_with_unknown_family_is_rejected() -> Result<()> {
    let dir = TempDir::new()?;
    let mut bad = scenario_catalog();
    bad["orchestrators"]["Nomad"] = json!({"versions": ["1.0.0"], "default": "1.0.0"});
    let path = write_catalog(dir.path(), &bad)?;

    assert!(VersionRegistry::load(&path).is_err());
    Ok(())
}

#[test]
fn windows_flag_changes_listing_and_upgrades() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_catalog(dir.path(), &scenario_catalog())?;
    let registry = VersionRegistry::load(&path)?;

    let all = profile_list(&registry, "kubernetes", "", false)?;
    assert_eq!(all.len(), 5);
    let windows = profile_list(&registry, "kubernetes", "", true)?;
    assert_eq!(windows.len(), 2);

    // 1.11.x is absent from the Windows set, so 1.10.0 only reaches 1.10.5.
    let upgrades: Vec<&str> = windows[0]
        .upgrades
        .iter()
        .map(|p| p.version.as_str())
        .collect();
    assert_eq!(upgrades, ["1.10.5"]);

    // A version outside the Windows subset is unsupported under the flag.
    let err = profile_list(&registry, "kubernetes", "1.11.0", true).unwrap_err();
    assert!(matches!(err, ResolveError::UnsupportedVersion { .. }));
    Ok(())
}

#[test]
fn every_builtin_upgrade_is_a_single_minor_step() -> Result<()> {
    let registry = VersionRegistry::builtin();
    for profile in profile_list(&registry, "kubernetes", "", false)? {
        let current = Version::parse(&profile.profile.version)?;
        let supported = registry.parsed_versions(Orchestrator::Kubernetes, false);
        let nearest = supported.iter().filter(|v| **v > current).min();

        for upgrade in &profile.upgrades {
            let target = Version::parse(&upgrade.version)?;
            assert!(target > current, "{target} is not greater than {current}");

            // The boundary rule: targets stay within one minor of the current
            // version, or within the nearest greater version's minor line
            // when the adjacent minor is missing from the catalog.
            let nearest = nearest.expect("upgrade exists, so a greater version exists");
            let max_minor = if current.major == nearest.major
                && current.minor + 1 < nearest.minor
            {
                nearest.minor
            } else {
                current.minor + 1
            };
            assert!(
                target.major != current.major || target.minor <= max_minor,
                "{target} skips past minor {max_minor} from {current}"
            );
        }
    }
    Ok(())
}

#[test]
fn all_families_listing_has_one_default_each() -> Result<()> {
    let registry = VersionRegistry::builtin();
    let profiles = profile_list(&registry, "", "", false)?;
    for orch in ALL_ORCHESTRATORS {
        let defaults = profiles
            .iter()
            .filter(|p| p.profile.orchestrator == orch && p.default)
            .count();
        assert_eq!(defaults, 1, "{orch} should have exactly one default");
    }
    Ok(())
}

#[test]
fn exact_lookup_round_trips_through_the_wire_schema() -> Result<()> {
    let registry = VersionRegistry::builtin();
    let profile = OrchestratorProfile::new(Orchestrator::Dcos, "1.11.0");
    let record = exact_profile(&registry, &profile, false)?;
    assert_eq!(
        record.upgrades,
        vec![OrchestratorProfile::new(Orchestrator::Dcos, "1.11.2")]
    );

    let list = to_wire_list(std::slice::from_ref(&record));
    let encoded = serde_json::to_string(&list)?;
    let decoded: WireVersionProfileList = serde_json::from_str(&encoded)?;
    let back: Vec<OrchestratorVersionProfile> = decoded
        .orchestrators
        .into_iter()
        .map(Into::into)
        .collect();
    assert_eq!(back, vec![record]);
    Ok(())
}

#[test]
fn wire_payload_uses_public_field_names() -> Result<()> {
    let registry = VersionRegistry::builtin();
    let profiles = profile_list(&registry, "dcos", "1.11.0", false)?;
    let value = serde_json::to_value(to_wire_list(&profiles))?;

    let first = &value["orchestrators"][0];
    assert_eq!(first["orchestratorType"], "DCOS");
    assert_eq!(first["orchestratorVersion"], "1.11.0");
    assert_eq!(first["default"], true);
    assert_eq!(first["upgrades"][0]["orchestratorVersion"], "1.11.2");
    Ok(())
}

#[test]
fn error_kinds_surface_with_their_messages() {
    let registry = VersionRegistry::builtin();

    let err = profile_list(&registry, "", "1.2.3", false).unwrap_err();
    assert!(err.to_string().contains("must specify an orchestrator"));

    let err = profile_list(&registry, "mesos", "", false).unwrap_err();
    assert!(err.to_string().contains("unsupported orchestrator 'mesos'"));

    let err = profile_list(&registry, "dcos", "0.0.0", false).unwrap_err();
    assert!(err.to_string().contains("is not supported"));

    let empty = OrchestratorProfile::new(Orchestrator::Kubernetes, "");
    let err = exact_profile(&registry, &empty, false).unwrap_err();
    assert!(err.to_string().contains("missing orchestrator version"));

    let swarm = OrchestratorProfile::new(Orchestrator::Swarm, "swarm:1.1.0");
    let err = exact_profile(&registry, &swarm, false).unwrap_err();
    assert!(err.to_string().contains("not supported for 'Swarm'"));

    let malformed = profile_list(&registry, "kubernetes", "", false);
    assert!(malformed.is_ok(), "builtin catalog must resolve cleanly");
}
