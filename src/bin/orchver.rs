//! Query tool for the orchestrator version catalog.
//!
//! Prints the wire-schema JSON for the requested orchestrator/version scope
//! to stdout. With no arguments every family is listed; `--exact` switches to
//! the single-profile upgrade lookup, which requires both an orchestrator and
//! a version.

use anyhow::{Context, Result, bail};
use orchver::{
    OrchestratorProfile, VersionRegistry, exact_profile, profile_list, resolve_orchestrator,
    to_wire_list, wire::WireVersionProfile,
};
use std::env;
use std::path::PathBuf;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse()?;

    let registry = match &cli.catalog {
        Some(path) => VersionRegistry::load(path)
            .with_context(|| format!("loading catalog {}", path.display()))?,
        None => VersionRegistry::builtin(),
    };

    if cli.exact {
        let Some(orch) = resolve_orchestrator(&cli.orchestrator, &cli.version)? else {
            bail!("--exact requires --orchestrator");
        };
        let profile = OrchestratorProfile::new(orch, cli.version.clone());
        let record = exact_profile(&registry, &profile, cli.windows)?;
        let wire = WireVersionProfile::from(&record);
        println!("{}", serde_json::to_string_pretty(&wire)?);
        return Ok(());
    }

    let profiles = profile_list(&registry, &cli.orchestrator, &cli.version, cli.windows)?;
    let list = to_wire_list(&profiles);
    println!("{}", serde_json::to_string_pretty(&list)?);
    Ok(())
}

struct Cli {
    orchestrator: String,
    version: String,
    windows: bool,
    exact: bool,
    catalog: Option<PathBuf>,
}

impl Cli {
    fn parse() -> Result<Self> {
        let mut cli = Cli {
            orchestrator: String::new(),
            version: String::new(),
            windows: false,
            exact: false,
            catalog: None,
        };

        let mut args = env::args().skip(1);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--orchestrator" => cli.orchestrator = value(&mut args, "--orchestrator")?,
                "--version" => cli.version = value(&mut args, "--version")?,
                "--catalog" => cli.catalog = Some(PathBuf::from(value(&mut args, "--catalog")?)),
                "--windows" => cli.windows = true,
                "--exact" => cli.exact = true,
                "--help" | "-h" => usage(0),
                other => {
                    eprintln!("unknown argument '{other}'");
                    usage(2);
                }
            }
        }
        Ok(cli)
    }
}

fn value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String> {
    match args.next() {
        Some(value) => Ok(value),
        None => bail!("{flag} requires a value"),
    }
}

fn usage(code: i32) -> ! {
    eprintln!(
        "usage: orchver [--orchestrator NAME] [--version VERSION] [--windows] [--exact] [--catalog PATH]"
    );
    std::process::exit(code);
}
