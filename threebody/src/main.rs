use threebody::{ScenarioConfig, Scenario, RunStore};
use threebody::{max_momentum_drift, max_relative_energy_drift};

use clap::Parser;
use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use std::path::{Path, PathBuf};

/// Integrate a three-body scenario with fixed-step RK4 and write its trajectory
#[derive(Parser, Debug)]
#[command(name = "threebody", version)]
struct Args {
    /// Scenario YAML file, or the name of one bundled under `scenarios/`
    #[arg(short, long, default_value = "figure_eight.yaml")]
    file_name: PathBuf,

    /// Root directory for run output; each run gets its own subdirectory
    #[arg(short, long, default_value = "output")]
    out_dir: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

// explicit paths win; bare names fall back to the bundled scenarios
fn scenario_path(file_name: &Path) -> PathBuf {
    if file_name.exists() {
        return file_name.to_path_buf();
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    // output root is set up once, before any run
    let store = RunStore::init(&args.out_dir)?;

    let config_path = scenario_path(&args.file_name);
    let scenario_cfg = ScenarioConfig::from_path(&config_path)?;
    let scenario = Scenario::build_scenario(&scenario_cfg)
        .with_context(|| format!("invalid scenario {}", config_path.display()))?;

    let run = scenario.simulate().context("simulation failed")?;
    let written = store.save(&run)?;

    let masses = run.masses();
    let params = &scenario.parameters;
    info!(
        run_id = %run.id(),
        snapshots = run.snapshots().len(),
        momentum_drift = max_momentum_drift(run.snapshots(), &masses),
        energy_drift = max_relative_energy_drift(run.snapshots(), &masses, params.G, params.softening),
        "simulation complete"
    );
    info!(csv = %written.csv.display(), container = %written.container.display(), "files written");

    Ok(())
}
