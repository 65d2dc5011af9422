//! Per-run output locations
//!
//! The output root is created once by `RunStore::init`; every run then gets
//! its own `<root>/<run_id>/` directory so concurrent runs never overwrite
//! each other.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::output::container::write_container;
use crate::output::csv::write_csv;
use crate::simulation::scenario::SimulationRun;

pub const CSV_FILE: &str = "trajectory.csv";
pub const CONTAINER_FILE: &str = "simulation.json";

/// Paths written for one run
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutput {
    pub dir: PathBuf,
    pub csv: PathBuf,
    pub container: PathBuf,
}

#[derive(Debug, Clone)]
pub struct RunStore {
    root: PathBuf,
}

impl RunStore {
    pub fn init(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)
            .with_context(|| format!("failed to create output directory {}", root.display()))?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn run_dir(&self, run: &SimulationRun) -> PathBuf {
        self.root.join(run.id().to_string())
    }

    /// Write the CSV trajectory and JSON container for `run`
    pub fn save(&self, run: &SimulationRun) -> Result<RunOutput> {
        let dir = self.run_dir(run);
        fs::create_dir(&dir).with_context(|| format!("failed to create run directory {}", dir.display()))?;

        let csv = dir.join(CSV_FILE);
        let file = File::create(&csv).with_context(|| format!("failed to create {}", csv.display()))?;
        write_csv(BufWriter::new(file), run.snapshots())
            .with_context(|| format!("failed to write {}", csv.display()))?;

        let container = dir.join(CONTAINER_FILE);
        let file = File::create(&container).with_context(|| format!("failed to create {}", container.display()))?;
        write_container(BufWriter::new(file), run)
            .with_context(|| format!("failed to write {}", container.display()))?;

        info!(run_id = %run.id(), dir = %dir.display(), "run output written");
        Ok(RunOutput { dir, csv, container })
    }
}
