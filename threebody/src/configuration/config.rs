//! Configuration types for loading three-body scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – end time, snapshot count, softening and constants
//! - [`BodyConfig`]       – initial state for each of the three bodies
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! The figure-eight choreography in this format:
//!
//! ```yaml
//! parameters:
//!   end_time: 6.32591398       # total simulation time, integration starts at 0
//!   snapshot_count: 2000       # snapshots recorded, one RK4 step each
//!   softening: 0.0             # softening length epsilon
//!   G: 1.0                     # optional, gravitational constant
//!   max_history_bytes: 1048576 # optional, bound on recorded history
//!
//! bodies:
//!   - x: [ 0.97000436, -0.24308753, 0.0 ]
//!     v: [ 0.466203685, 0.43236573, 0.0 ]
//!     m: 1.0
//!   - x: [ -0.97000436, 0.24308753, 0.0 ]
//!     v: [ 0.466203685, 0.43236573, 0.0 ]
//!     m: 1.0
//!   - x: [ 0.0, 0.0, 0.0 ]
//!     v: [ -0.93240737, -0.86473146, 0.0 ]
//!     m: 1.0
//! ```
//!
//! `Scenario::build_scenario` validates this into runtime types.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::simulation::params::{DEFAULT_G, DEFAULT_MAX_HISTORY_BYTES};

fn default_g() -> f64 {
    DEFAULT_G
}

fn default_max_history_bytes() -> u64 {
    DEFAULT_MAX_HISTORY_BYTES
}

/// Global numerical and physical parameters for a scenario
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub end_time: f64,        // time end
    pub snapshot_count: u64,  // number of snapshots / steps
    #[serde(default)]
    pub softening: f64,       // softening length - regularizes close encounters
    #[serde(default = "default_g")]
    pub G: f64,               // gravitational constant
    #[serde(default = "default_max_history_bytes")]
    pub max_history_bytes: u64, // refuse runs whose snapshot history exceeds this
}

/// Configuration for a single body’s initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub x: Vec<f64>, // Initial position vector `x` in simulation units
    pub v: Vec<f64>, // Initial velocity vector `v` in simulation units per time unit
    pub m: f64,      // Mass of the body
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig, // Global numerical and physical parameters
    pub bodies: Vec<BodyConfig>,      // The three bodies, in index order
}

impl ScenarioConfig {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let cfg = serde_yaml::from_reader(reader).context("failed to parse scenario YAML")?;
        Ok(cfg)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)
            .with_context(|| format!("failed to open scenario file {}", path.display()))?;
        Self::from_reader(std::io::BufReader::new(file))
            .with_context(|| format!("failed to load scenario from {}", path.display()))
    }
}
