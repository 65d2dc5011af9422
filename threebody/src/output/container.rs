//! Structured run container (JSON)
//!
//! Arrays keyed by name, shaped so no transformation is needed on the
//! reading side:
//! - `num_snapshots`
//! - `masses`      [3]
//! - `positions`   [num_snapshots, 3, 3]
//! - `velocities`  [num_snapshots, 3, 3]

use std::io::Write;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::simulation::scenario::SimulationRun;
use crate::simulation::states::{Masses, BODY_COUNT};

type Matrix3 = [[f64; 3]; BODY_COUNT];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunContainer {
    pub run_id: Uuid,
    pub num_snapshots: usize,
    pub masses: Masses,
    pub softening: f64,
    pub end_time: f64,
    pub positions: Vec<Matrix3>,
    pub velocities: Vec<Matrix3>,
}

impl RunContainer {
    pub fn from_run(run: &SimulationRun) -> Self {
        let params = &run.scenario().parameters;
        let snaps = run.snapshots();
        Self {
            run_id: run.id(),
            num_snapshots: snaps.len(),
            masses: run.masses(),
            softening: params.softening,
            end_time: params.end_time,
            positions: snaps.iter().map(|s| s.positions).collect(),
            velocities: snaps.iter().map(|s| s.velocities).collect(),
        }
    }
}

pub fn write_container<W: Write>(mut out: W, run: &SimulationRun) -> serde_json::Result<()> {
    serde_json::to_writer(&mut out, &RunContainer::from_run(run))?;
    out.flush().map_err(serde_json::Error::io)
}
