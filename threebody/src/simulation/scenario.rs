//! Build validated simulation runs from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a `Scenario`
//! containing the numerical parameters and the three initial bodies.
//! Executing a scenario yields a `SimulationRun`: its own run id, the
//! input it was built from, and the recorded snapshots.

use tracing::info;
use uuid::Uuid;

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::simulation::engine::{run_bodies, validate_bodies};
use crate::simulation::error::SimError;
use crate::simulation::params::Parameters;
use crate::simulation::states::{masses_of, Body, Masses, NVec3, Snapshot, BODY_COUNT};

/// Fully-validated simulation input
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub parameters: Parameters,
    pub bodies: [Body; BODY_COUNT],
}

fn vec3(field: String, values: &[f64]) -> Result<NVec3, SimError> {
    match values {
        [x, y, z] => Ok(NVec3::new(*x, *y, *z)),
        _ => Err(SimError::validation(
            field,
            format!("expected 3 components, got {}", values.len()),
        )),
    }
}

fn body(i: usize, bc: &BodyConfig) -> Result<Body, SimError> {
    Ok(Body {
        x: vec3(format!("bodies[{i}].x"), &bc.x)?,
        v: vec3(format!("bodies[{i}].v"), &bc.v)?,
        m: bc.m,
    })
}

impl Scenario {
    pub fn new(parameters: Parameters, bodies: [Body; BODY_COUNT]) -> Result<Self, SimError> {
        parameters.validate()?;
        validate_bodies(&bodies)?;
        Ok(Self { parameters, bodies })
    }

    pub fn build_scenario(cfg: &ScenarioConfig) -> Result<Self, SimError> {
        if cfg.bodies.len() != BODY_COUNT {
            return Err(SimError::validation(
                "bodies",
                format!("expected exactly {BODY_COUNT} bodies, got {}", cfg.bodies.len()),
            ));
        }

        let bodies = [
            body(0, &cfg.bodies[0])?,
            body(1, &cfg.bodies[1])?,
            body(2, &cfg.bodies[2])?,
        ];

        // Parameters (runtime) from ParametersConfig
        let p_cfg = &cfg.parameters;
        let snapshot_count = usize::try_from(p_cfg.snapshot_count).map_err(|_| {
            SimError::validation(
                "snapshot_count",
                format!("{} does not fit in memory on this platform", p_cfg.snapshot_count),
            )
        })?;
        let parameters = Parameters {
            end_time: p_cfg.end_time,
            snapshot_count,
            softening: p_cfg.softening,
            G: p_cfg.G,
            max_history_bytes: p_cfg.max_history_bytes,
        };

        Self::new(parameters, bodies)
    }

    pub fn masses(&self) -> Masses {
        masses_of(&self.bodies)
    }

    /// Integrate this scenario into a new, independently owned run
    pub fn simulate(&self) -> Result<SimulationRun, SimError> {
        let id = Uuid::new_v4();
        info!(
            run_id = %id,
            end_time = self.parameters.end_time,
            snapshot_count = self.parameters.snapshot_count,
            softening = self.parameters.softening,
            "simulating scenario"
        );

        let snapshots = run_bodies(&self.bodies, &self.parameters)?;

        Ok(SimulationRun {
            id,
            scenario: self.clone(),
            snapshots,
        })
    }
}

/// One completed simulation; immutable once built
#[derive(Debug, Clone)]
pub struct SimulationRun {
    id: Uuid,
    scenario: Scenario,
    snapshots: Vec<Snapshot>,
}

impl SimulationRun {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    pub fn masses(&self) -> Masses {
        self.scenario.masses()
    }
}
