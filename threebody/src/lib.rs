pub mod simulation;
pub mod configuration;
pub mod output;

pub use simulation::states::{Body, Snapshot, StateVec, Masses, NVec3, pack_state};
pub use simulation::params::Parameters;
pub use simulation::error::SimError;
pub use simulation::forces::{ForceError, ForceModel, NewtonianGravity};
pub use simulation::integrator::rk4_step;
pub use simulation::engine::{run, run_bodies};
pub use simulation::scenario::{Scenario, SimulationRun};
pub use simulation::diagnostics::{total_momentum, total_energy, max_momentum_drift, max_relative_energy_drift};

pub use configuration::config::{ParametersConfig, BodyConfig, ScenarioConfig};

pub use output::store::{RunStore, RunOutput};
pub use output::csv::write_csv;
pub use output::container::{RunContainer, write_container};
