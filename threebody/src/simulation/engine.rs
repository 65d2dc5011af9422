//! Snapshot-recording driver loop
//!
//! Captures the state *before* each RK4 step, so snapshot 0 is always the
//! initial condition and the state one step past the last snapshot is never
//! reported.

use tracing::{debug, warn};

use crate::simulation::error::SimError;
use crate::simulation::forces::{ForceError, ForceModel, NewtonianGravity};
use crate::simulation::integrator::rk4_step;
use crate::simulation::params::Parameters;
use crate::simulation::states::{masses_of, pack_state, Body, Masses, Snapshot, StateVec, BODY_COUNT};

fn validate_mass(i: usize, m: f64) -> Result<(), SimError> {
    if !m.is_finite() || m <= 0.0 {
        return Err(SimError::validation(
            format!("bodies[{i}].m"),
            format!("mass must be positive and finite, got {m}"),
        ));
    }
    Ok(())
}

/// Validate bodies before any integration step
pub fn validate_bodies(bodies: &[Body; BODY_COUNT]) -> Result<(), SimError> {
    for (i, b) in bodies.iter().enumerate() {
        validate_mass(i, b.m)?;
        if b.x.iter().any(|c| !c.is_finite()) {
            return Err(SimError::validation(format!("bodies[{i}].x"), "position must be finite"));
        }
        if b.v.iter().any(|c| !c.is_finite()) {
            return Err(SimError::validation(format!("bodies[{i}].v"), "velocity must be finite"));
        }
    }
    Ok(())
}

/// Integrate from `initial` and return exactly `params.snapshot_count`
/// snapshots, or fail without partial output.
pub fn run<F>(initial: &StateVec, masses: &Masses, params: &Parameters, force: &F) -> Result<Vec<Snapshot>, SimError>
where
    F: ForceModel + ?Sized,
{
    params.validate()?;
    for (i, m) in masses.iter().enumerate() {
        validate_mass(i, *m)?;
    }
    if initial.iter().any(|c| !c.is_finite()) {
        return Err(SimError::validation("initial_state", "all components must be finite"));
    }

    let n = params.snapshot_count;
    let h = params.step_size();
    debug!(snapshot_count = n, h, end_time = params.end_time, "starting rk4 run");

    let mut snapshots = Vec::new();
    snapshots
        .try_reserve_exact(n)
        .map_err(|_| SimError::ResourceExhaustion {
            requested: params.history_bytes(),
            limit: params.history_limit(),
        })?;
    let mut y = *initial;

    for i in 0..n {
        let t = i as f64 * h;
        snapshots.push(Snapshot::capture(i, t, &y));

        y = match rk4_step(&y, h, masses, force) {
            Ok(next) if next.iter().all(|c| c.is_finite()) => next,
            Ok(_) | Err(ForceError::NonFinite) => {
                warn!(step = i, t, "aborting run on non-finite state");
                return Err(SimError::NonFiniteState { step: i, time: t });
            }
            Err(ForceError::Singularity { body_a, body_b, separation }) => {
                warn!(step = i, t, body_a, body_b, "aborting run on singular pair");
                return Err(SimError::NumericalSingularity {
                    step: i,
                    time: t,
                    body_a,
                    body_b,
                    separation,
                });
            }
        };
    }

    debug!(snapshots = snapshots.len(), t_final = n as f64 * h, "rk4 run finished");
    Ok(snapshots)
}

/// Convenience wrapper: pack `bodies`, build softened gravity from
/// `params`, and run.
pub fn run_bodies(bodies: &[Body; BODY_COUNT], params: &Parameters) -> Result<Vec<Snapshot>, SimError> {
    validate_bodies(bodies)?;
    let force = NewtonianGravity::new(params.G, params.softening);
    run(&pack_state(bodies), &masses_of(bodies), params, &force)
}

