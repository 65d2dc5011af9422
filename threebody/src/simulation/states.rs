//! Core state types for the three-body simulation.
//!
//! - `Body`       one point mass with its position and velocity
//! - `StateVec`   the packed 18-component state used by the integrator
//! - `Snapshot`   an immutable capture of the state at one time index
//!
//! The packed layout is positions block `[0, 9)` followed by velocities
//! block `[9, 18)`, each grouped per body in 3s.

use nalgebra::{SVector, Vector3};

pub type NVec3 = Vector3<f64>;
pub type StateVec = SVector<f64, STATE_DIM>;
pub type Masses = [f64; BODY_COUNT];

/// Number of tracked bodies
pub const BODY_COUNT: usize = 3;

/// Length of the packed state vector
pub const STATE_DIM: usize = 2 * 3 * BODY_COUNT;

/// Offset of the velocity block inside `StateVec`
pub const VELOCITY_OFFSET: usize = 3 * BODY_COUNT;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub x: NVec3, // position
    pub v: NVec3, // velocity
    pub m: f64,   // mass
}

/// Position of body `i` in a packed state
pub fn position(y: &StateVec, i: usize) -> NVec3 {
    y.fixed_rows::<3>(3 * i).into_owned()
}

/// Velocity of body `i` in a packed state
pub fn velocity(y: &StateVec, i: usize) -> NVec3 {
    y.fixed_rows::<3>(VELOCITY_OFFSET + 3 * i).into_owned()
}

/// Pack three bodies into a state vector, preserving body order
pub fn pack_state(bodies: &[Body; BODY_COUNT]) -> StateVec {
    let mut y = StateVec::zeros();
    for (i, b) in bodies.iter().enumerate() {
        y.fixed_rows_mut::<3>(3 * i).copy_from(&b.x);
        y.fixed_rows_mut::<3>(VELOCITY_OFFSET + 3 * i).copy_from(&b.v);
    }
    y
}

/// Masses of three bodies, in body order
pub fn masses_of(bodies: &[Body; BODY_COUNT]) -> Masses {
    [bodies[0].m, bodies[1].m, bodies[2].m]
}

/// One captured instant of the simulation.
///
/// Matrices are body-major, axis-minor: `positions[body][axis]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub index: usize,
    pub time: f64,
    pub positions: [[f64; 3]; BODY_COUNT],
    pub velocities: [[f64; 3]; BODY_COUNT],
}

impl Snapshot {
    /// Decompose a packed state into position and velocity matrices
    pub fn capture(index: usize, time: f64, y: &StateVec) -> Self {
        let mut positions = [[0.0; 3]; BODY_COUNT];
        let mut velocities = [[0.0; 3]; BODY_COUNT];
        for body in 0..BODY_COUNT {
            for axis in 0..3 {
                positions[body][axis] = y[3 * body + axis];
                velocities[body][axis] = y[VELOCITY_OFFSET + 3 * body + axis];
            }
        }
        Self {
            index,
            time,
            positions,
            velocities,
        }
    }

    /// Re-pack this snapshot into the integrator's state layout
    pub fn to_state(&self) -> StateVec {
        let mut y = StateVec::zeros();
        for body in 0..BODY_COUNT {
            for axis in 0..3 {
                y[3 * body + axis] = self.positions[body][axis];
                y[VELOCITY_OFFSET + 3 * body + axis] = self.velocities[body][axis];
            }
        }
        y
    }

    pub fn position(&self, body: usize) -> NVec3 {
        NVec3::from(self.positions[body])
    }

    pub fn velocity(&self, body: usize) -> NVec3 {
        NVec3::from(self.velocities[body])
    }
}
