//! Force model for the three-body engine
//!
//! Defines the `ForceModel` trait (state -> time derivative of state) and
//! direct softened Newtonian gravity over the three pairs

use crate::simulation::states::{position, Masses, NVec3, StateVec, BODY_COUNT, VELOCITY_OFFSET};

/// Why the force law could not produce a finite derivative
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ForceError {
    /// Pair separation collapsed and softening could not regularize it
    Singularity { body_a: usize, body_b: usize, separation: f64 },
    /// NaN or infinity in the state or in the summed accelerations
    NonFinite,
}

/// Computes dy/dt for the packed state.
/// Implementations copy the velocity block into the position-derivative
/// block and write accelerations into the velocity-derivative block.
pub trait ForceModel {
    fn derivative(&self, y: &StateVec, masses: &Masses) -> Result<StateVec, ForceError>;
}

/// Newtonian gravity with a softening length.
/// The inverse-cube factor uses (r^2 + eps^2)^1.5, so for eps > 0 coincident
/// bodies stay regular. With eps = 0 a collapsed pair is reported as
/// `ForceError::Singularity`; overflowing accelerations as
/// `ForceError::NonFinite`.
#[allow(non_snake_case)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonianGravity {
    pub G: f64,         // gravitational constant
    pub softening: f64, // softening length eps
}

impl NewtonianGravity {
    pub fn new(g: f64, softening: f64) -> Self {
        Self { G: g, softening }
    }

    /// Accelerations on the three bodies, in body order
    pub fn accelerations(&self, y: &StateVec, masses: &Masses) -> Result<[NVec3; BODY_COUNT], ForceError> {
        let eps2 = self.softening * self.softening;
        let mut out = [NVec3::zeros(); BODY_COUNT];

        // Unordered pairs (1,2), (2,3), (3,1) in zero-based indices
        for (i, j) in [(0, 1), (1, 2), (2, 0)] {
            let xi = position(y, i);
            let xj = position(y, j);

            // r points from i to j: i is pulled along +r, j along -r
            let r = xj - xi;
            let r2 = r.dot(&r);
            if !r2.is_finite() {
                return Err(ForceError::NonFinite);
            }

            // d^2 = |r|^2 + eps^2
            let d2 = r2 + eps2;
            let inv_r3 = (d2 * d2.sqrt()).recip();

            if d2 <= 0.0 || !inv_r3.is_finite() {
                return Err(ForceError::Singularity {
                    body_a: i,
                    body_b: j,
                    separation: r2.sqrt(),
                });
            }

            let coef = self.G * inv_r3;

            // a_i +=  G * m_j * r / d^3
            // a_j += -G * m_i * r / d^3
            out[i] += coef * masses[j] * r;
            out[j] -= coef * masses[i] * r;
        }

        if out.iter().any(|a| a.iter().any(|c| !c.is_finite())) {
            return Err(ForceError::NonFinite);
        }
        Ok(out)
    }
}

impl ForceModel for NewtonianGravity {
    fn derivative(&self, y: &StateVec, masses: &Masses) -> Result<StateVec, ForceError> {
        let accels = self.accelerations(y, masses)?;

        let mut dy = StateVec::zeros();
        // dx/dt = v
        dy.fixed_rows_mut::<VELOCITY_OFFSET>(0)
            .copy_from(&y.fixed_rows::<VELOCITY_OFFSET>(VELOCITY_OFFSET));
        // dv/dt = a
        for (i, a) in accels.iter().enumerate() {
            dy.fixed_rows_mut::<3>(VELOCITY_OFFSET + 3 * i).copy_from(a);
        }
        Ok(dy)
    }
}
