//! Fixed-step time integrator for the three-body system
//!
//! Classical 4th-order Runge–Kutta over the packed 18-component state,
//! driven by any `ForceModel`

use super::forces::{ForceError, ForceModel};
use super::states::{Masses, StateVec};

/// Advance `y` by one RK4 step of size `h`.
///
/// ```text
/// k1 = h f(y)
/// k2 = h f(y + k1/2)
/// k3 = h f(y + k2/2)
/// k4 = h f(y + k3)
/// y' = y + (k1 + 2 k2 + 2 k3 + k4) / 6
/// ```
///
/// Any stage that fails the force law fails the whole step.
pub fn rk4_step<F>(y: &StateVec, h: f64, masses: &Masses, force: &F) -> Result<StateVec, ForceError>
where
    F: ForceModel + ?Sized,
{
    let k1 = force.derivative(y, masses)? * h;
    let k2 = force.derivative(&(y + k1 * 0.5), masses)? * h;
    let k3 = force.derivative(&(y + k2 * 0.5), masses)? * h;
    let k4 = force.derivative(&(y + k3), masses)? * h;

    Ok(y + (k1 + k2 * 2.0 + k3 * 2.0 + k4) / 6.0)
}
