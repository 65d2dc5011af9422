//! Read-only conserved-quantity diagnostics over snapshots
//!
//! Nothing here feeds back into the state; these are for logging and tests.

use crate::simulation::states::{Masses, NVec3, Snapshot, BODY_COUNT};

/// Total linear momentum sum(m_i v_i)
pub fn total_momentum(snap: &Snapshot, masses: &Masses) -> NVec3 {
    (0..BODY_COUNT).fold(NVec3::zeros(), |p, i| p + masses[i] * snap.velocity(i))
}

/// Kinetic plus (softened) potential energy with gravitational constant `g`
pub fn total_energy(snap: &Snapshot, masses: &Masses, g: f64, softening: f64) -> f64 {
    let kinetic: f64 = (0..BODY_COUNT)
        .map(|i| 0.5 * masses[i] * snap.velocity(i).norm_squared())
        .sum();

    let eps2 = softening * softening;
    let potential: f64 = [(0, 1), (1, 2), (2, 0)]
        .iter()
        .map(|&(i, j)| {
            let r2 = (snap.position(j) - snap.position(i)).norm_squared();
            -g * masses[i] * masses[j] / (r2 + eps2).sqrt()
        })
        .sum();

    kinetic + potential
}

/// Largest momentum deviation from the first snapshot
pub fn max_momentum_drift(snapshots: &[Snapshot], masses: &Masses) -> f64 {
    let Some(first) = snapshots.first() else {
        return 0.0;
    };
    let p0 = total_momentum(first, masses);
    snapshots
        .iter()
        .map(|s| (total_momentum(s, masses) - p0).norm())
        .fold(0.0, f64::max)
}

/// Largest relative energy deviation from the first snapshot
pub fn max_relative_energy_drift(snapshots: &[Snapshot], masses: &Masses, g: f64, softening: f64) -> f64 {
    let Some(first) = snapshots.first() else {
        return 0.0;
    };
    let e0 = total_energy(first, masses, g, softening);
    let scale = if e0 != 0.0 { e0.abs() } else { 1.0 };
    snapshots
        .iter()
        .map(|s| (total_energy(s, masses, g, softening) - e0).abs() / scale)
        .fold(0.0, f64::max)
}
