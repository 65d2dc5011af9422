//! Numerical and physical parameters for one simulation run
//!
//! `Parameters` holds runtime settings:
//! - end time and snapshot count (the step size is derived from both),
//! - softening length and gravitational constant (`softening`, `G`),
//! - the memory bound for the recorded snapshot history

use crate::simulation::error::SimError;
use crate::simulation::states::Snapshot;

/// Default gravitational constant; 1.0 is the normalized form of Newton's law
pub const DEFAULT_G: f64 = 1.0;

/// Default bound on the snapshot history (512 MiB)
pub const DEFAULT_MAX_HISTORY_BYTES: u64 = 512 * 1024 * 1024;

#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub end_time: f64,          // time end, integration starts at t = 0
    pub snapshot_count: usize,  // number of snapshots, also number of steps
    pub softening: f64,         // softening length epsilon
    pub G: f64,                 // gravitational constant
    pub max_history_bytes: u64, // memory bound for the snapshot history
}

impl Parameters {
    pub fn new(end_time: f64, snapshot_count: usize, softening: f64) -> Self {
        Self {
            end_time,
            snapshot_count,
            softening,
            G: DEFAULT_G,
            max_history_bytes: DEFAULT_MAX_HISTORY_BYTES,
        }
    }

    /// Fixed step size h = (end_time - 0) / snapshot_count
    pub fn step_size(&self) -> f64 {
        self.end_time / self.snapshot_count as f64
    }

    /// Bytes needed to hold every snapshot of the run
    pub fn history_bytes(&self) -> u128 {
        self.snapshot_count as u128 * std::mem::size_of::<Snapshot>() as u128
    }

    /// Effective history bound; no allocation may exceed `isize::MAX` bytes
    pub fn history_limit(&self) -> u64 {
        self.max_history_bytes.min(isize::MAX as u64)
    }

    /// Reject parameters that would make the run meaningless or unbounded.
    /// Runs before any integration step.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.snapshot_count < 1 {
            return Err(SimError::validation(
                "snapshot_count",
                format!("must be at least 1, got {}", self.snapshot_count),
            ));
        }
        if !self.end_time.is_finite() {
            return Err(SimError::validation(
                "end_time",
                format!("must be finite, got {}", self.end_time),
            ));
        }
        if !self.softening.is_finite() || self.softening < 0.0 {
            return Err(SimError::validation(
                "softening",
                format!("must be finite and non-negative, got {}", self.softening),
            ));
        }
        if !self.G.is_finite() || self.G <= 0.0 {
            return Err(SimError::validation(
                "G",
                format!("must be positive and finite, got {}", self.G),
            ));
        }

        let requested = self.history_bytes();
        let limit = self.history_limit();
        if requested > limit as u128 {
            return Err(SimError::ResourceExhaustion { requested, limit });
        }
        Ok(())
    }
}
