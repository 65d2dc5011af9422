//! Error taxonomy for the simulation core
//!
//! Every failure leaves `run` as a single `SimError`; a truncated snapshot
//! sequence is never returned.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    /// Malformed or out-of-range input, rejected before the first step
    #[error("invalid `{field}`: {reason}")]
    Validation { field: String, reason: String },

    /// A pairwise distance collapsed and softening could not regularize it
    #[error(
        "numerical singularity at step {step} (t = {time}): bodies {body_a} and {body_b} \
         at separation {separation:e}"
    )]
    NumericalSingularity {
        step: usize,
        time: f64,
        body_a: usize,
        body_b: usize,
        separation: f64,
    },

    /// A step produced NaN or infinity without a detectable close pair
    #[error("non-finite state produced at step {step} (t = {time})")]
    NonFiniteState { step: usize, time: f64 },

    /// The snapshot history would not fit in the configured memory bound
    #[error("snapshot history needs {requested} bytes, limit is {limit} bytes")]
    ResourceExhaustion { requested: u128, limit: u64 },
}

impl SimError {
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        SimError::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
