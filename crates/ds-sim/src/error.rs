//! Error types for simulation runs.

use ds_core::numeric::Real;
use ds_models::ModelError;
use thiserror::Error;

/// Errors encountered while validating or executing a run.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid time range: {what}")]
    InvalidTimeRange { what: &'static str },

    #[error("Numerical divergence: non-finite state at step {step} (t = {time_s})")]
    NumericalDivergence { step: usize, time_s: Real },

    #[error("Stochastic model requires a seeded random source")]
    MissingRandomSource,

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error(transparent)]
    Model(#[from] ModelError),
}

pub type SimResult<T> = Result<T, SimError>;
