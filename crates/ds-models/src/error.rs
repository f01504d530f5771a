//! Error types for model construction and evaluation.

use thiserror::Error;

/// Errors that can occur while building or evaluating a model.
#[derive(Error, Debug, Clone)]
pub enum ModelError {
    #[error("Invalid parameter: {what}")]
    InvalidParameter { what: &'static str },

    #[error("State shape mismatch: expected {expected} components, got {got}")]
    StateShape { expected: usize, got: usize },

    #[error("Not supported: {what}")]
    NotSupported { what: &'static str },
}

pub type ModelResult<T> = Result<T, ModelError>;
