use thiserror::Error;
use valuegrad_core::AutogradError;

/// Errors raised while building or running networks.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum NnError {
    #[error("Input size mismatch: expected {expected} inputs, got {actual}")]
    InputSizeMismatch { expected: usize, actual: usize },

    #[error("Invalid architecture: {0}")]
    InvalidArchitecture(String),

    #[error("Invalid initialisation: {0}")]
    InvalidInit(String),

    #[error("{operation} received no predictions")]
    EmptyInput { operation: String },

    #[error("Length mismatch in {operation}: {predictions} predictions for {targets} targets")]
    LengthMismatch {
        operation: String,
        predictions: usize,
        targets: usize,
    },

    #[error("Unsupported reduction type: {0}")]
    UnsupportedReduction(String),

    #[error("Invalid optimizer configuration: {0}")]
    InvalidOptimizerConfig(String),

    #[error(transparent)]
    Autograd(#[from] AutogradError),
}
