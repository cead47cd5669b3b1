use thiserror::Error;

/// Custom error type for the ScalarGrad framework.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq + Clone for easier testing
pub enum ScalarGradError {
    #[error("Dimension mismatch: expected {expected} input value(s), got {actual} during operation {operation}")]
    DimensionMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Cannot build a network from an empty list of layer sizes")]
    EmptyArchitecture,
}
