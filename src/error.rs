//! Error types for the network engine and the model-file codec.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NetworkError {
    /// A vector passed to the engine does not match the configured layer size.
    #[error("dimension mismatch: expected a vector of length {expected}, got {actual}")]
    Dimension { expected: usize, actual: usize },

    /// `backpropagate` was called without a fresh preceding forward pass.
    #[error("backpropagate called without a preceding forward pass")]
    Sequencing,

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed model file: {0}")]
    Parse(#[from] serde_json::Error),

    /// Persisted matrices are empty, ragged, or disagree on the hidden size.
    #[error("invalid weight shape: {0}")]
    Shape(String),
}

pub type Result<T> = std::result::Result<T, NetworkError>;
