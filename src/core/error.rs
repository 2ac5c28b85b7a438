// src/core/error.rs
use thiserror::Error;

/// Failures raised while resolving distances or averaging them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DistanceError {
    #[error("word not found: {word} has no record in the distance table")]
    WordNotFound { word: String },

    #[error("ambiguous word: {count} records found for {word}")]
    AmbiguousWord { word: String, count: usize },

    #[error("distance not found: {from} has no distance to {to}")]
    DistanceNotFound { from: String, to: String },

    #[error("invalid pair: expected exactly two words, got {len}")]
    InvalidPair { len: usize },

    #[error("empty input: cannot average zero distances")]
    EmptyInput,
}
