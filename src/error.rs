// src/error.rs
use crate::core::error::DistanceError;
use std::path::PathBuf;
use thiserror::Error;

/// Failures while reading word lists, distance tables or snapshots.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed distance table: {0}")]
    Csv(#[from] csv::Error),

    #[error("distance table has no `word` column")]
    MissingWordColumn,

    #[error("invalid distance on line {line}: {word} -> {target} = {value:?}")]
    InvalidDistance { word: String, target: String, value: String, line: u64 },

    #[error("snapshot encoding failed: {0}")]
    Snapshot(#[from] bincode::Error),

    #[error("cannot write snapshot: {0}")]
    Persist(#[from] tempfile::PersistError),
}

/// Everything the library can fail with.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Distance(#[from] DistanceError),

    #[error(transparent)]
    Load(#[from] LoadError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
