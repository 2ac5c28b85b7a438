// src/lib.rs

pub mod core;
pub mod error;
pub mod loader;
pub mod persistence;

pub use crate::core::error::DistanceError;
pub use crate::core::summarizer::{arithmetic_mean, enumerate_pairs, summarize};
pub use crate::core::table::DistanceTable;
pub use crate::core::types::{DistanceRecord, PairDistance, Summary, Word};
pub use crate::error::{Error, LoadError, Result};
