// src/core/mod.rs

pub mod error;
pub mod summarizer;
pub mod table;
pub mod types;
