// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Identifier of a word in a distance table.
pub type Word = String;

/// One row of a distance table: a subject word and its distances to other words.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceRecord {
    pub word: Word,
    /// Maps a target word to the distance from `word` to it.
    pub distances: HashMap<Word, f64>,
}

impl DistanceRecord {
    pub fn new(word: impl Into<Word>) -> Self {
        Self { word: word.into(), distances: HashMap::new() }
    }

    /// Builder-style insert, mostly used to assemble tables in code.
    pub fn with(mut self, target: impl Into<Word>, distance: f64) -> Self {
        self.distances.insert(target.into(), distance);
        self
    }
}

/// A looked-up pair together with its distance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairDistance {
    pub first: Word,
    pub second: Word,
    pub distance: f64,
}

/// The outcome of summarizing one word list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub pairs: Vec<PairDistance>,
    pub mean: f64,
}

impl Summary {
    pub fn word_pairs(&self) -> Vec<(&str, &str)> {
        self.pairs.iter().map(|p| (p.first.as_str(), p.second.as_str())).collect()
    }

    /// Distances in the same order as `word_pairs`.
    pub fn distances(&self) -> Vec<f64> {
        self.pairs.iter().map(|p| p.distance).collect()
    }
}
