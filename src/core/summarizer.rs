// src/core/summarizer.rs
use crate::core::error::DistanceError;
use crate::core::table::DistanceTable;
use crate::core::types::{PairDistance, Summary};
use tracing::debug;

/// All 2-combinations of `words` in index order: (0,1), (0,2), ..., (1,2), ...
/// Each pair keeps the earlier word first. Repeated words still pair up by position.
pub fn enumerate_pairs<S: AsRef<str>>(words: &[S]) -> Vec<(&str, &str)> {
    let n = words.len();
    let mut pairs = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            pairs.push((words[i].as_ref(), words[j].as_ref()));
        }
    }
    pairs
}

pub fn arithmetic_mean(values: &[f64]) -> Result<f64, DistanceError> {
    if values.is_empty() {
        return Err(DistanceError::EmptyInput);
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Looks up every pair of `words` and averages the distances.
/// The first failed lookup aborts the whole summary.
pub fn summarize<S: AsRef<str>>(
    table: &DistanceTable,
    words: &[S],
) -> Result<Summary, DistanceError> {
    let pairs = enumerate_pairs(words)
        .into_iter()
        .map(|(first, second)| {
            table.distance_for_pair(&[first, second]).map(|distance| PairDistance {
                first: first.to_string(),
                second: second.to_string(),
                distance,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let distances: Vec<f64> = pairs.iter().map(|p| p.distance).collect();
    let mean = arithmetic_mean(&distances)?;
    debug!(words = words.len(), pairs = pairs.len(), mean, "summarized word list");

    Ok(Summary { pairs, mean })
}
