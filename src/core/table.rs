// --- File: src/core/table.rs
use crate::core::error::DistanceError;
use crate::core::types::{DistanceRecord, Word};
use std::collections::HashMap;
use tracing::debug;

/// An immutable lookup over per-word distance records.
///
/// Nothing is validated at construction. Duplicate subjects and missing
/// distances are only reported when a query runs into them.
#[derive(Debug, Clone, Default)]
pub struct DistanceTable {
    records: Vec<DistanceRecord>,
    /// Subject word -> positions in `records`. Keeps every duplicate.
    index: HashMap<Word, Vec<usize>>,
}

impl DistanceTable {
    pub fn new(records: impl IntoIterator<Item = DistanceRecord>) -> Self {
        let records: Vec<DistanceRecord> = records.into_iter().collect();
        let mut index: HashMap<Word, Vec<usize>> = HashMap::new();
        for (pos, record) in records.iter().enumerate() {
            index.entry(record.word.clone()).or_default().push(pos);
        }
        Self { records, index }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[DistanceRecord] {
        &self.records
    }

    /// True if at least one record has `word` as its subject.
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// Distance from `from` to `to`, read from `from`'s record only.
    /// The reverse direction is never consulted.
    pub fn distance(&self, from: &str, to: &str) -> Result<f64, DistanceError> {
        let record = match self.index.get(from).map(Vec::as_slice) {
            None | Some([]) => {
                return Err(DistanceError::WordNotFound { word: from.to_string() })
            }
            Some([pos]) => &self.records[*pos],
            Some(many) => {
                return Err(DistanceError::AmbiguousWord {
                    word: from.to_string(),
                    count: many.len(),
                })
            }
        };

        let distance = record.distances.get(to).copied().ok_or_else(|| {
            DistanceError::DistanceNotFound { from: from.to_string(), to: to.to_string() }
        })?;
        debug!(from, to, distance, "resolved distance");
        Ok(distance)
    }

    /// Same as [`distance`](Self::distance) for a pair given as a slice.
    pub fn distance_for_pair<S: AsRef<str>>(&self, pair: &[S]) -> Result<f64, DistanceError> {
        match pair {
            [from, to] => self.distance(from.as_ref(), to.as_ref()),
            _ => Err(DistanceError::InvalidPair { len: pair.len() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> DistanceTable {
        DistanceTable::new(vec![
            DistanceRecord::new("a").with("b", 0.2).with("c", 0.4),
            DistanceRecord::new("b").with("a", 0.2).with("c", 0.5),
            DistanceRecord::new("c").with("a", 0.4).with("b", 0.5),
        ])
    }

    #[test]
    fn finds_stored_distance() {
        let table = sample_table();
        assert_eq!(table.distance("a", "b"), Ok(0.2));
        assert_eq!(table.distance("c", "b"), Ok(0.5));
    }

    #[test]
    fn pair_lookup_delegates() {
        let table = sample_table();
        assert_eq!(table.distance_for_pair(&["a", "b"]), Ok(0.2));
        assert_eq!(table.distance_for_pair(&[String::from("b"), String::from("c")]), Ok(0.5));
    }

    #[test]
    fn lookup_only_reads_first_word_record() {
        let table = DistanceTable::new(vec![
            DistanceRecord::new("a").with("b", 0.2),
            DistanceRecord::new("b"),
        ]);
        assert_eq!(table.distance("a", "b"), Ok(0.2));
        assert_eq!(
            table.distance("b", "a"),
            Err(DistanceError::DistanceNotFound { from: "b".into(), to: "a".into() })
        );
    }

    #[test]
    fn missing_subject_is_reported() {
        let table = sample_table();
        assert_eq!(
            table.distance("z", "a"),
            Err(DistanceError::WordNotFound { word: "z".into() })
        );
        assert!(!table.contains("z"));
    }

    #[test]
    fn target_only_word_is_not_a_subject() {
        // "d" appears as a column but never as a row.
        let table = DistanceTable::new(vec![DistanceRecord::new("a").with("d", 1.0)]);
        assert_eq!(table.distance("a", "d"), Ok(1.0));
        assert_eq!(
            table.distance("d", "a"),
            Err(DistanceError::WordNotFound { word: "d".into() })
        );
    }

    #[test]
    fn duplicate_subject_is_ambiguous() {
        let table = DistanceTable::new(vec![
            DistanceRecord::new("a").with("b", 0.2),
            DistanceRecord::new("a").with("b", 0.3),
            DistanceRecord::new("b").with("a", 0.2),
        ]);
        assert_eq!(table.len(), 3);
        assert_eq!(
            table.distance("a", "b"),
            Err(DistanceError::AmbiguousWord { word: "a".into(), count: 2 })
        );
        // Other subjects are unaffected.
        assert_eq!(table.distance("b", "a"), Ok(0.2));
    }

    #[test]
    fn pair_must_have_two_words() {
        let table = sample_table();
        assert_eq!(
            table.distance_for_pair(&["a", "a", "a"]),
            Err(DistanceError::InvalidPair { len: 3 })
        );
        assert_eq!(
            table.distance_for_pair(&["a"]),
            Err(DistanceError::InvalidPair { len: 1 })
        );
        let empty: [&str; 0] = [];
        assert_eq!(table.distance_for_pair(&empty), Err(DistanceError::InvalidPair { len: 0 }));
    }

    #[test]
    fn zero_distance_is_a_value() {
        let table = DistanceTable::new(vec![DistanceRecord::new("a").with("a", 0.0)]);
        assert_eq!(table.distance("a", "a"), Ok(0.0));
    }

    #[test]
    fn table_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DistanceTable>();
    }
}
