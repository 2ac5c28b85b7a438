// File: src/loader.rs
//! Readers that turn text sources into core types.
//!
//! Distance tables are delimited text with a header row. The `word` column
//! names each row's subject and every other column names a target word:
//!
//! ```text
//! word,a,b,c
//! a,,0.2,0.4
//! b,0.2,,0.5
//! c,0.4,0.5,
//! ```
//!
//! Empty cells mean "no distance recorded". Word lists hold one word per line.
use crate::core::table::DistanceTable;
use crate::core::types::{DistanceRecord, Word};
use crate::error::LoadError;
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use tracing::info;

pub const WORD_COLUMN: &str = "word";
pub const DEFAULT_DELIMITER: u8 = b',';

/// Parses delimited distance rows into records. Cells are checked here so the
/// table only ever holds finite, non-negative distances.
pub fn read_distance_records<R: Read>(
    reader: R,
    delimiter: u8,
) -> Result<Vec<DistanceRecord>, LoadError> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let word_idx = headers
        .iter()
        .position(|h| h == WORD_COLUMN)
        .ok_or(LoadError::MissingWordColumn)?;

    let mut records = Vec::new();
    for row in rdr.records() {
        let row = row?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);
        let mut record = DistanceRecord::new(row.get(word_idx).unwrap_or_default());

        for (idx, (target, cell)) in headers.iter().zip(row.iter()).enumerate() {
            if idx == word_idx || cell.is_empty() {
                continue;
            }
            let distance = parse_distance(cell).ok_or_else(|| LoadError::InvalidDistance {
                word: record.word.clone(),
                target: target.to_string(),
                value: cell.to_string(),
                line,
            })?;
            record.distances.insert(target.to_string(), distance);
        }
        records.push(record);
    }
    Ok(records)
}

fn parse_distance(cell: &str) -> Option<f64> {
    cell.parse::<f64>().ok().filter(|d| d.is_finite() && *d >= 0.0)
}

pub fn load_distance_table(path: &Path, delimiter: u8) -> Result<DistanceTable, LoadError> {
    let file = open(path)?;
    let records = read_distance_records(BufReader::new(file), delimiter)?;
    info!(path = %path.display(), records = records.len(), "loaded distance table");
    Ok(DistanceTable::new(records))
}

/// One word per line. Blank lines are dropped and order is kept.
pub fn read_words<R: BufRead>(reader: R) -> Result<Vec<Word>, LoadError> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() {
            words.push(word.to_string());
        }
    }
    Ok(words)
}

pub fn load_words(path: &Path) -> Result<Vec<Word>, LoadError> {
    let words = read_words(BufReader::new(open(path)?))?;
    info!(path = %path.display(), words = words.len(), "loaded word list");
    Ok(words)
}

fn open(path: &Path) -> Result<File, LoadError> {
    File::open(path).map_err(|source| LoadError::Open { path: path.to_path_buf(), source })
}
