// File: src/persistence.rs
use crate::core::table::DistanceTable;
use crate::core::types::DistanceRecord;
use crate::error::LoadError;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::info;

/// On-disk form of a table. The lookup index is rebuilt on load.
#[derive(serde::Serialize, serde::Deserialize)]
struct Snapshot {
    records: Vec<DistanceRecord>,
}

/// Writes `table` next to `path` and renames it into place, so readers never
/// see a half-written snapshot.
pub fn save_snapshot(table: &DistanceTable, path: &Path) -> Result<(), LoadError> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let snapshot = Snapshot { records: table.records().to_vec() };

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(temp_file.as_file());
        bincode::serialize_into(&mut writer, &snapshot)?;
        writer.flush()?;
    }

    temp_file.persist(path)?;
    info!(path = %path.display(), records = snapshot.records.len(), "saved table snapshot");
    Ok(())
}

pub fn load_snapshot(path: &Path) -> Result<DistanceTable, LoadError> {
    let file = File::open(path)
        .map_err(|source| LoadError::Open { path: path.to_path_buf(), source })?;
    let snapshot: Snapshot = bincode::deserialize_from(BufReader::new(file))?;
    info!(path = %path.display(), records = snapshot.records.len(), "loaded table snapshot");
    Ok(DistanceTable::new(snapshot.records))
}

/// True for paths the CLI should read as a snapshot rather than delimited text.
pub fn is_snapshot_path(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("bin"))
}
