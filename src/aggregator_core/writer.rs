//! Atomic JSON snapshot persistence
//!
//! Construct the snapshot first, persist it here as a separate step; the
//! two are never combined.

use super::snapshot::Snapshot;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum SnapshotWriteError {
    Io(std::io::Error),
    Serialization(serde_json::Error),
}

impl From<std::io::Error> for SnapshotWriteError {
    fn from(err: std::io::Error) -> Self {
        SnapshotWriteError::Io(err)
    }
}

impl From<serde_json::Error> for SnapshotWriteError {
    fn from(err: serde_json::Error) -> Self {
        SnapshotWriteError::Serialization(err)
    }
}

impl std::fmt::Display for SnapshotWriteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SnapshotWriteError::Io(e) => write!(f, "IO error: {}", e),
            SnapshotWriteError::Serialization(e) => write!(f, "Serialization error: {}", e),
        }
    }
}

impl std::error::Error for SnapshotWriteError {}

/// Writes the snapshot as pretty-printed JSON.
///
/// The document goes to a temporary sibling file first and is renamed
/// over the final path, so a crash mid-write never leaves a previous
/// snapshot corrupted.
pub struct SnapshotWriter {
    path: PathBuf,
}

impl SnapshotWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write(&self, snapshot: &Snapshot) -> Result<(), SnapshotWriteError> {
        let json = serde_json::to_string_pretty(snapshot)?;

        let mut tmp_name = OsString::from(self.path.as_os_str());
        tmp_name.push(".tmp");
        let tmp_path = PathBuf::from(tmp_name);

        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &self.path)?;

        log::debug!("Snapshot written to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator_core::accumulator::SubmissionAccumulator;
    use crate::aggregator_core::finalizer::build_snapshot;
    use chrono::{TimeZone, Utc};

    fn zero_snapshot() -> Snapshot {
        build_snapshot(
            &SubmissionAccumulator::new(),
            Utc.with_ymd_and_hms(2024, 2, 1, 12, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_write_and_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");

        let writer = SnapshotWriter::new(&path);
        writer.write(&zero_snapshot()).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

        assert_eq!(value["totals"]["submissions"], 0);
        assert_eq!(value["trends"], serde_json::json!([]));
        // Pretty-printed, not a single line
        assert!(raw.contains('\n'));
    }

    #[test]
    fn test_no_temp_residue_on_success() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");

        SnapshotWriter::new(&path).write(&zero_snapshot()).unwrap();

        let names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, vec!["data.json".to_string()]);
    }

    #[test]
    fn test_overwrite_replaces_previous_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        let writer = SnapshotWriter::new(&path);

        writer.write(&zero_snapshot()).unwrap();
        writer.write(&zero_snapshot()).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(serde_json::from_str::<serde_json::Value>(&raw).is_ok());
    }
}
