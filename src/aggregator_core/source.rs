//! Submission directory enumeration

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// One submission file awaiting aggregation.
///
/// Only the path and name are held; contents are streamed by the reader
/// and nothing is retained once the file's rows are folded.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    pub name: String,
}

/// List every `.csv` file in `dir`, sorted by file name.
///
/// Filesystem listing order is not guaranteed, so the listing is sorted
/// lexicographically to keep fold order and run logs reproducible. The
/// caller is responsible for the directory existing; a read failure
/// propagates as `io::Error`.
pub fn enumerate_sources(dir: &Path) -> io::Result<Vec<SourceFile>> {
    let mut sources = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }

        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("csv") {
            continue;
        }

        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name.to_string(),
            None => continue,
        };

        sources.push(SourceFile { path, name });
    }

    sources.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(sources)
}
