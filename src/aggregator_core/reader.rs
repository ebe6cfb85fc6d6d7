//! Streaming CSV reader for one submission file

use super::record::{ColumnMap, Submission};
use super::source::SourceFile;
use std::fs::File;

/// Streams `Submission` rows out of a single CSV file.
///
/// Holds the run's only open file handle; dropping the reader at the end
/// of a file's fold releases it before the next file is opened. Rows are
/// decoded one at a time, never buffered as a whole file.
pub struct SubmissionReader {
    rows: csv::StringRecordsIntoIter<File>,
    columns: ColumnMap,
    name: String,
}

impl SubmissionReader {
    /// Open a submission file and resolve its header row.
    ///
    /// An error here (unreadable file, undecodable header) means the
    /// engine skips the whole file and moves on.
    pub fn open(source: &SourceFile) -> Result<Self, csv::Error> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(&source.path)?;
        let columns = ColumnMap::from_headers(reader.headers()?);

        Ok(Self {
            rows: reader.into_records(),
            columns,
            name: source.name.clone(),
        })
    }
}

impl Iterator for SubmissionReader {
    type Item = Submission;

    fn next(&mut self) -> Option<Submission> {
        match self.rows.next()? {
            Ok(row) => Some(Submission::from_record(&self.columns, &row)),
            Err(e) => {
                // Rows already yielded stand; the stream cannot rewind.
                log::warn!("Abandoning {} mid-file: {}", self.name, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    fn source_for(path: &Path) -> SourceFile {
        SourceFile {
            path: path.to_path_buf(),
            name: path.file_name().unwrap().to_string_lossy().into_owned(),
        }
    }

    #[test]
    fn test_reads_rows_in_file_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("batch.csv");
        fs::write(
            &path,
            "ship_type,region,sleep_hours,rest_violations\n\
             tankerA,EU,6,1\n\
             bulkB,APAC,8,0\n",
        )
        .unwrap();

        let rows: Vec<Submission> = SubmissionReader::open(&source_for(&path))
            .unwrap()
            .collect();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].ship_type, "tankerA");
        assert_eq!(rows[1].ship_type, "bulkB");
        assert_eq!(rows[1].sleep_hours, 8.0);
    }

    #[test]
    fn test_extra_columns_are_tolerated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("batch.csv");
        fs::write(
            &path,
            "ship_type,region,sleep_hours,rest_violations,called_during_rest,port_intensity\n\
             tankerA,EU,6,1,yes,0.8\n",
        )
        .unwrap();

        let rows: Vec<Submission> = SubmissionReader::open(&source_for(&path))
            .unwrap()
            .collect();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].region, "EU");
    }

    #[test]
    fn test_missing_file_fails_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.csv");

        assert!(SubmissionReader::open(&source_for(&path)).is_err());
    }

    #[test]
    fn test_header_only_file_yields_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.csv");
        fs::write(&path, "ship_type,region,sleep_hours,rest_violations\n").unwrap();

        let rows: Vec<Submission> = SubmissionReader::open(&source_for(&path))
            .unwrap()
            .collect();

        assert!(rows.is_empty());
    }
}
