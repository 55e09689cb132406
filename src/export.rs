// CSV projection of the saved records.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::StorageConfig;
use crate::error::ExportError;
use crate::model::{ShareRecord, FIELD_NAMES};

#[derive(Debug, PartialEq, Eq)]
pub enum ExportOutcome {
    Written { path: PathBuf, rows: usize },
    /// Nothing was written because there were no records.
    NothingToExport,
}

pub struct CsvExporter {
    path: PathBuf,
}

impl CsvExporter {
    pub fn new(config: &StorageConfig) -> Self {
        CsvExporter {
            path: config.csv_path.clone(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write a header plus one row per record, overwriting the export file.
    /// An empty slice leaves the filesystem untouched.
    pub fn export_csv(&self, records: &[ShareRecord]) -> Result<ExportOutcome, ExportError> {
        if records.is_empty() {
            return Ok(ExportOutcome::NothingToExport);
        }

        let mut wtr = csv::Writer::from_path(&self.path)?;
        wtr.write_record(FIELD_NAMES)?;
        for record in records {
            wtr.write_record(record.values())?;
        }
        wtr.flush()?;

        info!(path = %self.path.display(), rows = records.len(), "CSV exported");
        Ok(ExportOutcome::Written {
            path: self.path.clone(),
            rows: records.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn exporter_in(dir: &TempDir) -> CsvExporter {
        CsvExporter::new(&StorageConfig {
            json_path: dir.path().join("shares.json"),
            csv_path: dir.path().join("shares.csv"),
        })
    }

    fn record(post: &str, by: &str) -> ShareRecord {
        ShareRecord {
            post_id: post.into(),
            shared_by: by.into(),
            user_id: "u".into(),
            shared_time: "2024-01-01T00:00:00+0000".into(),
        }
    }

    #[test]
    fn writes_header_and_one_line_per_record() {
        let dir = TempDir::new().unwrap();
        let exporter = exporter_in(&dir);
        let records = vec![record("1", "Ann"), record("1", "Bo"), record("2", "Cy")];

        let outcome = exporter.export_csv(&records).unwrap();
        assert_eq!(
            outcome,
            ExportOutcome::Written {
                path: exporter.path().to_path_buf(),
                rows: 3
            }
        );

        let text = std::fs::read_to_string(exporter.path()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Post ID,Shared By,User ID,Shared Time");
        assert_eq!(lines[2], "1,Bo,u,2024-01-01T00:00:00+0000");
    }

    #[test]
    fn header_does_not_depend_on_content() {
        let dir = TempDir::new().unwrap();
        let exporter = exporter_in(&dir);
        exporter
            .export_csv(&[record("Post ID", "Shared Time")])
            .unwrap();

        let text = std::fs::read_to_string(exporter.path()).unwrap();
        assert_eq!(
            text.lines().next(),
            Some("Post ID,Shared By,User ID,Shared Time")
        );
    }

    #[test]
    fn quotes_embedded_delimiters() {
        let dir = TempDir::new().unwrap();
        let exporter = exporter_in(&dir);
        exporter
            .export_csv(&[record("1", "Doe, \"Jane\"")])
            .unwrap();

        let text = std::fs::read_to_string(exporter.path()).unwrap();
        assert_eq!(
            text.lines().nth(1),
            Some("1,\"Doe, \"\"Jane\"\"\",u,2024-01-01T00:00:00+0000")
        );
    }

    #[test]
    fn empty_input_creates_no_file() {
        let dir = TempDir::new().unwrap();
        let exporter = exporter_in(&dir);

        assert_eq!(
            exporter.export_csv(&[]).unwrap(),
            ExportOutcome::NothingToExport
        );
        assert!(!exporter.path().exists());
    }
}
