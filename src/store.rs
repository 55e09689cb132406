// JSON snapshot persistence. Every write replaces the previous snapshot as a
// whole; nothing is merged and the write is not atomic.

use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::{debug, info};

use crate::config::StorageConfig;
use crate::error::StoreError;
use crate::model::ShareRecord;

pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(config: &StorageConfig) -> Self {
        JsonStore {
            path: config.json_path.clone(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrite the snapshot with `records`, as a JSON array indented with
    /// four spaces.
    pub fn write_all(&self, records: &[ShareRecord]) -> Result<(), StoreError> {
        let mut writer = BufWriter::new(File::create(&self.path)?);
        let mut ser =
            serde_json::Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(b"    "));
        records
            .serialize(&mut ser)
            .map_err(|e| StoreError::Io(e.into()))?;
        writer.flush()?;

        info!(path = %self.path.display(), count = records.len(), "snapshot written");
        Ok(())
    }

    /// Load the snapshot. A missing file is [`StoreError::NotFound`]; content
    /// that is not an array of records is [`StoreError::Corrupt`].
    pub fn read_all(&self) -> Result<Vec<ShareRecord>, StoreError> {
        let content = match fs::read(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StoreError::NotFound(self.path.clone()))
            }
            Err(e) => return Err(e.into()),
        };

        let records: Vec<ShareRecord> =
            serde_json::from_slice(&content).map_err(|source| StoreError::Corrupt {
                path: self.path.clone(),
                source,
            })?;
        debug!(path = %self.path.display(), count = records.len(), "snapshot loaded");
        Ok(records)
    }
}
