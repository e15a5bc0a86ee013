//! Flat-file persistence backend.
//!
//! The medium is a single UTF-8 text file: one header line for human
//! inspection, then one encoded record per line. Every mutating operation
//! reads the current contents and rewrites the whole file; there is no
//! in-place editing and no atomicity beyond the rewrite itself.

use std::fs;
use std::path::{Path, PathBuf};

use crate::logging;

use super::backend::Backend;
use super::codec::{FILE_HEADER, decode_record, encode_record};
use super::error::StoreError;
use super::list::RecordList;
use super::types::AssetRecord;

/// Backend persisting records to a delimited text file.
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    /// Create a backend for the given file path. The file does not have to
    /// exist yet; a missing file loads as an empty store and is created on
    /// the first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_records(&self) -> Vec<AssetRecord> {
        let Ok(content) = fs::read_to_string(&self.path) else {
            logging::debug!("no readable file at {}, starting empty", self.path.display());
            return Vec::new();
        };

        let mut records = Vec::new();
        // Line 1 is the header; blank lines are tolerated, undecodable
        // lines are skipped rather than failing the whole load.
        for (index, line) in content.lines().enumerate().skip(1) {
            if line.trim().is_empty() {
                continue;
            }
            match decode_record(line) {
                Ok(record) => records.push(record),
                Err(err) => {
                    logging::warn!(
                        "skipping line {} of {}: {}",
                        index + 1,
                        self.path.display(),
                        err
                    );
                }
            }
        }
        records
    }

    fn write_records(&self, records: &[AssetRecord]) -> Result<(), StoreError> {
        let mut content = String::from(FILE_HEADER);
        content.push('\n');
        for record in records {
            content.push_str(&encode_record(record));
            content.push('\n');
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, content)?;
        logging::debug!("wrote {} records to {}", records.len(), self.path.display());
        Ok(())
    }
}

impl Backend for FileBackend {
    fn load_all(&self) -> Result<Vec<AssetRecord>, StoreError> {
        let records = self.read_records();
        logging::info!("loaded {} records from {}", records.len(), self.path.display());
        Ok(records)
    }

    fn save_all(&self, records: &RecordList) -> Result<(), StoreError> {
        self.write_records(records.as_slice())
    }

    fn add_one(&self, record: &AssetRecord) -> Result<(), StoreError> {
        let mut records = self.read_records();
        records.push(record.clone());
        self.write_records(&records)
    }

    fn update_one(&self, record: &AssetRecord) -> Result<(), StoreError> {
        let mut records = self.read_records();
        let slot = records
            .iter_mut()
            .find(|held| held.id == record.id)
            .ok_or(StoreError::NotFound(record.id))?;
        *slot = record.clone();
        self.write_records(&records)
    }

    fn remove_one(&self, id: u32) -> Result<(), StoreError> {
        let mut records = self.read_records();
        let before = records.len();
        records.retain(|held| held.id != id);
        if records.len() == before {
            return Err(StoreError::NotFound(id));
        }
        self.write_records(&records)
    }

    fn find_by_id(&self, id: u32) -> Result<Option<AssetRecord>, StoreError> {
        Ok(self.read_records().into_iter().find(|held| held.id == id))
    }
}
