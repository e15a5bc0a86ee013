//! In-process persistence backend.

use std::cell::RefCell;

use super::backend::Backend;
use super::error::StoreError;
use super::list::RecordList;
use super::types::AssetRecord;

/// Backend that keeps the persisted set in process memory.
///
/// Useful in tests and for running a store without touching the
/// filesystem. The cell is never borrowed reentrantly: every operation
/// takes and releases the borrow within its own call.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    records: RefCell<Vec<AssetRecord>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the backend with pre-existing records.
    pub fn with_records(records: Vec<AssetRecord>) -> Self {
        Self {
            records: RefCell::new(records),
        }
    }
}

impl Backend for MemoryBackend {
    fn load_all(&self) -> Result<Vec<AssetRecord>, StoreError> {
        Ok(self.records.borrow().clone())
    }

    fn save_all(&self, records: &RecordList) -> Result<(), StoreError> {
        *self.records.borrow_mut() = records.iter().cloned().collect();
        Ok(())
    }

    fn add_one(&self, record: &AssetRecord) -> Result<(), StoreError> {
        self.records.borrow_mut().push(record.clone());
        Ok(())
    }

    fn update_one(&self, record: &AssetRecord) -> Result<(), StoreError> {
        let mut records = self.records.borrow_mut();
        let slot = records
            .iter_mut()
            .find(|held| held.id == record.id)
            .ok_or(StoreError::NotFound(record.id))?;
        *slot = record.clone();
        Ok(())
    }

    fn remove_one(&self, id: u32) -> Result<(), StoreError> {
        let mut records = self.records.borrow_mut();
        let before = records.len();
        records.retain(|held| held.id != id);
        if records.len() == before {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    fn find_by_id(&self, id: u32) -> Result<Option<AssetRecord>, StoreError> {
        Ok(self.records.borrow().iter().find(|held| held.id == id).cloned())
    }
}
