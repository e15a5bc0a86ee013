//! Persistence backend contract.

use super::error::StoreError;
use super::list::RecordList;
use super::types::AssetRecord;

/// Capability contract any storage medium can satisfy.
///
/// Every operation has a default implementation so a concrete backend may
/// support any subset: an unimplemented load yields no records and an
/// unimplemented mutation reports success without persisting anything.
/// Callers treat the defaults as "not supported", never as failures.
///
/// Backends are not required to be thread-safe; the store that drives them
/// is single-owner and callers add their own synchronization if they need
/// any.
pub trait Backend {
    /// Read every persisted record, in stored order. A missing or unreadable
    /// medium yields an empty set (first run), not an error.
    fn load_all(&self) -> Result<Vec<AssetRecord>, StoreError> {
        Ok(Vec::new())
    }

    /// Replace the medium's entire contents with `records`.
    fn save_all(&self, records: &RecordList) -> Result<(), StoreError> {
        let _ = records;
        Ok(())
    }

    /// Persist one new record.
    fn add_one(&self, record: &AssetRecord) -> Result<(), StoreError> {
        let _ = record;
        Ok(())
    }

    /// Replace the persisted record carrying the same id.
    /// Fails with [`StoreError::NotFound`] when that id is absent.
    fn update_one(&self, record: &AssetRecord) -> Result<(), StoreError> {
        let _ = record;
        Ok(())
    }

    /// Remove the persisted record with this id.
    /// Fails with [`StoreError::NotFound`] when that id is absent.
    fn remove_one(&self, id: u32) -> Result<(), StoreError> {
        let _ = id;
        Ok(())
    }

    /// Look up a record by id, returning a detached copy.
    fn find_by_id(&self, id: u32) -> Result<Option<AssetRecord>, StoreError> {
        let _ = id;
        Ok(None)
    }

    /// Release any resources held by the medium. Idempotent.
    fn shutdown(&self) {}
}
