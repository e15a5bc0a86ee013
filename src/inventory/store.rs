//! Inventory store: the live record set and the backend that mirrors it.
//!
//! The store owns one [`RecordList`] (the authoritative in-memory set) and
//! borrows one [`Backend`]. Every mutation is applied in memory and then
//! mirrored through the backend before it counts as committed; when a
//! mirror write fails during registration, the live set is reloaded from
//! the backend so the two views never diverge. Read and report operations
//! work on the live set directly or on throwaway copies, never disturbing
//! its insertion order.

use crate::logging;

use super::backend::Backend;
use super::error::StoreError;
use super::list::RecordList;
use super::types::{AssetKind, AssetRecord, Date, NewAsset, clipped};

/// One row of a depreciation report.
#[derive(Debug, Clone, PartialEq)]
pub struct DepreciationLine {
    pub id: u32,
    pub name: String,
    pub purchase_value: f64,
    pub depreciation: f64,
    pub current_value: f64,
}

/// Straight-line depreciation across the whole inventory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DepreciationReport {
    pub lines: Vec<DepreciationLine>,
    pub total_purchase_value: f64,
    pub total_depreciation: f64,
    pub total_current_value: f64,
}

/// A record whose last maintenance lies at least the requested number of
/// whole months in the past.
#[derive(Debug, Clone, PartialEq)]
pub struct MaintenanceDue {
    pub record: AssetRecord,
    pub months_since: i32,
}

/// Straight-line depreciation of one record at the reference date.
///
/// Zero before the first purchase anniversary, the full purchase value once
/// the useful life has elapsed, linear in between.
pub fn depreciation(record: &AssetRecord, today: Date) -> f64 {
    let age = record.purchase_date.whole_years_until(today);
    if age <= 0 {
        return 0.0;
    }
    if i64::from(age) >= i64::from(record.useful_life_years) {
        return record.purchase_value;
    }
    record.purchase_value / f64::from(record.useful_life_years) * f64::from(age)
}

/// The inventory store.
///
/// Identifiers are assigned here, never by a backend or a caller: they start
/// at one past the highest id found at load time, grow monotonically, and
/// are never reused, not even when a registration fails after consuming one
/// or when a record is removed.
pub struct Inventory<'a> {
    records: RecordList,
    backend: &'a dyn Backend,
    next_id: u32,
}

impl<'a> Inventory<'a> {
    /// Open a store over `backend`, loading whatever it currently holds.
    ///
    /// The backend stays owned by the caller and must outlive the store.
    pub fn open(backend: &'a dyn Backend) -> Result<Self, StoreError> {
        let loaded = backend.load_all()?;
        let next_id = 1 + loaded.iter().map(|record| record.id).max().unwrap_or(0);
        let records = RecordList::from(loaded);
        logging::info!("inventory opened with {} records", records.len());
        Ok(Self {
            records,
            backend,
            next_id,
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Read-only view of the live set, in insertion order.
    pub fn records(&self) -> &RecordList {
        &self.records
    }

    /// Linear-scan lookup in the live set.
    pub fn find(&self, id: u32) -> Option<&AssetRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Register a new asset: validate, assign the next id, append to the
    /// live set, then mirror through the backend.
    ///
    /// Validation happens before any state changes. If the backend write
    /// fails, the live set is discarded and reloaded from the backend (the
    /// new record is gone) and the failure is returned; the consumed id is
    /// not handed out again.
    pub fn register(&mut self, asset: NewAsset) -> Result<AssetRecord, StoreError> {
        if asset.name.is_empty() || asset.manufacturer.is_empty() {
            return Err(StoreError::Validation(
                "name and manufacturer must not be empty".to_string(),
            ));
        }
        if !asset.purchase_value.is_finite() || asset.purchase_value <= 0.0 {
            return Err(StoreError::Validation(
                "purchase value must be positive".to_string(),
            ));
        }
        if asset.useful_life_years == 0 {
            return Err(StoreError::Validation(
                "useful life must be positive".to_string(),
            ));
        }

        let record = AssetRecord {
            id: self.next_id,
            name: clipped(&asset.name),
            manufacturer: clipped(&asset.manufacturer),
            kind: asset.kind,
            purchase_date: asset.purchase_date,
            purchase_value: asset.purchase_value,
            useful_life_years: asset.useful_life_years,
            last_maintenance_date: asset.purchase_date,
            is_obsolete: false,
        };
        self.next_id += 1;

        self.records.push(record.clone());
        if let Err(err) = self.backend.add_one(&record) {
            logging::warn!("backend rejected new record {}: {}", record.id, err);
            self.reload_from_backend();
            return Err(err);
        }
        Ok(record)
    }

    /// Update the last maintenance date of the record with this id and
    /// mirror the change. The result is whatever the backend reports; a
    /// backend without update support reports success.
    pub fn register_maintenance(&mut self, id: u32, date: Date) -> Result<(), StoreError> {
        let record = self
            .records
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or(StoreError::NotFound(id))?;
        record.last_maintenance_date = date;
        let updated = record.clone();
        self.backend.update_one(&updated)
    }

    /// Remove the record with this id from the live set and the backend.
    ///
    /// On a backend failure the live set is reloaded from the backend and
    /// the failure returned. The removed id is never reassigned.
    pub fn remove(&mut self, id: u32) -> Result<AssetRecord, StoreError> {
        let index = self
            .records
            .iter()
            .position(|record| record.id == id)
            .ok_or(StoreError::NotFound(id))?;
        let removed = self.records.remove_at(index).ok_or(StoreError::NotFound(id))?;
        if let Err(err) = self.backend.remove_one(id) {
            self.reload_from_backend();
            return Err(err);
        }
        Ok(removed)
    }

    /// Recompute every record's obsolescence flag against `today`: a record
    /// is obsolete once its anniversary-adjusted age reaches its useful
    /// life. Idempotent for a fixed `today`.
    pub fn recompute_obsolescence(&mut self, today: Date) {
        for record in self.records.iter_mut() {
            let age = record.purchase_date.whole_years_until(today);
            record.is_obsolete = i64::from(age) >= i64::from(record.useful_life_years);
        }
    }

    /// Detached copies of the records of one kind, in insertion order.
    pub fn by_kind(&self, kind: AssetKind) -> Vec<AssetRecord> {
        self.records
            .iter()
            .filter(|record| record.kind == kind)
            .cloned()
            .collect()
    }

    /// Copy of the inventory ordered by purchase date (insertion sort).
    pub fn sorted_by_purchase_date(&self) -> RecordList {
        let mut copy = self.records.clone();
        copy.insertion_sort_by(|a, b| a.purchase_date < b.purchase_date);
        copy
    }

    /// Copy of the inventory ordered by last maintenance date (bubble sort).
    pub fn sorted_by_maintenance_date(&self) -> RecordList {
        let mut copy = self.records.clone();
        copy.bubble_sort_by(|a, b| a.last_maintenance_date < b.last_maintenance_date);
        copy
    }

    /// Per-record straight-line depreciation at `today`, with totals.
    pub fn depreciation_report(&self, today: Date) -> DepreciationReport {
        let mut report = DepreciationReport::default();
        for record in self.records.iter() {
            let depreciated = depreciation(record, today);
            report.lines.push(DepreciationLine {
                id: record.id,
                name: record.name.clone(),
                purchase_value: record.purchase_value,
                depreciation: depreciated,
                current_value: record.purchase_value - depreciated,
            });
            report.total_purchase_value += record.purchase_value;
            report.total_depreciation += depreciated;
        }
        report.total_current_value = report.total_purchase_value - report.total_depreciation;
        report
    }

    /// Recompute obsolescence against `today`, then list the flagged
    /// records as detached copies.
    pub fn obsolete(&mut self, today: Date) -> Vec<AssetRecord> {
        self.recompute_obsolescence(today);
        self.records
            .iter()
            .filter(|record| record.is_obsolete)
            .cloned()
            .collect()
    }

    /// Records whose last maintenance lies at least `months_limit` whole
    /// months before `today`, each with its month count.
    pub fn pending_maintenance(&self, today: Date, months_limit: u32) -> Vec<MaintenanceDue> {
        self.records
            .iter()
            .filter_map(|record| {
                let months_since = record.last_maintenance_date.whole_months_until(today);
                (i64::from(months_since) >= i64::from(months_limit)).then(|| MaintenanceDue {
                    record: record.clone(),
                    months_since,
                })
            })
            .collect()
    }

    /// Save the live set through the backend, then clear it.
    ///
    /// Best effort: a save failure is returned but the store is torn down
    /// either way. The backend is left alive; whoever constructed it owns
    /// its lifetime.
    pub fn close(&mut self) -> Result<(), StoreError> {
        let result = self.backend.save_all(&self.records);
        if let Err(err) = &result {
            logging::warn!("final save failed: {}", err);
        }
        self.records.clear();
        result
    }

    fn reload_from_backend(&mut self) {
        self.records.clear();
        if let Ok(records) = self.backend.load_all() {
            self.records = RecordList::from(records);
        }
    }
}
