//! Convenient re-exports for common usage patterns.
//!
//! # Example
//!
//! ```ignore
//! use hwinv::prelude::*;
//!
//! let backend = FileBackend::new("inventory.csv");
//! let mut inventory = Inventory::open(&backend)?;
//! ```

pub use crate::inventory::{
    AssetKind, AssetRecord, Backend, Date, DepreciationLine, DepreciationReport, FileBackend,
    Inventory, MaintenanceDue, MemoryBackend, NewAsset, ParseError, RecordList, Result,
    StoreError,
};

pub use crate::inventory::{
    FILE_HEADER, decode_date, decode_record, depreciation, encode_date, encode_record,
};
