//! Hardware asset inventory with a delimited flat-file record store.
//!
//! Records describe hardware assets (computers, printers, servers, ...)
//! with purchase and maintenance dates, cost and useful life. An
//! [`Inventory`] keeps them in insertion order in memory and mirrors every
//! mutation through a pluggable [`Backend`]; the shipped [`FileBackend`]
//! persists to a `;`-delimited text file. Depreciation, obsolescence and
//! pending-maintenance reports are derived from the in-memory set.
//!
//! # Quick Start
//!
//! ```ignore
//! use hwinv::prelude::*;
//!
//! let backend = FileBackend::new("inventory.csv");
//! let mut inventory = Inventory::open(&backend)?;
//!
//! let record = inventory.register(NewAsset {
//!     name: "ProLiant DL380".into(),
//!     manufacturer: "HPE".into(),
//!     kind: AssetKind::Server,
//!     purchase_date: Date::new(15, 3, 2021),
//!     purchase_value: 3000.0,
//!     useful_life_years: 5,
//! })?;
//!
//! inventory.register_maintenance(record.id, Date::new(10, 1, 2023))?;
//! inventory.close()?;
//! ```
//!
//! # Modules
//!
//! - [`inventory`] - records, codec, sorts, backends and the store
//!
//! # Feature Flags
//!
//! - `cli` - Enable the command-line interface binary
//! - `logging` - Enable library-level tracing (consumers provide their own subscriber)
//! - `full` - Enable all features

pub mod inventory;
mod logging;
pub mod prelude;

// Re-export the inventory types at the crate root for convenience
pub use inventory::{
    AssetKind, AssetRecord, Backend, Date, DepreciationLine, DepreciationReport, FileBackend,
    Inventory, MaintenanceDue, MemoryBackend, NewAsset, ParseError, RecordList, Result,
    StoreError, depreciation,
};
