//! Hardware asset inventory: records, codec, ordered collection,
//! persistence backends and the store that ties them together.
//!
//! Records live in an insertion-ordered [`RecordList`]; the [`Inventory`]
//! store assigns identifiers and mirrors every mutation through a
//! [`Backend`]. The shipped [`FileBackend`] persists to a `;`-delimited
//! text file; [`MemoryBackend`] keeps everything in process memory.

mod backend;
mod codec;
mod error;
mod file;
mod list;
mod mem;
mod store;
mod types;

pub use backend::Backend;
pub use codec::{DELIMITER, FILE_HEADER, decode_date, decode_record, encode_date, encode_record};
pub use error::{ParseError, Result, StoreError};
pub use file::FileBackend;
pub use list::{RecordList, bubble_sort_by, insertion_sort_by};
pub use mem::MemoryBackend;
pub use store::{
    DepreciationLine, DepreciationReport, Inventory, MaintenanceDue, depreciation,
};
pub use types::{AssetKind, AssetRecord, Date, NewAsset};
