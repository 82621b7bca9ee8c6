//! Record persistence contracts.
//!
//! # Responsibility
//! - Define the append-only store interface used by core callers.
//! - Keep file-format details inside the implementation module.
//!
//! # Invariants
//! - `append` never reorders or rewrites existing records.
//! - `load_all` returns records in original insertion order.
//! - A missing store on first read is not an error; it is an empty sequence.

use crate::model::record::NoteRecord;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub mod line_store;

pub use line_store::LineRecordStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence error for the record store.
#[derive(Debug)]
pub enum StoreError {
    /// The medium exists but cannot be opened for the requested operation.
    Unavailable { path: PathBuf, source: std::io::Error },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable { path, source } => {
                write!(f, "record store `{}` unavailable: {source}", path.display())
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Unavailable { source, .. } => Some(source),
        }
    }
}

/// Append-only record storage with full enumeration.
pub trait RecordStore {
    /// Adds one record to the end of the store.
    fn append(&self, record: &NoteRecord) -> StoreResult<()>;

    /// Returns every persisted record in insertion order.
    fn load_all(&self) -> StoreResult<Vec<NoteRecord>>;
}
