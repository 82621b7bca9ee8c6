//! Core scheduling and retrieval engine for spaced-repetition note review.
//! This crate is the single source of truth for business invariants.

pub mod config;
pub mod export;
pub mod logging;
pub mod model;
pub mod schedule;
pub mod service;
pub mod store;
pub mod vault;

pub use config::{load_or_init, ConfigError, ConfigResult, ReviewConfig};
pub use export::{render_markdown, write_export, ExportError, ExportResult};
pub use logging::{default_log_level, init_logging};
pub use model::date::{day_difference, Date, DateError, DateResult};
pub use model::record::{NoteRecord, RecordValidationError};
pub use schedule::{
    group_and_sort, select_all, select_due, ReviewSchedule, SubjectGroup, DUE_INTERVALS,
};
pub use service::note_service::{NoteService, ServiceError, ServiceResult};
pub use store::{LineRecordStore, RecordStore, StoreError, StoreResult};
pub use vault::{create_note_file, is_valid_name, VaultError, VaultResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
