//! Note review use-case service.
//!
//! # Responsibility
//! - Provide the add/review entry points callers use.
//! - Delegate persistence to a `RecordStore` implementation.
//!
//! # Invariants
//! - Every retrieval reads the full store fresh; no cached view is
//!   authoritative across invocations.
//! - The reference date is always supplied by the caller, never read from a
//!   clock inside the service.

use crate::model::date::Date;
use crate::model::record::{NoteRecord, RecordValidationError};
use crate::schedule::{group_and_sort, select_all, select_due, ReviewSchedule, SubjectGroup};
use crate::store::{RecordStore, StoreError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error for note use-cases.
#[derive(Debug)]
pub enum ServiceError {
    /// Rejected note input (bad subject).
    Validation(RecordValidationError),
    /// Persistence-layer failure.
    Store(StoreError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<RecordValidationError> for ServiceError {
    fn from(value: RecordValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for ServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Use-case wrapper over an append-only record store.
pub struct NoteService<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> NoteService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Validates and appends one note.
    ///
    /// A failed append is reported, never retried; the caller decides
    /// whether to re-issue it.
    pub fn add_note(&self, created_on: Date, subject: &str, content: &str) -> ServiceResult<()> {
        let record = NoteRecord::new(created_on, subject, content)?;
        self.store.append(&record)?;
        Ok(())
    }

    /// Returns the notes due on `reference` under `schedule`.
    pub fn due_notes(
        &self,
        reference: Date,
        schedule: &ReviewSchedule,
    ) -> ServiceResult<Vec<NoteRecord>> {
        let records = self.store.load_all()?;
        Ok(select_due(reference, &records, schedule))
    }

    /// Returns every stored note regardless of age.
    pub fn all_notes(&self) -> ServiceResult<Vec<NoteRecord>> {
        let records = self.store.load_all()?;
        Ok(select_all(&records))
    }

    /// Due notes grouped by subject, ready for rendering.
    pub fn due_grouped(
        &self,
        reference: Date,
        schedule: &ReviewSchedule,
    ) -> ServiceResult<Vec<SubjectGroup>> {
        Ok(group_and_sort(&self.due_notes(reference, schedule)?))
    }

    /// All notes grouped by subject, ready for rendering.
    pub fn all_grouped(&self) -> ServiceResult<Vec<SubjectGroup>> {
        Ok(group_and_sort(&self.all_notes()?))
    }
}
