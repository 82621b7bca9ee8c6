//! Domain model for note review scheduling.
//!
//! # Responsibility
//! - Define the canonical value objects used by core business logic.
//! - Keep calendar arithmetic free of clock and time-zone dependencies.
//!
//! # Invariants
//! - `Date` is immutable once constructed.
//! - Every persisted record has exactly one creation date and one subject.

pub mod date;
pub mod record;
