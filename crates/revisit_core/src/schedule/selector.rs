//! Due-note selection and display grouping.
//!
//! # Responsibility
//! - Decide, for a reference date, which stored notes are due for review.
//! - Group selected notes by subject and order them for presentation.
//!
//! # Invariants
//! - The reference date is always an explicit parameter; selection never
//!   reads a clock, so every call is reproducible in tests.
//! - A record whose date fails calendar conversion is excluded, never fatal.
//! - Grouping sorts subjects in ascending byte order and preserves the
//!   input-relative order of contents within each subject.

use super::ReviewSchedule;
use crate::model::date::{day_difference, Date};
use crate::model::record::NoteRecord;
use log::warn;
use std::collections::BTreeMap;

/// One display group: a subject and its note contents in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectGroup {
    pub subject: String,
    pub contents: Vec<String>,
}

/// Selects the records due on `reference`.
///
/// A record is included iff its age in days (creation date to `reference`)
/// is a member of `schedule`. Records with invalid dates fail closed: they
/// are dropped from the result with a warning, and the pass continues.
/// Output order is unspecified; callers re-sort via [`group_and_sort`].
pub fn select_due(
    reference: Date,
    records: &[NoteRecord],
    schedule: &ReviewSchedule,
) -> Vec<NoteRecord> {
    records
        .iter()
        .filter(|record| match day_difference(record.created_on, reference) {
            Ok(age) => schedule.is_due(age),
            Err(err) => {
                warn!(
                    "event=select_due module=schedule status=excluded subject={} error={}",
                    record.subject, err
                );
                false
            }
        })
        .cloned()
        .collect()
}

/// Identity pass-through with the same shape as [`select_due`], so callers
/// can treat "everything" and "due only" as interchangeable strategies.
pub fn select_all(records: &[NoteRecord]) -> Vec<NoteRecord> {
    records.to_vec()
}

/// Groups records by subject for display.
///
/// Distinct subjects come back sorted ascending by byte order; within a
/// subject, contents keep their relative order from the input sequence.
/// Empty input yields an empty sequence; rendering a "nothing due" message
/// is the caller's job, this component produces no display text.
pub fn group_and_sort(records: &[NoteRecord]) -> Vec<SubjectGroup> {
    let mut groups: BTreeMap<&str, Vec<String>> = BTreeMap::new();
    for record in records {
        groups
            .entry(record.subject.as_str())
            .or_default()
            .push(record.content.clone());
    }

    groups
        .into_iter()
        .map(|(subject, contents)| SubjectGroup {
            subject: subject.to_string(),
            contents,
        })
        .collect()
}
