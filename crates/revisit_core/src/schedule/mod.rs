//! Spaced-repetition review schedule.
//!
//! # Responsibility
//! - Hold the due-interval membership set that decides which notes surface.
//! - Provide the selection and grouping entry points.
//!
//! # Invariants
//! - The default schedule is the fixed, hand-picked interval set, kept as an
//!   explicit constant rather than a computed sequence.
//! - Membership is exact-match: a note is due on precisely those
//!   anniversaries and otherwise silent.

use std::collections::BTreeSet;

pub mod selector;

pub use selector::{group_and_sort, select_all, select_due, SubjectGroup};

/// Day offsets at which a note becomes due for review.
pub const DUE_INTERVALS: [i64; 10] = [0, 1, 2, 4, 7, 15, 30, 60, 120, 240];

/// Membership set over note ages, in whole days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewSchedule {
    days: BTreeSet<i64>,
}

impl ReviewSchedule {
    /// Builds a schedule from caller-provided day offsets.
    ///
    /// Duplicates collapse; order is irrelevant.
    pub fn from_days(days: impl IntoIterator<Item = i64>) -> Self {
        Self {
            days: days.into_iter().collect(),
        }
    }

    /// Returns whether a note of the given age is due.
    pub fn is_due(&self, age_days: i64) -> bool {
        self.days.contains(&age_days)
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl Default for ReviewSchedule {
    fn default() -> Self {
        Self::from_days(DUE_INTERVALS)
    }
}
