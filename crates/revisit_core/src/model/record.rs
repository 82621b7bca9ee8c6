//! Note record domain model.
//!
//! # Responsibility
//! - Define the persisted note shape: creation date, subject, free text.
//! - Enforce the subject character restriction at construction time.
//!
//! # Invariants
//! - Subjects never contain whitespace; the line store uses a space as its
//!   field delimiter, so an embedded space would shift content into the
//!   wrong field on re-parse.
//! - Content never contains a line break; the line store is one record per
//!   line, so an embedded break would split the record on re-parse.
//! - Records are created once and never mutated; the store is append-only.

use crate::model::date::Date;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Validation error for note record construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordValidationError {
    EmptySubject,
    /// Subject contains a whitespace character reserved as field delimiter.
    SubjectContainsWhitespace(String),
    /// Content contains a line break reserved as record delimiter.
    ContentContainsLineBreak,
}

impl Display for RecordValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptySubject => write!(f, "subject cannot be empty"),
            Self::SubjectContainsWhitespace(subject) => {
                write!(f, "subject `{subject}` contains whitespace")
            }
            Self::ContentContainsLineBreak => write!(f, "content cannot span multiple lines"),
        }
    }
}

impl Error for RecordValidationError {}

/// One stored note: a creation date, a grouping subject, free-text content.
///
/// Subjects are not unique across records; many notes can share a subject
/// and are grouped by it for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteRecord {
    pub created_on: Date,
    pub subject: String,
    pub content: String,
}

impl NoteRecord {
    /// Creates a validated record.
    ///
    /// # Errors
    /// - `EmptySubject` when the subject has no characters.
    /// - `SubjectContainsWhitespace` when the subject would collide with the
    ///   field delimiter.
    /// - `ContentContainsLineBreak` when the content would collide with the
    ///   record delimiter.
    pub fn new(
        created_on: Date,
        subject: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Self, RecordValidationError> {
        let subject = subject.into();
        if subject.is_empty() {
            return Err(RecordValidationError::EmptySubject);
        }
        if subject.chars().any(char::is_whitespace) {
            return Err(RecordValidationError::SubjectContainsWhitespace(subject));
        }
        let content = content.into();
        if content.contains(['\n', '\r']) {
            return Err(RecordValidationError::ContentContainsLineBreak);
        }
        Ok(Self {
            created_on,
            subject,
            content,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{NoteRecord, RecordValidationError};
    use crate::model::date::Date;

    #[test]
    fn new_accepts_plain_subject() {
        let record = NoteRecord::new(Date::new(2024, 3, 3), "diet", "protein").unwrap();
        assert_eq!(record.subject, "diet");
        assert_eq!(record.content, "protein");
    }

    #[test]
    fn new_rejects_empty_subject() {
        let err = NoteRecord::new(Date::new(2024, 3, 3), "", "x").unwrap_err();
        assert_eq!(err, RecordValidationError::EmptySubject);
    }

    #[test]
    fn new_rejects_subject_with_space() {
        let err = NoteRecord::new(Date::new(2024, 3, 3), "two words", "x").unwrap_err();
        assert!(matches!(
            err,
            RecordValidationError::SubjectContainsWhitespace(subject) if subject == "two words"
        ));
    }

    #[test]
    fn content_may_contain_spaces() {
        let record =
            NoteRecord::new(Date::new(2024, 3, 3), "math", "mean value theorem").unwrap();
        assert_eq!(record.content, "mean value theorem");
    }

    #[test]
    fn new_rejects_content_with_line_break() {
        for content in ["first line\nsecond line", "trailing\r", "mixed\r\nbreak"] {
            let err = NoteRecord::new(Date::new(2024, 3, 3), "math", content).unwrap_err();
            assert_eq!(err, RecordValidationError::ContentContainsLineBreak);
        }
    }
}
