//! Markdown export of grouped notes.
//!
//! # Responsibility
//! - Render the grouping output into a linked markdown document.
//! - Write export documents to disk.
//!
//! # Invariants
//! - One `###` heading per subject, one `-` list entry per content item.
//! - Entry links follow the vault layout: `subject/content.md`.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub mod markdown;

pub use markdown::{render_markdown, write_export};

pub type ExportResult<T> = Result<T, ExportError>;

/// Export document write failure.
#[derive(Debug)]
pub enum ExportError {
    Io { path: PathBuf, source: std::io::Error },
}

impl Display for ExportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot write export `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
        }
    }
}
