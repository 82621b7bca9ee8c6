//! Per-subject note folders on disk.
//!
//! # Responsibility
//! - Create `<root>/<subject>/<content>.md` files seeded with a heading.
//! - Reject subject/content values that are not safe as path components.
//!
//! # Invariants
//! - An existing note file is never overwritten.
//! - Name validation happens before any filesystem mutation.

use log::info;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

// Characters rejected by Windows filenames; kept as the portable superset.
static INVALID_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[<>:"/\\|?*]"#).expect("valid filename pattern"));

pub type VaultResult<T> = Result<T, VaultError>;

/// Vault filesystem error.
#[derive(Debug)]
pub enum VaultError {
    /// Name contains a character unusable in a path component.
    InvalidName(String),
    Io { path: PathBuf, source: std::io::Error },
}

impl Display for VaultError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidName(name) => {
                write!(f, "name `{name}` contains an invalid character (<>:\"/\\|?*)")
            }
            Self::Io { path, source } => {
                write!(f, "vault I/O failed at `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for VaultError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidName(_) => None,
            Self::Io { source, .. } => Some(source),
        }
    }
}

/// Returns whether a subject/content value is usable as a path component.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && !INVALID_NAME_RE.is_match(name)
}

/// Creates the per-subject folder and a seeded `<content>.md` note file.
///
/// Returns `Ok(true)` when the file was created, `Ok(false)` when it already
/// existed (nothing is touched in that case).
///
/// # Errors
/// - `InvalidName` when subject or content cannot form a path component.
/// - `Io` on directory or file creation failure.
pub fn create_note_file(root: impl AsRef<Path>, subject: &str, content: &str) -> VaultResult<bool> {
    if !is_valid_name(subject) {
        return Err(VaultError::InvalidName(subject.to_string()));
    }
    if !is_valid_name(content) {
        return Err(VaultError::InvalidName(content.to_string()));
    }

    let subject_dir = root.as_ref().join(subject);
    let note_path = subject_dir.join(format!("{content}.md"));
    if note_path.exists() {
        info!(
            "event=vault_create module=vault status=exists path={}",
            note_path.display()
        );
        return Ok(false);
    }

    std::fs::create_dir_all(&subject_dir).map_err(|source| VaultError::Io {
        path: subject_dir.clone(),
        source,
    })?;
    std::fs::write(&note_path, format!("## {content}\n\n")).map_err(|source| VaultError::Io {
        path: note_path.clone(),
        source,
    })?;

    info!(
        "event=vault_create module=vault status=ok path={}",
        note_path.display()
    );
    Ok(true)
}
