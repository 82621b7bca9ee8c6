//! Line-oriented file implementation of the record store.
//!
//! # Responsibility
//! - Persist one record per line: `<year> <month> <day> <subject> <content>`.
//! - Enumerate the full store, skipping lines that do not parse.
//!
//! # Invariants
//! - Exactly four delimiter spaces precede the content; everything after the
//!   fourth space is content verbatim, embedded spaces included.
//! - A malformed line is skipped with a warning; fields are never merged
//!   across adjacent lines and a bad line never aborts the whole read.

use super::{RecordStore, StoreError, StoreResult};
use crate::model::date::Date;
use crate::model::record::NoteRecord;
use log::{info, warn};
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// File-backed record store in the legacy whitespace-delimited format.
pub struct LineRecordStore {
    path: PathBuf,
}

impl LineRecordStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn unavailable(&self, source: std::io::Error) -> StoreError {
        StoreError::Unavailable {
            path: self.path.clone(),
            source,
        }
    }
}

impl RecordStore for LineRecordStore {
    fn append(&self, record: &NoteRecord) -> StoreResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|err| self.unavailable(err))?;

        writeln!(file, "{}", encode_line(record)).map_err(|err| self.unavailable(err))?;

        info!(
            "event=store_append module=store status=ok subject={}",
            record.subject
        );
        Ok(())
    }

    fn load_all(&self) -> StoreResult<Vec<NoteRecord>> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            // First run: no store yet means no records, not a failure.
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!("event=store_load module=store status=ok records=0 reason=missing_file");
                return Ok(Vec::new());
            }
            Err(err) => return Err(self.unavailable(err)),
        };

        let mut records = Vec::new();
        let mut skipped = 0usize;
        for (index, line) in text.lines().enumerate() {
            if line.is_empty() {
                continue;
            }
            match parse_line(line) {
                Some(record) => records.push(record),
                None => {
                    skipped += 1;
                    warn!(
                        "event=store_load module=store status=skipped_line line={}",
                        index + 1
                    );
                }
            }
        }

        info!(
            "event=store_load module=store status=ok records={} skipped={}",
            records.len(),
            skipped
        );
        Ok(records)
    }
}

fn encode_line(record: &NoteRecord) -> String {
    format!(
        "{} {} {} {} {}",
        record.created_on.year,
        record.created_on.month,
        record.created_on.day,
        record.subject,
        record.content
    )
}

/// Splits at the first four spaces; the remainder is content verbatim.
///
/// Returns `None` when the leading fields are missing or non-numeric, which
/// covers lines with fewer than four spaces (their missing fields read back
/// as empty strings and fail integer parsing).
fn parse_line(line: &str) -> Option<NoteRecord> {
    let mut rest = line;
    let mut fields: [&str; 4] = [""; 4];
    for slot in fields.iter_mut() {
        let space = rest.find(' ')?;
        *slot = &rest[..space];
        rest = &rest[space + 1..];
    }

    let year = fields[0].parse::<i32>().ok()?;
    let month = fields[1].parse::<u32>().ok()?;
    let day = fields[2].parse::<u32>().ok()?;

    NoteRecord::new(Date::new(year, month, day), fields[3], rest).ok()
}
