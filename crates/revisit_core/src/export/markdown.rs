//! Markdown document rendering for review exports.

use super::{ExportError, ExportResult};
use crate::schedule::SubjectGroup;
use log::info;
use std::fmt::Write as _;
use std::path::Path;

/// Renders grouped notes as a markdown document.
///
/// Layout: a `## <title>` heading, then per subject a `### [subject](subject)`
/// heading followed by one `- [content](subject/content.md)` entry per note,
/// with a blank line after each group. An empty group sequence renders only
/// the title heading.
pub fn render_markdown(title: &str, groups: &[SubjectGroup]) -> String {
    let mut doc = String::new();
    let _ = writeln!(doc, "## {title}");
    let _ = writeln!(doc);

    for group in groups {
        let _ = writeln!(doc, "### [{}]({})", group.subject, group.subject);
        for content in &group.contents {
            let _ = writeln!(doc, "- [{}]({}/{}.md)", content, group.subject, content);
        }
        let _ = writeln!(doc);
    }

    doc
}

/// Renders and writes an export document.
pub fn write_export(path: impl AsRef<Path>, title: &str, groups: &[SubjectGroup]) -> ExportResult<()> {
    let path = path.as_ref();
    std::fs::write(path, render_markdown(title, groups)).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    info!(
        "event=export_write module=export status=ok path={} groups={}",
        path.display(),
        groups.len()
    );
    Ok(())
}
