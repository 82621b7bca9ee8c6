//! Review CLI entry point.
//!
//! # Responsibility
//! - Read the clock once, then drive the core with an explicit reference
//!   date; the core never reads a clock itself.
//! - Print today's due notes and write the export documents.

use log::info;
use revisit_core::{
    default_log_level, init_logging, load_or_init, write_export, Date, LineRecordStore,
    NoteService, SubjectGroup,
};
use std::error::Error;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

const CONFIG_FILE: &str = "config.json";
const STORE_FILE: &str = "note.txt";
const EXPORT_FILE: &str = "export.md";
const ALL_EXPORT_FILE: &str = "allExport.md";

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!(">> error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    if let Err(err) = init_logging(default_log_level(), "./logs") {
        eprintln!(">> logging disabled: {err}");
    }

    let today = today_utc();
    let config = load_or_init(CONFIG_FILE)?;
    let service = NoteService::new(LineRecordStore::new(STORE_FILE));

    let due = service.due_grouped(today, &config.schedule())?;
    info!(
        "event=cli_run module=cli status=ok reference={} due_groups={}",
        today,
        due.len()
    );
    print_groups(&due);

    std::fs::create_dir_all(&config.export_dir)?;
    write_export(config.export_dir.join(EXPORT_FILE), &today.to_string(), &due)?;
    write_export(
        config.export_dir.join(ALL_EXPORT_FILE),
        "all",
        &service.all_grouped()?,
    )?;

    Ok(())
}

/// Today as a civil date, derived from UTC epoch days.
///
/// Whole-day division keeps this free of the time-zone-sensitive seconds
/// conversion that mis-subtracts around daylight-saving transitions.
fn today_utc() -> Date {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    Date::from_ordinal_day((secs / 86_400) as i64)
}

fn print_groups(groups: &[SubjectGroup]) {
    if groups.is_empty() {
        println!(">> no notes due today");
        return;
    }
    for group in groups {
        println!(">> {}", group.subject);
        for content in &group.contents {
            println!(">>   {content}");
        }
    }
}
