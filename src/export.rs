use chrono::NaiveDate;
use csv::{QuoteStyle, WriterBuilder};

use crate::error::RosterResult;
use crate::model::{Intern, Placement};

pub const CSV_MIME: &str = "text/csv;charset=utf-8";

const INTERN_COLUMNS: [&str; 11] = [
    "Name",
    "Email",
    "Activity Status",
    "Excel Submitted",
    "AI Chat",
    "Data Mining GC",
    "Speakers",
    "Performance",
    "Segregation",
    "Sheet Status",
    "Data Repurposed",
];

const PLACEMENT_COLUMNS: [&str; 7] = [
    "Name",
    "Email",
    "Department",
    "Mentor",
    "Start Date",
    "Status",
    "Score",
];

/// File name for a tracker export taken on the given day.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("interns-{}.csv", date.format("%Y-%m-%d"))
}

pub fn placement_export_file_name(date: NaiveDate) -> String {
    format!("placements-{}.csv", date.format("%Y-%m-%d"))
}

/// Serializes the given (already filtered) tracker rows. Every field is
/// quoted, embedded quotes are doubled, rows are joined by `\n` with no
/// trailing newline. Same rows in, byte-identical document out.
pub fn intern_csv(rows: &[Intern]) -> RosterResult<String> {
    let mut writer = quoting_writer();
    writer.write_record(INTERN_COLUMNS)?;

    for intern in rows {
        let speakers = intern.speakers_count.to_string();
        writer.write_record(&[
            intern.name.as_str(),
            intern.email.as_str(),
            intern.activity.display_name(),
            intern.excel_submitted.display_name(),
            yes_no(intern.ai_chat_added),
            yes_no(intern.data_mining_gc),
            speakers.as_str(),
            intern.performance.display_name(),
            intern
                .segregation
                .map(|s| s.display_name())
                .unwrap_or_default(),
            intern.sheet_status.display_name(),
            intern.data_repurposed.display_name(),
        ])?;
    }

    into_document(writer)
}

pub fn placement_csv(rows: &[Placement]) -> RosterResult<String> {
    let mut writer = quoting_writer();
    writer.write_record(PLACEMENT_COLUMNS)?;

    for placement in rows {
        let start_date = placement.start_date.format("%Y-%m-%d").to_string();
        let score = placement.score.to_string();
        writer.write_record(&[
            placement.name.as_str(),
            placement.email.as_str(),
            placement.department.display_name(),
            placement.mentor.as_str(),
            start_date.as_str(),
            placement.status.display_name(),
            score.as_str(),
        ])?;
    }

    into_document(writer)
}

fn quoting_writer() -> csv::Writer<Vec<u8>> {
    WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(Vec::new())
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

fn into_document(writer: csv::Writer<Vec<u8>>) -> RosterResult<String> {
    let mut bytes = writer.into_inner().map_err(|e| e.into_error())?;
    // The writer terminates every record; exports use join semantics instead.
    if bytes.last() == Some(&b'\n') {
        bytes.pop();
    }
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
