//! `lastmod` date handling
//!
//! All dates are calendar dates in local time, rendered as `YYYY-MM-DD`.
//! Resolution only ever moves a date forward.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::warn;

use crate::manifest::ToolRecord;

pub const LASTMOD_FORMAT: &str = "%Y-%m-%d";

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(LASTMOD_FORMAT).to_string()
}

/// Parse a manifest date. Accepts `YYYY-MM-DD`, RFC 3339 timestamps and
/// `YYYY-MM-DDTHH:MM:SS`; timestamps keep only their date part.
pub fn parse_manifest_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, LASTMOD_FORMAT) {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.date());
    }
    None
}

/// Local modification date of `path`, or `None` if it does not exist.
pub fn file_date(path: &Path) -> Option<NaiveDate> {
    let modified = match fs::metadata(path).and_then(|m| m.modified()) {
        Ok(modified) => modified,
        Err(e) if e.kind() == ErrorKind::NotFound => return None,
        Err(e) => {
            warn!("Cannot read modification time of {}: {}", path.display(), e);
            return None;
        }
    };
    Some(DateTime::<Local>::from(modified).date_naive())
}

/// Starting date for a tool: `updatedAt`, then `createdAt`, then `today`.
/// Values that are not dates are skipped.
pub fn manifest_date(tool: &ToolRecord, today: NaiveDate) -> NaiveDate {
    for (field, value) in [
        ("updatedAt", &tool.updated_at),
        ("createdAt", &tool.created_at),
    ] {
        let Some(value) = value else { continue };
        match parse_manifest_date(value) {
            Some(date) => return date,
            None => warn!(
                "Ignoring unparseable {} '{}' for tool {:?}",
                field, value, tool.slug
            ),
        }
    }
    today
}

/// Later of `current` and the modification date of `path`, if it exists.
pub fn advance(current: NaiveDate, path: &Path) -> NaiveDate {
    match file_date(path) {
        Some(date) if date > current => date,
        _ => current,
    }
}
