//! Shared helpers for CLI handlers

use crate::error::{HelpDeskError, Result};
use chrono::{DateTime, NaiveDate, Utc};
use std::env;
use std::path::PathBuf;

/// Name of the project data directory
pub const PROJECT_DIR: &str = ".helpdesk";

/// Locate the project root, walking up from the starting directory
///
/// When `project_dir` is given it is taken as-is. Otherwise the search
/// starts at the current directory and climbs until a `.helpdesk` directory
/// appears; if none is found the current directory is returned and the
/// storage layer reports the uninitialized state.
pub fn find_project_root(project_dir: Option<&str>) -> Result<PathBuf> {
    if let Some(dir) = project_dir {
        return Ok(PathBuf::from(dir));
    }

    let current = env::current_dir()?;
    let mut candidate = current.as_path();
    loop {
        if candidate.join(PROJECT_DIR).is_dir() {
            return Ok(candidate.to_path_buf());
        }
        match candidate.parent() {
            Some(parent) => candidate = parent,
            None => return Ok(current),
        }
    }
}

/// Parse a user-supplied date as RFC 3339 or `YYYY-MM-DD`
///
/// Bare dates are taken as midnight UTC.
pub fn parse_date(input: &str) -> Result<DateTime<Utc>> {
    let trimmed = input.trim();
    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(instant.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        let midnight = date.and_time(chrono::NaiveTime::MIN);
        return Ok(DateTime::from_naive_utc_and_offset(midnight, Utc));
    }
    Err(HelpDeskError::InvalidInput(format!(
        "invalid date '{input}': expected RFC 3339 or YYYY-MM-DD"
    )))
}

/// Format a timestamp for table output
#[must_use]
pub fn format_date(instant: DateTime<Utc>) -> String {
    instant.format("%Y-%m-%d %H:%M").to_string()
}
