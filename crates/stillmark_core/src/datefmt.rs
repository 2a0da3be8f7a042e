//! Display-date normalization shared by every list renderer.
//!
//! # Responsibility
//! - Convert loosely-typed frontmatter dates into `"Month Day, Year"` text.
//! - Keep one source of truth for the site's date display convention.
//!
//! # Invariants
//! - `format_display_date` is total: every input degrades to `""` instead
//!   of an error, and the function never panics.
//! - Month names are fixed en-US spellings, independent of host locale.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Parses the loose date shapes the content layer actually produces.
///
/// Accepted shapes, tried in order:
/// - RFC 3339 timestamps (`2024-01-20T10:30:00Z`), date portion kept.
/// - Naive timestamps (`2024-01-20T10:30:00`).
/// - Calendar dates (`2024-01-20`).
/// - Year-month (`2024-01`), day defaulting to 1.
/// - Bare numeric strings of 1-6 digits, read as January 1 of that year.
///   Quirk kept on purpose: `"12345"` is technically a parseable date and
///   must resolve to one, not to an error.
///
/// Calendar-invalid input (`2024-13-45`) and free text return `None`.
pub fn parse_flexible(input: &str) -> Option<NaiveDate> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    // chrono's `%Y` accepts signed years; the host convention does not.
    if trimmed.starts_with(['-', '+']) {
        return None;
    }

    if let Ok(stamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(stamp.date_naive());
    }
    if let Ok(stamp) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        return Some(stamp.date());
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }
    if let Some(date) = parse_year_month(trimmed) {
        return Some(date);
    }
    parse_bare_year(trimmed)
}

/// Formats an optional raw date as `"<Month name> <day>, <year>"`.
///
/// - `None` and empty/whitespace input return `""` without parsing.
/// - Unparseable input returns `""`.
/// - The day carries no leading zero (`"March 5, 2024"`).
pub fn format_display_date(raw: Option<&str>) -> String {
    let Some(text) = raw else {
        return String::new();
    };
    let Some(date) = parse_flexible(text) else {
        return String::new();
    };

    let month_name = MONTH_NAMES[date.month0() as usize];
    format!("{month_name} {}, {}", date.day(), date.year())
}

fn parse_year_month(input: &str) -> Option<NaiveDate> {
    let (year_text, month_text) = input.split_once('-')?;
    if month_text.contains('-') {
        return None;
    }
    let year: i32 = parse_digits(year_text)?;
    let month: u32 = parse_digits(month_text)?;
    NaiveDate::from_ymd_opt(year, month, 1)
}

fn parse_bare_year(input: &str) -> Option<NaiveDate> {
    if input.len() > 6 {
        return None;
    }
    let year: i32 = parse_digits(input)?;
    NaiveDate::from_ymd_opt(year, 1, 1)
}

fn parse_digits<T: std::str::FromStr>(input: &str) -> Option<T> {
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    input.parse().ok()
}
