use chrono::{NaiveDate, Utc};

/// Parses a match date from its source text.
/// Supports ISO dates, the day-first forms common in fixture listings,
/// and falls back to a free-form parse for anything else.
pub fn parse_match_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    // Try parsing as an ISO calendar date (e.g., "2024-08-16")
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(date);
    }

    // Try the two-digit-year slash form (e.g., "16/08/24"); this must run
    // before the four-digit form, which would otherwise read "24" as year 24
    if let Ok(date) = NaiveDate::parse_from_str(text, "%d/%m/%y") {
        return Some(date);
    }

    // Try the day-first slash form (e.g., "16/08/2024")
    if let Ok(date) = NaiveDate::parse_from_str(text, "%d/%m/%Y") {
        return Some(date);
    }

    // Try the day-first dash form (e.g., "16-08-2024")
    if let Ok(date) = NaiveDate::parse_from_str(text, "%d-%m-%Y") {
        return Some(date);
    }

    // Free-form fallback (e.g., "May 25, 2021"); parsed as UTC so a
    // date-only input cannot shift across a day boundary
    dateparser::parse_with_timezone(text, &Utc)
        .ok()
        .map(|dt| dt.date_naive())
}
