// Due date parsing and localized display

use crate::error::{Result, TodoError};
use chrono::{Locale, NaiveDate};

/// Stored form of a due date
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Long display form, e.g. "5 March 2024"
const DISPLAY_FORMAT: &str = "%-d %B %Y";

pub const DEFAULT_LOCALE: &str = "en_US";

/// Parse a `YYYY-MM-DD` string into a calendar date
///
/// Only the canonical zero-padded form is accepted; chrono alone would also
/// take `2024-3-5` or `+2024-03-05`.
pub fn parse_date(date: &str) -> Result<NaiveDate> {
    let invalid = || TodoError::InvalidDate(date.to_string());

    let parsed = NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|_| invalid())?;
    if parsed.format(DATE_FORMAT).to_string() != date {
        return Err(invalid());
    }
    Ok(parsed)
}

/// Resolve a locale identifier, accepting BCP-47 (`id-ID`) or POSIX (`id_ID`) spelling
pub fn parse_locale(id: &str) -> Result<Locale> {
    let posix = id.trim().replace('-', "_");
    Locale::try_from(posix.as_str()).map_err(|_| TodoError::UnknownLocale(id.to_string()))
}

/// Format a stored due date for display in `locale`
pub fn format_date(date: &str, locale: &str) -> Result<String> {
    let locale = parse_locale(locale)?;
    let midnight = parse_date(date)?
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| TodoError::InvalidDate(date.to_string()))?
        .and_utc();

    Ok(midnight.format_localized(DISPLAY_FORMAT, locale).to_string())
}
