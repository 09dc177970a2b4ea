//! Decision date extraction.
//!
//! Dates are anchored on `Verkündet am:` or `vom` and written with full German
//! month names (`3. Januar 2020`). The month name is replaced by its number and
//! the result parsed as `%d. %m %Y`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::patterns::{DECISION_DATE_RE, STRICT_DATE_RE};

const DATE_FORMAT: &str = "%d. %m %Y";

/// German month names (plus the `Marz` transliteration) and their numbers.
const MONTHS: &[(&str, &str)] = &[
    ("januar", "01"),
    ("februar", "02"),
    ("märz", "03"),
    ("marz", "03"),
    ("april", "04"),
    ("mai", "05"),
    ("juni", "06"),
    ("juli", "07"),
    ("august", "08"),
    ("september", "09"),
    ("oktober", "10"),
    ("november", "11"),
    ("dezember", "12"),
];

/// How a matched date substring is turned into a calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateParsing {
    /// Rebuild `D. MM YYYY` from the captured day, month and year, ignoring
    /// the spacing found in the document.
    #[default]
    Lenient,
    /// Substitute the month inside the matched substring and parse it as is.
    /// The separators after the day dot and before the year must each be at
    /// least one whitespace character.
    Strict,
}

/// A decision date and its Unix timestamp (midnight, read as UTC).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecisionDate {
    pub date: NaiveDate,
    pub unix: i64,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateError {
    /// The anchored pattern matched but the substring is not a valid date.
    #[error("matched date {raw:?} could not be parsed as {format:?}")]
    Unparsable { raw: String, format: &'static str },
}

/// Find the first anchored decision date in `text`.
///
/// `Ok(None)` means no date phrase was found at all.
pub fn extract_decision_date(
    text: &str,
    mode: DateParsing,
) -> Result<Option<DecisionDate>, DateError> {
    let Some(caps) = DECISION_DATE_RE.captures(text) else {
        return Ok(None);
    };

    let raw = &caps["date"];
    let month_name = &caps["month"];
    // The pattern only admits names from the lookup table.
    let month = month_number(month_name).unwrap_or("00");

    let candidate = match mode {
        DateParsing::Lenient => format!("{}. {} {}", &caps["day"], month, &caps["year"]),
        DateParsing::Strict => raw.replacen(month_name, month, 1),
    };

    let unparsable = || DateError::Unparsable {
        raw: raw.to_string(),
        format: DATE_FORMAT,
    };

    // chrono reads a format space as "any whitespace, possibly none".
    if mode == DateParsing::Strict && !STRICT_DATE_RE.is_match(&candidate) {
        return Err(unparsable());
    }

    let date = NaiveDate::parse_from_str(&candidate, DATE_FORMAT).map_err(|_| unparsable())?;

    let unix = date
        .and_hms_opt(0, 0, 0)
        .map(|midnight| midnight.and_utc().timestamp())
        .ok_or_else(unparsable)?;

    Ok(Some(DecisionDate { date, unix }))
}

/// Two-digit month number for a German month name, case-insensitive.
pub fn month_number(name: &str) -> Option<&'static str> {
    let name = name.to_lowercase();
    MONTHS
        .iter()
        .find(|(month, _)| *month == name)
        .map(|(_, number)| *number)
}
