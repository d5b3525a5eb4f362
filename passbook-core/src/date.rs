//! Statement date handling: `DD/MM/YY` and `DD/MM/YYYY`.

use chrono::NaiveDate;

use crate::error::{Result, StatementError};

/// Parse a statement date such as `05/01/24` or `05/01/2024`.
///
/// Two-digit years are read as `20YY`; statements predating 2000 are not expected.
/// Anything other than exactly three numeric `/`-separated parts is rejected.
pub fn parse_statement_date(raw: &str) -> Result<NaiveDate> {
    let s = raw.trim();
    let parts: Vec<&str> = s.split('/').collect();
    if parts.len() != 3 {
        return Err(StatementError::MalformedDate(s.to_string()));
    }

    let numeric = |p: &str| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit());
    if !parts.iter().all(|p| numeric(*p)) {
        return Err(StatementError::MalformedDate(s.to_string()));
    }

    let malformed = || StatementError::MalformedDate(s.to_string());
    let day: u32 = parts[0].parse().map_err(|_| malformed())?;
    let month: u32 = parts[1].parse().map_err(|_| malformed())?;
    let year: i32 = match parts[2].len() {
        2 => 2000 + parts[2].parse::<i32>().map_err(|_| malformed())?,
        4 => parts[2].parse().map_err(|_| malformed())?,
        _ => return Err(malformed()),
    };

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| StatementError::InvalidDate(s.to_string()))
}

/// Inclusive range check where a missing bound is unbounded on that side.
pub fn within(date: NaiveDate, start: Option<NaiveDate>, end: Option<NaiveDate>) -> bool {
    start.is_none_or(|s| s <= date) && end.is_none_or(|e| date <= e)
}
