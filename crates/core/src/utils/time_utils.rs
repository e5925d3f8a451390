use chrono::{Local, NaiveDate};

use crate::constants::MAX_REPORT_YEAR;
use crate::errors::{Result, ValidationError};

/// Current calendar date in the local timezone.
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

/// Returns the half-open date range `[first day of month, first day of next month)`.
///
/// Rejects months outside 1-12 and years outside 1-9999.
pub fn month_bounds(month: u32, year: i32) -> Result<(NaiveDate, NaiveDate)> {
    if !(1..=12).contains(&month) {
        return Err(ValidationError::InvalidInput(format!(
            "month must be between 1 and 12, got {}",
            month
        ))
        .into());
    }
    if !(1..=MAX_REPORT_YEAR).contains(&year) {
        return Err(ValidationError::InvalidInput(format!(
            "year must be between 1 and {}, got {}",
            MAX_REPORT_YEAR, year
        ))
        .into());
    }

    let (next_month, next_year) = if month == 12 {
        (1, year + 1)
    } else {
        (month + 1, year)
    };

    let start = NaiveDate::from_ymd_opt(year, month, 1);
    let end = NaiveDate::from_ymd_opt(next_year, next_month, 1);
    match (start, end) {
        (Some(start), Some(end)) => Ok((start, end)),
        _ => Err(ValidationError::InvalidInput(format!("invalid period {}/{}", month, year)).into()),
    }
}
