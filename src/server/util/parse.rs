use chrono::NaiveDate;

use crate::{model::camp, server::error::AppError};

/// Parses the `theDate` search parameter.
///
/// # Arguments
/// - `value` - Date as `YYYY-MM-DD` or ISO 8601 date-time; the time of day is ignored
///
/// # Returns
/// - `Ok(NaiveDate)` - Successfully parsed date
/// - `Err(AppError::BadRequest)` - The value is not a recognizable date
pub fn parse_event_date(value: &str) -> Result<NaiveDate, AppError> {
    camp::parse_event_date(value)
        .ok_or_else(|| AppError::BadRequest(format!("Invalid date: {}", value)))
}
