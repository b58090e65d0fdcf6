use chrono::NaiveDate;

use crate::error::{internal::InternalError, AppError};

/// Parses a u64 value from String
///
/// # Arguments
/// - `value` - The String to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed String to `u64`
/// - `Err(AppError::InternalErr(ParseStringId))` - Failed to parse
///   the string as a u64
pub fn parse_u64_from_string(value: String) -> Result<u64, AppError> {
    let result = value
        .parse::<u64>()
        .map_err(|e| InternalError::ParseStringId { value, source: e })?;

    Ok(result)
}

/// Parses a `YYYY-MM-DD` date from client input.
///
/// # Arguments
/// - `value` - The date string to parse
///
/// # Returns
/// - `Ok(NaiveDate)` - Successfully parsed date
/// - `Err(AppError::BadRequest)` - The string is not a valid ISO date
pub fn parse_iso_date(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|e| {
        AppError::BadRequest(format!(
            "Invalid date format. Expected 'YYYY-MM-DD', got '{}': {}",
            value, e
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn parses_valid_iso_date() {
        let date = parse_iso_date("2026-08-03").unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2026, 8, 3));
    }

    #[test]
    fn rejects_malformed_date() {
        assert!(matches!(
            parse_iso_date("03/08/2026"),
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            parse_iso_date("2026-13-40"),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn parses_u64_and_reports_internal_error() {
        assert_eq!(parse_u64_from_string("42".to_string()).unwrap(), 42);
        assert!(matches!(
            parse_u64_from_string("not-a-number".to_string()),
            Err(AppError::InternalErr(_))
        ));
    }
}
