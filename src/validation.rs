//! Input validation for timeline items.
//!
//! Checks that every item carries a well-formed calendar-day interval
//! before lane assignment. Detects:
//! - Unparsable date strings
//! - Inverted ranges (`start > end`)
//!
//! Duplicate ids are not an error; lookups by id return the first match.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use thiserror::Error;

use crate::models::Item;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A malformed item interval.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Id of the offending item.
    pub item_id: String,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A date string could not be read as a calendar date.
    UnparsableDate,
    /// The start date is after the end date.
    InvertedRange,
}

impl ValidationError {
    pub(crate) fn unparsable_date(item_id: &str, field: &str, value: &str) -> Self {
        Self {
            kind: ValidationErrorKind::UnparsableDate,
            item_id: item_id.to_string(),
            message: format!("Item '{item_id}' has unparsable {field} date '{value}'"),
        }
    }

    pub(crate) fn inverted_range(item_id: &str, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            kind: ValidationErrorKind::InvertedRange,
            item_id: item_id.to_string(),
            message: format!("Item '{item_id}' starts on {start} after it ends on {end}"),
        }
    }
}

/// Parses a calendar date.
///
/// Accepts `YYYY-MM-DD`, a naive ISO datetime (`YYYY-MM-DDTHH:MM:SS`), or
/// RFC 3339. The time of day is dropped; offsets are not converted.
pub fn parse_date(item_id: &str, field: &str, value: &str) -> Result<NaiveDate, ValidationError> {
    let s = value.trim();
    if let Ok(date) = s.parse::<NaiveDate>() {
        return Ok(date);
    }
    if let Ok(dt) = s.parse::<NaiveDateTime>() {
        return Ok(dt.date());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.date_naive());
    }
    Err(ValidationError::unparsable_date(item_id, field, value))
}

/// Validates items before lane assignment.
///
/// # Returns
/// `Ok(())` if every range is well-formed, `Err(errors)` with one entry per
/// offending item, in input order.
pub fn validate_items(items: &[Item]) -> ValidationResult {
    let errors: Vec<ValidationError> = items
        .iter()
        .filter_map(|item| item.checked_range().err())
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_valid_items() {
        let items = vec![
            Item::new("A", d(2024, 1, 1), d(2024, 1, 3)),
            Item::new("B", d(2024, 1, 2), d(2024, 1, 2)),
        ];
        assert!(validate_items(&items).is_ok());
        assert!(validate_items(&[]).is_ok());
    }

    #[test]
    fn test_inverted_range() {
        let items = vec![
            Item::new("A", d(2024, 1, 1), d(2024, 1, 3)),
            Item::new("B", d(2024, 1, 5), d(2024, 1, 4)),
        ];
        let errors = validate_items(&items).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::InvertedRange);
        assert_eq!(errors[0].item_id, "B");
    }

    #[test]
    fn test_multiple_errors() {
        let items = vec![
            Item::new("X", d(2024, 2, 1), d(2024, 1, 1)),
            Item::new("OK", d(2024, 1, 1), d(2024, 1, 1)),
            Item::new("Y", d(2024, 3, 1), d(2024, 2, 1)),
        ];
        let errors = validate_items(&items).unwrap_err();
        let ids: Vec<&str> = errors.iter().map(|e| e.item_id.as_str()).collect();
        assert_eq!(ids, vec!["X", "Y"]);
    }

    #[test]
    fn test_duplicate_ids_allowed() {
        let items = vec![
            Item::new("A", d(2024, 1, 1), d(2024, 1, 3)),
            Item::new("A", d(2024, 1, 1), d(2024, 1, 3)),
        ];
        assert!(validate_items(&items).is_ok());
    }

    #[test]
    fn test_parse_date_forms() {
        assert_eq!(parse_date("i", "start", "2021-01-14").unwrap(), d(2021, 1, 14));
        assert_eq!(parse_date("i", "start", " 2021-01-14 ").unwrap(), d(2021, 1, 14));
        assert_eq!(
            parse_date("i", "start", "2021-01-14T23:59:59").unwrap(),
            d(2021, 1, 14)
        );
        assert_eq!(
            parse_date("i", "start", "2021-01-14T23:00:00+09:00").unwrap(),
            d(2021, 1, 14)
        );
    }

    #[test]
    fn test_parse_date_rejects() {
        for bad in ["", "2021-13-01", "2021-02-30", "14/01/2021", "yesterday"] {
            let err = parse_date("i", "end", bad).unwrap_err();
            assert_eq!(err.kind, ValidationErrorKind::UnparsableDate, "{bad}");
        }
    }

    #[test]
    fn test_error_display() {
        let err = ValidationError::inverted_range("B", d(2024, 1, 5), d(2024, 1, 4));
        assert_eq!(
            err.to_string(),
            "Item 'B' starts on 2024-01-05 after it ends on 2024-01-04"
        );
    }
}
