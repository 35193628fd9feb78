//! Advisory validation of showing records.
//!
//! The scheduler runs on any parsed record, but some records render
//! oddly. This pass reports them so the caller can warn; it never removes
//! or rewrites anything. Detects:
//! - Finishing time not after starting time (in slot order)
//! - Minutes other than `:00` / `:30`
//! - Starting times before `08:00`, left of the visible timetable

use crate::models::{ClockTime, ShowingRecord};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation finding.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Finding category.
    pub kind: ValidationErrorKind,
    /// Position of the record in the checked slice.
    pub index: usize,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation findings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The showing does not finish after it starts.
    InvertedWindow,
    /// A time is not on a half-hour boundary.
    OffGridMinute,
    /// The showing starts before the first visible time.
    BeforeDayStart,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, index: usize, message: impl Into<String>) -> Self {
        Self {
            kind,
            index,
            message: message.into(),
        }
    }
}

/// Checks every record.
///
/// # Returns
/// `Ok(())` if nothing was found, `Err(findings)` with all findings.
pub fn validate_records(records: &[ShowingRecord]) -> ValidationResult {
    let mut errors = Vec::new();

    for (index, r) in records.iter().enumerate() {
        if r.finish_slot() <= r.start_slot() {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvertedWindow,
                index,
                format!(
                    "{} at {} on {}: finishes at {} but starts at {}",
                    r.movie_name, r.cinema_name, r.day, r.finishing_time, r.starting_time
                ),
            ));
        }

        for time in [r.starting_time, r.finishing_time] {
            if !time.on_half_hour() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::OffGridMinute,
                    index,
                    format!(
                        "{} at {} on {}: {} is not on a half hour",
                        r.movie_name, r.cinema_name, r.day, time
                    ),
                ));
            }
        }

        if r.start_slot() < ClockTime::DAY_START.slot() {
            errors.push(ValidationError::new(
                ValidationErrorKind::BeforeDayStart,
                index,
                format!(
                    "{} at {} on {}: starts at {}, before {}",
                    r.movie_name,
                    r.cinema_name,
                    r.day,
                    r.starting_time,
                    ClockTime::DAY_START
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Day;

    fn make(start: &str, finish: &str) -> ShowingRecord {
        ShowingRecord::new(
            "M",
            "Rex",
            Day::Monday,
            start.parse().unwrap(),
            finish.parse().unwrap(),
        )
    }

    #[test]
    fn test_valid_records() {
        let records = vec![make("08:00", "10:00"), make("22:30", "00:00")];
        assert!(validate_records(&records).is_ok());
    }

    #[test]
    fn test_inverted_window() {
        let errors = validate_records(&[make("12:00", "10:00")]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::InvertedWindow);
        assert_eq!(errors[0].index, 0);
    }

    #[test]
    fn test_midnight_start_is_inverted() {
        let errors = validate_records(&[make("00:00", "10:00")]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvertedWindow));
    }

    #[test]
    fn test_off_grid_minutes() {
        let errors = validate_records(&[make("10:15", "11:45")]).unwrap_err();
        assert_eq!(
            errors
                .iter()
                .filter(|e| e.kind == ValidationErrorKind::OffGridMinute)
                .count(),
            2
        );
    }

    #[test]
    fn test_before_day_start() {
        let errors = validate_records(&[make("10:00", "11:00"), make("07:30", "09:00")]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::BeforeDayStart);
        assert_eq!(errors[0].index, 1);
        assert!(errors[0].message.contains("07:30"));
    }
}
