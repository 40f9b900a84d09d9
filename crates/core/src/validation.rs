//! Date rules shared by review submission and log generation.
//!
//! The reference date is passed in by the caller so the rules stay pure
//! and testable; binaries pass "today" from the wall clock.

use crate::error::CoreError;
use crate::types::ApiDate;

/// True when `date` is today or earlier.
pub fn is_past_or_present(date: ApiDate, today: ApiDate) -> bool {
    date <= today
}

/// Reject dates in the future.
///
/// Both review dates and log-generation dates must refer to a day that
/// has already started; the backend enforces the same rule.
pub fn validate_past_or_present(date: ApiDate, today: ApiDate) -> Result<(), CoreError> {
    if is_past_or_present(date, today) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Date {date} is in the future (today is {today})"
        )))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
