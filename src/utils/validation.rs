//! Input validation utilities
//!
//! Field-level validation belongs to the presentation layer and runs
//! before payloads reach the store. These helpers back the `validator`
//! derives on the request types.

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

use crate::utils::error::{AppError, AppResult};

/// Upper bound for a break, in minutes (8 hours)
pub const MAX_BREAK_MINUTES: i64 = 480;

/// Regex for validating external employee codes (e.g. "EMP-0042")
static EMPLOYEE_CODE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_-]*$").unwrap());

/// Regex for validating department names
static DEPARTMENT_NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9 &_-]*$").unwrap());

/// Validate an external employee code
pub fn validate_employee_code(code: &str) -> Result<(), ValidationError> {
    if !code.is_empty() && code.len() <= 32 && EMPLOYEE_CODE_REGEX.is_match(code) {
        Ok(())
    } else {
        Err(ValidationError::new("employee_code"))
    }
}

/// Validate a department name
pub fn validate_department_name(name: &str) -> Result<(), ValidationError> {
    if !name.is_empty() && name.len() <= 100 && DEPARTMENT_NAME_REGEX.is_match(name) {
        Ok(())
    } else {
        Err(ValidationError::new("department_name"))
    }
}

/// Validate a break duration in minutes
///
/// Out-of-range values are a caller contract violation and must be
/// rejected before the attendance rules engine is invoked.
pub fn validate_break_minutes(minutes: i64) -> AppResult<()> {
    if (0..=MAX_BREAK_MINUTES).contains(&minutes) {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "break duration must be between 0 and {} minutes, got {}",
            MAX_BREAK_MINUTES, minutes
        )))
    }
}
