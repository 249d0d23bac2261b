use crate::errors::{AppError, AppResult};

/// Expected hours must be a finite, non-negative number.
pub fn validate_expected(hours: f64) -> AppResult<f64> {
    if hours.is_finite() && hours >= 0.0 {
        Ok(hours)
    } else {
        Err(AppError::InvalidExpectedHours(format!(
            "{hours} (must be a non-negative number)"
        )))
    }
}

/// clap value parser for `--expected`.
pub fn parse_expected_hours(s: &str) -> Result<f64, String> {
    let hours: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{s}' is not a number"))?;
    validate_expected(hours).map_err(|e| e.to_string())
}
