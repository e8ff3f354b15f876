//! Normalization and validation of prompt answers

use crate::error::CliError;

/// Currency codes are always sent and stored upper-cased.
pub fn normalize_currency_code(code: &str) -> String {
    code.trim().to_uppercase()
}

/// Parse a user-entered amount, rejecting anything that is not a finite number.
pub fn parse_amount(input: &str) -> Result<f64, CliError> {
    let trimmed = input.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CliError::InvalidAmount {
            input: trimmed.to_string(),
        }),
    }
}
