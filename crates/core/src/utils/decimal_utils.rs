use std::str::FromStr;

use rust_decimal::Decimal;

use crate::errors::{Result, ValidationError};

/// Parses user-supplied numeric text into an exact decimal.
///
/// Surrounding whitespace is ignored. Empty input is reported as a missing
/// field. Plain (`12.50`) and scientific (`1.25e1`) notation are accepted;
/// anything else is invalid input.
pub fn parse_decimal(field: &str, raw: &str) -> Result<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField(field.to_string()).into());
    }
    Decimal::from_str(trimmed)
        .or_else(|e| {
            if trimmed.contains(['e', 'E']) {
                Decimal::from_scientific(trimmed)
            } else {
                Err(e)
            }
        })
        .map_err(|_| {
            ValidationError::InvalidInput(format!("{} must be a number, got '{}'", field, raw))
                .into()
        })
}

/// Parses a decimal that must be strictly greater than zero.
pub fn parse_positive_decimal(field: &str, raw: &str) -> Result<Decimal> {
    let value = parse_decimal(field, raw)?;
    if value <= Decimal::ZERO {
        return Err(ValidationError::InvalidInput(format!(
            "{} must be greater than zero, got {}",
            field, value
        ))
        .into());
    }
    Ok(value)
}

/// `lhs + rhs`, failing instead of panicking when the result leaves the
/// decimal range. `what` names the total in the error message.
pub fn checked_add(lhs: Decimal, rhs: Decimal, what: &str) -> Result<Decimal> {
    lhs.checked_add(rhs).ok_or_else(|| out_of_range(what))
}

/// `lhs - rhs`, failing instead of panicking when the result leaves the
/// decimal range.
pub fn checked_sub(lhs: Decimal, rhs: Decimal, what: &str) -> Result<Decimal> {
    lhs.checked_sub(rhs).ok_or_else(|| out_of_range(what))
}

fn out_of_range(what: &str) -> crate::errors::Error {
    ValidationError::InvalidInput(format!("{} exceeds the supported decimal range", what)).into()
}
