// Field validation rules.
//
// Each validator checks its rules in order and reports the first one that
// fails. Nothing here panics: every parse failure is a `FieldError`.
//
// | kind       | rule 1    | rule 2                              | rule 3      |
// |------------|-----------|-------------------------------------|-------------|
// | amount     | non-empty | integer once `,` separators removed | > 0         |
// | day count  | non-empty | ASCII digits only                   | > 0         |
//
// Amounts and day counts above `MAX_EXACT_INTEGER` are `Invalid`: the
// calculators work in `f64`, which holds integers exactly only up to 2^53 - 1.
// | percentage | non-empty | floating-point number               | in (0, 100] |
use std::num::NonZeroU64;

use shared::utils::number_format;

use crate::error::FieldError;
use crate::models::Percentage;

/// Largest integer every `f64` step of the calculators represents exactly.
pub const MAX_EXACT_INTEGER: u64 = 9_007_199_254_740_991;

pub fn validate_amount(value: &str) -> Result<NonZeroU64, FieldError> {
    if value.is_empty() {
        return Err(FieldError::Required);
    }
    let parsed = number_format::strip_input_grouping(value)
        .parse::<i64>()
        .map_err(|_| FieldError::Invalid)?;
    let amount = u64::try_from(parsed)
        .ok()
        .and_then(NonZeroU64::new)
        .ok_or(FieldError::NotPositive)?;
    if amount.get() > MAX_EXACT_INTEGER {
        return Err(FieldError::Invalid);
    }
    Ok(amount)
}

pub fn validate_day_count(value: &str) -> Result<NonZeroU64, FieldError> {
    if value.is_empty() {
        return Err(FieldError::Required);
    }
    if !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FieldError::Invalid);
    }
    // Only digits remain, so a parse failure means overflow.
    let parsed = value.parse::<u64>().map_err(|_| FieldError::Invalid)?;
    let days = NonZeroU64::new(parsed).ok_or(FieldError::NotPositive)?;
    if days.get() > MAX_EXACT_INTEGER {
        return Err(FieldError::Invalid);
    }
    Ok(days)
}

pub fn validate_percentage(value: &str) -> Result<Percentage, FieldError> {
    if value.is_empty() {
        return Err(FieldError::Required);
    }
    let parsed = value.parse::<f64>().map_err(|_| FieldError::Invalid)?;
    if !parsed.is_finite() {
        return Err(FieldError::Invalid);
    }
    Percentage::new(parsed).ok_or(FieldError::OutOfRange)
}
