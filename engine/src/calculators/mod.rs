// Calculators: validated field values in, a result record out.
pub mod overdue;
pub mod settlement;

use std::fmt::Debug;

use serde::Serialize;
use shared::models::ResultCard;

use crate::config::settings::{FormSettings, FormText, ResultLabels};
use crate::error::FieldError;
use crate::fields::{FieldErrors, FieldValues, FormField};

pub use overdue::{compute_overdue, OverdueCalculator, OverdueField};
pub use settlement::{compute_settlement, SettlementCalculator, SettlementField};

// Common trait for both calculators. `CalculatorForm` drives any
// implementation through normalize, validate, compute and render.
pub trait Calculator: Send + Sync {
    type Field: FormField;
    type Input: Debug + Clone;
    type Output: Debug + Clone + Serialize;

    fn name(&self) -> &str;

    /// Checks every field independently. Returns the typed input only when
    /// all of them pass.
    fn validate(
        &self,
        values: &FieldValues<Self::Field>,
    ) -> Result<Self::Input, FieldErrors<Self::Field>>;

    /// Total over validated input.
    fn compute(&self, input: &Self::Input) -> Self::Output;

    fn form_text<'a>(&self, forms: &'a FormSettings) -> &'a FormText;

    fn result_card(&self, output: &Self::Output, labels: &ResultLabels) -> ResultCard;
}

/// Nearest integer, halves rounded up. Calculator quantities are never
/// negative, where this matches `f64::round`. `i128` holds the largest
/// overdue total the validators let through (about 1.4e30).
pub(crate) fn round_amount(value: f64) -> i128 {
    value.round() as i128
}

/// Records a failed field and hands back the value of a passing one.
pub(crate) fn take_field<F: FormField, T>(
    errors: &mut FieldErrors<F>,
    field: F,
    result: Result<T, FieldError>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::debug!(field = field.name(), error = %err, "Field rejected.");
            errors.insert(field, err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_amount_half_up() {
        assert_eq!(round_amount(8242.5), 8243);
        assert_eq!(round_amount(8242.49), 8242);
        assert_eq!(round_amount(0.5), 1);
        assert_eq!(round_amount(0.0), 0);
    }
}
