// Settlement amount: the share of the principal needed to close the debt.
use shared::models::{ResultCard, ResultLine};

use super::{round_amount, take_field, Calculator};
use crate::config::settings::{FormSettings, FormText, ResultLabels};
use crate::fields::{FieldErrors, FieldKind, FieldValues, FormField};
use crate::models::{SettlementInput, SettlementResult};
use crate::validation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SettlementField {
    PrincipalAmount,
    SettlementPercentage,
}

impl FormField for SettlementField {
    const ALL: &'static [Self] = &[SettlementField::PrincipalAmount, SettlementField::SettlementPercentage];

    fn name(self) -> &'static str {
        match self {
            SettlementField::PrincipalAmount => "principalAmount",
            SettlementField::SettlementPercentage => "settlementPercentage",
        }
    }

    fn kind(self) -> FieldKind {
        match self {
            SettlementField::PrincipalAmount => FieldKind::Amount,
            SettlementField::SettlementPercentage => FieldKind::Percentage,
        }
    }
}

/// The percentage is turned into a fraction first, so 100% multiplies by
/// exactly 1.0 and returns the principal unchanged.
pub fn compute_settlement(input: &SettlementInput) -> SettlementResult {
    let principal_amount = input.principal_amount.get() as f64;
    let fraction = input.settlement_percentage.get() / 100.0;
    let settlement_amount = round_amount(principal_amount * fraction);

    tracing::debug!(
        principal_amount = input.principal_amount.get(),
        settlement_percentage = input.settlement_percentage.get(),
        settlement_amount,
        "Computed settlement amount."
    );
    SettlementResult::new(settlement_amount)
}

#[derive(Debug, Clone, Default)]
pub struct SettlementCalculator;

impl Calculator for SettlementCalculator {
    type Field = SettlementField;
    type Input = SettlementInput;
    type Output = SettlementResult;

    fn name(&self) -> &str {
        "settlement"
    }

    fn validate(
        &self,
        values: &FieldValues<SettlementField>,
    ) -> Result<SettlementInput, FieldErrors<SettlementField>> {
        let mut errors = FieldErrors::new();
        let principal_amount = take_field(
            &mut errors,
            SettlementField::PrincipalAmount,
            validation::validate_amount(values.get(SettlementField::PrincipalAmount)),
        );
        let settlement_percentage = take_field(
            &mut errors,
            SettlementField::SettlementPercentage,
            validation::validate_percentage(values.get(SettlementField::SettlementPercentage)),
        );
        match (principal_amount, settlement_percentage) {
            (Some(principal_amount), Some(settlement_percentage)) => {
                Ok(SettlementInput { principal_amount, settlement_percentage })
            }
            _ => Err(errors),
        }
    }

    fn compute(&self, input: &SettlementInput) -> SettlementResult {
        compute_settlement(input)
    }

    fn form_text<'a>(&self, forms: &'a FormSettings) -> &'a FormText {
        &forms.settlement
    }

    fn result_card(&self, output: &SettlementResult, labels: &ResultLabels) -> ResultCard {
        ResultCard {
            title: labels.result_title.clone(),
            lines: Vec::new(),
            headline: ResultLine::new(labels.settlement_amount.as_str(), output.settlement_amount()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FieldError;
    use crate::models::Percentage;
    use std::num::NonZeroU64;

    fn input(principal_amount: u64, percentage: f64) -> SettlementInput {
        SettlementInput {
            principal_amount: NonZeroU64::new(principal_amount).unwrap(),
            settlement_percentage: Percentage::new(percentage).unwrap(),
        }
    }

    #[test]
    fn test_thirty_percent_of_ten_million() {
        let result = compute_settlement(&input(10_000_000, 30.0));
        assert_eq!(result.settlement_amount(), 3_000_000);
    }

    #[test]
    fn test_fractional_percentage_rounds() {
        // 12,345,678 * 12.5% = 1,543,209.75
        assert_eq!(compute_settlement(&input(12_345_678, 12.5)).settlement_amount(), 1_543_210);
        // 999 * 33.3% = 332.667
        assert_eq!(compute_settlement(&input(999, 33.3)).settlement_amount(), 333);
    }

    #[test]
    fn test_full_percentage_returns_principal() {
        for p in [1u64, 7, 1_000, 123_456_789, 9_007_199_254] {
            assert_eq!(compute_settlement(&input(p, 100.0)).settlement_amount(), p as i128);
        }
    }

    #[test]
    fn test_largest_accepted_principal() {
        let max = crate::validation::MAX_EXACT_INTEGER;
        assert_eq!(compute_settlement(&input(max, 100.0)).settlement_amount(), max as i128);
        assert_eq!(
            compute_settlement(&input(max - 1, 100.0)).settlement_amount(),
            (max - 1) as i128
        );
        // Half of an odd amount ends in .5 and rounds up.
        assert_eq!(
            compute_settlement(&input(max, 50.0)).settlement_amount(),
            4_503_599_627_370_496
        );
    }

    #[test]
    fn test_validate() {
        let calculator = SettlementCalculator;
        let values = FieldValues::new()
            .with(SettlementField::PrincipalAmount, "10000000")
            .with(SettlementField::SettlementPercentage, "30");
        assert_eq!(calculator.validate(&values), Ok(input(10_000_000, 30.0)));

        let values = FieldValues::new()
            .with(SettlementField::PrincipalAmount, "10,000,000")
            .with(SettlementField::SettlementPercentage, "1.2.3");
        let errors = calculator.validate(&values).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(&SettlementField::SettlementPercentage), Some(&FieldError::Invalid));
    }

    #[test]
    fn test_result_card_has_only_a_headline() {
        let settings = crate::config::CalculatorSettings::load_default().unwrap();
        let result = compute_settlement(&input(10_000_000, 30.0));
        let card = SettlementCalculator.result_card(&result, &settings.labels);
        assert!(card.lines.is_empty());
        assert_eq!(card.headline.label, "Số tiền cần tất toán");
        assert_eq!(card.headline.display, "3.000.000\u{a0}₫");
    }
}
