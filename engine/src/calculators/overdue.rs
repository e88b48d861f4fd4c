// Overdue amount: a daily average of the monthly due amount, a penalty
// multiplier on top, and the per-day penalty times the days overdue.
//
// The rounding is cumulative: each figure is rounded and the rounded value
// feeds the next multiplication. This deliberately differs from rounding
// each figure from unrounded intermediates, which can disagree by one in
// the total (1,234,567 over 7 days gives 142,464 here, 142,463 unrounded).
use shared::models::{ResultCard, ResultLine};

use super::{round_amount, take_field, Calculator};
use crate::config::settings::{FormSettings, FormText, OverdueRates, ResultLabels};
use crate::fields::{FieldErrors, FieldKind, FieldValues, FormField};
use crate::models::{OverdueInput, OverdueResult};
use crate::validation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OverdueField {
    DueAmount,
    OverdueDays,
}

impl FormField for OverdueField {
    const ALL: &'static [Self] = &[OverdueField::DueAmount, OverdueField::OverdueDays];

    fn name(self) -> &'static str {
        match self {
            OverdueField::DueAmount => "dueAmount",
            OverdueField::OverdueDays => "overdueDays",
        }
    }

    fn kind(self) -> FieldKind {
        match self {
            OverdueField::DueAmount => FieldKind::Amount,
            OverdueField::OverdueDays => FieldKind::DayCount,
        }
    }
}

/// Each reported figure is rounded before it feeds the next step, so the
/// displayed average and per-day amounts reproduce the displayed total.
pub fn compute_overdue(input: &OverdueInput, rates: &OverdueRates) -> OverdueResult {
    let due_amount = input.due_amount.get() as f64;
    let overdue_days = input.overdue_days.get() as f64;

    let average_daily_amount = round_amount(due_amount * rates.average_rate());
    let overdue_per_day = round_amount(average_daily_amount as f64 * rates.overdue_multiplier);
    let total_overdue = round_amount(overdue_per_day as f64 * overdue_days);

    tracing::debug!(
        due_amount = input.due_amount.get(),
        overdue_days = input.overdue_days.get(),
        average_daily_amount,
        overdue_per_day,
        total_overdue,
        "Computed overdue amount."
    );
    OverdueResult::new(average_daily_amount, overdue_per_day, total_overdue)
}

#[derive(Debug, Clone, Default)]
pub struct OverdueCalculator {
    rates: OverdueRates,
}

impl OverdueCalculator {
    pub fn new(rates: OverdueRates) -> Self {
        Self { rates }
    }

    pub fn rates(&self) -> &OverdueRates {
        &self.rates
    }
}

impl Calculator for OverdueCalculator {
    type Field = OverdueField;
    type Input = OverdueInput;
    type Output = OverdueResult;

    fn name(&self) -> &str {
        "overdue"
    }

    fn validate(
        &self,
        values: &FieldValues<OverdueField>,
    ) -> Result<OverdueInput, FieldErrors<OverdueField>> {
        let mut errors = FieldErrors::new();
        let due_amount = take_field(
            &mut errors,
            OverdueField::DueAmount,
            validation::validate_amount(values.get(OverdueField::DueAmount)),
        );
        let overdue_days = take_field(
            &mut errors,
            OverdueField::OverdueDays,
            validation::validate_day_count(values.get(OverdueField::OverdueDays)),
        );
        match (due_amount, overdue_days) {
            (Some(due_amount), Some(overdue_days)) => Ok(OverdueInput { due_amount, overdue_days }),
            _ => Err(errors),
        }
    }

    fn compute(&self, input: &OverdueInput) -> OverdueResult {
        compute_overdue(input, &self.rates)
    }

    fn form_text<'a>(&self, forms: &'a FormSettings) -> &'a FormText {
        &forms.overdue
    }

    fn result_card(&self, output: &OverdueResult, labels: &ResultLabels) -> ResultCard {
        ResultCard {
            title: labels.result_title.clone(),
            lines: vec![
                ResultLine::new(labels.average_daily_amount.as_str(), output.average_daily_amount()),
                ResultLine::new(labels.overdue_per_day.as_str(), output.overdue_per_day()),
            ],
            headline: ResultLine::new(labels.total_overdue.as_str(), output.total_overdue()),
        }
    }
}
