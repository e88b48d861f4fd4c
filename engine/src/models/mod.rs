// Validated inputs and calculation results.
//
// Inputs carry their domain constraints in their types, so a calculator can
// only ever see positive amounts and a percentage in (0, 100]. Results have
// private fields and are only built by the calculators in this crate.
use std::num::NonZeroU64;

use serde::Serialize;

/// A settlement percentage in the half-open range (0, 100].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Percentage(f64);

impl Percentage {
    pub const MAX: f64 = 100.0;

    pub fn new(value: f64) -> Option<Self> {
        if value.is_finite() && value > 0.0 && value <= Self::MAX {
            Some(Percentage(value))
        } else {
            None
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverdueInput {
    pub due_amount: NonZeroU64,
    pub overdue_days: NonZeroU64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettlementInput {
    pub principal_amount: NonZeroU64,
    pub settlement_percentage: Percentage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverdueResult {
    average_daily_amount: i128,
    overdue_per_day: i128,
    total_overdue: i128,
}

impl OverdueResult {
    pub(crate) fn new(average_daily_amount: i128, overdue_per_day: i128, total_overdue: i128) -> Self {
        Self { average_daily_amount, overdue_per_day, total_overdue }
    }

    pub fn average_daily_amount(&self) -> i128 {
        self.average_daily_amount
    }

    pub fn overdue_per_day(&self) -> i128 {
        self.overdue_per_day
    }

    pub fn total_overdue(&self) -> i128 {
        self.total_overdue
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettlementResult {
    settlement_amount: i128,
}

impl SettlementResult {
    pub(crate) fn new(settlement_amount: i128) -> Self {
        Self { settlement_amount }
    }

    pub fn settlement_amount(&self) -> i128 {
        self.settlement_amount
    }
}
