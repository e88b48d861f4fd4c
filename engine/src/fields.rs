// Field identities shared by the normalizers, the validator and the form.
use std::collections::BTreeMap;
use std::fmt::Debug;

use shared::models::InputMode;

use crate::config::settings::{FieldMessages, MessageSettings};
use crate::error::FieldError;
use crate::normalizers::{AmountNormalizer, DayCountNormalizer, Normalizer, PercentageNormalizer};
use crate::validation;

/// The rule family a field belongs to. Picks its normalizer, its
/// validation rules and its messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Amount,
    DayCount,
    Percentage,
}

impl FieldKind {
    pub fn normalizer(self) -> &'static dyn Normalizer {
        match self {
            FieldKind::Amount => &AmountNormalizer,
            FieldKind::DayCount => &DayCountNormalizer,
            FieldKind::Percentage => &PercentageNormalizer,
        }
    }

    pub fn normalize(self, raw: &str) -> String {
        let normalizer = self.normalizer();
        let normalized = normalizer.normalize(raw);
        tracing::trace!(normalizer = normalizer.name(), raw, normalized = %normalized, "Normalized input.");
        normalized
    }

    /// Runs this kind's rules without keeping the parsed value.
    pub fn check(self, value: &str) -> Result<(), FieldError> {
        match self {
            FieldKind::Amount => validation::validate_amount(value).map(|_| ()),
            FieldKind::DayCount => validation::validate_day_count(value).map(|_| ()),
            FieldKind::Percentage => validation::validate_percentage(value).map(|_| ()),
        }
    }

    pub fn input_mode(self) -> InputMode {
        match self {
            FieldKind::Amount | FieldKind::DayCount => InputMode::Numeric,
            FieldKind::Percentage => InputMode::Decimal,
        }
    }

    pub fn messages(self, settings: &MessageSettings) -> &FieldMessages {
        match self {
            FieldKind::Amount => &settings.amount,
            FieldKind::DayCount => &settings.day_count,
            FieldKind::Percentage => &settings.percentage,
        }
    }
}

/// A named input of one calculator form.
pub trait FormField: Copy + Ord + Debug + Send + Sync + 'static {
    const ALL: &'static [Self];

    /// Wire name, as used by the view layer and in configuration.
    fn name(self) -> &'static str;

    fn kind(self) -> FieldKind;

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|field| field.name() == name)
    }
}

/// First violated rule per field.
pub type FieldErrors<F> = BTreeMap<F, FieldError>;

/// Current normalized text of every field of a form. Missing fields read as
/// empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValues<F: FormField> {
    values: BTreeMap<F, String>,
}

impl<F: FormField> FieldValues<F> {
    pub fn new() -> Self {
        Self { values: BTreeMap::new() }
    }

    pub fn get(&self, field: F) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, field: F, value: String) {
        self.values.insert(field, value);
    }

    /// Normalizes `raw` for `field` before storing it.
    pub fn with(mut self, field: F, raw: &str) -> Self {
        self.set(field, field.kind().normalize(raw));
        self
    }
}

impl<F: FormField> Default for FieldValues<F> {
    fn default() -> Self {
        Self::new()
    }
}
