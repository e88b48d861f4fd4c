// Calculator settings, loaded from the embedded default.json or a file on disk.
use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::error::{EngineError, FieldError};

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CalculatorSettings {
    pub version: String,
    pub overdue: OverdueRates,
    pub messages: MessageSettings,
    pub forms: FormSettings,
    pub labels: ResultLabels,
}

/// Constants of the overdue formula. The rate is stored as a percentage
/// (1.099 means 1.099%).
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct OverdueRates {
    pub average_rate_percent: f64,
    pub overdue_multiplier: f64,
}

impl OverdueRates {
    pub const AVERAGE_RATE_PERCENT: f64 = 1.099;
    pub const OVERDUE_MULTIPLIER: f64 = 1.5;

    pub fn average_rate(&self) -> f64 {
        self.average_rate_percent / 100.0
    }
}

impl Default for OverdueRates {
    fn default() -> Self {
        OverdueRates {
            average_rate_percent: Self::AVERAGE_RATE_PERCENT,
            overdue_multiplier: Self::OVERDUE_MULTIPLIER,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct MessageSettings {
    pub amount: FieldMessages,
    pub day_count: FieldMessages,
    pub percentage: FieldMessages,
}

/// One message per rejection reason. A reason without a configured
/// message falls back to the `FieldError` display text.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct FieldMessages {
    #[serde(default)]
    pub required: Option<String>,
    #[serde(default)]
    pub invalid: Option<String>,
    #[serde(default)]
    pub not_positive: Option<String>,
    #[serde(default)]
    pub out_of_range: Option<String>,
}

impl FieldMessages {
    pub fn message(&self, error: FieldError) -> String {
        let configured = match error {
            FieldError::Required => &self.required,
            FieldError::Invalid => &self.invalid,
            FieldError::NotPositive => &self.not_positive,
            FieldError::OutOfRange => &self.out_of_range,
        };
        configured.clone().unwrap_or_else(|| error.to_string())
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FormSettings {
    pub overdue: FormText,
    pub settlement: FormText,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FormText {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub fields: BTreeMap<String, FieldText>, // keyed by wire field name
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct FieldText {
    pub label: String,
    #[serde(default)]
    pub placeholder: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ResultLabels {
    pub result_title: String,
    pub average_daily_amount: String,
    pub overdue_per_day: String,
    pub total_overdue: String,
    pub settlement_amount: String,
}

impl Default for CalculatorSettings {
    /// The embedded default.json. It is checked by the tests below, so a
    /// failure here means the crate was built with a broken asset.
    fn default() -> Self {
        match Self::load_default() {
            Ok(settings) => settings,
            Err(e) => panic!("Failed to load embedded default configuration: {:#}", e),
        }
    }
}

impl CalculatorSettings {
    /// Settings shipped with the crate.
    pub fn load_default() -> Result<Self, anyhow::Error> {
        let config_str = include_str!("../../assets/config/default.json");
        Self::from_json_str(config_str).context("embedded default.json is invalid")
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, anyhow::Error> {
        let path = path.as_ref();
        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
        let settings = Self::from_json_str(&config_str)
            .with_context(|| format!("Failed to load config file '{}'", path.display()))?;
        tracing::info!(path = %path.display(), version = %settings.version, "Loaded calculator settings.");
        Ok(settings)
    }

    pub fn from_json_str(config_str: &str) -> Result<Self, anyhow::Error> {
        let settings: CalculatorSettings = serde_json::from_str(config_str)?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), EngineError> {
        let rates = &self.overdue;
        if !(rates.average_rate_percent.is_finite() && rates.average_rate_percent > 0.0) {
            return Err(EngineError::ConfigError(format!(
                "overdue.average_rate_percent must be a positive number, got {}",
                rates.average_rate_percent
            )));
        }
        if !(rates.overdue_multiplier.is_finite() && rates.overdue_multiplier > 0.0) {
            return Err(EngineError::ConfigError(format!(
                "overdue.overdue_multiplier must be a positive number, got {}",
                rates.overdue_multiplier
            )));
        }
        Ok(())
    }
}
