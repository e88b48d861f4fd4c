// Per-instance form state: current field text, live field errors, the last
// accepted result and a redraw counter for the view layer.
//
// Every calculator goes through the same pipeline here. Two forms never
// share state, not even two forms of the same calculator.
use std::collections::BTreeMap;
use std::sync::Arc;

use shared::models::{FieldDescriptor, FormDescriptor, ResultCard};

use crate::calculators::{Calculator, OverdueCalculator, SettlementCalculator};
use crate::config::CalculatorSettings;
use crate::error::{EngineError, FieldError};
use crate::fields::{FieldErrors, FieldValues, FormField};

pub type OverdueForm = CalculatorForm<OverdueCalculator>;
pub type SettlementForm = CalculatorForm<SettlementCalculator>;

#[derive(Debug, Clone)]
pub struct CalculatorForm<C: Calculator> {
    calculator: C,
    settings: Arc<CalculatorSettings>,
    values: FieldValues<C::Field>,
    errors: FieldErrors<C::Field>,
    result: Option<C::Output>,
    animation_key: u64,
}

impl OverdueForm {
    pub fn overdue(settings: Arc<CalculatorSettings>) -> Self {
        let calculator = OverdueCalculator::new(settings.overdue);
        Self::new(calculator, settings)
    }
}

impl SettlementForm {
    pub fn settlement(settings: Arc<CalculatorSettings>) -> Self {
        Self::new(SettlementCalculator, settings)
    }
}

impl<C: Calculator> CalculatorForm<C> {
    pub fn new(calculator: C, settings: Arc<CalculatorSettings>) -> Self {
        Self {
            calculator,
            settings,
            values: FieldValues::new(),
            errors: FieldErrors::new(),
            result: None,
            animation_key: 0,
        }
    }

    pub fn calculator(&self) -> &C {
        &self.calculator
    }

    /// Handles one keystroke: normalizes `raw`, stores it and re-validates
    /// the field. Returns the text the input should now display.
    pub fn input(&mut self, field: C::Field, raw: &str) -> &str {
        let normalized = field.kind().normalize(raw);
        match field.kind().check(&normalized) {
            Ok(()) => {
                self.errors.remove(&field);
            }
            Err(err) => {
                self.errors.insert(field, err);
            }
        }
        self.values.set(field, normalized);
        self.values.get(field)
    }

    pub fn input_by_name(&mut self, name: &str, raw: &str) -> Result<&str, EngineError> {
        let field = C::Field::from_name(name).ok_or_else(|| EngineError::UnknownField {
            calculator: self.calculator.name().to_string(),
            field: name.to_string(),
        })?;
        Ok(self.input(field, raw))
    }

    pub fn value(&self, field: C::Field) -> &str {
        self.values.get(field)
    }

    pub fn values(&self) -> &FieldValues<C::Field> {
        &self.values
    }

    pub fn error(&self, field: C::Field) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    /// The message shown beneath `field`, if it is currently rejected.
    pub fn error_message(&self, field: C::Field) -> Option<String> {
        self.error(field)
            .map(|err| field.kind().messages(&self.settings.messages).message(err))
    }

    pub fn errors(&self) -> &FieldErrors<C::Field> {
        &self.errors
    }

    /// Current messages keyed by wire field name.
    pub fn error_messages(&self) -> BTreeMap<&'static str, String> {
        self.errors
            .iter()
            .map(|(field, err)| {
                let message = field.kind().messages(&self.settings.messages).message(*err);
                (field.name(), message)
            })
            .collect()
    }

    /// Validates every field and, if all pass, replaces the current result.
    /// A rejected submission keeps whatever result was shown before.
    pub fn submit(&mut self) -> Result<&C::Output, FieldErrors<C::Field>> {
        match self.calculator.validate(&self.values) {
            Ok(input) => {
                let output = self.calculator.compute(&input);
                self.errors.clear();
                self.animation_key += 1;
                tracing::info!(
                    calculator = %self.calculator.name(),
                    animation_key = self.animation_key,
                    "Submission accepted."
                );
                let output: &C::Output = self.result.insert(output);
                Ok(output)
            }
            Err(errors) => {
                tracing::info!(
                    calculator = %self.calculator.name(),
                    rejected_fields = errors.len(),
                    "Submission rejected."
                );
                self.errors = errors.clone();
                Err(errors)
            }
        }
    }

    pub fn result(&self) -> Option<&C::Output> {
        self.result.as_ref()
    }

    pub fn result_card(&self) -> Option<ResultCard> {
        self.result
            .as_ref()
            .map(|output| self.calculator.result_card(output, &self.settings.labels))
    }

    /// Bumped on every accepted submission so the view can replay its
    /// result animation.
    pub fn animation_key(&self) -> u64 {
        self.animation_key
    }

    pub fn descriptor(&self) -> FormDescriptor {
        let text = self.calculator.form_text(&self.settings.forms);
        let fields = C::Field::ALL
            .iter()
            .map(|field| {
                let field_text = text.fields.get(field.name()).cloned().unwrap_or_default();
                FieldDescriptor {
                    name: field.name().to_string(),
                    label: field_text.label,
                    placeholder: field_text.placeholder,
                    input_mode: field.kind().input_mode(),
                }
            })
            .collect();
        FormDescriptor {
            title: text.title.clone(),
            description: text.description.clone(),
            fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculators::{OverdueField, SettlementField};
    use shared::models::InputMode;

    fn settings() -> Arc<CalculatorSettings> {
        Arc::new(CalculatorSettings::load_default().unwrap())
    }

    #[test]
    fn test_input_normalizes_and_returns_display_text() {
        let mut form = OverdueForm::overdue(settings());
        assert_eq!(form.input(OverdueField::DueAmount, "abc1,0a00"), "1,000");
        assert_eq!(form.input(OverdueField::OverdueDays, "5 ngày"), "5");
        assert_eq!(form.value(OverdueField::DueAmount), "1,000");
    }

    #[test]
    fn test_input_revalidates_the_edited_field() {
        let mut form = OverdueForm::overdue(settings());
        form.input(OverdueField::OverdueDays, "0");
        assert_eq!(form.error(OverdueField::OverdueDays), Some(FieldError::NotPositive));
        assert_eq!(
            form.error_message(OverdueField::OverdueDays).as_deref(),
            Some("Số ngày phải lớn hơn 0.")
        );
        // Untouched fields are not flagged by a keystroke elsewhere.
        assert_eq!(form.error(OverdueField::DueAmount), None);

        form.input(OverdueField::OverdueDays, "3");
        assert_eq!(form.error(OverdueField::OverdueDays), None);
    }

    #[test]
    fn test_submit_computes_and_bumps_animation_key() {
        let mut form = OverdueForm::overdue(settings());
        form.input(OverdueField::DueAmount, "1000000");
        form.input(OverdueField::OverdueDays, "5");

        let result = *form.submit().unwrap();
        assert_eq!(result.total_overdue(), 82_425);
        assert_eq!(form.animation_key(), 1);

        form.submit().unwrap();
        assert_eq!(form.animation_key(), 2);
    }

    #[test]
    fn test_rejected_submit_keeps_previous_result() {
        let mut form = SettlementForm::settlement(settings());
        form.input(SettlementField::PrincipalAmount, "10,000,000");
        form.input(SettlementField::SettlementPercentage, "30");
        form.submit().unwrap();

        form.input(SettlementField::SettlementPercentage, "100.01");
        let errors = form.submit().unwrap_err();
        assert_eq!(errors.get(&SettlementField::SettlementPercentage), Some(&FieldError::OutOfRange));
        assert_eq!(form.result().map(|r| r.settlement_amount()), Some(3_000_000));
        assert_eq!(form.animation_key(), 1);
        assert_eq!(
            form.error_messages().get("settlementPercentage").map(String::as_str),
            Some("Phần trăm phải từ 0 đến 100.")
        );
    }

    #[test]
    fn test_submit_on_empty_form_flags_every_field() {
        let mut form = SettlementForm::settlement(settings());
        let errors = form.submit().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(form.result().is_none());
        assert!(form.result_card().is_none());
        assert_eq!(
            form.error_message(SettlementField::PrincipalAmount).as_deref(),
            Some("Vui lòng nhập số tiền.")
        );
    }

    #[test]
    fn test_large_accepted_amounts_are_not_clamped() {
        let mut form = OverdueForm::overdue(settings());
        form.input(OverdueField::DueAmount, "1000000000000");
        form.input(OverdueField::OverdueDays, "10000000000");
        assert_eq!(form.values().get(OverdueField::DueAmount), "1,000,000,000,000");

        let result = *form.submit().unwrap();
        assert_eq!(result.total_overdue(), 164_850_000_000_000_000_000);
        assert_eq!(
            form.result_card().unwrap().headline.display,
            "164.850.000.000.000.000.000\u{a0}₫"
        );
    }

    #[test]
    fn test_amount_above_exact_integer_limit_is_invalid() {
        let mut form = SettlementForm::settlement(settings());
        form.input(SettlementField::PrincipalAmount, "9007199254740993");
        form.input(SettlementField::SettlementPercentage, "100");
        let errors = form.submit().unwrap_err();
        assert_eq!(errors.get(&SettlementField::PrincipalAmount), Some(&FieldError::Invalid));
        assert_eq!(
            form.error_message(SettlementField::PrincipalAmount).as_deref(),
            Some("Số tiền không hợp lệ.")
        );

        form.input(SettlementField::PrincipalAmount, "9007199254740991");
        assert_eq!(form.submit().unwrap().settlement_amount(), 9_007_199_254_740_991);
    }

    #[test]
    fn test_overdue_form_uses_configured_rates() {
        let form = OverdueForm::overdue(settings());
        assert_eq!(form.calculator().rates(), &settings().overdue);
        assert_eq!(form.calculator().name(), "overdue");
    }

    #[test]
    fn test_input_by_name() {
        let mut form = OverdueForm::overdue(settings());
        assert_eq!(form.input_by_name("dueAmount", "2500000").unwrap(), "2,500,000");

        let err = form.input_by_name("interestRate", "5").unwrap_err();
        assert!(matches!(err, EngineError::UnknownField { .. }));
        assert_eq!(err.to_string(), "Unknown field 'interestRate' for the overdue calculator");
    }

    #[test]
    fn test_forms_do_not_share_state() {
        let shared_settings = settings();
        let mut first = OverdueForm::overdue(shared_settings.clone());
        let second = OverdueForm::overdue(shared_settings);
        first.input(OverdueField::DueAmount, "1000");
        assert_eq!(second.value(OverdueField::DueAmount), "");
    }

    #[test]
    fn test_descriptor() {
        let form = SettlementForm::settlement(settings());
        let descriptor = form.descriptor();
        assert_eq!(descriptor.title, "Tính Tiền Tất Toán");
        assert_eq!(descriptor.fields.len(), 2);
        assert_eq!(descriptor.fields[0].name, "principalAmount");
        assert_eq!(descriptor.fields[0].placeholder, "ví dụ: 10,000,000");
        assert_eq!(descriptor.fields[0].input_mode, InputMode::Numeric);
        assert_eq!(descriptor.fields[1].name, "settlementPercentage");
        assert_eq!(descriptor.fields[1].input_mode, InputMode::Decimal);
    }
}
