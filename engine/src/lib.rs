// Calculation engine for the overdue and settlement calculators.
//
// Raw keystrokes go through `normalizers`, the normalized text through
// `validation`, and validated input through `calculators`. `form` wires the
// three together per form instance for a view layer to drive.

pub mod calculators;
pub mod config;
pub mod error;
pub mod fields;
pub mod form;
pub mod models;
pub mod normalizers;
pub mod validation;

pub use calculators::{
    compute_overdue, compute_settlement, Calculator, OverdueCalculator, OverdueField,
    SettlementCalculator, SettlementField,
};
pub use config::CalculatorSettings;
pub use error::{EngineError, FieldError};
pub use fields::{FieldErrors, FieldKind, FieldValues, FormField};
pub use form::{CalculatorForm, OverdueForm, SettlementForm};
pub use models::{OverdueInput, OverdueResult, Percentage, SettlementInput, SettlementResult};
pub use normalizers::{normalize_amount, normalize_day_count, normalize_percentage};
