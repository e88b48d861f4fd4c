// Calculator configuration: rates, user-facing messages and labels.
pub mod settings;

pub use settings::CalculatorSettings;
