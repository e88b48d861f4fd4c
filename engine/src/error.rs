use thiserror::Error;

/// Why a single form field was rejected. Every variant is recoverable and
/// scoped to the field it came from; the user-facing wording per field
/// lives in `config::settings::FieldMessages`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldError {
    #[error("value required")]
    Required,

    #[error("invalid value")]
    Invalid,

    #[error("must be greater than 0")]
    NotPositive,

    #[error("must be between 0 and 100")]
    OutOfRange,
}

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Unknown field '{field}' for the {calculator} calculator")]
    UnknownField { calculator: String, field: String },
}
