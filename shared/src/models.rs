use serde::{Deserialize, Serialize};

use crate::utils::number_format;

/// One labelled currency amount on a result card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultLine {
    pub label: String,
    pub amount: i128,
    pub display: String, // `amount` rendered with the display locale
}

impl ResultLine {
    pub fn new(label: impl Into<String>, amount: i128) -> Self {
        Self {
            label: label.into(),
            amount,
            display: number_format::format_currency(amount),
        }
    }
}

/// What the view layer draws after a successful submission: a title, the
/// detail lines, and one emphasised headline amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultCard {
    pub title: String,
    pub lines: Vec<ResultLine>,
    pub headline: ResultLine,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    Numeric,
    Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    pub label: String,
    pub placeholder: String,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormDescriptor {
    pub title: String,
    pub description: String,
    pub fields: Vec<FieldDescriptor>,
}
