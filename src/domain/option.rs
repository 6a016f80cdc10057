//! SelectOption - Label/Code Pairs for Select Controls

use serde::{Deserialize, Serialize};

/// A fixed label -> code mapping offered by a select control
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    /// Display label
    pub label: String,
    /// Internal code stored on records
    pub value: String,
}

/// Option for the category select
pub type CategoryOption = SelectOption;

/// Option for the country select
pub type CountryOption = SelectOption;

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Default category set
pub fn default_categories() -> Vec<CategoryOption> {
    vec![
        SelectOption::new("Technology", "technology"),
        SelectOption::new("Education", "education"),
        SelectOption::new("Health", "health"),
        SelectOption::new("Finance", "finance"),
        SelectOption::new("Entertainment", "entertainment"),
    ]
}

/// Default country set
pub fn default_countries() -> Vec<CountryOption> {
    vec![
        SelectOption::new("Azerbaijan", "az"),
        SelectOption::new("Turkey", "tr"),
        SelectOption::new("USA", "us"),
    ]
}

/// Whether `code` is one of the option codes
pub fn contains_code(options: &[SelectOption], code: &str) -> bool {
    options.iter().any(|o| o.value == code)
}

/// Label for a code, if known
pub fn label_for<'a>(options: &'a [SelectOption], code: &str) -> Option<&'a str> {
    options
        .iter()
        .find(|o| o.value == code)
        .map(|o| o.label.as_str())
}
