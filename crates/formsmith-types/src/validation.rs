use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Rule from the fixed validation catalog
///
/// Display text and emitted schema source are kept apart: `describe` feeds
/// the preview, `emit` feeds the code generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationRule {
    /// Non-empty string
    Required,
    /// Well-formed email address
    Email,
    /// Numeric value
    Number,
    /// Letters only (`^[a-zA-Z]+$`)
    LettersOnly,
}

impl ValidationRule {
    pub const LETTERS_ONLY_PATTERN: &'static str = "^[a-zA-Z]+$";

    /// Human-readable name shown under the previewed field
    pub fn describe(&self) -> &'static str {
        match self {
            ValidationRule::Required => "Required",
            ValidationRule::Email => "Email address",
            ValidationRule::Number => "Number",
            ValidationRule::LettersOnly => "Letters only",
        }
    }

    /// Error message reported by the generated schema
    pub fn message(&self) -> &'static str {
        match self {
            ValidationRule::Required => "This field is required",
            ValidationRule::Email => "Invalid email address",
            ValidationRule::Number => "Must be a number",
            ValidationRule::LettersOnly => "Must contain only letters",
        }
    }

    /// zod source text for this rule
    pub fn emit(&self) -> String {
        match self {
            ValidationRule::Required => {
                format!("z.string().min(1, {{ message: \"{}\" }})", self.message())
            }
            ValidationRule::Email => {
                format!("z.string().email({{ message: \"{}\" }})", self.message())
            }
            ValidationRule::Number => {
                format!("z.number({{ invalid_type_error: \"{}\" }})", self.message())
            }
            ValidationRule::LettersOnly => format!(
                "z.string().regex(/{}/, {{ message: \"{}\" }})",
                Self::LETTERS_ONLY_PATTERN,
                self.message()
            ),
        }
    }

    /// Category that selects this rule
    pub fn category(&self) -> ValidationCategory {
        match self {
            ValidationRule::Required => ValidationCategory::Required,
            ValidationRule::Email => ValidationCategory::Email,
            ValidationRule::Number => ValidationCategory::Number,
            ValidationRule::LettersOnly => ValidationCategory::Regex,
        }
    }
}

/// Choice offered by the validation selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationCategory {
    #[default]
    None,
    Required,
    Email,
    Number,
    Regex,
}

impl ValidationCategory {
    /// Selector order
    pub const ALL: [ValidationCategory; 5] = [
        ValidationCategory::None,
        ValidationCategory::Required,
        ValidationCategory::Email,
        ValidationCategory::Number,
        ValidationCategory::Regex,
    ];

    pub fn token(&self) -> &'static str {
        match self {
            ValidationCategory::None => "none",
            ValidationCategory::Required => "required",
            ValidationCategory::Email => "email",
            ValidationCategory::Number => "number",
            ValidationCategory::Regex => "regex",
        }
    }

    pub fn tokens() -> Vec<&'static str> {
        Self::ALL.iter().map(|c| c.token()).collect()
    }

    /// Selector caption
    pub fn caption(&self) -> &'static str {
        match self {
            ValidationCategory::None => "No validation",
            ValidationCategory::Required => "Required",
            ValidationCategory::Email => "Email",
            ValidationCategory::Number => "Number",
            ValidationCategory::Regex => "Regex (letters only)",
        }
    }

    /// Catalog rule for this category, `None` for "none"
    pub fn rule(&self) -> Option<ValidationRule> {
        match self {
            ValidationCategory::None => None,
            ValidationCategory::Required => Some(ValidationRule::Required),
            ValidationCategory::Email => Some(ValidationRule::Email),
            ValidationCategory::Number => Some(ValidationRule::Number),
            ValidationCategory::Regex => Some(ValidationRule::LettersOnly),
        }
    }

    /// Category currently selected for a field's rule
    pub fn of(rule: Option<ValidationRule>) -> Self {
        rule.map(|r| r.category()).unwrap_or_default()
    }

    /// Next category in selector order, wrapping around
    pub fn next(&self) -> Self {
        let pos = Self::ALL.iter().position(|c| c == self).unwrap_or(0);
        Self::ALL[(pos + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for ValidationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for ValidationCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.token() == s)
            .ok_or_else(|| Error::UnknownValidationCategory(s.to_string()))
    }
}
