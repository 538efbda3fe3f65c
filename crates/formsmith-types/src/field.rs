use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{Error, ValidationRule};

/// Placeholder options given to every new option-bearing field
pub const DEFAULT_OPTIONS: [&str; 2] = ["Option 1", "Option 2"];

/// Stable identifier of a field within a form document
///
/// Identifiers double as object keys in the generated schema, so generators
/// should produce valid JavaScript identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldId(String);

impl FieldId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Identifier of the `index`-th choice of a radio group (`<id>-<index>`)
    pub fn choice(&self, index: usize) -> String {
        format!("{}-{}", self.0, index)
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for FieldId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for FieldId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for FieldId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Field type offered by the palette
///
/// The serialized token is also the value written into the generated
/// `type="..."` attribute for plain inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Single-line text input
    Text,
    /// Multi-line text input
    Textarea,
    /// Single choice from a drop-down list
    Select,
    /// Numeric input
    Number,
    /// Email address input
    Email,
    /// Boolean checkbox
    Checkbox,
    /// Group of radio buttons
    Radio,
}

impl FieldKind {
    /// Palette order
    pub const ALL: [FieldKind; 7] = [
        FieldKind::Text,
        FieldKind::Textarea,
        FieldKind::Select,
        FieldKind::Number,
        FieldKind::Email,
        FieldKind::Checkbox,
        FieldKind::Radio,
    ];

    pub fn token(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Textarea => "textarea",
            FieldKind::Select => "select",
            FieldKind::Number => "number",
            FieldKind::Email => "email",
            FieldKind::Checkbox => "checkbox",
            FieldKind::Radio => "radio",
        }
    }

    pub fn tokens() -> Vec<&'static str> {
        Self::ALL.iter().map(|k| k.token()).collect()
    }

    /// Whether fields of this kind carry an option list
    pub fn has_options(&self) -> bool {
        matches!(self, FieldKind::Select | FieldKind::Radio)
    }

    pub fn default_label(&self) -> String {
        format!("New {} field", self.token())
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for FieldKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.token() == s)
            .ok_or_else(|| Error::UnknownFieldKind(s.to_string()))
    }
}

/// One configurable input of the form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub id: FieldId,
    pub kind: FieldKind,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<ValidationRule>,
}

impl Field {
    /// Create a field with the palette defaults for `kind`
    pub fn new(id: FieldId, kind: FieldKind) -> Self {
        let options = kind
            .has_options()
            .then(|| DEFAULT_OPTIONS.iter().map(|o| o.to_string()).collect());

        Self {
            id,
            kind,
            label: kind.default_label(),
            options,
            validation: None,
        }
    }

    pub fn options(&self) -> &[String] {
        self.options.as_deref().unwrap_or(&[])
    }

    /// Options joined back into the newline-delimited editing form
    pub fn options_text(&self) -> String {
        self.options().join("\n")
    }

    /// Return a copy with `patch` merged in
    ///
    /// An options patch is dropped for kinds without an option list.
    pub fn patched(&self, patch: &FieldPatch) -> Field {
        let mut next = self.clone();
        if let Some(label) = &patch.label {
            next.label = label.clone();
        }
        if let Some(options) = &patch.options
            && self.kind.has_options()
        {
            next.options = Some(options.clone());
        }
        if let Some(validation) = &patch.validation {
            next.validation = *validation;
        }
        next
    }
}

/// Partial changes merged into a field by the builder
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    /// `Some(None)` clears the rule; serialized as `null`
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present_validation"
    )]
    pub validation: Option<Option<ValidationRule>>,
}

impl FieldPatch {
    pub fn label(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::default()
        }
    }

    /// Options given as newline-delimited text
    pub fn options_text(text: &str) -> Self {
        Self {
            options: Some(split_options(text)),
            ..Self::default()
        }
    }

    pub fn validation(rule: Option<ValidationRule>) -> Self {
        Self {
            validation: Some(rule),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.label.is_none() && self.options.is_none() && self.validation.is_none()
    }
}

/// A present `validation` key, `null` included, is a change
fn present_validation<'de, D>(
    deserializer: D,
) -> Result<Option<Option<ValidationRule>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::deserialize(deserializer).map(Some)
}

/// Split newline-delimited option text into the option sequence
///
/// Empty lines are kept so the list mirrors what was typed.
pub fn split_options(text: &str) -> Vec<String> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_field_defaults() {
        let field = Field::new(FieldId::new("field_1"), FieldKind::Text);
        assert_eq!(field.label, "New text field");
        assert!(field.options.is_none());
        assert!(field.validation.is_none());
    }

    #[test]
    fn test_option_kinds_get_placeholder_options() {
        for kind in [FieldKind::Select, FieldKind::Radio] {
            let field = Field::new(FieldId::new("f"), kind);
            assert_eq!(
                field.options,
                Some(vec!["Option 1".to_string(), "Option 2".to_string()])
            );
        }
    }

    #[test]
    fn test_kind_token_round_trip() {
        for kind in FieldKind::ALL {
            assert_eq!(kind.token().parse::<FieldKind>().unwrap(), kind);
        }
        assert_eq!(
            "password".parse::<FieldKind>(),
            Err(Error::UnknownFieldKind("password".to_string()))
        );
    }

    #[test]
    fn test_patch_ignores_options_on_plain_kinds() {
        let field = Field::new(FieldId::new("f"), FieldKind::Email);
        let patched = field.patched(&FieldPatch::options_text("a\nb"));
        assert_eq!(patched, field);
    }

    #[test]
    fn test_patch_replaces_only_given_attributes() {
        let mut field = Field::new(FieldId::new("f"), FieldKind::Select);
        field.validation = Some(ValidationRule::Required);

        let patched = field.patched(&FieldPatch::label("Country"));
        assert_eq!(patched.label, "Country");
        assert_eq!(patched.options, field.options);
        assert_eq!(patched.validation, Some(ValidationRule::Required));

        let cleared = patched.patched(&FieldPatch::validation(None));
        assert!(cleared.validation.is_none());
    }

    #[test]
    fn test_split_options_keeps_empty_lines() {
        assert_eq!(split_options("a\n\nb"), vec!["a", "", "b"]);
        assert_eq!(split_options("a\r\nb"), vec!["a", "b"]);
        assert_eq!(split_options(""), vec![""]);
    }

    #[test]
    fn test_choice_ids() {
        let id = FieldId::new("field_3");
        assert_eq!(id.choice(0), "field_3-0");
        assert_eq!(id.choice(1), "field_3-1");
    }
}
