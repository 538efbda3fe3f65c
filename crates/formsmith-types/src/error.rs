use std::fmt;

/// Result type for formsmith-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Token does not name a field kind
    UnknownFieldKind(String),

    /// Token does not name a layout
    UnknownLayout(String),

    /// Token does not name a validation category
    UnknownValidationCategory(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownFieldKind(token) => write!(
                f,
                "unknown field kind '{}' (expected one of: {})",
                token,
                crate::FieldKind::tokens().join(", ")
            ),
            Error::UnknownLayout(token) => write!(
                f,
                "unknown layout '{}' (expected one of: {})",
                token,
                crate::Layout::tokens().join(", ")
            ),
            Error::UnknownValidationCategory(token) => write!(
                f,
                "unknown validation category '{}' (expected one of: {})",
                token,
                crate::ValidationCategory::tokens().join(", ")
            ),
        }
    }
}

impl std::error::Error for Error {}
