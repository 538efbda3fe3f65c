pub mod document;
pub mod error;
pub mod field;
pub mod layout;
pub mod validation;

pub use document::FormDocument;
pub use error::{Error, Result};
pub use field::{Field, FieldId, FieldKind, FieldPatch, split_options};
pub use layout::Layout;
pub use validation::{ValidationCategory, ValidationRule};
