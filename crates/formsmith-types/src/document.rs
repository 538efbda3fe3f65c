use serde::{Deserialize, Serialize};

use crate::{Field, FieldId, Layout};

/// Ordered fields plus the layout preference
///
/// Field order is render order and emit order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormDocument {
    pub fields: Vec<Field>,
    pub layout: Layout,
}

impl FormDocument {
    pub fn new(layout: Layout) -> Self {
        Self {
            fields: Vec::new(),
            layout,
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, id: &FieldId) -> Option<&Field> {
        self.fields.iter().find(|f| &f.id == id)
    }

    pub fn position(&self, id: &FieldId) -> Option<usize> {
        self.fields.iter().position(|f| &f.id == id)
    }

    pub fn contains(&self, id: &FieldId) -> bool {
        self.position(id).is_some()
    }

    pub fn ids(&self) -> impl Iterator<Item = &FieldId> {
        self.fields.iter().map(|f| &f.id)
    }

    /// Same layout, different fields
    pub fn with_fields(&self, fields: Vec<Field>) -> Self {
        Self {
            fields,
            layout: self.layout,
        }
    }

    pub fn with_layout(&self, layout: Layout) -> Self {
        Self {
            fields: self.fields.clone(),
            layout,
        }
    }
}
