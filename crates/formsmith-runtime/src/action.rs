use formsmith_types::{FieldId, FieldKind, FieldPatch, FormDocument, Layout, ValidationCategory};
use serde::{Deserialize, Serialize};

/// Field reference as typed by a user: position or id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldRef {
    Index(usize),
    Id(FieldId),
}

impl FieldRef {
    /// Numbers are positions, anything else is an id
    pub fn parse(token: &str) -> Self {
        match token.parse::<usize>() {
            Ok(index) => FieldRef::Index(index),
            Err(_) => FieldRef::Id(FieldId::new(token)),
        }
    }

    pub fn resolve(&self, doc: &FormDocument) -> Option<FieldId> {
        match self {
            FieldRef::Index(i) => doc.fields.get(*i).map(|f| f.id.clone()),
            FieldRef::Id(id) => doc.contains(id).then(|| id.clone()),
        }
    }
}

impl From<FieldId> for FieldRef {
    fn from(id: FieldId) -> Self {
        FieldRef::Id(id)
    }
}

impl From<usize> for FieldRef {
    fn from(index: usize) -> Self {
        FieldRef::Index(index)
    }
}

/// Every user action the builder accepts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum BuilderAction {
    AddField {
        kind: FieldKind,
    },
    RemoveField {
        target: FieldRef,
    },
    UpdateField {
        target: FieldRef,
        patch: FieldPatch,
    },
    SetValidation {
        target: FieldRef,
        category: ValidationCategory,
    },
    Reorder {
        source: usize,
        destination: Option<usize>,
    },
    SetLayout {
        layout: Layout,
    },
}

/// Result of applying one action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// A field was appended
    Added(FieldId),
    /// The document was replaced
    Changed,
    /// Nothing to do (unknown field, no destination, identical value)
    Unchanged,
}

impl ActionOutcome {
    pub fn changed(&self) -> bool {
        !matches!(self, ActionOutcome::Unchanged)
    }
}
