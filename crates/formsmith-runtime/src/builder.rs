use crate::action::{ActionOutcome, BuilderAction, FieldRef};
use crate::config::Config;
use crate::ids::{IdGenerator, SequentialIds};
use formsmith_engine::{
    Breakpoints, CodegenOptions, PreviewForm, assign_validation, generate_document,
    render_preview, reorder_fields,
};
use formsmith_types::{
    Field, FieldId, FieldKind, FieldPatch, FormDocument, Layout, ValidationCategory,
};

/// Owner of the one form document of an editing session
///
/// Every mutation goes through the operations below. Each one builds a new
/// document value and swaps it in; the generated code is refreshed on every
/// swap so readers always see output matching the current document.
pub struct FormBuilder {
    document: FormDocument,
    ids: Box<dyn IdGenerator>,
    revision: u64,
    breakpoints: Breakpoints,
    codegen: CodegenOptions,
    code: String,
}

impl Default for FormBuilder {
    fn default() -> Self {
        Self::with_generator(Layout::default(), Box::new(SequentialIds::new()))
    }
}

impl FormBuilder {
    pub fn new(config: &Config) -> Self {
        let mut builder = Self::with_generator(
            config.builder.default_layout,
            config.builder.id_strategy.generator(),
        );
        builder.breakpoints = config.preview.breakpoints();
        builder.codegen = config.codegen.clone();
        builder.code = generate_document(&builder.document, &builder.codegen);
        builder
    }

    pub fn with_generator(layout: Layout, ids: Box<dyn IdGenerator>) -> Self {
        let document = FormDocument::new(layout);
        let codegen = CodegenOptions::default();
        let code = generate_document(&document, &codegen);
        Self {
            document,
            ids,
            revision: 0,
            breakpoints: Breakpoints::default(),
            codegen,
            code,
        }
    }

    pub fn document(&self) -> &FormDocument {
        &self.document
    }

    pub fn fields(&self) -> &[Field] {
        &self.document.fields
    }

    pub fn layout(&self) -> Layout {
        self.document.layout
    }

    /// Number of document replacements so far
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn codegen_options(&self) -> &CodegenOptions {
        &self.codegen
    }

    /// Generated source for the current document
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Preview model for the current document at `viewport_width`
    pub fn preview(&self, viewport_width: u32) -> PreviewForm {
        render_preview(
            &self.document.fields,
            self.document.layout,
            viewport_width,
            &self.breakpoints,
        )
    }

    /// Apply one user action
    pub fn apply(&mut self, action: BuilderAction) -> ActionOutcome {
        tracing::debug!(?action, revision = self.revision, "applying action");

        let changed = match action {
            BuilderAction::AddField { kind } => return ActionOutcome::Added(self.add_field(kind)),
            BuilderAction::RemoveField { target } => match self.resolve(&target) {
                Some(id) => self.remove_field(&id),
                None => false,
            },
            BuilderAction::UpdateField { target, patch } => match self.resolve(&target) {
                Some(id) => self.update_field(&id, patch),
                None => false,
            },
            BuilderAction::SetValidation { target, category } => match self.resolve(&target) {
                Some(id) => self.set_validation(&id, category),
                None => false,
            },
            BuilderAction::Reorder {
                source,
                destination,
            } => self.reorder(source, destination),
            BuilderAction::SetLayout { layout } => self.set_layout(layout),
        };

        if changed {
            ActionOutcome::Changed
        } else {
            ActionOutcome::Unchanged
        }
    }

    /// Append a field with palette defaults and a fresh id
    pub fn add_field(&mut self, kind: FieldKind) -> FieldId {
        let id = self.fresh_id();
        let mut fields = self.document.fields.clone();
        fields.push(Field::new(id.clone(), kind));
        self.commit(self.document.with_fields(fields));
        id
    }

    /// Remove the field with `id`; false when absent
    pub fn remove_field(&mut self, id: &FieldId) -> bool {
        if !self.document.contains(id) {
            return false;
        }
        let fields = self
            .document
            .fields
            .iter()
            .filter(|f| &f.id != id)
            .cloned()
            .collect();
        self.commit(self.document.with_fields(fields))
    }

    /// Merge `patch` into the field with `id`; false when absent or unchanged
    pub fn update_field(&mut self, id: &FieldId, patch: FieldPatch) -> bool {
        if !self.document.contains(id) || patch.is_empty() {
            return false;
        }
        let fields = self
            .document
            .fields
            .iter()
            .map(|f| if &f.id == id { f.patched(&patch) } else { f.clone() })
            .collect();
        self.commit(self.document.with_fields(fields))
    }

    pub fn set_validation(&mut self, id: &FieldId, category: ValidationCategory) -> bool {
        let fields = assign_validation(&self.document.fields, id, category);
        self.commit(self.document.with_fields(fields))
    }

    /// Move a field after a drag-and-drop gesture; `None` means dropped nowhere
    ///
    /// A `source` past the end picks up nothing and is a no-op. The
    /// destination still clamps to the last slot.
    pub fn reorder(&mut self, source: usize, destination: Option<usize>) -> bool {
        if source >= self.document.len() {
            tracing::warn!(source, len = self.document.len(), "no field at move source");
            return false;
        }
        let fields = reorder_fields(&self.document.fields, source, destination);
        self.commit(self.document.with_fields(fields))
    }

    pub fn set_layout(&mut self, layout: Layout) -> bool {
        self.commit(self.document.with_layout(layout))
    }

    pub fn resolve(&self, target: &FieldRef) -> Option<FieldId> {
        let resolved = target.resolve(&self.document);
        if resolved.is_none() {
            tracing::warn!(?target, "no field matches reference");
        }
        resolved
    }

    fn fresh_id(&mut self) -> FieldId {
        loop {
            let id = self.ids.next_id();
            if !self.document.contains(&id) {
                return id;
            }
            tracing::debug!(%id, "generated id already in use, drawing another");
        }
    }

    /// Swap in `next` and refresh outputs; false when nothing changed
    fn commit(&mut self, next: FormDocument) -> bool {
        if next == self.document {
            return false;
        }
        self.document = next;
        self.revision += 1;
        self.code = generate_document(&self.document, &self.codegen);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formsmith_types::ValidationRule;

    /// Hands out a fixed list of ids, then a counter
    struct ScriptedIds(Vec<&'static str>, u32);

    impl IdGenerator for ScriptedIds {
        fn next_id(&mut self) -> FieldId {
            if self.0.is_empty() {
                self.1 += 1;
                FieldId::new(format!("extra_{}", self.1))
            } else {
                FieldId::new(self.0.remove(0))
            }
        }
    }

    fn builder_with(kinds: &[FieldKind]) -> FormBuilder {
        let mut builder = FormBuilder::default();
        for kind in kinds {
            builder.add_field(*kind);
        }
        builder
    }

    #[test]
    fn test_add_field_appends_with_unique_id() {
        let mut builder = builder_with(&[FieldKind::Text, FieldKind::Email]);
        let before: Vec<FieldId> = builder.document().ids().cloned().collect();

        let id = builder.add_field(FieldKind::Select);

        assert_eq!(builder.fields().len(), before.len() + 1);
        assert_eq!(builder.fields().last().unwrap().id, id);
        assert!(!before.contains(&id));
        assert!(builder.fields().last().unwrap().options.is_some());
        assert!(builder.fields()[0].options.is_none());
    }

    #[test]
    fn test_ids_not_reused_after_removal() {
        let mut builder = builder_with(&[FieldKind::Text]);
        let first = builder.fields()[0].id.clone();
        builder.remove_field(&first);
        let second = builder.add_field(FieldKind::Text);
        assert_ne!(first, second);
    }

    #[test]
    fn test_colliding_ids_are_redrawn() {
        let mut builder = FormBuilder::with_generator(
            Layout::Single,
            Box::new(ScriptedIds(vec!["dup", "dup", "dup"], 0)),
        );
        let a = builder.add_field(FieldKind::Text);
        let b = builder.add_field(FieldKind::Text);
        assert_eq!(a.as_str(), "dup");
        assert_eq!(b.as_str(), "extra_1");
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut builder = builder_with(&[FieldKind::Text, FieldKind::Number, FieldKind::Email]);
        let target = builder.fields()[1].id.clone();
        let others: Vec<Field> = vec![builder.fields()[0].clone(), builder.fields()[2].clone()];

        assert!(builder.remove_field(&target));
        assert_eq!(builder.fields(), others.as_slice());

        let revision = builder.revision();
        assert!(!builder.remove_field(&target));
        assert_eq!(builder.fields(), others.as_slice());
        assert_eq!(builder.revision(), revision);
    }

    #[test]
    fn test_update_label_touches_only_that_field() {
        let mut builder = builder_with(&[FieldKind::Text, FieldKind::Radio]);
        let before = builder.document().clone();
        let id = before.fields[1].id.clone();

        assert!(builder.update_field(&id, FieldPatch::label("X")));

        let after = builder.document();
        assert_eq!(after.fields[0], before.fields[0]);
        assert_eq!(after.fields[1].label, "X");
        assert_eq!(after.fields[1].options, before.fields[1].options);
        assert_eq!(after.fields[1].kind, before.fields[1].kind);
        assert_eq!(after.fields[1].validation, before.fields[1].validation);
        assert_eq!(after.layout, before.layout);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut builder = builder_with(&[FieldKind::Text]);
        assert!(!builder.update_field(&FieldId::new("missing"), FieldPatch::label("X")));
        assert_eq!(builder.fields()[0].label, "New text field");
    }

    #[test]
    fn test_options_edit_from_text() {
        let mut builder = builder_with(&[FieldKind::Select]);
        let id = builder.fields()[0].id.clone();
        builder.update_field(&id, FieldPatch::options_text("Red\nGreen\nBlue"));
        assert_eq!(builder.fields()[0].options(), ["Red", "Green", "Blue"]);
    }

    #[test]
    fn test_set_validation_and_clear() {
        let mut builder = builder_with(&[FieldKind::Text]);
        let id = builder.fields()[0].id.clone();

        assert!(builder.set_validation(&id, ValidationCategory::Regex));
        assert_eq!(builder.fields()[0].validation, Some(ValidationRule::LettersOnly));
        assert!(builder.code().contains("regex(/^[a-zA-Z]+$/"));

        assert!(builder.set_validation(&id, ValidationCategory::None));
        assert!(builder.fields()[0].validation.is_none());
    }

    #[test]
    fn test_reorder_and_cancelled_drop() {
        let mut builder = builder_with(&[FieldKind::Text, FieldKind::Select]);
        let ids: Vec<FieldId> = builder.document().ids().cloned().collect();

        assert!(!builder.reorder(0, None));
        assert!(!builder.reorder(1, Some(1)));
        assert!(builder.reorder(0, Some(1)));

        let now: Vec<FieldId> = builder.document().ids().cloned().collect();
        assert_eq!(now, vec![ids[1].clone(), ids[0].clone()]);
    }

    #[test]
    fn test_reorder_from_missing_source_is_noop() {
        let mut builder = builder_with(&[FieldKind::Text, FieldKind::Email, FieldKind::Number]);
        let before = builder.document().clone();
        let revision = builder.revision();

        assert!(!builder.reorder(9, Some(0)));
        assert!(!builder.reorder(3, Some(0)));
        assert_eq!(builder.document(), &before);
        assert_eq!(builder.revision(), revision);

        // Destination past the end still lands in the last slot
        assert!(builder.reorder(0, Some(9)));
        assert_eq!(builder.fields()[2].kind, FieldKind::Text);
    }

    #[test]
    fn test_outputs_track_every_mutation() {
        let mut builder = FormBuilder::default();
        let empty_code = builder.code().to_string();

        builder.add_field(FieldKind::Checkbox);
        assert_eq!(builder.revision(), 1);
        assert_ne!(builder.code(), empty_code);
        assert!(builder.code().contains("type=\"checkbox\""));

        builder.set_layout(Layout::Triple);
        assert_eq!(builder.preview(1280).columns, 3);
        assert_eq!(builder.preview(800).columns, 2);
        assert!(builder.code().contains("lg:grid-cols-3"));
    }

    #[test]
    fn test_apply_resolves_positions_and_ids() {
        let mut builder = FormBuilder::default();
        let outcome = builder.apply(BuilderAction::AddField {
            kind: FieldKind::Email,
        });
        let ActionOutcome::Added(id) = outcome.clone() else {
            panic!("expected Added, got {:?}", outcome);
        };

        let outcome = builder.apply(BuilderAction::UpdateField {
            target: FieldRef::Index(0),
            patch: FieldPatch::label("Work email"),
        });
        assert_eq!(outcome, ActionOutcome::Changed);

        let outcome = builder.apply(BuilderAction::SetValidation {
            target: FieldRef::Id(id.clone()),
            category: ValidationCategory::Email,
        });
        assert_eq!(outcome, ActionOutcome::Changed);

        let outcome = builder.apply(BuilderAction::RemoveField {
            target: FieldRef::Index(5),
        });
        assert_eq!(outcome, ActionOutcome::Unchanged);

        let field = builder.document().get(&id).unwrap();
        assert_eq!(field.label, "Work email");
        assert_eq!(field.validation, Some(ValidationRule::Email));
    }

    #[test]
    fn test_config_drives_defaults() {
        let mut config = Config::default();
        config.builder.default_layout = Layout::Double;
        config.codegen.component_name = "Survey".to_string();

        let builder = FormBuilder::new(&config);
        assert_eq!(builder.layout(), Layout::Double);
        assert!(builder.code().contains("export default function Survey() {"));
    }
}
