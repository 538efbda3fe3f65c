// Engine module - pure functions over the form model
// This layer sits between the model (types) and the session controller (runtime)

pub mod codegen;
pub mod preview;
pub mod reorder;
pub mod validation;

pub use codegen::{CodegenOptions, generate_with, grid_class};
pub use preview::{
    Breakpoints, Choice, Control, PreviewField, PreviewForm, SubmitOutcome, column_count,
    render_text,
};
pub use reorder::{move_item, reorder_fields};
pub use validation::assign_validation;

use formsmith_types::{Field, FormDocument, Layout};

// Façade API - Stable public interface for runtime and CLI layers

/// Generate standalone form source with the default component name
pub fn generate_code(fields: &[Field], layout: Layout) -> String {
    codegen::generate_with(fields, layout, &CodegenOptions::default())
}

/// Build the preview model of a field sequence for a given viewport width
pub fn render_preview(
    fields: &[Field],
    layout: Layout,
    viewport_width: u32,
    breakpoints: &Breakpoints,
) -> PreviewForm {
    preview::build_preview(fields, layout, viewport_width, breakpoints)
}

/// Generate source for a whole document
pub fn generate_document(doc: &FormDocument, options: &CodegenOptions) -> String {
    codegen::generate_with(&doc.fields, doc.layout, options)
}
