//! Source emission for a standalone React form.
//!
//! Output is a single TSX-flavoured module using zod for the schema and
//! react-hook-form for binding. Labels, ids and options are interpolated
//! verbatim: nothing is escaped, so text containing quotes or braces yields
//! broken source.

use formsmith_types::{Field, FieldKind, Layout};
use serde::{Deserialize, Serialize};

const PREAMBLE: &[&str] = &[
    "import React from 'react';",
    "import { z } from 'zod';",
    "import { useForm } from 'react-hook-form';",
    "import { zodResolver } from '@hookform/resolvers/zod';",
];

/// Rule used for fields without a validation rule
const FALLBACK_RULE: &str = "z.string()";

const INPUT_CLASS: &str = "w-full p-2 border rounded";
const CHECKBOX_CLASS: &str = "h-4 w-4 text-blue-600 focus:ring-blue-500 border-gray-300 rounded";
const RADIO_CLASS: &str = "h-4 w-4 text-blue-600 focus:ring-blue-500 border-gray-300";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodegenOptions {
    /// Name of the exported component
    pub component_name: String,
}

impl Default for CodegenOptions {
    fn default() -> Self {
        Self {
            component_name: "GeneratedForm".to_string(),
        }
    }
}

/// Tailwind grid classes for a layout
pub fn grid_class(layout: Layout) -> &'static str {
    match layout {
        Layout::Single => "grid-cols-1",
        Layout::Double => "grid-cols-1 md:grid-cols-2",
        Layout::Triple => "grid-cols-1 md:grid-cols-2 lg:grid-cols-3",
    }
}

/// Line buffer with two-space indentation
struct Emitter {
    lines: Vec<String>,
    depth: usize,
}

impl Emitter {
    fn new() -> Self {
        Self {
            lines: Vec::new(),
            depth: 0,
        }
    }

    fn line(&mut self, text: impl AsRef<str>) {
        let text = text.as_ref();
        if text.is_empty() {
            self.lines.push(String::new());
        } else {
            self.lines.push(format!("{}{}", "  ".repeat(self.depth), text));
        }
    }

    fn blank(&mut self) {
        self.lines.push(String::new());
    }

    fn open(&mut self, text: impl AsRef<str>) {
        self.line(text);
        self.depth += 1;
    }

    fn close(&mut self, text: impl AsRef<str>) {
        self.depth = self.depth.saturating_sub(1);
        self.line(text);
    }

    fn finish(self) -> String {
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }
}

/// Serialize fields and layout into component source
pub fn generate_with(fields: &[Field], layout: Layout, options: &CodegenOptions) -> String {
    let mut e = Emitter::new();

    for line in PREAMBLE {
        e.line(line);
    }
    e.blank();

    emit_schema(&mut e, fields);
    e.blank();

    emit_component(&mut e, fields, layout, &options.component_name);
    e.finish()
}

fn emit_schema(e: &mut Emitter, fields: &[Field]) {
    e.open("const schema = z.object({");
    for field in fields {
        let rule = field
            .validation
            .map(|rule| rule.emit())
            .unwrap_or_else(|| FALLBACK_RULE.to_string());
        e.line(format!("{}: {},", field.id, rule));
    }
    e.close("});");
}

fn emit_component(e: &mut Emitter, fields: &[Field], layout: Layout, name: &str) {
    e.open(format!("export default function {}() {{", name));

    e.open("const {");
    e.line("register,");
    e.line("handleSubmit,");
    e.line("formState: { errors },");
    e.close("} = useForm({");
    e.depth += 1;
    e.line("resolver: zodResolver(schema),");
    e.close("});");
    e.blank();

    e.open("const onSubmit = (data) => {");
    e.line("console.log(data);");
    e.close("};");
    e.blank();

    e.open("return (");
    e.open(format!(
        "<form onSubmit={{handleSubmit(onSubmit)}} className=\"grid {} gap-4\">",
        grid_class(layout)
    ));
    for field in fields {
        emit_field(e, field);
    }
    emit_submit(e);
    e.close("</form>");
    e.close(");");

    e.close("}");
}

fn emit_field(e: &mut Emitter, field: &Field) {
    let id = field.id.as_str();

    e.open("<div className=\"mb-4\">");
    e.open(format!(
        "<label htmlFor=\"{}\" className=\"block text-sm font-medium text-gray-700 mb-1\">",
        id
    ));
    e.line(&field.label);
    e.close("</label>");

    match field.kind {
        FieldKind::Textarea => {
            e.open("<textarea");
            emit_binding(e, id);
            e.line(format!("className=\"{}\"", INPUT_CLASS));
            e.close("></textarea>");
        }
        FieldKind::Select => {
            e.open("<select");
            emit_binding(e, id);
            e.line(format!("className=\"{}\"", INPUT_CLASS));
            e.close(">");
            e.depth += 1;
            for option in field.options() {
                e.line(format!("<option value=\"{0}\">{0}</option>", option));
            }
            e.close("</select>");
        }
        FieldKind::Checkbox => {
            e.open("<input");
            e.line("type=\"checkbox\"");
            emit_binding(e, id);
            e.line(format!("className=\"{}\"", CHECKBOX_CLASS));
            e.close("/>");
        }
        FieldKind::Radio => {
            e.open("<div>");
            for (index, option) in field.options().iter().enumerate() {
                let choice = field.id.choice(index);
                e.open("<div className=\"flex items-center\">");
                e.open("<input");
                e.line("type=\"radio\"");
                e.line(format!("id=\"{}\"", choice));
                e.line(format!("value=\"{}\"", option));
                e.line(format!("{{...register(\"{}\")}}", id));
                e.line(format!("className=\"{}\"", RADIO_CLASS));
                e.close("/>");
                e.open(format!(
                    "<label htmlFor=\"{}\" className=\"ml-2 block text-sm text-gray-900\">",
                    choice
                ));
                e.line(option);
                e.close("</label>");
                e.close("</div>");
            }
            e.close("</div>");
        }
        FieldKind::Text | FieldKind::Number | FieldKind::Email => {
            e.open("<input");
            e.line(format!("type=\"{}\"", field.kind.token()));
            emit_binding(e, id);
            e.line(format!("className=\"{}\"", INPUT_CLASS));
            e.close("/>");
        }
    }

    e.open(format!("{{errors.{} && (", id));
    e.line(format!(
        "<p className=\"mt-1 text-sm text-red-600\">{{errors.{}.message}}</p>",
        id
    ));
    e.close(")}");
    e.close("</div>");
}

fn emit_binding(e: &mut Emitter, id: &str) {
    e.line(format!("id=\"{}\"", id));
    e.line(format!("{{...register(\"{}\")}}", id));
}

fn emit_submit(e: &mut Emitter) {
    e.open("<div className=\"col-span-full\">");
    e.open("<button");
    e.line("type=\"submit\"");
    e.line("className=\"bg-blue-500 text-white px-4 py-2 rounded hover:bg-blue-600\"");
    e.close(">");
    e.depth += 1;
    e.line("Submit");
    e.close("</button>");
    e.close("</div>");
}
