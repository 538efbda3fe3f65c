use formsmith_runtime::{ActionOutcome, FormBuilder, parse_script, run_script};
use formsmith_types::{FieldKind, Layout};

#[test]
fn test_text_then_select_reordered() {
    let mut builder = FormBuilder::default();
    builder.add_field(FieldKind::Text);
    builder.add_field(FieldKind::Select);
    builder.reorder(0, Some(1));

    let kinds: Vec<FieldKind> = builder.fields().iter().map(|f| f.kind).collect();
    assert_eq!(kinds, vec![FieldKind::Select, FieldKind::Text]);

    let code = builder.code();
    let select = code.find("<select").unwrap();
    let text = code.find("type=\"text\"").unwrap();
    assert!(select < text);
}

#[test]
fn test_radio_field_emits_two_choices() {
    let mut builder = FormBuilder::default();
    let id = builder.add_field(FieldKind::Radio);

    let field = builder.document().get(&id).unwrap();
    assert_eq!(field.options(), ["Option 1", "Option 2"]);

    let code = builder.code();
    assert_eq!(code.matches("type=\"radio\"").count(), 2);
    assert!(code.contains(&format!("id=\"{}-0\"", id)));
    assert!(code.contains(&format!("id=\"{}-1\"", id)));
}

#[test]
fn test_scripted_session() {
    let script = "\
add text
add email
add radio
label 0 Name
validate 0 regex
validate 1 email
options 2 Small\\nMedium\\nLarge
move 2 0
layout double
";
    let steps = parse_script(script).unwrap();
    let mut builder = FormBuilder::default();
    let outcomes = run_script(&mut builder, &steps);
    assert!(outcomes.iter().all(ActionOutcome::changed));

    let doc = builder.document();
    assert_eq!(doc.layout, Layout::Double);
    assert_eq!(doc.fields[0].kind, FieldKind::Radio);
    assert_eq!(doc.fields[0].options(), ["Small", "Medium", "Large"]);
    assert_eq!(doc.fields[1].label, "Name");

    let preview = builder.preview(1024);
    assert_eq!(preview.columns, 2);
    assert_eq!(
        preview.fields[1].validation_hint.as_deref(),
        Some("Validation: Letters only")
    );
    assert_eq!(
        preview.fields[2].validation_hint.as_deref(),
        Some("Validation: Email address")
    );
}

#[test]
fn test_identical_state_identical_code() {
    let script = "add number\nadd checkbox\nvalidate 0 number\nlayout triple\n";
    let steps = parse_script(script).unwrap();

    let mut a = FormBuilder::default();
    let mut b = FormBuilder::default();
    run_script(&mut a, &steps);
    run_script(&mut b, &steps);

    assert_eq!(a.document(), b.document());
    assert_eq!(a.code(), b.code());
}
