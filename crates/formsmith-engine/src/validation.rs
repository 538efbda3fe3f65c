use formsmith_types::{Field, FieldId, ValidationCategory};

/// Attach the catalog rule for `category` to the field with `id`
///
/// Returns a new sequence; other fields and their order are untouched. An
/// unknown id leaves the sequence as it was.
pub fn assign_validation(
    fields: &[Field],
    id: &FieldId,
    category: ValidationCategory,
) -> Vec<Field> {
    fields
        .iter()
        .map(|field| {
            if &field.id == id {
                Field {
                    validation: category.rule(),
                    ..field.clone()
                }
            } else {
                field.clone()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use formsmith_types::{FieldKind, ValidationRule};

    fn fields() -> Vec<Field> {
        vec![
            Field::new(FieldId::new("a"), FieldKind::Text),
            Field::new(FieldId::new("b"), FieldKind::Email),
        ]
    }

    #[test]
    fn test_assign_each_category() {
        let cases = [
            ("required", Some(ValidationRule::Required)),
            ("email", Some(ValidationRule::Email)),
            ("number", Some(ValidationRule::Number)),
            ("regex", Some(ValidationRule::LettersOnly)),
            ("none", None),
        ];
        for (token, expected) in cases {
            let category: ValidationCategory = token.parse().unwrap();
            let out = assign_validation(&fields(), &FieldId::new("b"), category);
            assert_eq!(out[1].validation, expected, "category {}", token);
            assert_eq!(out[0], fields()[0]);
        }
    }

    #[test]
    fn test_none_clears_rule() {
        let id = FieldId::new("a");
        let with_rule = assign_validation(&fields(), &id, ValidationCategory::Required);
        let cleared = assign_validation(&with_rule, &id, ValidationCategory::None);
        assert_eq!(cleared, fields());
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let out = assign_validation(&fields(), &FieldId::new("zzz"), ValidationCategory::Email);
        assert_eq!(out, fields());
    }
}
