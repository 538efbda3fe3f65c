use formsmith_types::Field;

/// Move the element at `source` to `destination`, keeping everything else in order
///
/// A missing destination (drop outside any target) yields an unchanged copy.
/// Indices past the end are clamped to the last slot so the result is always
/// a permutation of the input.
pub fn move_item<T: Clone>(items: &[T], source: usize, destination: Option<usize>) -> Vec<T> {
    let mut out = items.to_vec();
    let Some(destination) = destination else {
        return out;
    };
    if out.is_empty() {
        return out;
    }

    let last = out.len() - 1;
    let source = source.min(last);
    let destination = destination.min(last);
    if source == destination {
        return out;
    }

    let item = out.remove(source);
    out.insert(destination, item);
    out
}

/// Field ordering after a drag-and-drop gesture
pub fn reorder_fields(fields: &[Field], source: usize, destination: Option<usize>) -> Vec<Field> {
    move_item(fields, source, destination)
}
