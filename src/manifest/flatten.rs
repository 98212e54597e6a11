//! Flattening of the manifest's nested groups.

/// Concatenates a list of lists into one list.
///
/// The outer order is kept first, then the inner one, so
/// `[[a, b], [], [c]]` becomes `[a, b, c]`.
pub fn flatten<T>(nested: Vec<Vec<T>>) -> Vec<T> {
    let total = nested.iter().map(Vec::len).sum();
    let mut flat = Vec::with_capacity(total);
    for group in nested {
        flat.extend(group);
    }
    flat
}
