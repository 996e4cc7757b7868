//! Path reconstruction over the predecessor array

/// Rebuild the node sequence from `source` to `target`.
///
/// Returns `[source]` when the endpoints coincide and an empty vector when
/// the predecessor chain never reaches `source` — "no path" is a value, not
/// an error. Trusts `parent` to come from a successful run over a graph
/// containing both endpoints; indexes are not re-validated.
pub fn restore_path(parent: &[Option<usize>], source: usize, target: usize) -> Vec<usize> {
    if source == target {
        return vec![source];
    }

    let mut path = Vec::new();
    let mut cur = Some(target);
    while let Some(node) = cur {
        path.push(node);
        if node == source {
            break;
        }
        cur = parent[node];
    }
    path.reverse();

    if path.first() != Some(&source) {
        return Vec::new();
    }
    path
}
