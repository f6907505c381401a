use std::collections::HashSet;
use std::hash::Hash;

/// Hash-backed variant of [`dedup_map`](crate::dedup_map).
///
/// Produces the same values in the same order, but checks membership with a `HashSet` instead of
/// scanning the output, which pays off on large inputs with many distinct values.
///
/// # Arguments
/// * `input` - The sequence to map.
/// * `transform` - Invoked exactly once per element, in order.
///
/// # Returns
/// A new vector with repeated values removed, preserving first-occurrence order.
pub fn dedup_map_hashed<I, T, F>(input: I, transform: F) -> Vec<T>
where
    I: IntoIterator,
    T: Eq + Hash + Clone,
    F: FnMut(I::Item) -> T,
{
    let mut seen = HashSet::new();
    input
        .into_iter()
        .map(transform)
        .filter_map(|value| {
            if seen.insert(value.clone()) {
                Some(value)
            } else {
                None
            }
        })
        .collect()
}
