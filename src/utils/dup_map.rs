use log::debug;
use std::collections::HashSet;
use std::convert::Infallible;
use std::hash::Hash;

/// Maps each element of `input` through `transform` and returns only the values produced more
/// than once.
///
/// Each repeated value is reported exactly once, however many times it occurs, and the result
/// is sorted ascending.
///
/// # Example
/// ```
/// use dedup_map::dup_map;
///
/// let names = ["Mike", "Ben", "Phoebe", "Phoebe", "Jenny"];
/// assert_eq!(dup_map(names, |name| name), vec!["Phoebe"]);
/// ```
pub fn dup_map<I, T, F>(input: I, mut transform: F) -> Vec<T>
where
    I: IntoIterator,
    T: Eq + Hash + Ord,
    F: FnMut(I::Item) -> T,
{
    match try_dup_map(input, |item| Ok::<T, Infallible>(transform(item))) {
        Ok(duplicates) => duplicates,
        Err(never) => match never {},
    }
}

/// Same as [`dup_map`], but `transform` may fail.
///
/// The first failure is returned as-is and iteration stops.
pub fn try_dup_map<I, T, E, F>(input: I, mut transform: F) -> Result<Vec<T>, E>
where
    I: IntoIterator,
    T: Eq + Hash + Ord,
    F: FnMut(I::Item) -> Result<T, E>,
{
    let mut seen_once: HashSet<T> = HashSet::new();
    let mut duplicates: HashSet<T> = HashSet::new();

    for (index, item) in input.into_iter().enumerate() {
        let value = transform(item).map_err(|err| {
            debug!("Transform failed at index {}; aborting dup map", index);
            err
        })?;

        if seen_once.contains(&value) {
            duplicates.insert(value);
        } else {
            seen_once.insert(value);
        }
    }

    debug!(
        "Found {} repeated values among {} distinct values",
        duplicates.len(),
        seen_once.len()
    );

    let mut duplicates: Vec<T> = duplicates.into_iter().collect();
    duplicates.sort_unstable();

    Ok(duplicates)
}
