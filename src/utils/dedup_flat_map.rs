use log::{debug, trace};

/// Maps each element of `input` through a transform that may produce no value, keeping only the
/// first occurrence of each produced value.
///
/// `transform` returns:
/// - `Ok(Some(value))` to offer `value` for the result,
/// - `Ok(None)` to skip the element,
/// - `Err(err)` to abort the whole call with `err`.
///
/// On failure nothing collected so far is returned and no further elements are visited. Callers
/// that want partial results should turn per-element failures into `Ok(None)` themselves.
///
/// # Example
/// ```
/// use dedup_map::dedup_flat_map;
///
/// let possible_integers = [Some("one"), Some("2"), Some("3"), None, Some("5"), Some("5")];
/// let integers: Result<Vec<i32>, ()> = dedup_flat_map(possible_integers, |cell| {
///     Ok(cell.and_then(|s| s.parse().ok()))
/// });
/// assert_eq!(integers, Ok(vec![2, 3, 5]));
/// ```
pub fn dedup_flat_map<I, T, E, F>(input: I, mut transform: F) -> Result<Vec<T>, E>
where
    I: IntoIterator,
    T: PartialEq,
    F: FnMut(I::Item) -> Result<Option<T>, E>,
{
    let mut results: Vec<T> = Vec::new();
    let mut absent_count = 0;

    for (index, item) in input.into_iter().enumerate() {
        let value = match transform(item) {
            Ok(Some(value)) => value,
            Ok(None) => {
                absent_count += 1;
                continue;
            }
            Err(err) => {
                debug!("Transform failed at index {}; aborting dedup flat map", index);
                return Err(err);
            }
        };

        if results.contains(&value) {
            trace!("Skipping repeated value at index {}", index);
            continue;
        }

        results.push(value);
    }

    debug!(
        "Dedup flat mapped to {} unique values ({} elements produced no value)",
        results.len(),
        absent_count
    );

    Ok(results)
}
