use log::{debug, trace};
use std::convert::Infallible;

/// Maps each element of `input` through `transform`, keeping only the first occurrence of each
/// resulting value.
///
/// Membership is checked by a linear scan of the values collected so far, so `T` only needs
/// `PartialEq`. For hashable values see [`dedup_map_hashed`](crate::dedup_map_hashed).
///
/// # Arguments
/// * `input` - The sequence to map. It is consumed as an iterator and never modified.
/// * `transform` - Invoked exactly once per element, in order.
///
/// # Returns
/// The transformed values in first-occurrence order, with no two elements equal.
///
/// # Example
/// ```
/// use dedup_map::dedup_map;
///
/// let names = ["Mike", "Ben", "Phoebe", "Phoebe", "Jenny"];
/// let unique = dedup_map(names.iter(), |name| name.to_string());
/// assert_eq!(unique, vec!["Mike", "Ben", "Phoebe", "Jenny"]);
/// ```
pub fn dedup_map<I, T, F>(input: I, mut transform: F) -> Vec<T>
where
    I: IntoIterator,
    T: PartialEq,
    F: FnMut(I::Item) -> T,
{
    match try_dedup_map(input, |item| Ok::<T, Infallible>(transform(item))) {
        Ok(results) => results,
        Err(never) => match never {},
    }
}

/// Same as [`dedup_map`], but `transform` may fail.
///
/// The first failure is returned as-is and iteration stops; values collected before it are
/// discarded.
pub fn try_dedup_map<I, T, E, F>(input: I, mut transform: F) -> Result<Vec<T>, E>
where
    I: IntoIterator,
    T: PartialEq,
    F: FnMut(I::Item) -> Result<T, E>,
{
    let mut results: Vec<T> = Vec::new();
    let mut input_count = 0;

    for (index, item) in input.into_iter().enumerate() {
        input_count += 1;

        let value = transform(item).map_err(|err| {
            debug!("Transform failed at index {}; aborting dedup map", index);
            err
        })?;

        if results.contains(&value) {
            trace!("Skipping repeated value at index {}", index);
            continue;
        }

        results.push(value);
    }

    debug!(
        "Dedup mapped {} elements to {} unique values",
        input_count,
        results.len()
    );

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup_map_keeps_first_occurrence_order() {
        let input = [3, 1, 3, 2, 1, 4];
        assert_eq!(dedup_map(input, |n| n * 10), vec![30, 10, 20, 40]);
    }

    #[test]
    fn test_dedup_map_collapses_values_equal_after_transform() {
        let input = [-2, 2, -3, 1, 3];
        assert_eq!(dedup_map(input.iter(), |n: &i32| n.abs()), vec![2, 3, 1]);
    }

    #[test]
    fn test_dedup_map_empty_input() {
        let input: Vec<u8> = Vec::new();
        assert!(dedup_map(input, |n| n).is_empty());
    }

    #[test]
    fn test_dedup_map_only_needs_partial_eq() {
        // f64 is PartialEq but neither Eq nor Hash
        let input = [0.5_f64, 1.5, 0.5, 2.0];
        assert_eq!(dedup_map(input, |x| x * 2.0), vec![1.0, 3.0, 4.0]);
    }

    #[test]
    fn test_dedup_map_invokes_transform_once_per_element() {
        let input = ["a", "b", "a", "a"];
        let mut calls = 0;
        let result = dedup_map(input, |s| {
            calls += 1;
            s.to_uppercase()
        });

        assert_eq!(result, vec!["A", "B"]);
        assert_eq!(calls, 4);
    }

    #[test]
    fn test_try_dedup_map_success() {
        let input = ["1", "2", "1"];
        let result: Result<Vec<i32>, std::num::ParseIntError> =
            try_dedup_map(input, |s| s.parse::<i32>());
        assert_eq!(result.unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_try_dedup_map_stops_at_first_failure() {
        let input = ["1", "x", "2", "y"];
        let mut visited = Vec::new();
        let result = try_dedup_map(input, |s| {
            visited.push(s);
            s.parse::<i32>().map_err(|_| format!("bad: {}", s))
        });

        assert_eq!(result, Err("bad: x".to_string()));
        assert_eq!(visited, vec!["1", "x"]);
    }
}
