use csv::Reader;
use std::error::Error;

pub mod constants;

/// Utility to load a named column from a CSV file for testing and benchmarking.
///
/// Blank cells are returned as `None`.
pub fn load_column_from_file(
    file_path: &str,
    column_name: &str,
) -> Result<Vec<Option<String>>, Box<dyn Error>> {
    let mut reader = Reader::from_path(file_path)?;

    let column_index = reader
        .headers()?
        .iter()
        .position(|header| header == column_name)
        .ok_or_else(|| format!("Missing '{}' column in {}", column_name, file_path))?;

    let mut values = Vec::new();

    for record in reader.records() {
        let record = record?;
        let value = record
            .get(column_index)
            .filter(|cell| !cell.is_empty())
            .map(|cell| cell.to_string());
        values.push(value);
    }

    Ok(values)
}

/// Returns the largest factor of `n` other than `n` itself, or 1 for primes and for 1.
pub fn highest_proper_factor(n: u32) -> u32 {
    (2..=n / 2).rev().find(|f| n % f == 0).unwrap_or(1)
}

/// Parses an optional cell as an integer, yielding `None` for absent or non-numeric cells.
pub fn parse_int_or_none(cell: Option<&str>) -> Option<i64> {
    cell.and_then(|s| s.parse().ok())
}

/// Produces `len` values cycling through `distinct` different integers.
pub fn generate_cycling_values(len: usize, distinct: usize) -> Vec<usize> {
    (0..len).map(|i| (i * 7919) % distinct.max(1)).collect()
}
