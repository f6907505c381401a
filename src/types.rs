// Types listed here are either shared across multiple files and/or exposed via the library.

/// Zero-based index of a column within a CSV record.
pub type CsvColumnIndex = usize;

/// Represents a single CSV cell as an owned `String`.
pub type CsvCell = String;
