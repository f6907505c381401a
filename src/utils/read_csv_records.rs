use crate::types::CsvColumnIndex;
use crate::Error;
use csv::{ReaderBuilder, StringRecord};
use std::io::Read;

/// Reads every record from a CSV source.
///
/// # Arguments
/// * `reader` - Any byte source (stdin, a file, an in-memory buffer).
/// * `has_headers` - Whether the first row is a header row to be excluded from the records.
///
/// # Errors
/// Returns `Error::InputError` if the source cannot be read, or `Error::ParserError` if a record
/// is malformed (including rows whose field count differs from the first row).
pub fn read_csv_records<R: Read>(
    reader: R,
    has_headers: bool,
) -> Result<Vec<StringRecord>, Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(has_headers)
        .from_reader(reader);

    let mut records = Vec::new();

    for record in reader.records() {
        records.push(record?);
    }

    Ok(records)
}

/// Returns the cell at `column` within `record`.
///
/// # Errors
/// Returns `Error::ColumnError` if the record has no such column.
pub fn get_record_cell(record: &StringRecord, column: CsvColumnIndex) -> Result<&str, Error> {
    record.get(column).ok_or_else(|| {
        Error::ColumnError(format!(
            "Column {} is out of range for a record with {} fields",
            column,
            record.len()
        ))
    })
}
