use crate::types::CsvCell;
use crate::utils::{dedup_flat_map, get_record_cell, read_csv_records, try_dedup_map, try_dup_map};
use crate::{ColumnProcessorConfig, Error, Mode};

use csv::StringRecord;
use log::info;
use std::io::Read;

/// Applies one of the sequence operations to a single column of CSV input.
pub struct ColumnProcessor<'a> {
    config: &'a ColumnProcessorConfig,
}

impl<'a> ColumnProcessor<'a> {
    pub fn new(config: &'a ColumnProcessorConfig) -> Self {
        ColumnProcessor { config }
    }

    /// Reads CSV from `reader` and processes the configured column.
    ///
    /// # Errors
    /// Returns an error if the input cannot be read or parsed, or if a record lacks the
    /// configured column.
    pub fn process_csv<R: Read>(&self, reader: R) -> Result<Vec<CsvCell>, Error> {
        info!("Reading records...");
        let records = read_csv_records(reader, self.config.has_headers)?;

        self.process_records(&records)
    }

    /// Processes the configured column of already-parsed records.
    ///
    /// The output is rendered as strings, one per resulting value:
    /// - `Mode::Dedup`: unique cells in first-occurrence order.
    /// - `Mode::Dup`: repeated cells, sorted ascending.
    /// - `Mode::DedupInt`: unique integers in first-occurrence order; cells that are blank or do
    ///   not parse as an integer, including ones with surrounding whitespace, are skipped.
    pub fn process_records(&self, records: &[StringRecord]) -> Result<Vec<CsvCell>, Error> {
        let column = self.config.column;

        info!(
            "Applying {} to column {} of {} records...",
            self.config.mode,
            column,
            records.len()
        );

        match self.config.mode {
            Mode::Dedup => try_dedup_map(records, |record| {
                get_record_cell(record, column).map(str::to_string)
            }),
            Mode::Dup => try_dup_map(records, |record| {
                get_record_cell(record, column).map(str::to_string)
            }),
            Mode::DedupInt => {
                let integers = dedup_flat_map(records, |record| -> Result<Option<i64>, Error> {
                    let cell = get_record_cell(record, column)?;
                    Ok(cell.parse::<i64>().ok())
                })?;

                Ok(integers.iter().map(|n| n.to_string()).collect())
            }
        }
    }
}
