mod config;
pub use config::DEFAULT_COLUMN_PROCESSOR_CONFIG;
pub mod models;
pub use models::{ColumnProcessor, ColumnProcessorConfig, Error, Mode};
pub mod types;
mod utils;
pub use types::{CsvCell, CsvColumnIndex};
pub use utils::{
    dedup_flat_map, dedup_map, dedup_map_hashed, dup_map, get_record_cell, read_csv_records,
    try_dedup_map, try_dup_map,
};

#[cfg(doctest)]
doc_comment::doctest!("../README.md");
