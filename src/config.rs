use crate::models::{ColumnProcessorConfig, Mode};

pub const DEFAULT_COLUMN_PROCESSOR_CONFIG: &ColumnProcessorConfig = &ColumnProcessorConfig {
    has_headers: false,
    column: 0,
    mode: Mode::Dedup,
};
