pub mod column_processor;
pub use column_processor::ColumnProcessor;

pub mod config;
pub use config::{ColumnProcessorConfig, Mode};

pub mod error;
pub use error::Error;
