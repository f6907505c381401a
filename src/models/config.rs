use crate::types::CsvColumnIndex;
use crate::Error;
use std::fmt;
use std::str::FromStr;

/// Which sequence operation a `ColumnProcessor` applies to the selected column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Unique cell values in first-occurrence order.
    Dedup,
    /// Cell values that occur more than once, sorted ascending.
    Dup,
    /// Unique integer values, skipping cells that do not parse.
    DedupInt,
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dedup" => Ok(Mode::Dedup),
            "dup" => Ok(Mode::Dup),
            "dedup-int" => Ok(Mode::DedupInt),
            other => Err(Error::ConfigError(format!(
                "Unknown mode '{}' (expected one of: dedup, dup, dedup-int)",
                other
            ))),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Dedup => write!(f, "dedup"),
            Mode::Dup => write!(f, "dup"),
            Mode::DedupInt => write!(f, "dedup-int"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ColumnProcessorConfig {
    pub has_headers: bool,
    pub column: CsvColumnIndex,
    pub mode: Mode,
}
