use std::fmt;

/// Failures raised while reading and processing CSV input.
///
/// The sequence operations themselves never produce this type; a fallible transform's own
/// error is returned to the caller unchanged.
#[derive(Debug)]
pub enum Error {
    InputError(String),
    ParserError(String),
    ColumnError(String),
    ConfigError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InputError(msg) => write!(f, "Input Error: {}", msg),
            Error::ParserError(msg) => write!(f, "Parser Error: {}", msg),
            Error::ColumnError(msg) => write!(f, "Column Error: {}", msg),
            Error::ConfigError(msg) => write!(f, "Config Error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::InputError(err.to_string())
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Error {
        if err.is_io_error() {
            return Error::InputError(err.to_string());
        }

        Error::ParserError(err.to_string())
    }
}
