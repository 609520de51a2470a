use thiserror::Error;

/// Main error type for the hollywood graph
#[derive(Error, Debug)]
pub enum HollywoodError {
    /// File system I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed delimited records (wrong field count, bad quoting)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Parse errors (interchange format, test-result flags)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Convenient Result type using HollywoodError
pub type Result<T> = std::result::Result<T, HollywoodError>;
