use thiserror::Error;

/// fareseries error types
#[derive(Error, Debug)]
pub enum FareError {
    /// Invalid generation parameters
    #[error("config error: {0}")]
    Config(String),

    /// Aggregation requested on a series with no points
    #[error("empty series: nothing to aggregate")]
    EmptySeries,

    /// Selection outside the configured destinations
    #[error("unknown destination: {0}")]
    UnknownDestination(String),

    /// File I/O error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse a config file or serialize output
    #[error("parse error: {0}")]
    Parse(String),
}

/// Result type alias for fareseries
pub type Result<T> = std::result::Result<T, FareError>;
