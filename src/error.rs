use thiserror::Error;

use crate::lookup::LookupError;

pub type Result<T> = std::result::Result<T, ProcessingError>;

#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Weather lookup failed: {0}")]
    Lookup(#[from] LookupError),

    #[error("Gave up on postal code {postal_code} after {attempts} transient failures")]
    RetriesExhausted { postal_code: String, attempts: u32 },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Settings error: {0}")]
    Settings(#[from] config::ConfigError),

    #[error("Invalid data format: {0}")]
    InvalidFormat(String),

    #[error("Missing required data: {0}")]
    MissingData(String),
}
