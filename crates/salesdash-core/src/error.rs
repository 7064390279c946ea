//! Error types for SalesDash

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Load error: {0}")]
    Load(String),

    #[error("Missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("Invalid record at line {line}: {reason}")]
    InvalidRecord { line: u64, reason: String },

    #[error("Insufficient data for forecast: need at least 2 months, found {0}")]
    InsufficientData(usize),

    #[error("No data available for the selected filters")]
    EmptyResult,

    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    /// Whether this error came from reading or validating the dataset
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            Error::Csv(_)
                | Error::Io(_)
                | Error::Load(_)
                | Error::MissingColumns(_)
                | Error::InvalidRecord { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
