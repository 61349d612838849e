use thiserror::Error;

#[derive(Error, Debug)]
pub enum SalesAnalyticsError {
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Invalid price tolerance {0}: must be a finite, non-negative number")]
    InvalidTolerance(f64),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SalesAnalyticsError>;
