use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShingleError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Writing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),

    #[error("Invalid Argument: {0}")]
    InvalidArgument(String),
}

pub type ShingleResult<T> = Result<T, ShingleError>;
