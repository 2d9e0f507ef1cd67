use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlattenError {
    #[error("Input file not found: {path}")]
    NotFoundError { path: String },

    #[error("JSON parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, FlattenError>;
