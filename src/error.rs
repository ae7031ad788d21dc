use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("HTTP error: {0}")]
    HttpError(String),

    #[error("Rate limit exceeded by Data Dragon, please try again later")]
    RateLimited,

    #[error("JSON parsing error: {0}")]
    JsonError(String),

    #[error("I/O error on {path}: {message}")]
    IoError { path: String, message: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Champion not found: {0}")]
    ChampionNotFound(String),

    #[error("No champion data available (dataset {0} is empty)")]
    EmptyDataset(String),
}
