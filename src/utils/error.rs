use thiserror::Error;

#[derive(Error, Debug)]
pub enum YieldError {
    #[error("Invalid input for {field}: '{value}' ({reason})")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    #[error("API request failed: {0}")]
    TransportError(#[from] reqwest::Error),

    #[error("Yield value not found: {message}")]
    ParseFailure { message: String },

    #[error("Invalid request URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Invalid configuration value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, YieldError>;
