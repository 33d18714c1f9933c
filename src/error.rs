use thiserror::Error;

#[derive(Error, Debug)]
pub enum HourcastError {
    #[error("Malformed series: '{series}' has {actual} entries, expected {expected}")]
    MalformedSeries {
        series: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Malformed timestamp at index {index}: '{value}'")]
    MalformedTimestamp { index: usize, value: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Data source unavailable: {0}")]
    DataSourceUnavailable(String),
}

pub type Result<T> = std::result::Result<T, HourcastError>;
