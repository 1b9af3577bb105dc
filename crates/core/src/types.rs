use thiserror::Error;

/// The main error type for Nocturn operations
#[derive(Debug, Error)]
pub enum NocturnError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Manifest parsing error: {0}")]
    Manifest(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Session error: {0}")]
    Session(String),
}

/// Result type alias for Nocturn operations
pub type NocturnResult<T> = Result<T, NocturnError>;
