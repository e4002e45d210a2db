use thiserror::Error;

/// Failures at the loading boundary. The scoring engine itself never errors.
#[derive(Error, Debug, Clone)]
pub enum GolfError {
    #[error("parse error: {0}")]
    Parse(String),
    #[error("io error: {0}")]
    Io(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for GolfError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<toml::de::Error> for GolfError {
    fn from(err: toml::de::Error) -> Self {
        Self::InvalidConfig(err.to_string())
    }
}

impl From<std::io::Error> for GolfError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<String> for GolfError {
    fn from(err: String) -> Self {
        Self::Other(err)
    }
}

impl From<&str> for GolfError {
    fn from(err: &str) -> Self {
        Self::Other(err.to_string())
    }
}
