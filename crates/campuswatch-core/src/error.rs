//! Error types for CampusWatch

/// Result type alias using CampusWatch's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for CampusWatch operations.
///
/// Classification itself never fails; errors only surface while building
/// lexicons, loading configuration, or driving the live controller.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Lexicon construction errors
    #[error("lexicon error: {0}")]
    Lexicon(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// Live controller errors (e.g. use after shutdown)
    #[error("controller error: {0}")]
    Controller(String),

    /// Filesystem errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parse errors
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    /// Create a new lexicon error
    pub fn lexicon(msg: impl Into<String>) -> Self {
        Self::Lexicon(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new controller error
    pub fn controller(msg: impl Into<String>) -> Self {
        Self::Controller(msg.into())
    }
}
