use thiserror::Error;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("missing token value: {path}")]
    MissingTokenValue { path: String },

    #[error("invalid token '{path}': {reason}")]
    InvalidToken { path: String, reason: String },

    #[error("native color catalog not found: {0}")]
    CatalogNotFound(String),

    #[error("malformed colorset '{name}': {reason}")]
    MalformedColorset { name: String, reason: String },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl TokenError {
    pub fn missing(path: impl Into<String>) -> Self {
        TokenError::MissingTokenValue { path: path.into() }
    }

    pub fn invalid(path: impl Into<String>, reason: impl Into<String>) -> Self {
        TokenError::InvalidToken {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TokenError>;
