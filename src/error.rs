//! Error types for data source operations

/// Data source operation errors
#[derive(Debug, thiserror::Error)]
pub enum DataSourceError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Remote request failed (status: {status}): {body}")]
    RemoteRequest { status: u16, body: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Failed to load plugin: {0}")]
    PluginLoad(String),
}

impl DataSourceError {
    /// HTTP status carried by the error, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            DataSourceError::NotFound(_) => Some(404),
            DataSourceError::RemoteRequest { status, .. } => Some(*status),
            DataSourceError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, DataSourceError::NotFound(_))
    }
}

/// Result type for data source operations
pub type Result<T> = std::result::Result<T, DataSourceError>;
