use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Server returned error status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse response body: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Response is missing the `entities` field")]
    MissingEnvelope,

    #[error("API error {code}: {info}")]
    Api { code: String, info: String },

    #[error("Entity {0} not present in response")]
    EntityNotFound(String),

    #[error("Chunk size must be at least 1")]
    InvalidChunkSize,
}

/// Coarse classification of a [`FetchError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Network failure or non-success status.
    Transport,
    /// Body was not the JSON envelope we asked for.
    Parse,
    /// The API answered but rejected the request.
    Remote,
    /// Response parsed fine but lacked the requested entity.
    NotFound,
    /// Caller passed something we refuse to send.
    Usage,
}

impl FetchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FetchError::Transport(_) | FetchError::Status { .. } => ErrorKind::Transport,
            FetchError::Parse(_) | FetchError::MissingEnvelope => ErrorKind::Parse,
            FetchError::Api { .. } => ErrorKind::Remote,
            FetchError::EntityNotFound(_) => ErrorKind::NotFound,
            FetchError::InvalidChunkSize => ErrorKind::Usage,
        }
    }
}
