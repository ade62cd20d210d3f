use std::path::PathBuf;

use crate::document::DocumentReadError;

/// Environment variable holding the chat-completion API key
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Errors surfaced at the review boundary
#[derive(Debug, thiserror::Error)]
pub enum ReviewError {
    #[error(transparent)]
    DocumentRead(#[from] DocumentReadError),

    #[error("Please set the {} environment variable.", API_KEY_ENV)]
    MissingCredential,

    #[error("review request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("review request rejected with status {status}: {body}")]
    Rejected {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("model returned no content")]
    EmptyResponse,

    #[error("malformed review response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to store uploaded document at {}: {source}", path.display())]
    Upload {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ReviewError {
    /// Stable tag for each error kind, used in JSON error bodies and logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::DocumentRead(_) => "document_read",
            Self::MissingCredential => "missing_credential",
            Self::Request(_) | Self::Rejected { .. } => "review_request",
            Self::EmptyResponse | Self::Parse(_) => "review_parse",
            Self::Upload { .. } => "upload",
        }
    }
}

/// Resolve the API key, treating an empty value as absent
pub fn require_api_key(api_key: Option<&str>) -> Result<String, ReviewError> {
    match api_key.map(str::trim) {
        Some(key) if !key.is_empty() => Ok(key.to_string()),
        _ => Err(ReviewError::MissingCredential),
    }
}
