use hilal_core::error::HilalError;
use reqwest::{StatusCode, header::InvalidHeaderValue};

/// Every failure mode the HTTP client can hit.
///
/// All of them are transport failures from the point of view of
/// `hilal-core`; see the `From` impl below.
#[derive(Debug, thiserror::Error)]
pub enum OpenAiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("couldn’t (de)serialise body: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("OpenAI returned non-success status {status}: {body}")]
    Api { status: StatusCode, body: String },

    #[error("API key is not a valid header value: {0}")]
    InvalidApiKey(#[from] InvalidHeaderValue),
}

impl From<OpenAiError> for HilalError {
    fn from(value: OpenAiError) -> Self {
        HilalError::Transport(Box::new(value))
    }
}
