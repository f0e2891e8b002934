//! Unified error type exposed by **`hilal-core`**.
//!
//! Provider crates convert their internal errors into [`HilalError::Transport`]
//! before bubbling them up to the [`TypedCompletionClient`]. Everything that
//! can go wrong *after* the transport answered (no text, unparsable text) has
//! its own variant so callers can tell the two apart.
//!
//! [`TypedCompletionClient`]: crate::client::TypedCompletionClient

use thiserror::Error;

/// Convenient alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, HilalError>;

#[derive(Debug, Error)]
pub enum HilalError {
    /// The target output type could not produce an example instance. This is
    /// a static defect in the type definition, retrying will not help.
    #[error("cannot describe response shape: {0}")]
    ShapeDescription(String),

    /// Network, authentication or rate-limit failure reported by the
    /// provider backend. Forwarded unchanged.
    #[error("transport failed: {0}")]
    Transport(Box<dyn std::error::Error + Send + Sync + 'static>),

    /// The provider answered but returned no usable text.
    #[error("completion contained no text")]
    EmptyCompletion,

    /// The normalized reply could not be parsed into the target shape.
    #[error("malformed response ({source}): {raw}")]
    MalformedResponse {
        raw: String,
        #[source]
        source: serde_json::Error,
    },

    /// The model declined to answer. Carries the refusal text.
    #[error("model refused: {0}")]
    Refusal(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("invalid: {0}")]
    Invalid(String),
}

impl HilalError {
    /// Whether repeating the identical request may reasonably succeed.
    ///
    /// Only [`HilalError::EmptyCompletion`] qualifies. Transport retries are
    /// the transport's business, and a malformed answer needs a different
    /// prompt more than a second attempt.
    pub fn is_transient(&self) -> bool {
        matches!(self, HilalError::EmptyCompletion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_empty_completion_is_transient() {
        assert!(HilalError::EmptyCompletion.is_transient());
        assert!(!HilalError::ShapeDescription("x".into()).is_transient());
        assert!(!HilalError::Invalid("x".into()).is_transient());
        assert!(!HilalError::Refusal("no".into()).is_transient());

        let source = serde_json::from_str::<serde_json::Value>("nope").unwrap_err();
        let malformed = HilalError::MalformedResponse {
            raw: "nope".into(),
            source,
        };
        assert!(!malformed.is_transient());
        assert!(malformed.to_string().ends_with(": nope"));
    }
}
