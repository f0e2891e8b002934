use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use hilal_calendar::CalendarError;
use hilal_core::HilalError;
use serde_json::json;
use thiserror::Error;

/// Failure of an API handler. Rendered as `{"error": "<message>"}`, where the
/// message is [`ApiError::public_message`]; the full error is only logged.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Completion(#[from] HilalError),

    #[error(transparent)]
    Calendar(#[from] CalendarError),

    #[error("{0}")]
    BadRequest(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Calendar(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Completion(err) => match err {
                HilalError::Transport(_)
                | HilalError::MalformedResponse { .. }
                | HilalError::Refusal(_) => StatusCode::BAD_GATEWAY,
                HilalError::EmptyCompletion => StatusCode::SERVICE_UNAVAILABLE,
                HilalError::ShapeDescription(_)
                | HilalError::InvalidRequest(_)
                | HilalError::Invalid(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    /// Client-facing text. Never includes model output or upstream bodies.
    pub fn public_message(&self) -> String {
        let message = match self {
            ApiError::BadRequest(message) => return message.clone(),
            ApiError::Calendar(err) => return err.to_string(),
            ApiError::Completion(err) => match err {
                HilalError::Transport(_) => "upstream model request failed",
                HilalError::MalformedResponse { .. } => "model returned a malformed response",
                HilalError::EmptyCompletion => "model returned no content",
                HilalError::Refusal(_) => "model declined the request",
                HilalError::ShapeDescription(_)
                | HilalError::InvalidRequest(_)
                | HilalError::Invalid(_) => "internal server error",
            },
        };
        message.to_owned()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(%status, error = %self, details = ?self, "Request failed");
        } else {
            tracing::warn!(%status, error = %self, "Rejected request");
        }

        (status, Json(json!({ "error": self.public_message() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn maps_errors_to_status_codes() {
        let malformed = serde_json::from_str::<serde_json::Value>("nope").unwrap_err();
        let cases = [
            (ApiError::BadRequest("x".into()), StatusCode::BAD_REQUEST),
            (HilalError::Transport("down".into()).into(), StatusCode::BAD_GATEWAY),
            (
                HilalError::MalformedResponse {
                    raw: "nope".into(),
                    source: malformed,
                }
                .into(),
                StatusCode::BAD_GATEWAY,
            ),
            (HilalError::EmptyCompletion.into(), StatusCode::SERVICE_UNAVAILABLE),
            (
                HilalError::ShapeDescription("x".into()).into(),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                HilalError::InvalidRequest("x".into()).into(),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (HilalError::Refusal("no".into()).into(), StatusCode::BAD_GATEWAY),
            (CalendarError::OutOfRange.into(), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, status) in cases {
            assert_eq!(err.status(), status, "{err}");
        }
    }

    #[test]
    fn public_message_hides_model_text_and_upstream_bodies() {
        let source = serde_json::from_str::<serde_json::Value>("secret reply").unwrap_err();
        let malformed: ApiError = HilalError::MalformedResponse {
            raw: "secret reply".into(),
            source,
        }
        .into();
        assert_eq!(malformed.public_message(), "model returned a malformed response");
        assert!(malformed.to_string().contains("secret reply"));

        let transport: ApiError =
            HilalError::Transport("status 400: {\"error\":\"sk-leak\"}".into()).into();
        assert_eq!(transport.public_message(), "upstream model request failed");

        let refusal: ApiError = HilalError::Refusal("I can't".into()).into();
        assert!(!refusal.public_message().contains("I can't"));

        assert_eq!(
            ApiError::BadRequest("missing query parameter `eventName`".into()).public_message(),
            "missing query parameter `eventName`"
        );
    }
}
