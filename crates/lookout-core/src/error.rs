//! Error types for the Lookout API clients.

use reqwest::StatusCode;
use thiserror::Error;

/// Result type alias for API client operations.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Fixed message shown when a request never produced an HTTP response.
pub const CONNECTIVITY_MESSAGE: &str =
    "Could not reach the Lookout server. Check your connection and try again.";

/// Errors produced by the user-configuration API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Client was constructed with an unusable base URL.
    #[error("Invalid API configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// The request could not be completed (DNS, TLS, refused connection).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A response body failed to decode.
    #[error("Failed to parse JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    /// The server answered with a non-success status.
    #[error("Request rejected with HTTP {status}")]
    Rejected {
        status: u16,
        detail: Option<String>,
    },
}

impl ApiError {
    /// Builds a `Rejected` error from a response status and raw body.
    #[must_use]
    pub fn rejected(status: StatusCode, body: &str) -> Self {
        Self::Rejected {
            status: status.as_u16(),
            detail: parse_detail(body),
        }
    }

    /// Maps this error to the string shown to the user.
    ///
    /// A server-provided `detail` is surfaced verbatim; a detail-less
    /// rejection falls back to the operation-specific message; everything
    /// else is reported as a connectivity problem.
    #[must_use]
    pub fn user_message(&self, rejected_fallback: &str) -> String {
        match self {
            Self::Rejected {
                detail: Some(detail),
                ..
            } => detail.clone(),
            Self::Rejected { .. } => rejected_fallback.to_string(),
            Self::Http(_) | Self::Json(_) | Self::InvalidConfiguration(_) => {
                CONNECTIVITY_MESSAGE.to_string()
            }
        }
    }
}

/// Extracts a string-valued `detail` field from an error response body.
///
/// The backend reports rejections as `{"detail": "..."}`. Validation errors
/// carry a structured `detail` array instead; those are not user-presentable
/// and map to `None` so callers use their fallback message.
#[must_use]
pub fn parse_detail(body: &str) -> Option<String> {
    let payload = serde_json::from_str::<serde_json::Value>(body).ok()?;
    match payload.get("detail") {
        Some(serde_json::Value::String(detail)) => {
            let detail = detail.trim();
            if detail.is_empty() {
                None
            } else {
                Some(detail.to_string())
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_detail_extracts_string_field() {
        assert_eq!(
            parse_detail(r#"{"detail": "not found"}"#),
            Some("not found".to_string())
        );
    }

    #[test]
    fn parse_detail_ignores_structured_detail() {
        assert_eq!(parse_detail(r#"{"detail": [{"loc": ["body"]}]}"#), None);
        assert_eq!(parse_detail(r#"{"detail": ""}"#), None);
        assert_eq!(parse_detail("not json"), None);
        assert_eq!(parse_detail(r#"{"message": "nope"}"#), None);
    }

    #[test]
    fn user_message_prefers_server_detail() {
        let error = ApiError::rejected(StatusCode::NOT_FOUND, r#"{"detail": "not found"}"#);
        assert_eq!(error.user_message("Failed to delete API key"), "not found");
    }

    #[test]
    fn user_message_falls_back_without_detail() {
        let error = ApiError::rejected(StatusCode::INTERNAL_SERVER_ERROR, "");
        assert_eq!(
            error.user_message("Failed to add brand"),
            "Failed to add brand"
        );
    }

    #[test]
    fn user_message_reports_connectivity_for_transport_errors() {
        let error = ApiError::InvalidConfiguration("base URL must not be empty");
        assert_eq!(error.user_message("unused"), CONNECTIVITY_MESSAGE);
    }
}
