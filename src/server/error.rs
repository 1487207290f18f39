//! Error responses for the intake API

use super::checkout::CheckoutError;
use crate::validation::ErrorMap;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

pub const INVALID_BODY_MESSAGE: &str = "Invalid request body";
pub const VALIDATION_MESSAGE: &str = "Please fix the highlighted fields";
pub const CHECKOUT_DISABLED_MESSAGE: &str = "Online donations are not configured";
pub const CHECKOUT_FAILED_MESSAGE: &str = "Failed to create checkout session";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid request body: {0}")]
    InvalidBody(String),

    #[error("validation failed for {} field(s)", .0.len())]
    Validation(ErrorMap),

    #[error("checkout is not configured")]
    CheckoutUnavailable,

    #[error("checkout failed: {0}")]
    Checkout(#[from] CheckoutError),

    /// `public` is returned to the caller, `detail` only goes to the log
    #[error("{public}: {detail}")]
    Internal { public: &'static str, detail: String },
}

#[derive(Debug, Serialize)]
struct ErrorResponse<'a> {
    error: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<&'a ErrorMap>,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidBody(_) | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::CheckoutUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::Checkout(_) => StatusCode::BAD_GATEWAY,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn public_message(&self) -> &'static str {
        match self {
            Self::InvalidBody(_) => INVALID_BODY_MESSAGE,
            Self::Validation(_) => VALIDATION_MESSAGE,
            Self::CheckoutUnavailable => CHECKOUT_DISABLED_MESSAGE,
            Self::Checkout(_) => CHECKOUT_FAILED_MESSAGE,
            Self::Internal { public, .. } => *public,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            Self::Internal { .. } | Self::Checkout(_) => {
                tracing::error!(error = %self, "Request failed")
            }
            _ => tracing::debug!(error = %self, "Request rejected"),
        }

        let errors = match &self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        };
        let body = ErrorResponse {
            error: self.public_message(),
            errors,
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::InvalidBody("eof".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::CheckoutUnavailable.status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            ApiError::Checkout(CheckoutError::MissingUrl).status_code(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[tokio::test]
    async fn test_validation_body_lists_fields() {
        let mut errors = ErrorMap::new();
        errors.insert("email", "Email is required");

        let (status, body) = body_json(ApiError::Validation(errors)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({
                "error": "Please fix the highlighted fields",
                "errors": {"email": "Email is required"}
            })
        );
    }

    #[tokio::test]
    async fn test_internal_details_do_not_leak() {
        let (status, body) = body_json(ApiError::Internal {
            public: "Failed to submit application",
            detail: "missing field `petName` at line 1".to_string(),
        })
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "Failed to submit application"}));
    }

    #[tokio::test]
    async fn test_upstream_message_is_hidden() {
        let (_, body) = body_json(ApiError::Checkout(CheckoutError::Upstream {
            status: 401,
            message: "Invalid API Key provided: sk_live_****".to_string(),
        }))
        .await;
        assert_eq!(body, json!({"error": "Failed to create checkout session"}));
    }
}
