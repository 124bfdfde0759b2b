//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use keyward_core::error::{AppError, ErrorKind};

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

/// Status and error code for each error kind.
///
/// Authentication failures share one code whatever check failed.
pub fn status_for(kind: ErrorKind) -> (StatusCode, &'static str) {
    match kind {
        ErrorKind::Validation => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
        ErrorKind::Authentication => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
        ErrorKind::AccountDisabled => (StatusCode::FORBIDDEN, "ACCOUNT_DISABLED"),
        ErrorKind::Authorization => (StatusCode::FORBIDDEN, "FORBIDDEN"),
        ErrorKind::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
        ErrorKind::Conflict => (StatusCode::CONFLICT, "CONFLICT"),
        ErrorKind::Internal
        | ErrorKind::Database
        | ErrorKind::Configuration
        | ErrorKind::Serialization
        | ErrorKind::ServiceUnavailable => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_code) = status_for(self.kind);

        let message = if self.kind.is_internal() {
            tracing::error!(
                kind = %self.kind,
                error = %self.message,
                source = ?self.source,
                "Internal server error"
            );
            "Internal server error".to_string()
        } else {
            self.message
        };

        let body = ApiErrorResponse {
            error: error_code.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_statuses() {
        assert_eq!(status_for(ErrorKind::Authentication).0, StatusCode::UNAUTHORIZED);
        assert_eq!(status_for(ErrorKind::AccountDisabled).0, StatusCode::FORBIDDEN);
        assert_eq!(status_for(ErrorKind::Authorization).0, StatusCode::FORBIDDEN);
        assert_ne!(
            status_for(ErrorKind::AccountDisabled).1,
            status_for(ErrorKind::Authorization).1
        );
        assert_eq!(
            status_for(ErrorKind::ServiceUnavailable).0,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_internal_details_hidden() {
        let response = AppError::database("relation \"users\" does not exist").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "INTERNAL_ERROR");
        assert_eq!(body["message"], "Internal server error");
    }
}
