use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use content_api::{ApiError, ConfigLoadError};
use entries::StoreError;
use serde::Serialize;

pub type ServerResult<T> = Result<T, ServerError>;

/// Failures a content request can end in
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Unknown route or locale, or an entry that must not be served
    #[error("{0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Content store error: {0}")]
    Store(#[from] StoreError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// `{"error": {"code": ..., "message": ...}}`
#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: ErrorDetail<'a>,
}

#[derive(Debug, Serialize)]
struct ErrorDetail<'a> {
    code: &'a str,
    message: String,
}

impl ServerError {
    pub fn not_found() -> Self {
        ServerError::NotFound("Not found".to_string())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::NotFound(_) => StatusCode::NOT_FOUND,
            ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::Store(_) | ServerError::Config(_) | ServerError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Stable machine-readable code for the error body
    pub fn error_code(&self) -> &'static str {
        match self {
            ServerError::NotFound(_) => "NOT_FOUND",
            ServerError::BadRequest(_) => "BAD_REQUEST",
            ServerError::Store(_) => "STORE_ERROR",
            ServerError::Config(_) => "CONFIG_ERROR",
            ServerError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.error_code();
        if status.is_server_error() {
            tracing::error!(code, error = %self, "request_failed");
        }

        let body = ErrorBody {
            error: ErrorDetail {
                code,
                message: self.to_string(),
            },
        };
        (status, Json(body)).into_response()
    }
}

impl From<ApiError> for ServerError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::NotFound(message) => ServerError::NotFound(message),
            ApiError::Store(err) => ServerError::Store(err),
            other => ServerError::Internal(other.to_string()),
        }
    }
}

impl From<ConfigLoadError> for ServerError {
    fn from(err: ConfigLoadError) -> Self {
        ServerError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[test]
    fn api_not_found_keeps_message() {
        let err: ServerError = ApiError::NotFound("Programme not found".into()).into();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Programme not found");
    }

    #[test]
    fn store_failures_are_internal() {
        let err: ServerError = StoreError::Unavailable("backend down".into()).into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.error_code(), "STORE_ERROR");
    }

    #[tokio::test]
    async fn body_carries_code_and_message() {
        let response = ServerError::BadRequest("page must be a positive integer".into())
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"]["code"], "BAD_REQUEST");
        assert_eq!(
            body["error"]["message"],
            "Bad request: page must be a positive integer"
        );
    }
}
