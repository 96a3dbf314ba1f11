use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use catalog::errors::CatalogError;
use serde_json::json;
use thiserror::Error;

/// Central error type for the gateway application.
///
/// Business-rule violations never land here: the engine reports them as
/// data inside a 200 response. This type covers boundary failures only.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::EventNotFound { .. } => AppError::NotFound(err.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message, code) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, "EVENT_NOT_FOUND"),
        };

        let body = Json(json!({
            "error": code,
            "message": error_message
        }));

        (status, body).into_response()
    }
}
