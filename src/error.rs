use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::bgg::FetchError;

pub const SOURCE_UNAVAILABLE_MESSAGE: &str =
    "Game not found in the local dataset and the BoardGameGeek API is not configured (missing token).";
pub const UPSTREAM_MESSAGE: &str = "Failed to fetch game data from BoardGameGeek.";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{}", SOURCE_UNAVAILABLE_MESSAGE)]
    SourceUnavailable,

    #[error(transparent)]
    Upstream(#[from] FetchError),
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::SourceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            AppError::Validation(msg) => msg.clone(),
            AppError::SourceUnavailable => SOURCE_UNAVAILABLE_MESSAGE.to_string(),
            AppError::Upstream(e) => {
                tracing::error!(
                    "Error fetching game from BoardGameGeek: status={:?} message={}",
                    e.status(),
                    e
                );
                UPSTREAM_MESSAGE.to_string()
            }
        };

        (self.status_code(), Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::validation("bad").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::SourceUnavailable.status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            AppError::from(FetchError::MissingToken).status_code(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[tokio::test]
    async fn test_upstream_detail_is_not_exposed() {
        let err = AppError::Upstream(FetchError::malformed("secret internals"));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = String::from_utf8_lossy(&bytes);
        assert!(!body.contains("secret internals"));

        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["error"], UPSTREAM_MESSAGE);
    }

    #[test]
    fn test_source_unavailable_names_both_causes() {
        let message = AppError::SourceUnavailable.to_string();
        assert!(message.contains("local dataset"));
        assert!(message.contains("not configured"));
    }
}
