use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use curator_core::{ProviderError, RatingDenied};
use serde_json::json;
use std::fmt;

pub type AppResult<T> = Result<T, AppError>;

/// Fixed user-facing message for rating-blocked content. Resolution
/// failures use the same message so restricted items are
/// indistinguishable from unavailable ones.
pub const RESTRICTED_MESSAGE: &str =
    "This content is restricted by your parental controls.";

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn bad_gateway(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_GATEWAY, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": {
                "message": self.message,
                "status": self.status.as_u16(),
            }
        }));

        (self.status, body).into_response()
    }
}

// Convert from various error types
impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::NotFound => Self::not_found("Not found"),
            _ => Self::bad_gateway("Upstream catalog error"),
        }
    }
}

impl From<RatingDenied> for AppError {
    fn from(_: RatingDenied) -> Self {
        Self::forbidden(RESTRICTED_MESSAGE)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self::internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_denied_maps_to_403_with_the_fixed_message() {
        let err = AppError::from(RatingDenied);
        assert_eq!(err.status, StatusCode::FORBIDDEN);
        assert_eq!(err.message, RESTRICTED_MESSAGE);
    }

    #[test]
    fn provider_not_found_maps_to_404() {
        let err = AppError::from(ProviderError::NotFound);
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn other_provider_errors_map_to_502() {
        let err =
            AppError::from(ProviderError::ApiError("rate limited".to_string()));
        assert_eq!(err.status, StatusCode::BAD_GATEWAY);
    }
}
