use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{error, warn};

use crate::application::error::ApplicationError;

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApplicationError::NotFound(ref path) => {
                warn!("File not found: {}", path);
                (StatusCode::NOT_FOUND, "File not found".to_string())
            }
            ApplicationError::EmptyAttribute(ref attribute) => {
                warn!("Attribute {} holds no file", attribute);
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    format!("No file stored for '{}'", attribute),
                )
            }
            ApplicationError::BadRequest(ref msg) => {
                warn!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, "Bad request".to_string())
            }
            ApplicationError::StorageError(ref msg) => {
                error!("Storage error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Could not store file".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_errors_to_status_codes() {
        let cases = [
            (ApplicationError::NotFound("a".into()), StatusCode::NOT_FOUND),
            (
                ApplicationError::EmptyAttribute("avatar".into()),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (ApplicationError::BadRequest("b".into()), StatusCode::BAD_REQUEST),
            (
                ApplicationError::StorageError("disk full".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, status) in cases {
            assert_eq!(error.into_response().status(), status);
        }
    }
}
