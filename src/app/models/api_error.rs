use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        rejection::JsonRejection,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Failure shape shared by every endpoint: `{ "success": false, "error": message }`.
#[derive(Debug)]
pub struct ApiError {
    pub code: StatusCode,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "success": false,
            "error": self.message,
        }));

        (self.code, body).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError {
            code: StatusCode::BAD_REQUEST,
            message: rejection.body_text(),
        }
    }
}

impl From<MultipartRejection> for ApiError {
    fn from(rejection: MultipartRejection) -> Self {
        ApiError {
            code: StatusCode::BAD_REQUEST,
            message: rejection.body_text(),
        }
    }
}

impl From<MultipartError> for ApiError {
    fn from(e: MultipartError) -> Self {
        tracing::warn!("multipart: {:?}", e);
        match e.status() {
            StatusCode::PAYLOAD_TOO_LARGE => ApiError {
                code: StatusCode::PAYLOAD_TOO_LARGE,
                message: "Request body too large.".to_string(),
            },
            _ => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Failed to read multipart form.".to_string(),
            },
        }
    }
}
