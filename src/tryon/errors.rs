use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TryOnApiError {
    MissingParameter,
    PayloadTooLarge,
    UnsupportedMediaType,
    UpstreamFetchError,
    ImageProcessingError,
    MissingCredential,
    GenerationServiceError(String),
    EmptyGenerationResult,
}

impl TryOnApiError {
    pub fn value(&self) -> ApiError {
        match self {
            Self::MissingParameter => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Missing required parameters".to_string(),
            },
            Self::PayloadTooLarge => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "File size too large. Maximum 5MB allowed.".to_string(),
            },
            Self::UnsupportedMediaType => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Invalid file type. Only JPEG, PNG and WebP are allowed.".to_string(),
            },
            Self::UpstreamFetchError => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Failed to download product image".to_string(),
            },
            Self::ImageProcessingError => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Failed to process image.".to_string(),
            },
            Self::MissingCredential => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "GEMINI_API_KEY not configured".to_string(),
            },
            Self::GenerationServiceError(message) => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: message.to_string(),
            },
            Self::EmptyGenerationResult => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "No image generated by AI".to_string(),
            },
        }
    }
}
