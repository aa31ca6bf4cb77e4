use reqwest::StatusCode;

use crate::app::{errors::DefaultApiError, models::api_error::ApiError};

use super::{
    config::generate_content_url,
    models::input_spec::InputSpec,
    structs::{
        gemini_error_response::GeminiErrorResponse,
        gemini_generate_content_response::GeminiGenerateContentResponse,
    },
};

pub async fn generate_content(
    input_spec: &InputSpec,
    api_url: &str,
    model: &str,
    gemini_api_key: &str,
    client: &reqwest::Client,
) -> Result<GeminiGenerateContentResponse, ApiError> {
    let result = client
        .post(generate_content_url(api_url, model))
        .header("x-goog-api-key", gemini_api_key)
        .json(input_spec)
        .send()
        .await;

    match result {
        Ok(res) => {
            let status = res.status();

            match res.text().await {
                Ok(text) if !status.is_success() => {
                    tracing::error!("generate_content: {} {}", status, text);
                    Err(provide_error(status, &text))
                }
                Ok(text) => match serde_json::from_str(&text) {
                    Ok(gemini_response) => Ok(gemini_response),
                    Err(e) => {
                        tracing::error!("generate_content (1): {:?} {}", e, text);
                        Err(DefaultApiError::InternalServerError.value())
                    }
                },
                Err(e) => {
                    tracing::error!("generate_content (2): {:?}", e);
                    Err(DefaultApiError::InternalServerError.value())
                }
            }
        }
        Err(e) => {
            tracing::error!("generate_content (3): {:?}", e);
            Err(ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: e.to_string(),
            })
        }
    }
}

fn provide_error(status: StatusCode, text: &str) -> ApiError {
    let message = match serde_json::from_str::<GeminiErrorResponse>(text) {
        Ok(error_response) => {
            let error = error_response.error;
            tracing::debug!(code = ?error.code, status = ?error.status, "gemini error");
            error.message
        }
        Err(_) => format!("Generation service responded with {}.", status),
    };

    ApiError {
        code: StatusCode::INTERNAL_SERVER_ERROR,
        message,
    }
}
