use crate::{
    media::apis::gemini::structs::gemini_generate_content_response::GeminiGenerateContentResponse,
    tryon::errors::TryOnApiError,
};

pub static RESULT_MIME_TYPE: &str = "image/jpeg";

pub fn extract_image(response: &GeminiGenerateContentResponse) -> Result<String, TryOnApiError> {
    match response.first_inline_data() {
        Some(inline_data) => Ok(to_data_url(&inline_data.data)),
        None => {
            let finish_reason = response
                .candidates
                .first()
                .and_then(|candidate| candidate.finish_reason.as_deref());
            tracing::warn!(
                candidates = response.candidates.len(),
                ?finish_reason,
                "generation returned no image"
            );
            Err(TryOnApiError::EmptyGenerationResult)
        }
    }
}

pub fn to_data_url(base64_data: &str) -> String {
    format!("data:{};base64,{}", RESULT_MIME_TYPE, base64_data)
}
