use std::time::Instant;

use crate::{
    app::util::{self, time},
    media::apis::gemini::{self, models::input_spec::InputSpec},
    AppState,
};

use super::{
    dtos::try_on_dto::{TryOnDto, MAX_PRODUCT_IMAGE_SIZE},
    errors::TryOnApiError,
    models::try_on_response::TryOnResponse,
    util::{extractor, normalizer, prompt},
};

/// Validate, normalize both images, invoke the generation service and
/// extract the generated image. Any failure ends the request.
pub async fn try_on(dto: TryOnDto, state: &AppState) -> Result<TryOnResponse, TryOnApiError> {
    let request = dto.validate()?;

    let start = Instant::now();

    tracing::debug!(
        "normalizing {} ({} bytes, {})",
        request.user_photo.file_name,
        request.user_photo.data.len(),
        request.user_photo.mime_type
    );
    let user_photo = normalizer::normalize_image_blocking(request.user_photo.data).await?;

    let product_image_bytes = match util::reqwest::get_bytes(
        &request.product_image_url,
        MAX_PRODUCT_IMAGE_SIZE,
        &state.client,
    )
    .await
    {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!("try_on failed get_bytes: {}", e.message);
            return Err(TryOnApiError::UpstreamFetchError);
        }
    };
    let product_image = normalizer::normalize_image_blocking(product_image_bytes).await?;

    let Some(gemini_api_key) = state.envy.gemini_api_key() else {
        tracing::error!("try_on: GEMINI_API_KEY not configured");
        return Err(TryOnApiError::MissingCredential);
    };

    let prompt = prompt::provide_prompt(
        request.product_type.as_deref(),
        request.product_title.as_deref(),
    );
    let input_spec = InputSpec::new(
        &prompt,
        &[
            (user_photo.mime_type(), user_photo.data.as_slice()),
            (product_image.mime_type(), product_image.data.as_slice()),
        ],
    );

    let gemini_response = match gemini::service::generate_content(
        &input_spec,
        state.envy.gemini_api_url(),
        state.envy.gemini_model(),
        gemini_api_key,
        &state.client,
    )
    .await
    {
        Ok(gemini_response) => gemini_response,
        Err(e) => return Err(TryOnApiError::GenerationServiceError(e.message)),
    };

    let result_image_url = extractor::extract_image(&gemini_response)?;
    let processing_time = time::format_elapsed_secs(start.elapsed());

    tracing::info!("try_on completed in {}", processing_time);

    Ok(TryOnResponse::new(result_image_url, processing_time))
}
