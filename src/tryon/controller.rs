use axum::{
    extract::{
        multipart::{Multipart, MultipartRejection},
        State,
    },
    http::StatusCode,
    Json,
};
use tracing::Instrument;
use uuid::Uuid;

use crate::{
    app::{models::api_error::ApiError, util::multipart::multipart::get_form_properties},
    AppState,
};

use super::{
    dtos::try_on_dto::TryOnDto, errors::TryOnApiError, models::try_on_response::TryOnResponse,
    service,
};

pub async fn try_on(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<TryOnResponse>, ApiError> {
    let span = tracing::info_span!("try_on", id = %Uuid::new_v4());

    handle_try_on(state, multipart).instrument(span).await
}

async fn handle_try_on(
    state: AppState,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<TryOnResponse>, ApiError> {
    let form = match get_form_properties(multipart?).await {
        Ok(form) => form,
        // body cap hit while streaming the photo
        Err(e) if e.code == StatusCode::PAYLOAD_TOO_LARGE => {
            return Err(TryOnApiError::PayloadTooLarge.value())
        }
        Err(e) => return Err(e),
    };
    let dto = TryOnDto::from_form(form);

    match service::try_on(dto, &state).await {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            tracing::warn!("try_on failed: {:?}", e);
            Err(e.value())
        }
    }
}
