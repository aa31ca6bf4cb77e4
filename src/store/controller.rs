use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    app::models::{api_error::ApiError, json_from_request::JsonFromRequest},
    AppState,
};

use super::{
    dtos::{create_cached_result_dto::CreateCachedResultDto, edit_product_dto::EditProductDto},
    models::{cached_result::CachedResult, product::Product, widget_settings::WidgetSettings},
    service,
};

pub async fn get_settings(State(state): State<AppState>) -> Json<WidgetSettings> {
    Json(service::get_settings(&state.store).await)
}

pub async fn save_settings(
    State(state): State<AppState>,
    JsonFromRequest(dto): JsonFromRequest<WidgetSettings>,
) -> Result<Json<WidgetSettings>, ApiError> {
    match dto.validate() {
        Ok(_) => Ok(Json(service::save_settings(dto, &state.store).await)),
        Err(e) => Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: e.to_string(),
        }),
    }
}

pub async fn get_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(service::get_products(&state.store).await)
}

pub async fn save_products(
    State(state): State<AppState>,
    JsonFromRequest(dto): JsonFromRequest<Vec<Product>>,
) -> Result<Json<Vec<Product>>, ApiError> {
    for product in &dto {
        if let Err(e) = product.validate() {
            return Err(ApiError {
                code: StatusCode::BAD_REQUEST,
                message: e.to_string(),
            });
        }
    }

    match service::save_products(dto, &state.store).await {
        Ok(products) => Ok(Json(products)),
        Err(e) => Err(e),
    }
}

pub async fn edit_product_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonFromRequest(dto): JsonFromRequest<EditProductDto>,
) -> Result<Json<Product>, ApiError> {
    match dto.validate() {
        Ok(_) => match service::edit_product_by_id(&id, &dto, &state.store).await {
            Ok(product) => Ok(Json(product)),
            Err(e) => Err(e),
        },
        Err(e) => Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: e.to_string(),
        }),
    }
}

pub async fn get_cached_results(State(state): State<AppState>) -> Json<Vec<CachedResult>> {
    Json(service::get_cached_results(&state.store).await)
}

pub async fn save_cached_result(
    State(state): State<AppState>,
    JsonFromRequest(dto): JsonFromRequest<CreateCachedResultDto>,
) -> Result<(StatusCode, Json<CachedResult>), ApiError> {
    match dto.validate() {
        Ok(_) => Ok((
            StatusCode::CREATED,
            Json(service::save_cached_result(&dto, &state.store).await),
        )),
        Err(e) => Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: e.to_string(),
        }),
    }
}

pub async fn clear_cached_results(State(state): State<AppState>) -> StatusCode {
    service::clear_cached_results(&state.store).await;

    StatusCode::NO_CONTENT
}
