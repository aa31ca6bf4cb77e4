use axum::http::StatusCode;

use crate::app::{models::api_error::ApiError, util::time};

use super::{
    dtos::{create_cached_result_dto::CreateCachedResultDto, edit_product_dto::EditProductDto},
    errors::StoreApiError,
    models::{
        cached_result::{CachedResult, MAX_CACHED_RESULTS},
        product::Product,
        store::Store,
        widget_settings::WidgetSettings,
    },
};

pub async fn get_settings(store: &Store) -> WidgetSettings {
    store.settings.read().await.clone()
}

pub async fn save_settings(settings: WidgetSettings, store: &Store) -> WidgetSettings {
    let mut current = store.settings.write().await;
    *current = settings;

    current.clone()
}

pub async fn get_products(store: &Store) -> Vec<Product> {
    store.products.read().await.clone()
}

pub async fn save_products(products: Vec<Product>, store: &Store) -> Result<Vec<Product>, ApiError> {
    for (i, product) in products.iter().enumerate() {
        if products[..i].iter().any(|p| p.id == product.id) {
            return Err(ApiError {
                code: StatusCode::BAD_REQUEST,
                message: format!("Duplicate product id {}.", product.id),
            });
        }
    }

    let mut current = store.products.write().await;
    *current = products;

    Ok(current.clone())
}

pub async fn edit_product_by_id(
    id: &str,
    dto: &EditProductDto,
    store: &Store,
) -> Result<Product, ApiError> {
    if dto.is_empty() {
        return Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: "Received nothing to edit.".to_string(),
        });
    }

    let mut products = store.products.write().await;
    let Some(product) = products.iter_mut().find(|p| p.id == id) else {
        return Err(StoreApiError::ProductNotFound.value());
    };

    dto.apply(product);

    Ok(product.clone())
}

pub async fn get_cached_results(store: &Store) -> Vec<CachedResult> {
    let mut results = store.results.write().await;
    retain_fresh(&mut results, time::current_time_in_millis());

    results.clone()
}

pub async fn save_cached_result(dto: &CreateCachedResultDto, store: &Store) -> CachedResult {
    let result = CachedResult {
        result_image_url: dto.result_image_url.to_string(),
        product_title: dto.product_title.to_string(),
        variant_title: dto.variant_title.clone(),
        timestamp: time::current_time_in_millis(),
    };

    let mut results = store.results.write().await;
    push_result(&mut results, result.clone());

    result
}

pub async fn clear_cached_results(store: &Store) {
    store.results.write().await.clear();
}

fn retain_fresh(results: &mut Vec<CachedResult>, now: u64) {
    results.retain(|result| result.is_fresh(now));
}

/// Newest first, expired entries dropped, at most `MAX_CACHED_RESULTS` kept.
fn push_result(results: &mut Vec<CachedResult>, result: CachedResult) {
    retain_fresh(results, result.timestamp);
    results.insert(0, result);
    results.truncate(MAX_CACHED_RESULTS);
}
