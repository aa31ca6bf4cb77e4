use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum StoreApiError {
    ProductNotFound,
}

impl StoreApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::ProductNotFound => ApiError {
                code: StatusCode::NOT_FOUND,
                message: "Product not found.".to_string(),
            },
        }
    }
}
