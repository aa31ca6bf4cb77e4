use serde::Deserialize;
use validator::Validate;

use crate::store::models::product::{Product, ProductVariant};

#[derive(Debug, Deserialize, Validate)]
pub struct EditProductDto {
    #[validate(length(
        min = 1,
        max = 200,
        message = "title must be between 1 and 200 characters."
    ))]
    pub title: Option<String>,
    #[validate(range(min = 0.0, message = "price must not be negative."))]
    pub price: Option<f64>,
    #[validate(url(message = "image must be a url."))]
    pub image: Option<String>,
    #[validate]
    pub variants: Option<Vec<ProductVariant>>,
    #[serde(rename = "type")]
    pub product_type: Option<String>,
    pub enabled: Option<bool>,
}

impl EditProductDto {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.price.is_none()
            && self.image.is_none()
            && self.variants.is_none()
            && self.product_type.is_none()
            && self.enabled.is_none()
    }

    pub fn apply(&self, product: &mut Product) {
        if let Some(title) = &self.title {
            product.title = title.to_string();
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(image) = &self.image {
            product.image = image.to_string();
        }
        if let Some(variants) = &self.variants {
            product.variants = variants.clone();
        }
        if let Some(product_type) = &self.product_type {
            product.product_type = Some(product_type.to_string()).filter(|t| !t.is_empty());
        }
        if let Some(enabled) = self.enabled {
            product.enabled = enabled;
        }
    }
}
