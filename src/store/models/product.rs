use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Product {
    #[validate(length(min = 1, max = 64, message = "id must be between 1 and 64 characters."))]
    pub id: String,
    #[validate(length(
        min = 1,
        max = 200,
        message = "title must be between 1 and 200 characters."
    ))]
    pub title: String,
    #[validate(range(min = 0.0, message = "price must not be negative."))]
    pub price: f64,
    #[validate(url(message = "image must be a url."))]
    pub image: String,
    #[validate]
    pub variants: Vec<ProductVariant>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ProductVariant {
    #[validate(length(min = 1, max = 64, message = "id must be between 1 and 64 characters."))]
    pub id: String,
    #[validate(length(
        min = 1,
        max = 200,
        message = "title must be between 1 and 200 characters."
    ))]
    pub title: String,
    #[validate(range(min = 0.0, message = "price must not be negative."))]
    pub price: f64,
    #[validate(url(message = "image must be a url."))]
    pub image: String,
}

impl ProductVariant {
    fn new(id: &str, title: &str, price: f64, image: &str) -> Self {
        ProductVariant {
            id: id.to_string(),
            title: title.to_string(),
            price,
            image: image.to_string(),
        }
    }
}

/// Products a fresh store starts with.
pub fn default_products() -> Vec<Product> {
    vec![
        Product {
            id: "1".to_string(),
            title: "Classic Denim Jacket".to_string(),
            price: 89.99,
            image: "https://i.imgur.com/4YXbGFa.jpeg".to_string(),
            variants: vec![
                ProductVariant::new("1-1", "Blue / S", 89.99, "https://i.imgur.com/4YXbGFa.jpeg"),
                ProductVariant::new("1-2", "Blue / M", 89.99, "https://i.imgur.com/GVKWHE1.jpeg"),
                ProductVariant::new("1-3", "Black / M", 94.99, "https://i.imgur.com/qrPir0t.jpeg"),
            ],
            product_type: Some("jacket".to_string()),
            enabled: true,
        },
        Product {
            id: "2".to_string(),
            title: "Cotton T-Shirt".to_string(),
            price: 29.99,
            image: "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?w=800&q=80"
                .to_string(),
            variants: vec![
                ProductVariant::new(
                    "2-1",
                    "White / M",
                    29.99,
                    "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?w=800&q=80",
                ),
                ProductVariant::new(
                    "2-2",
                    "White / L",
                    29.99,
                    "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?w=800&q=80",
                ),
            ],
            product_type: Some("shirt".to_string()),
            enabled: true,
        },
        Product {
            id: "3".to_string(),
            title: "Leather Handbag".to_string(),
            price: 149.99,
            image: "https://images.unsplash.com/photo-1590874103328-eac38a683ce7?w=800&q=80"
                .to_string(),
            variants: vec![
                ProductVariant::new(
                    "3-1",
                    "Brown",
                    149.99,
                    "https://images.unsplash.com/photo-1590874103328-eac38a683ce7?w=800&q=80",
                ),
                ProductVariant::new(
                    "3-2",
                    "Black",
                    149.99,
                    "https://images.unsplash.com/photo-1548036328-c9fa89d128fa?w=800&q=80",
                ),
            ],
            product_type: Some("bag".to_string()),
            enabled: false,
        },
    ]
}
