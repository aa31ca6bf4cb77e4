use tokio::sync::RwLock;

use super::{
    cached_result::CachedResult,
    product::{default_products, Product},
    widget_settings::WidgetSettings,
};

/// Storefront data shared by the settings screen, the store page and the
/// try-on modal. The try-on pipeline never touches it.
#[derive(Debug)]
pub struct Store {
    pub settings: RwLock<WidgetSettings>,
    pub products: RwLock<Vec<Product>>,
    pub results: RwLock<Vec<CachedResult>>,
}

impl Default for Store {
    fn default() -> Self {
        Store {
            settings: RwLock::new(WidgetSettings::default()),
            products: RwLock::new(default_products()),
            results: RwLock::new(Vec::new()),
        }
    }
}
