pub mod cached_result;
pub mod product;
pub mod store;
pub mod widget_settings;
