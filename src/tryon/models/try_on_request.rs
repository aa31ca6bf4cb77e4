use crate::app::util::multipart::models::file_properties::FileProperties;

/// A try-on request that passed validation. Lives for one request only.
#[derive(Debug)]
pub struct TryOnRequest {
    pub user_photo: FileProperties,
    pub product_image_url: String,
    pub product_type: Option<String>,
    pub product_title: Option<String>,
}
