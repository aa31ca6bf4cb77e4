use serde::Serialize;

pub static SUCCESS_MESSAGE: &str = "Virtual try-on completed successfully!";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TryOnResponse {
    pub success: bool,
    pub result_image_url: String,
    pub processing_time: String,
    pub message: String,
}

impl TryOnResponse {
    pub fn new(result_image_url: String, processing_time: String) -> Self {
        TryOnResponse {
            success: true,
            result_image_url,
            processing_time,
            message: SUCCESS_MESSAGE.to_string(),
        }
    }
}
