use serde::{Deserialize, Serialize};

pub static MAX_CACHED_RESULTS: usize = 20;
pub static CACHED_RESULT_TTL_MILLIS: u64 = 10 * 60 * 60 * 1000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CachedResult {
    pub result_image_url: String,
    pub product_title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_title: Option<String>,
    pub timestamp: u64,
}

impl CachedResult {
    pub fn is_fresh(&self, now: u64) -> bool {
        self.timestamp > now.saturating_sub(CACHED_RESULT_TTL_MILLIS)
    }
}
