use std::time::Duration;

use serde::Deserialize;

use crate::media::apis::gemini::config::{DEFAULT_API_URL, DEFAULT_MODEL};

pub static DEFAULT_PORT: u16 = 3000;
pub static DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Envy {
    pub app_env: Option<String>,
    pub port: Option<u16>,

    // checked per request
    pub gemini_api_key: Option<String>,
    pub gemini_api_url: Option<String>,
    pub gemini_model: Option<String>,

    pub request_timeout_secs: Option<u64>,
}

impl Envy {
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    pub fn gemini_api_key(&self) -> Option<&str> {
        self.gemini_api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    pub fn gemini_api_url(&self) -> &str {
        self.gemini_api_url
            .as_deref()
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
    }

    pub fn gemini_model(&self) -> &str {
        self.gemini_model.as_deref().unwrap_or(DEFAULT_MODEL)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.request_timeout_secs
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        )
    }
}
