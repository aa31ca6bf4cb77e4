use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct GeminiErrorResponse {
    pub error: GeminiError,
}

#[derive(Debug, Deserialize)]
pub struct GeminiError {
    pub code: Option<u16>,
    pub message: String,
    pub status: Option<String>,
}
