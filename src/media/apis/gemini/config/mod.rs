// https://ai.google.dev/api/generate-content

pub static DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub static DEFAULT_MODEL: &str = "gemini-2.0-flash-exp";

pub fn generate_content_url(api_url: &str, model: &str) -> String {
    format!("{}/models/{}:generateContent", api_url, model)
}
