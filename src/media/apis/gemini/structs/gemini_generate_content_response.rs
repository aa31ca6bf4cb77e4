use serde::Deserialize;

use super::gemini_content::{GeminiContent, GeminiInlineData};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiGenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiCandidate {
    pub content: Option<GeminiContent>,
    pub finish_reason: Option<String>,
}

impl GeminiGenerateContentResponse {
    /// First part of the first candidate carrying non-empty inline data.
    pub fn first_inline_data(&self) -> Option<&GeminiInlineData> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .iter()
            .filter_map(|part| part.inline_data.as_ref())
            .find(|inline_data| !inline_data.data.is_empty())
    }
}
