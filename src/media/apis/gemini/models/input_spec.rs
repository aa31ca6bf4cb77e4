use serde::Serialize;

use crate::media::apis::gemini::structs::gemini_content::{GeminiContent, GeminiPart};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputSpec {
    pub contents: Vec<GeminiContent>,
    pub generation_config: InputSpecGenerationConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputSpecGenerationConfig {
    pub response_modalities: Vec<String>,
}

impl InputSpec {
    /// Single user turn with the instruction first and the images after it,
    /// in the order they are referred to by the instruction.
    pub fn new(prompt: &str, images: &[(&str, &[u8])]) -> Self {
        let mut parts = Vec::with_capacity(images.len() + 1);
        parts.push(GeminiPart::text(prompt));

        for (mime_type, bytes) in images {
            parts.push(GeminiPart::inline_data(mime_type, bytes));
        }

        InputSpec {
            contents: vec![GeminiContent {
                role: Some("user".to_string()),
                parts,
            }],
            generation_config: InputSpecGenerationConfig {
                response_modalities: vec!["TEXT".to_string(), "IMAGE".to_string()],
            },
        }
    }
}
