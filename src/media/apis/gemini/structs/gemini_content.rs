use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<GeminiPart>,
}

/// A part carries either text or an inline payload; parts of any other kind
/// deserialize with both fields empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiPart {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<GeminiInlineData>,
}

impl GeminiPart {
    pub fn text(text: &str) -> Self {
        GeminiPart {
            text: Some(text.to_string()),
            inline_data: None,
        }
    }

    pub fn inline_data(mime_type: &str, bytes: &[u8]) -> Self {
        GeminiPart {
            text: None,
            inline_data: Some(GeminiInlineData {
                mime_type: mime_type.to_string(),
                data: base64::encode(bytes),
            }),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiInlineData {
    pub mime_type: String,
    pub data: String,
}
