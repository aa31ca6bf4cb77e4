use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::store::util::hex_color::validate_hex_color;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct WidgetSettings {
    #[validate(length(
        min = 1,
        max = 100,
        message = "buttonText must be between 1 and 100 characters."
    ))]
    pub button_text: String,
    pub widget_style: WidgetStyle,
    pub show_description: bool,
    #[validate(length(max = 300, message = "customDescription must be at most 300 characters."))]
    pub custom_description: String,
    #[validate(custom = "validate_hex_color")]
    pub primary_color: String,
    #[validate(custom = "validate_hex_color")]
    pub background_color: String,
    #[validate(custom = "validate_hex_color")]
    pub text_color: String,
    #[validate(range(min = 0, max = 48, message = "borderRadius must be between 0 and 48."))]
    pub border_radius: u8,
    pub widget_enabled: bool,
    pub button_width: ButtonWidth,
    pub button_alignment: ButtonAlignment,
    pub use_custom_colors: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WidgetStyle {
    ElegantMinimal,
    ModernOutline,
    GhostHover,
    SubtleGradient,
    SoftRounded,
    LuxuryGold,
    BeautyGlow,
    TechNeon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonWidth {
    Auto,
    Full,
    Medium,
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonAlignment {
    Left,
    Center,
    Right,
}

impl Default for WidgetSettings {
    fn default() -> Self {
        WidgetSettings {
            button_text: "Try It On Virtually".to_string(),
            widget_style: WidgetStyle::ElegantMinimal,
            show_description: true,
            custom_description: "See how this looks on you with AI".to_string(),
            primary_color: "#6366f1".to_string(),
            background_color: "#ffffff".to_string(),
            text_color: "#1f2937".to_string(),
            border_radius: 12,
            widget_enabled: true,
            button_width: ButtonWidth::Auto,
            button_alignment: ButtonAlignment::Center,
            use_custom_colors: false,
        }
    }
}
