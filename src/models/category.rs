//! Category model matching the frontend CategoryConfig interface.

use serde::{Deserialize, Serialize};

/// Display color used when a new category omits one.
pub const DEFAULT_CATEGORY_COLOR: &str = "#3b82f6";

/// A spot category. The name is the key spots refer to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryConfig {
    pub name: String,
    /// Emoji glyph, image URL, or `data:image` URI.
    pub icon: String,
    #[serde(default = "default_color")]
    pub color: String,
}

fn default_color() -> String {
    DEFAULT_CATEGORY_COLOR.to_string()
}

impl CategoryConfig {
    pub fn new(name: &str, icon: &str, color: &str) -> Self {
        Self {
            name: name.to_string(),
            icon: icon.to_string(),
            color: color.to_string(),
        }
    }

    /// Whether the icon should be rendered as an image rather than a glyph.
    pub fn icon_is_image(&self) -> bool {
        self.icon.starts_with("http") || self.icon.starts_with("data:image")
    }

    /// Black or white text color readable on top of `color` (YIQ rule).
    pub fn contrast_color(&self) -> &'static str {
        contrast_color(&self.color)
    }
}

/// YIQ contrast for a `#rrggbb` color. Unparsable input falls back to black.
pub fn contrast_color(hex: &str) -> &'static str {
    let Some(digits) = hex.strip_prefix('#') else {
        return "#000000";
    };
    if digits.len() < 6 || !digits.is_ascii() {
        return "#000000";
    }

    let channel = |range: std::ops::Range<usize>| u32::from_str_radix(&digits[range], 16).ok();
    let (Some(r), Some(g), Some(b)) = (channel(0..2), channel(2..4), channel(4..6)) else {
        return "#000000";
    };

    let yiq = (r * 299 + g * 587 + b * 114) / 1000;
    if yiq >= 128 {
        "#000000"
    } else {
        "#ffffff"
    }
}

/// Category as rendered by clients, with derived presentation hints.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryView {
    #[serde(flatten)]
    pub category: CategoryConfig,
    pub text_color: &'static str,
    pub icon_is_image: bool,
}

impl From<CategoryConfig> for CategoryView {
    fn from(category: CategoryConfig) -> Self {
        Self {
            text_color: category.contrast_color(),
            icon_is_image: category.icon_is_image(),
            category,
        }
    }
}
