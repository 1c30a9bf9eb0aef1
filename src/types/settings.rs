use serde::{Deserialize, Serialize};

/// How link cards are rendered.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CardStyle {
    Detailed,
    Simple,
}

/// Site-wide display settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    pub title: String,
    pub nav_title: String,
    #[serde(default)]
    pub favicon: String,
    pub card_style: CardStyle,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            title: "Linkdock — My Links".to_string(),
            nav_title: "Linkdock".to_string(),
            favicon: String::new(),
            card_style: CardStyle::Detailed,
        }
    }
}
