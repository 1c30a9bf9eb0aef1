use serde::{Deserialize, Serialize};

/// AI assistant connection settings.
///
/// The core stores and restores this blob but never interprets it; the
/// provider integration layer is the only consumer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AiConfig {
    pub provider: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub base_url: String,
    pub model: String,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            provider: "gemini".to_string(),
            api_key: String::new(),
            base_url: String::new(),
            model: "gemini-2.5-flash".to_string(),
        }
    }
}
