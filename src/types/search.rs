use serde::{Deserialize, Serialize};

/// Where a submitted search query goes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Filter the link collection in place.
    Internal,
    /// Open the query against an external search source.
    External,
}

/// An external search destination. The `url` template contains a `{query}`
/// placeholder substituted with the URL-encoded query at submit time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExternalSearchSource {
    pub id: String,
    pub name: String,
    pub url: String,
    pub icon: String,
    pub enabled: bool,
    pub created_at: i64,
}

/// Persisted search configuration blob.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchConfig {
    pub mode: SearchMode,
    #[serde(default)]
    pub external_sources: Vec<ExternalSearchSource>,
    /// Id of the user's preferred source, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_source: Option<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            mode: SearchMode::External,
            external_sources: Vec::new(),
            selected_source: None,
        }
    }
}
