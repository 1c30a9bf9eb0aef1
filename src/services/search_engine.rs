//! Search configuration and external search-source handling.

use crate::types::search::{ExternalSearchSource, SearchConfig, SearchMode};

/// Placeholder substituted with the URL-encoded query in source templates.
const QUERY_PLACEHOLDER: &str = "{query}";

/// Holds the search configuration and resolves queries to navigable URLs.
pub struct SearchEngine {
    config: SearchConfig,
}

impl SearchEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Engine with the built-in default sources and the first one selected,
    /// as on a fresh install.
    pub fn with_defaults(now: i64) -> Self {
        let external_sources = default_sources(now);
        let selected_source = external_sources.first().map(|s| s.id.clone());
        Self {
            config: SearchConfig {
                mode: SearchMode::External,
                external_sources,
                selected_source,
            },
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Wholesale configuration replacement, as on backup restore.
    pub fn replace_config(&mut self, config: SearchConfig) {
        self.config = config;
    }

    pub fn mode(&self) -> SearchMode {
        self.config.mode
    }

    /// Switches the search mode. Entering external mode with no sources
    /// installs the default set so a query always has somewhere to go.
    pub fn set_mode(&mut self, mode: SearchMode, now: i64) {
        self.config.mode = mode;
        if mode == SearchMode::External && self.config.external_sources.is_empty() {
            self.config.external_sources = default_sources(now);
            self.config.selected_source =
                self.config.external_sources.first().map(|s| s.id.clone());
        }
    }

    /// Replaces the source list. A selection that no longer resolves is
    /// dropped.
    pub fn set_sources(&mut self, sources: Vec<ExternalSearchSource>) {
        self.config.external_sources = sources;
        if let Some(id) = &self.config.selected_source {
            if !self.config.external_sources.iter().any(|s| &s.id == id) {
                self.config.selected_source = None;
            }
        }
    }

    /// Selects a source by id. Returns false for unknown ids.
    pub fn select_source(&mut self, id: &str) -> bool {
        if self.config.external_sources.iter().any(|s| s.id == id) {
            self.config.selected_source = Some(id.to_string());
            true
        } else {
            false
        }
    }

    /// The source a query would go to: the explicit selection, else the
    /// first enabled source, else the first source.
    pub fn resolve_selected(&self) -> Option<&ExternalSearchSource> {
        let sources = &self.config.external_sources;
        if let Some(id) = &self.config.selected_source {
            if let Some(source) = sources.iter().find(|s| &s.id == id) {
                return Some(source);
            }
        }
        sources.iter().find(|s| s.enabled).or_else(|| sources.first())
    }

    /// Builds the navigable URL for the query against the resolved source.
    ///
    /// Returns `None` in internal mode, for blank queries, and when no
    /// source resolves.
    pub fn external_search_url(&self, query: &str) -> Option<String> {
        if self.config.mode != SearchMode::External {
            return None;
        }
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return None;
        }
        let source = self.resolve_selected()?;
        Some(build_search_url(&source.url, trimmed))
    }
}

/// Substitutes the `{query}` placeholder with the URL-encoded query.
pub fn build_search_url(template: &str, query: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(query.as_bytes()).collect();
    template.replace(QUERY_PLACEHOLDER, &encoded)
}

/// Built-in search destinations, mirroring a stock install.
pub fn default_sources(now: i64) -> Vec<ExternalSearchSource> {
    let source = |id: &str, name: &str, url: &str, icon: &str| ExternalSearchSource {
        id: id.to_string(),
        name: name.to_string(),
        url: url.to_string(),
        icon: icon.to_string(),
        enabled: true,
        created_at: now,
    };
    vec![
        source("bing", "Bing", "https://www.bing.com/search?q={query}", "Search"),
        source("google", "Google", "https://www.google.com/search?q={query}", "Search"),
        source("baidu", "Baidu", "https://www.baidu.com/s?wd={query}", "Globe"),
        source("sogou", "Sogou", "https://www.sogou.com/web?query={query}", "Globe"),
        source("yandex", "Yandex", "https://yandex.com/search/?text={query}", "Globe"),
        source("github", "GitHub", "https://github.com/search?q={query}", "Github"),
        source("linuxdo", "Linux.do", "https://linux.do/search?q={query}", "Terminal"),
        source(
            "bilibili",
            "Bilibili",
            "https://search.bilibili.com/all?keyword={query}",
            "Play",
        ),
        source(
            "youtube",
            "YouTube",
            "https://www.youtube.com/results?search_query={query}",
            "Video",
        ),
        source(
            "wikipedia",
            "Wikipedia",
            "https://en.wikipedia.org/wiki/Special:Search?search={query}",
            "BookOpen",
        ),
    ]
}
