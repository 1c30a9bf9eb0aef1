//! Bookmark import and backup payloads.
//!
//! The import parser is a collaborator seam: anything that can turn raw
//! data into links and categories plugs in through [`BookmarkImporter`].
//! Backups are a full serialization of the canonical state plus the
//! portable configuration blobs; restoring one overwrites, never merges.

use serde::{Deserialize, Serialize};

use crate::types::ai::AiConfig;
use crate::types::category::Category;
use crate::types::errors::ImportError;
use crate::types::link::Link;
use crate::types::search::SearchConfig;

/// Parses raw bookmark data from an external source into links and
/// categories ready for the import merge.
pub trait BookmarkImporter {
    fn parse(&self, raw: &str) -> Result<ImportBatch, ImportError>;
}

/// Parsed import payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportBatch {
    #[serde(default)]
    pub links: Vec<Link>,
    #[serde(default)]
    pub categories: Vec<Category>,
}

/// Full backup of the canonical state plus portable configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupPayload {
    pub links: Vec<Link>,
    pub categories: Vec<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_config: Option<SearchConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_config: Option<AiConfig>,
}

impl BackupPayload {
    /// Serializes the backup for the transport layer.
    pub fn to_json(&self) -> Result<String, ImportError> {
        serde_json::to_string_pretty(self).map_err(|e| ImportError::Parse(e.to_string()))
    }

    /// Deserializes a backup handed back by the transport layer.
    pub fn from_json(raw: &str) -> Result<Self, ImportError> {
        serde_json::from_str(raw).map_err(|e| ImportError::Parse(e.to_string()))
    }
}

/// Importer for JSON payloads exported by this application.
pub struct JsonImporter;

impl BookmarkImporter for JsonImporter {
    fn parse(&self, raw: &str) -> Result<ImportBatch, ImportError> {
        serde_json::from_str(raw).map_err(|e| ImportError::Parse(e.to_string()))
    }
}
