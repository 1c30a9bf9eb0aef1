// AI assistant configuration pass-through.
// The core persists and restores the provider settings without interpreting them.

use crate::storage::blob_store::{BlobStore, AI_CONFIG_BLOB};
use crate::types::ai::AiConfig;
use crate::types::errors::StorageError;

/// Blob-backed store for the opaque AI assistant configuration.
pub struct AiConfigEngine {
    config: AiConfig,
}

impl AiConfigEngine {
    /// Loads the configuration, falling back to defaults when the blob is
    /// missing or unreadable.
    pub fn load(store: &BlobStore) -> Self {
        Self {
            config: store.read(AI_CONFIG_BLOB).unwrap_or_default(),
        }
    }

    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    /// Replaces the configuration and persists it.
    pub fn update(&mut self, store: &BlobStore, config: AiConfig) -> Result<(), StorageError> {
        self.config = config;
        store.write(AI_CONFIG_BLOB, &self.config)
    }
}
