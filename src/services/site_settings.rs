// Linkdock site settings engine
// Manages the site display settings blob: loading, saving, updating, and resetting to defaults.

use crate::storage::blob_store::{BlobStore, SITE_SETTINGS_BLOB};
use crate::types::errors::StorageError;
use crate::types::settings::{CardStyle, SiteSettings};

/// Site settings engine persisting through the blob store.
pub struct SiteSettingsEngine {
    settings: SiteSettings,
}

impl SiteSettingsEngine {
    /// Loads settings from the store, falling back to defaults when the
    /// blob is missing or unreadable.
    pub fn load(store: &BlobStore) -> Self {
        Self {
            settings: store.read(SITE_SETTINGS_BLOB).unwrap_or_default(),
        }
    }

    /// Returns a reference to the current in-memory settings.
    pub fn settings(&self) -> &SiteSettings {
        &self.settings
    }

    /// Persists the current settings.
    pub fn save(&self, store: &BlobStore) -> Result<(), StorageError> {
        store.write(SITE_SETTINGS_BLOB, &self.settings)
    }

    /// Replaces the settings and persists them.
    pub fn update(&mut self, store: &BlobStore, settings: SiteSettings) -> Result<(), StorageError> {
        self.settings = settings;
        self.save(store)
    }

    /// Switches the card rendering style and persists.
    pub fn set_card_style(&mut self, store: &BlobStore, style: CardStyle) -> Result<(), StorageError> {
        self.settings.card_style = style;
        self.save(store)
    }

    /// Resets all settings to factory defaults and persists.
    pub fn reset(&mut self, store: &BlobStore) -> Result<(), StorageError> {
        self.settings = SiteSettings::default();
        self.save(store)
    }
}
