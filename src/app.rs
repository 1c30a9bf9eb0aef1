//! Application shell for linkdock.
//!
//! Central state container owning the blob store, the link, category and
//! selection managers, the supporting services, and the current view-filter
//! state. Every accepted mutation is followed synchronously by a
//! write-through of the affected blob; a failed write is logged and the
//! in-memory state stays authoritative, so no operation is fatal.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::managers::category_manager::CategoryManager;
use crate::managers::link_manager::{now_millis, LinkManager, ReorderScope};
use crate::managers::selection_manager::SelectionManager;
use crate::projection::{project, CategoryFilter, Projection, ViewFilter};
use crate::services::ai_config::AiConfigEngine;
use crate::services::hover_popup::HoverPopup;
use crate::services::icon_cache::IconCache;
use crate::services::import_export::{BackupPayload, BookmarkImporter, ImportBatch};
use crate::services::search_engine::SearchEngine;
use crate::services::site_settings::SiteSettingsEngine;
use crate::storage::blob_store::{BlobStore, COLLECTION_BLOB, SEARCH_CONFIG_BLOB};
use crate::types::ai::AiConfig;
use crate::types::category::{Category, RESERVED_CATEGORY_ID};
use crate::types::errors::{BatchError, CategoryError, LinkError, StorageError};
use crate::types::link::{Link, LinkPatch, NewLink};
use crate::types::search::{ExternalSearchSource, SearchConfig, SearchMode};
use crate::types::settings::{CardStyle, SiteSettings};

/// Persisted shape of the links + categories blob.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionData {
    #[serde(default)]
    pub links: Vec<Link>,
    #[serde(default)]
    pub categories: Vec<Category>,
}

/// Central application state container.
pub struct App {
    store: BlobStore,
    links: LinkManager,
    categories: CategoryManager,
    selection: SelectionManager,
    search: SearchEngine,
    site_settings: SiteSettingsEngine,
    ai_config: AiConfigEngine,
    icon_cache: IconCache,
    search_popup: HoverPopup,
    selected_category: CategoryFilter,
    search_query: String,
}

impl App {
    /// Opens the store at `db_path` and loads all persisted state.
    pub fn open<P: AsRef<Path>>(db_path: P) -> Result<Self, StorageError> {
        Self::with_store(BlobStore::open(db_path)?)
    }

    /// In-memory instance; state is discarded on drop. Used by tests.
    pub fn open_in_memory() -> Result<Self, StorageError> {
        Self::with_store(BlobStore::open_in_memory()?)
    }

    fn with_store(store: BlobStore) -> Result<Self, StorageError> {
        let data: CollectionData = store.read(COLLECTION_BLOB).unwrap_or_default();
        let categories = CategoryManager::from_categories(data.categories);
        let mut links = LinkManager::from_links(data.links);

        let repaired = links.repair_categories(&categories.ids(), RESERVED_CATEGORY_ID);
        if repaired > 0 {
            warn!(repaired, "remapped links with unknown categories to the default category");
        }

        let search = match store.read::<SearchConfig>(SEARCH_CONFIG_BLOB) {
            Some(config) => SearchEngine::new(config),
            None => SearchEngine::with_defaults(now_millis()),
        };
        let site_settings = SiteSettingsEngine::load(&store);
        let ai_config = AiConfigEngine::load(&store);

        // Backfilled icons stay in memory; the favicon cache blob is owned
        // by the icon fetch layer and never written back from here.
        let icon_cache = IconCache::load(&store);
        icon_cache.backfill(links.iter_mut());

        Ok(Self {
            store,
            links,
            categories,
            selection: SelectionManager::new(),
            search,
            site_settings,
            ai_config,
            icon_cache,
            search_popup: HoverPopup::default(),
            selected_category: CategoryFilter::All,
            search_query: String::new(),
        })
    }

    /// Write-through of the canonical collections after an accepted mutation.
    fn write_through(&self) {
        let data = CollectionData {
            links: self.links.snapshot(),
            categories: self.categories.snapshot(),
        };
        if let Err(error) = self.store.write(COLLECTION_BLOB, &data) {
            warn!(%error, "collection write-through failed");
        }
    }

    fn write_search_config(&self) {
        if let Err(error) = self.store.write(SEARCH_CONFIG_BLOB, self.search.config()) {
            warn!(%error, "search config write-through failed");
        }
    }

    // --- view-filter state ---

    pub fn selected_category(&self) -> &CategoryFilter {
        &self.selected_category
    }

    pub fn select_category(&mut self, filter: CategoryFilter) {
        self.selected_category = filter;
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// The current view, derived from canonical state and the active filters.
    pub fn projection(&self) -> Projection {
        let filter = ViewFilter {
            category: self.selected_category.clone(),
            query: self.search_query.clone(),
        };
        project(self.links.iter(), &filter)
    }

    // --- links ---

    pub fn link(&self, id: &str) -> Option<&Link> {
        self.links.get(id)
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Creates a link and persists the collection. A draft pointing at an
    /// unknown category is silently reassigned to the reserved default so
    /// references always resolve. Returns the stored link.
    pub fn add_link(&mut self, mut draft: NewLink) -> Link {
        if !self.categories.contains(&draft.category_id) {
            warn!(category = %draft.category_id, "unknown category on add, using the default");
            draft.category_id = RESERVED_CATEGORY_ID.to_string();
        }
        let link = self.links.add(draft);
        self.write_through();
        link
    }

    pub fn edit_link(&mut self, id: &str, mut patch: LinkPatch) -> Result<(), LinkError> {
        if let Some(category_id) = &patch.category_id {
            if !self.categories.contains(category_id) {
                warn!(category = %category_id, "unknown category on edit, using the default");
                patch.category_id = Some(RESERVED_CATEGORY_ID.to_string());
            }
        }
        self.links.edit(id, patch)?;
        self.write_through();
        Ok(())
    }

    /// Deletes a link. `confirmed = false` models a declined confirmation
    /// dialog and leaves state unchanged; the return value says whether the
    /// deletion was applied.
    pub fn delete_link(&mut self, id: &str, confirmed: bool) -> Result<bool, LinkError> {
        if !confirmed {
            return Ok(false);
        }
        self.links.remove(id)?;
        self.write_through();
        Ok(true)
    }

    pub fn toggle_pin(&mut self, id: &str) -> Result<bool, LinkError> {
        let pinned = self.links.toggle_pin(id)?;
        self.write_through();
        Ok(pinned)
    }

    /// Applies one drag gesture as a single atomic reorder of the scope.
    pub fn reorder_links(
        &mut self,
        scope: &ReorderScope,
        from_id: &str,
        to_id: &str,
    ) -> Result<(), LinkError> {
        self.links.reorder(scope, from_id, to_id)?;
        self.write_through();
        Ok(())
    }

    /// Moves links to another category, keeping their order values.
    pub fn move_links(&mut self, ids: &HashSet<String>, target: &str) -> Result<usize, CategoryError> {
        if !self.categories.contains(target) {
            return Err(CategoryError::NotFound(target.to_string()));
        }
        let moved = self.links.assign_category(ids, target);
        self.write_through();
        Ok(moved)
    }

    // --- categories ---

    pub fn categories(&self) -> &[Category] {
        self.categories.all()
    }

    /// Deletes a category and reassigns its links to the reserved default.
    /// The reserved default itself is rejected. `confirmed = false` leaves
    /// state unchanged.
    pub fn delete_category(&mut self, id: &str, confirmed: bool) -> Result<bool, CategoryError> {
        if id == RESERVED_CATEGORY_ID {
            return Err(CategoryError::ReservedCategory);
        }
        if !confirmed {
            return Ok(false);
        }
        let removed = self.categories.delete(id)?;
        self.links.reassign_category(&removed.id, RESERVED_CATEGORY_ID);
        self.write_through();
        Ok(true)
    }

    /// Wholesale category replacement from the category manager dialog.
    /// Links left pointing at a removed category fall back to the default.
    pub fn update_categories(&mut self, categories: Vec<Category>) {
        self.categories.replace(categories);
        let repaired = self
            .links
            .repair_categories(&self.categories.ids(), RESERVED_CATEGORY_ID);
        if repaired > 0 {
            warn!(repaired, "remapped links after category replacement");
        }
        self.write_through();
    }

    // --- batch editing ---

    pub fn batch_mode(&self) -> bool {
        self.selection.batch_mode()
    }

    /// Flips batch-edit mode, clearing the selection either way.
    pub fn toggle_batch_mode(&mut self) -> bool {
        self.selection.toggle_batch_mode()
    }

    pub fn toggle_selection(&mut self, id: &str) {
        self.selection.toggle(id);
    }

    /// Select-all toggle over the links currently on screen.
    pub fn select_all(&mut self) {
        let displayed = self.projection().displayed_ids();
        self.selection.select_all(&displayed);
    }

    pub fn selection(&self) -> &SelectionManager {
        &self.selection
    }

    /// Deletes every selected link, then clears the selection and leaves
    /// batch-edit mode. An empty selection is rejected with a notice and a
    /// declined confirmation changes nothing. Returns how many links were
    /// removed.
    pub fn batch_delete(&mut self, confirmed: bool) -> Result<usize, BatchError> {
        if self.selection.is_empty() {
            return Err(BatchError::EmptySelection);
        }
        if !confirmed {
            return Ok(0);
        }
        let removed = self.links.remove_many(self.selection.selected());
        self.selection.finish_batch();
        self.write_through();
        Ok(removed)
    }

    /// Moves every selected link to the target category, then clears the
    /// selection and leaves batch-edit mode. Order values are kept.
    pub fn batch_move(&mut self, target: &str) -> Result<usize, BatchError> {
        if self.selection.is_empty() {
            return Err(BatchError::EmptySelection);
        }
        if !self.categories.contains(target) {
            return Err(BatchError::CategoryNotFound(target.to_string()));
        }
        let moved = self.links.assign_category(self.selection.selected(), target);
        self.selection.finish_batch();
        self.write_through();
        Ok(moved)
    }

    // --- import / export ---

    /// Merges an import batch: categories dedup by id or name, links append.
    /// Links whose category was skipped as a duplicate fall back to the
    /// default so the collection stays consistent. Returns how many links
    /// were imported.
    pub fn import(&mut self, batch: ImportBatch) -> usize {
        self.categories.merge(batch.categories);
        let added = batch.links.len();
        self.links.extend(batch.links);
        let repaired = self
            .links
            .repair_categories(&self.categories.ids(), RESERVED_CATEGORY_ID);
        if repaired > 0 {
            warn!(repaired, "remapped imported links with unknown categories");
        }
        self.write_through();
        added
    }

    /// Runs an import collaborator over raw data and merges the result.
    pub fn import_raw(
        &mut self,
        importer: &dyn BookmarkImporter,
        raw: &str,
    ) -> Result<usize, crate::types::errors::ImportError> {
        let batch = importer.parse(raw)?;
        Ok(self.import(batch))
    }

    /// Serializes the canonical state for the backup transport.
    pub fn export_backup(&self) -> BackupPayload {
        BackupPayload {
            links: self.links.snapshot(),
            categories: self.categories.snapshot(),
            search_config: Some(self.search.config().clone()),
            ai_config: Some(self.ai_config.config().clone()),
        }
    }

    /// Full overwrite from a restored backup; no merging.
    pub fn restore_backup(&mut self, payload: BackupPayload) {
        self.categories.replace(payload.categories);
        self.links.replace_all(payload.links);
        let repaired = self
            .links
            .repair_categories(&self.categories.ids(), RESERVED_CATEGORY_ID);
        if repaired > 0 {
            warn!(repaired, "remapped restored links with unknown categories");
        }
        if let Some(config) = payload.search_config {
            self.search.replace_config(config);
            self.write_search_config();
        }
        if let Some(config) = payload.ai_config {
            self.set_ai_config(config);
        }
        self.write_through();
    }

    // --- search ---

    pub fn search_config(&self) -> &SearchConfig {
        self.search.config()
    }

    pub fn set_search_mode(&mut self, mode: SearchMode) {
        self.search.set_mode(mode, now_millis());
        self.write_search_config();
    }

    pub fn update_search_sources(&mut self, sources: Vec<ExternalSearchSource>) {
        self.search.set_sources(sources);
        self.write_search_config();
    }

    /// Selects a search source by id. Unknown ids are ignored.
    pub fn select_search_source(&mut self, id: &str) -> bool {
        let selected = self.search.select_source(id);
        if selected {
            self.write_search_config();
        }
        selected
    }

    /// The navigable URL the current query would open externally, if any.
    pub fn external_search_url(&self) -> Option<String> {
        self.search.external_search_url(&self.search_query)
    }

    pub fn restore_search_config(&mut self, config: SearchConfig) {
        self.search.replace_config(config);
        self.write_search_config();
    }

    // --- AI configuration ---

    pub fn ai_config(&self) -> &AiConfig {
        self.ai_config.config()
    }

    pub fn set_ai_config(&mut self, config: AiConfig) {
        if let Err(error) = self.ai_config.update(&self.store, config) {
            warn!(%error, "AI config write-through failed");
        }
    }

    // --- site settings ---

    pub fn site_settings(&self) -> &SiteSettings {
        self.site_settings.settings()
    }

    pub fn update_site_settings(&mut self, settings: SiteSettings) {
        if let Err(error) = self.site_settings.update(&self.store, settings) {
            warn!(%error, "site settings write-through failed");
        }
    }

    pub fn set_card_style(&mut self, style: CardStyle) {
        if let Err(error) = self.site_settings.set_card_style(&self.store, style) {
            warn!(%error, "site settings write-through failed");
        }
    }

    // --- hover popup ---

    /// Debouncer for the search-source popup; the UI layer drives it.
    pub fn search_popup(&mut self) -> &mut HoverPopup {
        &mut self.search_popup
    }

    /// Cached icon for an arbitrary url, for the UI layer.
    pub fn cached_icon(&self, url: &str) -> Option<&str> {
        self.icon_cache.lookup(url)
    }
}
