//! Link collection manager for linkdock.
//!
//! Owns the canonical link collection in arena storage (map keyed by id)
//! and implements the ordering rules: category-scoped order numbers for
//! regular links, a separately numbered pinned subset, and one unified
//! reorder routine for both scopes. Ordered sequences are derived from the
//! per-link sort keys only when projected or persisted.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::time::{SystemTime, UNIX_EPOCH};

use uuid::Uuid;

use crate::types::errors::LinkError;
use crate::types::link::{cmp_main, cmp_pinned, Link, LinkPatch, NewLink};

/// A reorder gesture's domain: the pinned subset, or one category's
/// non-pinned subset. A single gesture never crosses the two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReorderScope {
    Pinned,
    Category(String),
}

/// Returns the current UNIX timestamp in milliseconds.
///
/// Millisecond resolution because creation time doubles as an ordering
/// tie-break for links without an explicit position.
pub(crate) fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as i64
}

/// Prefixes scheme-less urls with `https://` so stored urls stay navigable.
pub(crate) fn normalize_url(url: &str) -> String {
    if url.is_empty() || url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{}", url)
    }
}

/// In-memory link collection manager.
pub struct LinkManager {
    links: HashMap<String, Link>,
}

impl LinkManager {
    pub fn new() -> Self {
        Self {
            links: HashMap::new(),
        }
    }

    /// Builds the arena from a loaded or restored link list.
    pub fn from_links(links: Vec<Link>) -> Self {
        let mut manager = Self::new();
        manager.extend(links);
        manager
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.links.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&Link> {
        self.links.get(id)
    }

    /// Iterates the arena in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Link> {
        self.links.values()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Link> {
        self.links.values_mut()
    }

    /// Count of currently pinned links.
    pub fn pinned_count(&self) -> usize {
        self.links.values().filter(|l| l.pinned).count()
    }

    /// Computes the next order value for a non-pinned link in the given
    /// category: one past the highest assigned order, so the link sorts last
    /// within its scope.
    fn next_order(&self, category_id: &str) -> i64 {
        self.links
            .values()
            .filter(|l| !l.pinned && l.category_id == category_id)
            .filter_map(|l| l.order)
            .max()
            .unwrap_or(-1)
            + 1
    }

    /// Creates a link from the draft and inserts it into the collection.
    ///
    /// Non-pinned links are numbered last within their category scope;
    /// pinned links append to the pinned subset. Returns the created link.
    pub fn add(&mut self, draft: NewLink) -> Link {
        let id = Uuid::new_v4().to_string();
        let (order, pinned_order) = if draft.pinned {
            (None, Some(self.pinned_count() as i64))
        } else {
            (Some(self.next_order(&draft.category_id)), None)
        };

        let link = Link {
            id: id.clone(),
            title: draft.title,
            url: normalize_url(&draft.url),
            description: draft.description,
            icon: draft.icon,
            category_id: draft.category_id,
            created_at: now_millis(),
            order,
            pinned: draft.pinned,
            pinned_order,
        };
        self.links.insert(id, link.clone());
        link
    }

    /// Merges the patch into the matching link.
    ///
    /// Ordering fields stay untouched unless the patch flips the pinned
    /// state, which carries the same numbering side effects as a pin toggle.
    pub fn edit(&mut self, id: &str, patch: LinkPatch) -> Result<(), LinkError> {
        let pin_change = {
            let link = self
                .links
                .get(id)
                .ok_or_else(|| LinkError::NotFound(id.to_string()))?;
            patch.pinned.filter(|p| *p != link.pinned)
        };
        let next_pinned_order = match pin_change {
            Some(true) => Some(self.pinned_count() as i64),
            _ => None,
        };

        let link = self
            .links
            .get_mut(id)
            .ok_or_else(|| LinkError::NotFound(id.to_string()))?;
        if let Some(title) = patch.title {
            link.title = title;
        }
        if let Some(url) = patch.url {
            link.url = normalize_url(&url);
        }
        if let Some(description) = patch.description {
            link.description = Some(description);
        }
        if let Some(icon) = patch.icon {
            link.icon = Some(icon);
        }
        if let Some(category_id) = patch.category_id {
            link.category_id = category_id;
        }
        match pin_change {
            Some(true) => {
                link.pinned = true;
                link.pinned_order = next_pinned_order;
            }
            Some(false) => {
                link.pinned = false;
                link.pinned_order = None;
            }
            None => {}
        }
        Ok(())
    }

    /// Removes a link. Surviving order values are not renumbered; gaps are
    /// tolerated because ordering compares relative values.
    pub fn remove(&mut self, id: &str) -> Result<Link, LinkError> {
        self.links
            .remove(id)
            .ok_or_else(|| LinkError::NotFound(id.to_string()))
    }

    /// Removes every link in the set. Returns how many were removed.
    pub fn remove_many(&mut self, ids: &HashSet<String>) -> usize {
        let before = self.links.len();
        self.links.retain(|id, _| !ids.contains(id));
        before - self.links.len()
    }

    /// Flips a link's pinned state.
    ///
    /// Pin-on appends the link to the pinned subset; pin-off clears its
    /// pinned order and leaves its category order untouched. Returns the new
    /// pinned state.
    pub fn toggle_pin(&mut self, id: &str) -> Result<bool, LinkError> {
        let next_pinned_order = {
            let link = self
                .links
                .get(id)
                .ok_or_else(|| LinkError::NotFound(id.to_string()))?;
            if link.pinned {
                None
            } else {
                Some(self.pinned_count() as i64)
            }
        };

        let link = self
            .links
            .get_mut(id)
            .ok_or_else(|| LinkError::NotFound(id.to_string()))?;
        link.pinned = !link.pinned;
        link.pinned_order = next_pinned_order;
        Ok(link.pinned)
    }

    /// Ids of the scope's members in current display order.
    pub fn scope_ids(&self, scope: &ReorderScope) -> Vec<String> {
        let mut members: Vec<&Link> = match scope {
            ReorderScope::Pinned => self.links.values().filter(|l| l.pinned).collect(),
            ReorderScope::Category(category_id) => self
                .links
                .values()
                .filter(|l| !l.pinned && &l.category_id == category_id)
                .collect(),
        };
        match scope {
            ReorderScope::Pinned => members.sort_by(|a, b| cmp_pinned(a, b)),
            ReorderScope::Category(_) => members.sort_by(|a, b| cmp_main(a, b)),
        }
        members.into_iter().map(|l| l.id.clone()).collect()
    }

    /// Moves `from_id` to `to_id`'s position within the scope and renumbers
    /// the whole scope 0-based contiguous.
    ///
    /// One routine serves both scopes; only the field being renumbered
    /// differs. Links outside the scope keep their values.
    pub fn reorder(
        &mut self,
        scope: &ReorderScope,
        from_id: &str,
        to_id: &str,
    ) -> Result<(), LinkError> {
        let mut ids = self.scope_ids(scope);
        let from = ids
            .iter()
            .position(|id| id == from_id)
            .ok_or_else(|| LinkError::NotFound(from_id.to_string()))?;
        let to = ids
            .iter()
            .position(|id| id == to_id)
            .ok_or_else(|| LinkError::NotFound(to_id.to_string()))?;

        let moved = ids.remove(from);
        ids.insert(to, moved);

        for (index, id) in ids.iter().enumerate() {
            if let Some(link) = self.links.get_mut(id) {
                match scope {
                    ReorderScope::Pinned => link.pinned_order = Some(index as i64),
                    ReorderScope::Category(_) => link.order = Some(index as i64),
                }
            }
        }
        Ok(())
    }

    /// Reassigns the category for every link in the set, keeping order and
    /// pinned-order values. The kept values now compare within the target
    /// category's scope. Returns how many links were reassigned.
    pub fn assign_category(&mut self, ids: &HashSet<String>, target: &str) -> usize {
        let mut moved = 0;
        for link in self.links.values_mut() {
            if ids.contains(&link.id) {
                link.category_id = target.to_string();
                moved += 1;
            }
        }
        moved
    }

    /// Moves every link in `from` to `to`, as after a category deletion.
    pub fn reassign_category(&mut self, from: &str, to: &str) -> usize {
        let mut moved = 0;
        for link in self.links.values_mut() {
            if link.category_id == from {
                link.category_id = to.to_string();
                moved += 1;
            }
        }
        moved
    }

    /// Remaps links whose category is not in the valid set to the fallback.
    /// Returns how many links were repaired.
    pub fn repair_categories(&mut self, valid: &HashSet<String>, fallback: &str) -> usize {
        let mut repaired = 0;
        for link in self.links.values_mut() {
            if !valid.contains(&link.category_id) {
                link.category_id = fallback.to_string();
                repaired += 1;
            }
        }
        repaired
    }

    /// Replaces the whole collection, as on backup restore.
    pub fn replace_all(&mut self, links: Vec<Link>) {
        self.links.clear();
        self.extend(links);
    }

    /// Appends links, as on import. A link with an already-present id
    /// replaces the existing one.
    pub fn extend(&mut self, links: Vec<Link>) {
        for link in links {
            self.links.insert(link.id.clone(), link);
        }
    }

    /// The collection in canonical order: the pinned subset first, then the
    /// remaining links by their main sort key. This is the persisted and
    /// exported sequence.
    pub fn snapshot(&self) -> Vec<Link> {
        let mut all: Vec<&Link> = self.links.values().collect();
        all.sort_by(|a, b| match (a.pinned, b.pinned) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (true, true) => cmp_pinned(a, b),
            (false, false) => cmp_main(a, b),
        });
        all.into_iter().cloned().collect()
    }
}

impl Default for LinkManager {
    fn default() -> Self {
        Self::new()
    }
}
