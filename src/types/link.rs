use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// A saved link in the dashboard collection.
///
/// Serialized with camelCase field names so blobs written by earlier
/// clients keep loading. `order` and `pinned_order` are positions within
/// their respective ordering scopes; both may be absent, in which case
/// `created_at` takes over as the sort key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub id: String,
    pub title: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub category_id: String,
    pub created_at: i64,
    /// Position within the link's non-pinned category scope. Only comparable
    /// against other links in the same category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    #[serde(default)]
    pub pinned: bool,
    /// Position within the pinned subset. `Some` if and only if `pinned`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pinned_order: Option<i64>,
}

impl Link {
    /// Sort key within the pinned section: links without a pinned order
    /// append after all numbered ones; ties break by creation time.
    pub fn pinned_sort_key(&self) -> (i64, i64) {
        (self.pinned_order.unwrap_or(i64::MAX), self.created_at)
    }

    /// Sort key within the main section and category scopes.
    pub fn main_sort_key(&self) -> i64 {
        self.order.unwrap_or(self.created_at)
    }
}

/// Total order for the pinned section.
pub fn cmp_pinned(a: &Link, b: &Link) -> Ordering {
    a.pinned_sort_key()
        .cmp(&b.pinned_sort_key())
        .then_with(|| a.id.cmp(&b.id))
}

/// Total order for the main section and category scopes.
pub fn cmp_main(a: &Link, b: &Link) -> Ordering {
    a.main_sort_key()
        .cmp(&b.main_sort_key())
        .then(a.created_at.cmp(&b.created_at))
        .then_with(|| a.id.cmp(&b.id))
}

/// Fields supplied when creating a link. Identity, timestamps and ordering
/// positions are assigned by the link manager.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub title: String,
    pub url: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub category_id: String,
    pub pinned: bool,
}

/// Partial update for an existing link. `None` fields are left unchanged;
/// flipping `pinned` carries the same ordering side effects as a pin toggle.
#[derive(Debug, Clone, Default)]
pub struct LinkPatch {
    pub title: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub category_id: Option<String>,
    pub pinned: Option<bool>,
}
