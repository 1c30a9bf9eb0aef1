//! Pure view projection over the canonical link collection.
//!
//! Derives the displayed sections from the arena plus the active filters.
//! Never mutates canonical state; recomputing with the same inputs yields
//! the same result, so callers may memoize freely.

use crate::types::link::{cmp_main, cmp_pinned, Link};

/// Category dimension of the view filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    /// The "all" sentinel: no category restriction.
    All,
    Category(String),
}

/// Active view filters.
#[derive(Debug, Clone)]
pub struct ViewFilter {
    pub category: CategoryFilter,
    pub query: String,
}

impl Default for ViewFilter {
    fn default() -> Self {
        Self {
            category: CategoryFilter::All,
            query: String::new(),
        }
    }
}

impl ViewFilter {
    /// Whether a non-blank query is active. Whitespace-only input counts as
    /// no query.
    pub fn has_query(&self) -> bool {
        !self.query.trim().is_empty()
    }
}

/// Result of projecting the collection through the active filters.
#[derive(Debug, Clone, Default)]
pub struct Projection {
    /// Separately ordered pinned section. Empty whenever pinned links render
    /// inline in the main section instead.
    pub pinned: Vec<Link>,
    /// Main section in ascending (order, creation time) order.
    pub main: Vec<Link>,
}

impl Projection {
    /// Ids of every link currently on screen, pinned section first.
    pub fn displayed_ids(&self) -> Vec<String> {
        self.pinned
            .iter()
            .chain(self.main.iter())
            .map(|l| l.id.clone())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.pinned.is_empty() && self.main.is_empty()
    }
}

/// Projects the canonical collection through the active filters.
///
/// The pinned section is extracted only in the unfiltered "all" view; with a
/// category or query filter active, pinned links stay inline and are
/// filtered like any other link.
pub fn project<'a, I>(links: I, filter: &ViewFilter) -> Projection
where
    I: IntoIterator<Item = &'a Link>,
{
    let query = filter.query.trim().to_lowercase();
    let separate_pinned = query.is_empty() && filter.category == CategoryFilter::All;

    let mut pinned = Vec::new();
    let mut main = Vec::new();
    for link in links {
        if !matches_query(link, &query) {
            continue;
        }
        if let CategoryFilter::Category(category_id) = &filter.category {
            if &link.category_id != category_id {
                continue;
            }
        }
        if separate_pinned && link.pinned {
            pinned.push(link.clone());
        } else {
            main.push(link.clone());
        }
    }

    pinned.sort_by(|a, b| cmp_pinned(a, b));
    main.sort_by(|a, b| cmp_main(a, b));
    Projection { pinned, main }
}

/// Case-insensitive substring match over title, url and description.
fn matches_query(link: &Link, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    link.title.to_lowercase().contains(query)
        || link.url.to_lowercase().contains(query)
        || link
            .description
            .as_ref()
            .map_or(false, |d| d.to_lowercase().contains(query))
}
