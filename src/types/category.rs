use serde::{Deserialize, Serialize};

/// Id of the always-present default category. Links whose category goes
/// away fall back to it, and it can never be deleted.
pub const RESERVED_CATEGORY_ID: &str = "common";

/// A link category shown in the sidebar.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub icon: String,
}

impl Category {
    /// The reserved default category.
    pub fn reserved_default() -> Self {
        Self {
            id: RESERVED_CATEGORY_ID.to_string(),
            name: "Frequently Used".to_string(),
            icon: "Star".to_string(),
        }
    }
}
