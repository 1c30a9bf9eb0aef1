//! Batch-edit selection tracking for linkdock.

use std::collections::HashSet;

/// Working selection for batch-edit mode.
///
/// The selection is ephemeral: it only exists while batch-edit mode is
/// active and is cleared on every mode toggle and after every completed
/// batch operation.
pub struct SelectionManager {
    batch_mode: bool,
    selected: HashSet<String>,
}

impl SelectionManager {
    pub fn new() -> Self {
        Self {
            batch_mode: false,
            selected: HashSet::new(),
        }
    }

    pub fn batch_mode(&self) -> bool {
        self.batch_mode
    }

    /// Flips batch-edit mode. The selection is cleared in both directions.
    /// Returns the new mode.
    pub fn toggle_batch_mode(&mut self) -> bool {
        self.batch_mode = !self.batch_mode;
        self.selected.clear();
        self.batch_mode
    }

    /// Toggles one link's membership. Ignored outside batch-edit mode.
    pub fn toggle(&mut self, link_id: &str) {
        if !self.batch_mode {
            return;
        }
        if !self.selected.remove(link_id) {
            self.selected.insert(link_id.to_string());
        }
    }

    /// Select-all as a toggle over the currently displayed ids: clears when
    /// the selection already equals the displayed set exactly, otherwise
    /// selects exactly that set.
    pub fn select_all(&mut self, displayed: &[String]) {
        if !self.batch_mode {
            return;
        }
        let full: HashSet<String> = displayed.iter().cloned().collect();
        if self.selected == full {
            self.selected.clear();
        } else {
            self.selected = full;
        }
    }

    pub fn is_selected(&self, link_id: &str) -> bool {
        self.selected.contains(link_id)
    }

    pub fn selected(&self) -> &HashSet<String> {
        &self.selected
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Clears the selection and leaves batch-edit mode, as after a completed
    /// batch operation.
    pub fn finish_batch(&mut self) {
        self.selected.clear();
        self.batch_mode = false;
    }
}

impl Default for SelectionManager {
    fn default() -> Self {
        Self::new()
    }
}
