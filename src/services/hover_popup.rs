//! Debounced show/hide state for the search-source hover popup.

use std::time::{Duration, Instant};

/// Grace period before an unhovered popup hides.
pub const DEFAULT_HIDE_DELAY: Duration = Duration::from_millis(100);

/// Cancelable hide timer for a transient hover popup.
///
/// At most one hide timer is pending at a time: scheduling replaces any
/// earlier deadline (last timer wins) and hover re-entry cancels it. The
/// caller drives time explicitly through [`HoverPopup::tick`], so there are
/// no threads and behavior is deterministic.
#[derive(Debug)]
pub struct HoverPopup {
    visible: bool,
    pending_hide: Option<Instant>,
    hide_delay: Duration,
}

impl HoverPopup {
    pub fn new(hide_delay: Duration) -> Self {
        Self {
            visible: false,
            pending_hide: None,
            hide_delay,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn has_pending_hide(&self) -> bool {
        self.pending_hide.is_some()
    }

    /// Pointer entered the trigger or the popup: cancel any pending hide
    /// and show.
    pub fn hover_enter(&mut self) {
        self.pending_hide = None;
        self.visible = true;
    }

    /// Pointer left both the trigger and the popup: (re)schedule the hide.
    pub fn hover_leave(&mut self, now: Instant) {
        self.pending_hide = Some(now + self.hide_delay);
    }

    /// Applies a due hide deadline. Returns the current visibility.
    pub fn tick(&mut self, now: Instant) -> bool {
        if let Some(deadline) = self.pending_hide {
            if now >= deadline {
                self.visible = false;
                self.pending_hide = None;
            }
        }
        self.visible
    }

    /// Immediate hide, as after a source is chosen.
    pub fn dismiss(&mut self) {
        self.visible = false;
        self.pending_hide = None;
    }
}

impl Default for HoverPopup {
    fn default() -> Self {
        Self::new(DEFAULT_HIDE_DELAY)
    }
}
