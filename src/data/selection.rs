//! Session-scoped edge selection.
//!
//! Exactly one writer exists (the map click path) and the render step only
//! reads, so this is a plain value owned by the app and passed into the
//! panels that need it — one per session, never a process-wide global.

use crate::data::series::EdgeId;

/// Holds the currently inspected edge, if any.
///
/// Starts with nothing selected. The selection is never cleared, only
/// replaced by a different id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeSelection {
    current: Option<EdgeId>,
}

impl EdgeSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<EdgeId> {
        self.current
    }

    pub fn is_selected(&self, id: EdgeId) -> bool {
        self.current == Some(id)
    }

    /// Record a nearest-edge lookup result.
    ///
    /// Returns `true` when the selection actually changed — the signal for
    /// dependent views (the per-edge series panel) to refresh. A re-click
    /// on the already-selected edge returns `false`: no transition, no
    /// redundant refresh.
    pub fn select(&mut self, id: EdgeId) -> bool {
        if self.current == Some(id) {
            return false;
        }
        self.current = Some(id);
        true
    }
}
