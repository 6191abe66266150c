//! View-state persistence: save and load the adjustable view settings
//! to/from JSON files.
//!
//! The loaded data itself is never persisted (inputs are external and
//! read-only); only the knobs a user can turn — timestep, colormap, line
//! weight, toggles, selected edge — round-trip through this module.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::app::ViewState;
use crate::colormap::Colormap;
use crate::data::network::EdgeNetwork;
use crate::data::selection::EdgeSelection;
use crate::data::series::{EdgeId, EdgeSeries};

/// Serializable snapshot of the adjustable view state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewStateSerde {
    pub timestep_idx: usize,
    pub colormap: String,
    pub line_weight: f32,
    pub clip_quantiles: bool,
    pub log1p: bool,
    pub selected_edge: Option<EdgeId>,
}

impl ViewStateSerde {
    /// Capture the current view state and selection.
    pub fn capture(view: &ViewState, selection: &EdgeSelection) -> Self {
        Self {
            timestep_idx: view.timestep_idx,
            colormap: view.colormap.label().to_string(),
            line_weight: view.line_weight,
            clip_quantiles: view.clip_quantiles,
            log1p: view.log1p,
            selected_edge: selection.current(),
        }
    }

    /// Apply stored settings, validating against the loaded data: the
    /// timestep index is clamped to the series, an unknown colormap label
    /// keeps the current colormap, and a selected edge that no longer
    /// exists in the network leaves the selection untouched.
    pub fn apply_to(
        self,
        view: &mut ViewState,
        selection: &mut EdgeSelection,
        series: &EdgeSeries,
        network: &EdgeNetwork,
    ) {
        view.timestep_idx = self.timestep_idx.min(series.len().saturating_sub(1));
        if let Some(cmap) = Colormap::from_label(&self.colormap) {
            view.colormap = cmap;
        }
        view.line_weight = self.line_weight.clamp(1.0, 7.0);
        view.clip_quantiles = self.clip_quantiles;
        view.log1p = self.log1p;
        if let Some(id) = self.selected_edge {
            if network.contains(id) {
                selection.select(id);
            }
        }
    }
}

/// Serialize view state to a JSON string.
pub fn state_to_json(state: &ViewStateSerde) -> Result<String, String> {
    serde_json::to_string_pretty(state).map_err(|e| format!("Failed to serialize view state: {e}"))
}

/// Deserialize view state from a JSON string.
pub fn state_from_json(json: &str) -> Result<ViewStateSerde, String> {
    serde_json::from_str(json).map_err(|e| format!("Failed to parse view state: {e}"))
}

/// Save view state to a file.
pub fn save_state_to_path(state: &ViewStateSerde, path: &Path) -> Result<(), String> {
    let json = state_to_json(state)?;
    std::fs::write(path, json).map_err(|e| format!("Failed to write {}: {e}", path.display()))
}

/// Load view state from a file.
pub fn load_state_from_path(path: &Path) -> Result<ViewStateSerde, String> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    state_from_json(&json)
}
