use egui::Ui;

use crate::app::{EdgeMapRequests, ViewState};
use crate::config::FeatureFlags;
use crate::data::color_range::ColorRange;
use crate::data::network::EdgeNetwork;
use crate::data::selection::EdgeSelection;
use crate::data::series::EdgeSeries;
use crate::data::slice::TimeSlice;

/// Visibility state shared by dockable panels.
#[derive(Debug, Clone, Copy)]
pub struct PanelState {
    pub visible: bool,
}

impl Default for PanelState {
    fn default() -> Self {
        Self { visible: true }
    }
}

/// Everything a dockable panel may read or request during one frame.
///
/// Panels mutate the view state directly (the app recomputes derived data
/// when the inputs changed) and file-dialog work is deferred through
/// [`EdgeMapRequests`] so it runs after all panels have rendered.
pub struct PanelContext<'a> {
    pub series: &'a EdgeSeries,
    pub network: &'a EdgeNetwork,
    pub slice: &'a TimeSlice,
    pub range: ColorRange,
    pub view: &'a mut ViewState,
    pub selection: &'a EdgeSelection,
    /// Set for exactly one frame after the selection transitioned; panels
    /// caching per-selection data rebuild when they see it.
    pub selection_changed: bool,
    pub features: &'a FeatureFlags,
    pub requests: &'a mut EdgeMapRequests,
}

pub trait Panel {
    fn name(&self) -> &'static str;
    fn state(&self) -> &PanelState;
    fn state_mut(&mut self) -> &mut PanelState;
    fn render_panel(&mut self, ui: &mut Ui, ctx: &mut PanelContext<'_>);
}
