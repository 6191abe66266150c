//! Bottom panel: the full count time series of the selected edge.

use egui::{Color32, Ui};
use egui_plot::{Line, Plot, PlotPoints, VLine};

use crate::data::series::EdgeId;
use crate::panels::panel_trait::{Panel, PanelContext, PanelState};

pub struct SeriesPanel {
    state: PanelState,
    /// Points of the currently plotted edge, rebuilt only when the
    /// selection transitions (a re-click on the same edge signals no
    /// refresh and keeps this cache).
    cache: Option<(EdgeId, Vec<[f64; 2]>)>,
}

impl Default for SeriesPanel {
    fn default() -> Self {
        Self {
            state: PanelState::default(),
            cache: None,
        }
    }
}

impl Panel for SeriesPanel {
    fn name(&self) -> &'static str {
        "Edge series"
    }

    fn state(&self) -> &PanelState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    fn render_panel(&mut self, ui: &mut Ui, ctx: &mut PanelContext<'_>) {
        let Some(id) = ctx.selection.current() else {
            ui.label("Click an edge on the map to inspect its time series.");
            return;
        };

        let stale = ctx.selection_changed
            || self.cache.as_ref().map(|(cid, _)| *cid) != Some(id);
        if stale {
            self.cache = ctx.series.points_for_edge(id).map(|pts| (id, pts));
        }

        let Some((_, points)) = &self.cache else {
            // Geometry exists but the table has no column: everything this
            // edge would show is the default 0.0.
            ui.label(format!("Edge {id}: no counts recorded."));
            return;
        };

        ui.label(format!("Edge {id}"));
        let line = Line::new(format!("edge {id}"), PlotPoints::from(points.clone()))
            .color(Color32::LIGHT_BLUE);
        let marker_x = ctx.slice.timestamp;
        Plot::new("edge_series_plot")
            .allow_scroll(false)
            .x_axis_formatter(|x, _range| {
                let secs = x.value as i64;
                let dt = chrono::DateTime::from_timestamp(secs, 0).unwrap_or_default();
                dt.format("%m-%d %H:%M").to_string()
            })
            .show(ui, |plot_ui| {
                plot_ui.line(line);
                plot_ui.vline(VLine::new("selected time", marker_x).color(Color32::YELLOW));
            });
    }
}
