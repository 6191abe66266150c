//! The central choropleth map.
//!
//! Edges are drawn as plot lines in lon/lat display coordinates with the
//! aspect ratio corrected for the network's latitude, colored by the
//! current time slice. Clicks and hovers go through the planar
//! nearest-edge lookup — never through raw-degree distances.

use egui::{Color32, Ui};
use egui_plot::{Line, Plot, PlotPoints};

use crate::colormap::Colormap;
use crate::data::color_range::ColorRange;
use crate::data::locate::{nearest_edge, ClickPoint, ProjectedNetwork};
use crate::data::network::EdgeNetwork;
use crate::data::projection::LocalProjection;
use crate::data::selection::EdgeSelection;
use crate::data::series::EdgeId;
use crate::data::slice::TimeSlice;

/// Pointer-to-edge distance (screen px) below which the hover tooltip
/// shows.
const HOVER_THRESHOLD_PX: f64 = 12.0;

/// Meters per degree of latitude on the mean-radius sphere.
const M_PER_DEG_LAT: f64 = 111_194.9;

/// Read-only inputs for one map frame.
pub struct MapContext<'a> {
    pub network: &'a EdgeNetwork,
    pub slice: &'a TimeSlice,
    pub range: ColorRange,
    pub colormap: Colormap,
    pub line_weight: f32,
    pub log1p: bool,
    pub selection: &'a EdgeSelection,
    pub projection: &'a LocalProjection,
    pub projected: &'a ProjectedNetwork,
    pub hover_tooltip: bool,
}

#[derive(Default)]
pub struct MapPanel {}

impl MapPanel {
    /// Render the map. Returns the id of the edge nearest to a primary
    /// click, if any.
    pub fn ui(&mut self, ui: &mut Ui, ctx: &MapContext<'_>) -> Option<EdgeId> {
        let center_lat = ctx.projection.crs().center_lat;
        // One degree of longitude spans cos(lat) times the ground distance
        // of one degree of latitude; stretch x accordingly.
        let aspect = (1.0 / center_lat.to_radians().cos().max(0.05)) as f32;

        let plot = Plot::new("edge_map")
            .data_aspect(aspect)
            .show_axes([false, false])
            .show_grid(false)
            .allow_scroll(false)
            .allow_boxed_zoom(true)
            .label_formatter(|_, _| String::new());

        let selected = ctx.selection.current();
        let response = plot.show(ui, |plot_ui| {
            for edge in ctx.network.edges() {
                if Some(edge.id) == selected {
                    continue; // drawn last, on top
                }
                let color = self.edge_color(ctx, edge.id);
                for (part_idx, part) in edge.geometry.iter().enumerate() {
                    let pts: Vec<[f64; 2]> = part.coords().map(|c| [c.x, c.y]).collect();
                    plot_ui.line(
                        Line::new(format!("edge-{}-{part_idx}", edge.id), PlotPoints::from(pts))
                            .color(color)
                            .width(ctx.line_weight),
                    );
                }
            }
            if let Some(id) = selected {
                if let Some(edge) = ctx.network.edges().iter().find(|e| e.id == id) {
                    for (part_idx, part) in edge.geometry.iter().enumerate() {
                        let pts: Vec<[f64; 2]> = part.coords().map(|c| [c.x, c.y]).collect();
                        plot_ui.line(
                            Line::new(format!("selected-{id}-{part_idx}"), PlotPoints::from(pts))
                                .color(Color32::YELLOW)
                                .width(ctx.line_weight + 2.0),
                        );
                    }
                }
            }
        });

        // Click → nearest edge. The pointer position is in plot space,
        // which is lon/lat here.
        let mut clicked = None;
        if response.response.clicked() {
            if let Some(screen_pos) = response.response.interact_pointer_pos() {
                let pos = response.transform.value_from_position(screen_pos);
                let click = ClickPoint {
                    lon: pos.x,
                    lat: pos.y,
                };
                match nearest_edge(click, ctx.projected, ctx.projection) {
                    Ok((id, _)) => clicked = Some(id),
                    Err(e) => eprintln!("edgemap: click lookup failed: {e}"),
                }
            }
        }

        if ctx.hover_tooltip && clicked.is_none() {
            self.hover(ui, ctx, &response, center_lat);
        }

        clicked
    }

    fn edge_color(&self, ctx: &MapContext<'_>, id: EdgeId) -> Color32 {
        let count = ctx.slice.count(id).unwrap_or(0.0);
        let value = if ctx.log1p { count.ln_1p() } else { count };
        ctx.colormap.color_for(value, ctx.range)
    }

    /// Tooltip with edge id and count when the pointer is close enough to
    /// an edge, measured in planar meters converted from a pixel budget.
    fn hover(
        &self,
        ui: &Ui,
        ctx: &MapContext<'_>,
        response: &egui_plot::PlotResponse<()>,
        center_lat: f64,
    ) {
        let Some(pos) = response.response.hover_pos() else {
            return;
        };
        let rect = response.response.rect;
        if rect.width() <= 0.0 {
            return;
        }
        let plot_pos = response.transform.value_from_position(pos);
        let click = ClickPoint {
            lon: plot_pos.x,
            lat: plot_pos.y,
        };
        let Ok((id, dist_m)) = nearest_edge(click, ctx.projected, ctx.projection) else {
            return;
        };

        let deg_per_px = response.transform.bounds().width() / rect.width() as f64;
        let m_per_deg_lon = M_PER_DEG_LAT * center_lat.to_radians().cos();
        let threshold_m = HOVER_THRESHOLD_PX * deg_per_px * m_per_deg_lon;
        if dist_m > threshold_m {
            return;
        }

        let count = ctx.slice.count(id).unwrap_or(0.0);
        egui::show_tooltip_at_pointer(
            ui.ctx(),
            ui.layer_id(),
            egui::Id::new("edge_map_tooltip"),
            |ui| {
                ui.label(format!("Edge: {id}"));
                ui.label(format!("Count: {count}"));
            },
        );
    }
}
