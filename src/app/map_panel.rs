//! The central EdgeMap widget and its standalone eframe wrapper.
//!
//! One user interaction — timestep change, colormap change, toggle, map
//! click — triggers one synchronous recomputation of the affected derived
//! data and a repaint. There are no background tasks; the inputs are
//! immutable after load and the only cross-frame mutable state is the view
//! state plus the edge selection owned here.

use eframe::egui;
use egui::ViewportCommand;
use image::{Rgba, RgbaImage};

use super::{EdgeMapRequests, ViewState};
use crate::config::{EdgeMapConfig, FeatureFlags};
use crate::data::color_range::{compute_range, ColorRange};
use crate::data::locate::ProjectedNetwork;
use crate::data::network::EdgeNetwork;
use crate::data::projection::LocalProjection;
use crate::data::selection::EdgeSelection;
use crate::data::series::EdgeSeries;
use crate::data::slice::{compute_slice, TimeSlice};
use crate::panels::map_ui::MapContext;
use crate::panels::{ControlsPanel, MapPanel, Panel, PanelContext, SeriesPanel};
use crate::persistence::{self, ViewStateSerde};

/// The central widget that owns the loaded data, the derived caches, the
/// selection, and the sub-panels.
pub struct EdgeMapPanel {
    // ── Inputs (immutable after load) ────────────────────────────────────────
    series: EdgeSeries,
    network: EdgeNetwork,
    projection: LocalProjection,
    projected: ProjectedNetwork,

    // ── Session state ────────────────────────────────────────────────────────
    pub view: ViewState,
    pub selection: EdgeSelection,

    // ── Derived caches ───────────────────────────────────────────────────────
    slice: TimeSlice,
    range: ColorRange,
    /// Inputs (`timestep_idx`, `clip_quantiles`, `log1p`) the caches were
    /// computed for.
    derived_key: (usize, bool, bool),

    /// Set when the selection transitioned; consumed by the next frame's
    /// panels as their refresh signal.
    selection_changed: bool,

    // ── Panels ───────────────────────────────────────────────────────────────
    map: MapPanel,
    left_panels: Vec<Box<dyn Panel>>,
    bottom_panels: Vec<Box<dyn Panel>>,

    // ── Chrome ───────────────────────────────────────────────────────────────
    features: FeatureFlags,
    headline: Option<String>,
    requests: EdgeMapRequests,
}

impl EdgeMapPanel {
    /// Build the widget, validating the fatal preconditions: an empty
    /// series or an empty network cannot be displayed at all.
    pub fn new(
        series: EdgeSeries,
        network: EdgeNetwork,
        cfg: &EdgeMapConfig,
    ) -> Result<Self, String> {
        if series.is_empty() {
            return Err("time series has no rows; nothing can be displayed".to_string());
        }
        if network.is_empty() {
            return Err("edge network has no geometry; nothing can be displayed".to_string());
        }
        let center = network
            .geographic_center()
            .ok_or("edge network has no coordinates")?;
        let projection = LocalProjection::centered_on(center);
        let projected = ProjectedNetwork::build(&network, &projection);

        let timestep_idx = if series.len() > 1 { series.len() / 10 } else { 0 };
        let view = ViewState {
            timestep_idx,
            colormap: cfg.colormap,
            line_weight: cfg.line_weight.clamp(1.0, 7.0),
            clip_quantiles: cfg.clip_quantiles,
            log1p: cfg.log1p,
        };

        let slice = compute_slice(&series, &network, timestep_idx);
        let values = slice.values_for(&network);
        let range = compute_range(&values, view.clip_quantiles, view.log1p);
        let derived_key = (timestep_idx, view.clip_quantiles, view.log1p);

        Ok(Self {
            series,
            network,
            projection,
            projected,
            view,
            selection: EdgeSelection::new(),
            slice,
            range,
            derived_key,
            selection_changed: false,
            map: MapPanel::default(),
            left_panels: vec![Box::new(ControlsPanel::default())],
            bottom_panels: vec![Box::new(SeriesPanel::default())],
            features: cfg.features.clone(),
            headline: cfg.headline.clone(),
            requests: EdgeMapRequests::default(),
        })
    }

    pub fn series(&self) -> &EdgeSeries {
        &self.series
    }

    pub fn network(&self) -> &EdgeNetwork {
        &self.network
    }

    /// Per-frame update: recompute derived data if an input changed, then
    /// render panels and the map, then process deferred requests.
    pub fn update(&mut self, ctx: &egui::Context) {
        self.refresh_derived();
        let selection_changed = std::mem::take(&mut self.selection_changed);

        if self.features.controls_sidebar {
            egui::SidePanel::left("edgemap_controls")
                .default_width(280.0)
                .show(ctx, |ui| {
                    egui::ScrollArea::vertical().show(ui, |ui| {
                        let mut pctx = PanelContext {
                            series: &self.series,
                            network: &self.network,
                            slice: &self.slice,
                            range: self.range,
                            view: &mut self.view,
                            selection: &self.selection,
                            selection_changed,
                            features: &self.features,
                            requests: &mut self.requests,
                        };
                        for panel in &mut self.left_panels {
                            if panel.state().visible {
                                panel.render_panel(ui, &mut pctx);
                            }
                        }
                    });
                });
        }

        if self.features.series_panel {
            egui::TopBottomPanel::bottom("edgemap_series")
                .resizable(true)
                .min_height(120.0)
                .default_height(240.0)
                .show(ctx, |ui| {
                    let mut pctx = PanelContext {
                        series: &self.series,
                        network: &self.network,
                        slice: &self.slice,
                        range: self.range,
                        view: &mut self.view,
                        selection: &self.selection,
                        selection_changed,
                        features: &self.features,
                        requests: &mut self.requests,
                    };
                    for panel in &mut self.bottom_panels {
                        if panel.state().visible {
                            panel.render_panel(ui, &mut pctx);
                        }
                    }
                });
        }

        let clicked = egui::CentralPanel::default()
            .show(ctx, |ui| {
                if let Some(headline) = &self.headline {
                    ui.heading(headline);
                }
                let mctx = MapContext {
                    network: &self.network,
                    slice: &self.slice,
                    range: self.range,
                    colormap: self.view.colormap,
                    line_weight: self.view.line_weight,
                    log1p: self.view.log1p,
                    selection: &self.selection,
                    projection: &self.projection,
                    projected: &self.projected,
                    hover_tooltip: self.features.hover_tooltip,
                };
                self.map.ui(ui, &mctx)
            })
            .inner;

        if let Some(id) = clicked {
            // A re-click on the already-selected edge signals nothing; the
            // series panel keeps its cache.
            if self.selection.select(id) {
                self.selection_changed = true;
                ctx.request_repaint();
            }
        }

        self.process_requests(ctx);
        self.handle_screenshot(ctx);
    }

    /// Recompute slice and color range when their inputs changed. The
    /// timestep index is clamped first so a restored view state can never
    /// address a row that does not exist.
    fn refresh_derived(&mut self) {
        let idx = self.view.timestep_idx.min(self.series.len() - 1);
        self.view.timestep_idx = idx;
        let key = (idx, self.view.clip_quantiles, self.view.log1p);
        if key != self.derived_key {
            self.slice = compute_slice(&self.series, &self.network, idx);
            let values = self.slice.values_for(&self.network);
            self.range = compute_range(&values, key.1, key.2);
            self.derived_key = key;
        }
    }

    fn process_requests(&mut self, ctx: &egui::Context) {
        if std::mem::take(&mut self.requests.save_view) {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("JSON", &["json"])
                .set_file_name("edgemap_view.json")
                .save_file()
            {
                let state = ViewStateSerde::capture(&self.view, &self.selection);
                if let Err(e) = persistence::save_state_to_path(&state, &path) {
                    eprintln!("Failed to save view state: {e}");
                }
            }
        }
        if std::mem::take(&mut self.requests.load_view) {
            if let Some(path) = rfd::FileDialog::new().add_filter("JSON", &["json"]).pick_file() {
                match persistence::load_state_from_path(&path) {
                    Ok(state) => {
                        let before = self.selection.current();
                        state.apply_to(
                            &mut self.view,
                            &mut self.selection,
                            &self.series,
                            &self.network,
                        );
                        if self.selection.current() != before {
                            self.selection_changed = true;
                        }
                    }
                    Err(e) => eprintln!("Failed to load view state: {e}"),
                }
            }
        }
        if std::mem::take(&mut self.requests.snapshot) {
            // Result arrives next frame as Event::Screenshot.
            ctx.send_viewport_cmd(ViewportCommand::Screenshot(Default::default()));
        }
    }

    fn handle_screenshot(&mut self, ctx: &egui::Context) {
        let image_arc = ctx.input(|i| {
            i.events.iter().rev().find_map(|e| {
                if let egui::Event::Screenshot { image, .. } = e {
                    Some(image.clone())
                } else {
                    None
                }
            })
        });
        if let Some(image_arc) = image_arc {
            let default_name = format!("edgemap_{}.png", chrono::Local::now().timestamp_millis());
            if let Some(path) = rfd::FileDialog::new()
                .set_file_name(&default_name)
                .save_file()
            {
                let egui::ColorImage {
                    size: [w, h],
                    pixels,
                    ..
                } = &*image_arc;
                let mut out = RgbaImage::new(*w as u32, *h as u32);
                for y in 0..*h {
                    for x in 0..*w {
                        let p = pixels[y * *w + x];
                        out.put_pixel(x as u32, y as u32, Rgba([p.r(), p.g(), p.b(), p.a()]));
                    }
                }
                if let Err(e) = out.save(&path) {
                    eprintln!("Failed to save viewport screenshot: {e}");
                } else {
                    eprintln!("Saved viewport screenshot to {:?}", path);
                }
            }
        }
    }
}

/// Thin eframe wrapper around [`EdgeMapPanel`] for standalone use.
pub struct EdgeMapApp {
    panel: EdgeMapPanel,
}

impl EdgeMapApp {
    pub fn new(panel: EdgeMapPanel) -> Self {
        Self { panel }
    }
}

impl eframe::App for EdgeMapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.panel.update(ctx);
    }
}
