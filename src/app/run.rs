//! Top-level entry point for running EdgeMap as a native window.

use eframe::egui;

use super::map_panel::{EdgeMapApp, EdgeMapPanel};
use crate::config::EdgeMapConfig;
use crate::data::network::EdgeNetwork;
use crate::data::series::EdgeSeries;

/// Launch the EdgeMap viewer in a native window.
///
/// Validates the fatal preconditions (empty series or network), opens a
/// native window, and enters the eframe event loop. The call blocks until
/// the window is closed.
pub fn run_edgemap(
    series: EdgeSeries,
    network: EdgeNetwork,
    mut cfg: EdgeMapConfig,
) -> Result<(), String> {
    let panel = EdgeMapPanel::new(series, network, &cfg)?;
    let app = EdgeMapApp::new(panel);

    let title = cfg.title.clone();
    let mut opts = cfg
        .native_options
        .take()
        .unwrap_or_else(eframe::NativeOptions::default);
    if opts.viewport.inner_size.is_none() {
        opts.viewport = opts
            .viewport
            .clone()
            .with_inner_size(egui::vec2(1400.0, 900.0));
    }

    eframe::run_native(
        &title,
        opts,
        Box::new(|cc| {
            // Install Phosphor icon font before creating the app.
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| format!("failed to start the viewer: {e}"))
}
