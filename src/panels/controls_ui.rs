//! Sidebar controls: timestep, colormap, line weight, scale toggles, and
//! the summary block.

use egui::Ui;

use crate::colormap::Colormap;
use crate::panels::panel_trait::{Panel, PanelContext, PanelState};

#[derive(Default)]
pub struct ControlsPanel {
    state: PanelState,
}

impl Panel for ControlsPanel {
    fn name(&self) -> &'static str {
        "Controls"
    }

    fn state(&self) -> &PanelState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    fn render_panel(&mut self, ui: &mut Ui, ctx: &mut PanelContext<'_>) {
        ui.heading(self.name());

        // Timestep: index slider constrained to valid rows. The selector
        // itself never sees an out-of-range index.
        let last = ctx.series.len() - 1;
        ui.add(
            egui::Slider::new(&mut ctx.view.timestep_idx, 0..=last)
                .step_by(1.0)
                .text("Timestep (row index)"),
        );
        ui.label(format!(
            "Selected time: {}",
            ctx.series.timestamp_label(ctx.view.timestep_idx)
        ));

        ui.separator();

        egui::ComboBox::from_id_salt("colormap")
            .selected_text(ctx.view.colormap.label())
            .show_ui(ui, |ui| {
                for cmap in Colormap::all() {
                    ui.selectable_value(&mut ctx.view.colormap, *cmap, cmap.label());
                }
            });
        ui.add(egui::Slider::new(&mut ctx.view.line_weight, 1.0..=7.0).text("Line weight"));
        ui.checkbox(
            &mut ctx.view.clip_quantiles,
            "Clip color scale to 1–99% quantiles",
        );
        ui.checkbox(&mut ctx.view.log1p, "log1p transform (display only)");

        ui.separator();

        // Summary block
        ui.label(format!("Row index: {}", ctx.view.timestep_idx));
        ui.label(format!(
            "vmin–vmax: {} – {}",
            short_float(ctx.range.vmin),
            short_float(ctx.range.vmax)
        ));
        ui.label(format!(
            "Nonzero edges: {} / {}",
            ctx.slice.nonzero_count(),
            ctx.network.len()
        ));
        if let Some(id) = ctx.selection.current() {
            ui.label(format!("Selected edge: {id}"));
        } else {
            ui.label("Selected edge: none");
        }

        ui.separator();

        ui.horizontal(|ui| {
            if ctx.features.view_persistence {
                if ui
                    .button(format!("{} Save view", egui_phosphor::regular::FLOPPY_DISK))
                    .clicked()
                {
                    ctx.requests.save_view = true;
                }
                if ui
                    .button(format!("{} Load view", egui_phosphor::regular::FOLDER_OPEN))
                    .clicked()
                {
                    ctx.requests.load_view = true;
                }
            }
            if ctx.features.snapshot
                && ui
                    .button(format!("{} Save PNG", egui_phosphor::regular::CAMERA))
                    .on_hover_text("Take a viewport screenshot")
                    .clicked()
            {
                ctx.requests.snapshot = true;
            }
        });
    }
}

/// Compact readout like the original's `%.3g`: plain decimals for values
/// near 1, scientific notation for very large or very small magnitudes.
fn short_float(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    let a = v.abs();
    if a >= 1e4 || a < 1e-3 {
        format!("{v:.2e}")
    } else {
        format!("{v:.3}")
    }
}
