//! Main application module for EdgeMap.
//!
//! This module defines the core types and wiring for the map viewer GUI.
//! It is split into focused sub-modules:
//!
//! | Sub-module    | Responsibility |
//! | ------------- | -------------- |
//! | [`map_panel`] | The central [`EdgeMapPanel`] widget: data, derived caches, panels, per-frame update |
//! | [`run`]       | Standalone [`run_edgemap()`] entry point (eframe event loop) |

mod map_panel;
mod run;

pub use map_panel::{EdgeMapApp, EdgeMapPanel};
pub use run::run_edgemap;

use crate::colormap::Colormap;

/// The knobs a user can turn. Panels mutate this directly; the app
/// recomputes the derived slice/range when an input changed.
#[derive(Debug, Clone, Copy)]
pub struct ViewState {
    /// Selected row index into the series (always within `0..len`).
    pub timestep_idx: usize,
    pub colormap: Colormap,
    /// Edge stroke width in points (1–7).
    pub line_weight: f32,
    /// Clip the color scale to the 1–99% quantile band.
    pub clip_quantiles: bool,
    /// Display counts through `ln(1 + x)`.
    pub log1p: bool,
}

/// Deferred UI requests accumulated while panels render; processed once
/// per frame after all panels, so file dialogs never run mid-layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeMapRequests {
    pub save_view: bool,
    pub load_view: bool,
    pub snapshot: bool,
}
