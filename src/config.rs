//! Configuration types for the edge map viewer.

use crate::colormap::Colormap;

// ─────────────────────────────────────────────────────────────────────────────
// Feature flags
// ─────────────────────────────────────────────────────────────────────────────

/// Toggle individual UI features on or off.
///
/// All features default to `true` (enabled). Disable features to create a
/// minimal, focused map view for embedded use.
#[derive(Clone, Debug)]
pub struct FeatureFlags {
    /// Show the controls sidebar.
    pub controls_sidebar: bool,
    /// Show the per-edge time-series panel at the bottom.
    pub series_panel: bool,
    /// Show the hover tooltip with edge id and count.
    pub hover_tooltip: bool,
    /// Offer the PNG snapshot button.
    pub snapshot: bool,
    /// Offer view-state save/load buttons.
    pub view_persistence: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            controls_sidebar: true,
            series_panel: true,
            hover_tooltip: true,
            snapshot: true,
            view_persistence: true,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// EdgeMapConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration for the viewer.
#[derive(Clone)]
pub struct EdgeMapConfig {
    // ── Window / chrome ──────────────────────────────────────────────────────
    /// Native window title.
    pub title: String,
    /// Optional headline rendered above the map.
    pub headline: Option<String>,
    /// Optional eframe native-window options.
    pub native_options: Option<eframe::NativeOptions>,

    // ── Initial view state ───────────────────────────────────────────────────
    /// Initial colormap.
    pub colormap: Colormap,
    /// Initial edge line weight in points (the sidebar offers 1–7).
    pub line_weight: f32,
    /// Start with the color scale clipped to the 1–99% quantile band.
    pub clip_quantiles: bool,
    /// Start with the log1p display transform enabled.
    pub log1p: bool,

    // ── Feature flags ────────────────────────────────────────────────────────
    /// Toggle individual UI features on/off.
    pub features: FeatureFlags,
}

impl Default for EdgeMapConfig {
    fn default() -> Self {
        Self {
            title: "EdgeMap".to_string(),
            headline: Some("Edge Time Series Visualization".to_string()),
            native_options: None,
            colormap: Colormap::default(),
            line_weight: 3.0,
            clip_quantiles: true,
            log1p: false,
            features: FeatureFlags::default(),
        }
    }
}
