//! EdgeMap crate root: re-exports and module wiring.
//!
//! EdgeMap is an interactive choropleth viewer for walkway-edge count time
//! series, built on egui/eframe:
//! - `data`: the count table, edge geometry, and the per-interaction
//!   derivations (time slice, color range, planar nearest-edge lookup,
//!   selection)
//! - `io`: CSV/Parquet series loading and GeoJSON edge-layer loading
//! - `colormap`: the enumerated sequential ramps
//! - `panels`: the map, sidebar controls, and per-edge series panels
//! - `app`: the central widget, the eframe wrapper, and `run_edgemap`
//! - `persistence`: JSON save/load of the adjustable view state

pub mod app;
pub mod colormap;
pub mod config;
pub mod data;
pub mod io;
pub mod panels;
pub mod persistence;

// Public re-exports for a compact external API
pub use app::{run_edgemap, EdgeMapApp, EdgeMapPanel, ViewState};
pub use colormap::Colormap;
pub use config::{EdgeMapConfig, FeatureFlags};
pub use data::color_range::{compute_range, ColorRange};
pub use data::locate::{locate_nearest, nearest_edge, ClickPoint, LocateError, ProjectedNetwork};
pub use data::network::{EdgeNetwork, EdgeRecord};
pub use data::projection::{LocalProjection, PlanarCrs};
pub use data::selection::EdgeSelection;
pub use data::series::{EdgeId, EdgeSeries};
pub use data::slice::{compute_slice, TimeSlice};
