pub mod controls_ui;
pub mod map_ui;
pub mod panel_trait;
pub mod series_ui;

pub use controls_ui::ControlsPanel;
pub use map_ui::MapPanel;
pub use panel_trait::{Panel, PanelContext, PanelState};
pub use series_ui::SeriesPanel;
