pub mod cluster_ui;
pub mod panel_trait;
pub mod plot_ui;
pub mod selector_ui;
pub mod table_ui;

pub use cluster_ui::ClusterPanel;
pub use panel_trait::{Panel, PanelState};
pub use plot_ui::ChartPanel;
pub use selector_ui::SelectorPanel;
pub use table_ui::TablePanel;
