//! Parcoords crate root: re-exports and module wiring.
//!
//! An interactive parallel-coordinates plot built on egui/eframe, with a
//! synchronized data table and a per-cluster statistics panel.
//!
//! - `data`: dataset, axes, filtering, row index, selection, table model and the [`ParCoords`] session
//! - `config`: plot options and their merge rules, native window configuration
//! - `persistence`: loading inputs and options from JSON/YAML
//! - `events`: notifications for hover, selection, brushing and redraws
//! - `panels`: chart, table, cluster and dimension-selector UIs
//! - `app`: standalone eframe application and [`run_parcoords()`]

pub mod app;
pub mod color_scheme;
pub mod config;
pub mod data;
pub mod error;
pub mod events;
pub mod panels;
pub mod persistence;

// Public re-exports for a compact external API
pub use app::{run_parcoords, ParCoordsApp};
pub use color_scheme::{ColorSpec, Rgb, Theme};
pub use config::{DrawMode, Options, OptionsPatch, ParCoordsConfig, SkipMode};
pub use data::clusters::{ClusterSpec, ColorSchemeInput};
pub use data::dataset::{Cell, Dataset};
pub use data::selection::{PointerAction, PointerEvent, RowTarget, SelectionState};
pub use data::session::{Action, ParCoords};
pub use error::{ParCoordsError, Result};
pub use events::{EventController, EventFilter, EventKind, ParCoordsEvent};
pub use persistence::PlotInput;
