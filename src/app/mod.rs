//! Native window wiring.
//!
//! | Sub-module          | Responsibility |
//! | ------------------- | -------------- |
//! | [`parcoords_app`]   | Standalone [`ParCoordsApp`] (eframe) wrapper: menu bar, panel layout, action dispatch |
//! | [`run`]             | Top-level [`run_parcoords()`] entry point and font setup |

mod parcoords_app;
mod run;

pub use parcoords_app::ParCoordsApp;
pub use run::run_parcoords;
