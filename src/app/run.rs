//! Top-level entry point for showing a plot in a native window.

use eframe::egui;

use super::parcoords_app::ParCoordsApp;
use crate::config::ParCoordsConfig;
use crate::data::session::ParCoords;

/// Open a native window showing `pc` and block until it is closed.
pub fn run_parcoords(pc: ParCoords, mut cfg: ParCoordsConfig) -> eframe::Result<()> {
    let app = ParCoordsApp::new(pc, &cfg);

    let title = cfg.title.clone();
    let mut opts = cfg.native_options.take().unwrap_or_default();
    if opts.viewport.inner_size.is_none() {
        opts.viewport = opts
            .viewport
            .clone()
            .with_inner_size(egui::vec2(1280.0, 900.0));
    }

    eframe::run_native(
        &title,
        opts,
        Box::new(|cc| {
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(app))
        }),
    )
}
