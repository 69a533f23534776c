//! Standalone eframe application around one [`ParCoords`] session.

use eframe::egui;
use egui_phosphor::regular::{BROOM, FLOPPY_DISK, FOLDER_OPEN, PALETTE};

use crate::color_scheme::Theme;
use crate::config::{DrawMode, ParCoordsConfig};
use crate::data::session::{Action, ParCoords};
use crate::panels::{ChartPanel, ClusterPanel, Panel, SelectorPanel, TablePanel};
use crate::persistence::{load_input, save_options_yaml};

pub struct ParCoordsApp {
    pub pc: ParCoords,
    chart: ChartPanel,
    table: TablePanel,
    clusters: ClusterPanel,
    selector: SelectorPanel,
    theme: Theme,
    theme_applied: bool,
    headline: Option<String>,
    /// Last load/save failure, shown until dismissed.
    status: Option<String>,
}

impl ParCoordsApp {
    pub fn new(mut pc: ParCoords, cfg: &ParCoordsConfig) -> Self {
        if let Some(ev) = &cfg.events {
            pc.set_events(Some(ev.clone()));
        }
        Self {
            pc,
            chart: ChartPanel::default(),
            table: TablePanel::default(),
            clusters: ClusterPanel::default(),
            selector: SelectorPanel::default(),
            theme: cfg.theme,
            theme_applied: false,
            headline: cfg.headline.clone(),
            status: None,
        }
    }

    /// Mirror `draw.parts_visible` and the draw mode onto the panels.
    fn sync_panels(&mut self) {
        let o = self.pc.options().draw;
        self.chart.show_hint = o.parts_visible.hint;
        self.table.state_mut().visible = o.parts_visible.table;
        self.table.colvis = o.parts_visible.table_colvis;
        self.clusters.state_mut().visible =
            o.mode == DrawMode::Cluster && o.parts_visible.cluster_table;
        self.selector.state_mut().visible = o.parts_visible.selector;
    }

    fn apply_actions(&mut self, actions: Vec<Action>) {
        for action in actions {
            log::trace!("action {action:?}");
            if let Err(e) = self.pc.apply(action) {
                log::warn!("{e}");
                self.status = Some(e.to_string());
            }
        }
    }

    fn menu(&mut self, ui: &mut egui::Ui) {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button(format!("{FOLDER_OPEN} Open data…")).clicked() {
                    if let Some(path) = rfd::FileDialog::new()
                        .add_filter("Data", &["json", "yaml", "yml"])
                        .pick_file()
                    {
                        match load_input(&path).and_then(|input| self.pc.update(input)) {
                            Ok(()) => {
                                log::info!("loaded {}", path.display());
                                self.status = None;
                            }
                            Err(e) => {
                                log::error!("failed to load {}: {e}", path.display());
                                self.status = Some(e.to_string());
                            }
                        }
                    }
                    ui.close();
                }
                if ui.button(format!("{FLOPPY_DISK} Save options…")).clicked() {
                    if let Some(path) = rfd::FileDialog::new()
                        .set_file_name("parcoords_options.yaml")
                        .add_filter("YAML", &["yaml", "yml"])
                        .save_file()
                    {
                        if let Err(e) = save_options_yaml(self.pc.options(), &path) {
                            log::error!("failed to save options to {}: {e}", path.display());
                            self.status = Some(e.to_string());
                        }
                    }
                    ui.close();
                }
            });
            ui.menu_button(format!("{PALETTE} Theme"), |ui| {
                for t in [Theme::Dark, Theme::Light] {
                    if ui.selectable_label(self.theme == t, t.label()).clicked() {
                        self.theme = t;
                        self.theme_applied = false;
                        ui.close();
                    }
                }
            });
            if ui
                .button(format!("{BROOM} Clear brushes"))
                .on_hover_text("Remove every axis selection")
                .clicked()
            {
                self.apply_actions(vec![Action::ClearAllBrushes]);
            }
            ui.separator();
            ui.label(format!(
                "{} of {} lines",
                self.pc.displayed_count(),
                self.pc.dataset().row_count()
            ));
        });
    }
}

impl eframe::App for ParCoordsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.theme_applied {
            self.theme.apply(ctx);
            self.theme_applied = true;
        }
        self.sync_panels();

        egui::TopBottomPanel::top("parcoords_menu").show(ctx, |ui| {
            if let Some(h) = &self.headline {
                ui.heading(h);
            }
            self.menu(ui);
            if let Some(msg) = self.status.clone() {
                ui.horizontal(|ui| {
                    ui.colored_label(ui.visuals().error_fg_color, msg);
                    if ui.small_button("✕").clicked() {
                        self.status = None;
                    }
                });
            }
        });

        let mut actions = Vec::new();
        let theme = self.theme;

        if self.selector.state().visible {
            egui::SidePanel::left("parcoords_selector")
                .resizable(true)
                .default_width(220.0)
                .show(ctx, |ui| {
                    egui::ScrollArea::vertical().show(ui, |ui| {
                        self.selector.render_panel(ui, &self.pc, theme, &mut actions);
                    });
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.chart.render_panel(ui, &self.pc, theme, &mut actions);
                for panel in [&mut self.table as &mut dyn Panel, &mut self.clusters] {
                    if panel.state().visible {
                        ui.separator();
                        ui.strong(panel.name());
                        panel.render_panel(ui, &self.pc, theme, &mut actions);
                    }
                }
            });
        });

        if !actions.is_empty() {
            self.apply_actions(actions);
            ctx.request_repaint();
        }
    }
}
