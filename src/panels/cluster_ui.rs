//! Cluster panel: one badge per cluster and the statistics of the chosen one.

use egui::{Color32, RichText, Sense, Stroke, StrokeKind, Ui};

use super::panel_trait::{Panel, PanelState};
use crate::color_scheme::Theme;
use crate::data::clusters::{ClusterStats, ClusterSummary};
use crate::data::format::format_number;
use crate::data::session::{Action, ParCoords};

const BADGE: f32 = 40.0;

pub struct ClusterPanel {
    state: PanelState,
}

impl Default for ClusterPanel {
    fn default() -> Self {
        Self {
            state: PanelState { visible: true },
        }
    }
}

fn badge(ui: &mut Ui, s: &ClusterSummary, selected: bool) -> egui::Response {
    let (rect, resp) = ui.allocate_exact_size(egui::vec2(BADGE, BADGE * 0.6), Sense::click());
    let painter = ui.painter();
    painter.rect_filled(rect, 3.0, s.color.to_color32());
    if s.inset > 0.0 {
        painter.rect_stroke(
            rect,
            3.0,
            Stroke::new(s.inset, Color32::WHITE),
            StrokeKind::Inside,
        );
    }
    if selected {
        painter.rect_stroke(
            rect.expand(2.0),
            3.0,
            Stroke::new(2.0, ui.visuals().strong_text_color()),
            StrokeKind::Outside,
        );
    }
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        &s.key,
        egui::FontId::proportional(12.0),
        Color32::BLACK,
    );
    resp.on_hover_text(format!("Cluster {}.\nElement count: {}.", s.key, s.count))
}

fn stats_table(ui: &mut Ui, stats: &ClusterStats) {
    ui.label(RichText::new(format!("Number of elements: {}", stats.count)).small());
    egui::Grid::new("cluster_stats_grid")
        .striped(true)
        .num_columns(6)
        .show(ui, |ui| {
            for h in ["", "Min", "Mean", "Max", "Median", "Deviation"] {
                ui.strong(h);
            }
            ui.end_row();
            for n in &stats.numeric {
                ui.label(&n.dimension);
                ui.label(format_number(n.min));
                ui.label(format_number(n.mean));
                ui.label(format_number(n.max));
                ui.label(format_number(n.median));
                ui.label(n.deviation.map(format_number).unwrap_or_else(|| "-".into()));
                ui.end_row();
            }
        });
    for c in &stats.categorical {
        egui::CollapsingHeader::new(format!("{} ({} values)", c.dimension, c.counts.len()))
            .id_salt(("cluster_cat", &stats.key, &c.dimension))
            .show(ui, |ui| {
                egui::Grid::new(("cluster_cat_grid", &c.dimension)).show(ui, |ui| {
                    for (value, count) in &c.counts {
                        ui.label(value);
                        ui.label(count.to_string());
                        ui.end_row();
                    }
                });
            });
    }
}

impl Panel for ClusterPanel {
    fn name(&self) -> &'static str {
        "Clusters"
    }

    fn state(&self) -> &PanelState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    fn render_panel(&mut self, ui: &mut Ui, pc: &ParCoords, _theme: Theme, actions: &mut Vec<Action>) {
        let summaries = pc.cluster_summaries();
        if summaries.is_empty() {
            return;
        }
        let chosen = pc.chosen_cluster();
        ui.label("Choose Cluster");
        ui.horizontal_wrapped(|ui| {
            for s in &summaries {
                let selected = chosen == Some(s.key.as_str());
                if badge(ui, s, selected).clicked() {
                    let next = if selected { None } else { Some(s.key.clone()) };
                    actions.push(Action::ChooseCluster(next));
                }
            }
        });

        if let Some(stats) = chosen.and_then(|k| pc.cluster_stats(k)) {
            ui.add_space(6.0);
            ui.heading(format!("Cluster {} statistics", stats.key));
            stats_table(ui, &stats);
        }
    }
}
