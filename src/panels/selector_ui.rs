//! Dimension selector: which dimensions become axes, and in which order.

use egui::{Id, Ui};
use egui_dnd::dnd;
use egui_phosphor::regular::DOTS_SIX_VERTICAL;

use super::panel_trait::{Panel, PanelState};
use crate::color_scheme::Theme;
use crate::data::session::{Action, ParCoords};

pub struct SelectorPanel {
    state: PanelState,
}

impl Default for SelectorPanel {
    fn default() -> Self {
        Self {
            state: PanelState { visible: true },
        }
    }
}

impl Panel for SelectorPanel {
    fn name(&self) -> &'static str {
        "Dimensions"
    }

    fn state(&self) -> &PanelState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    fn render_panel(&mut self, ui: &mut Ui, pc: &ParCoords, _theme: Theme, actions: &mut Vec<Action>) {
        ui.label("Select the features displayed on the Parallel Coordinates graph:");
        let current = pc.graph_dimensions().to_vec();
        let mut chosen = current.clone();

        ui.horizontal_wrapped(|ui| {
            for d in pc.dataset().dimensions() {
                let mut on = chosen.contains(d);
                if ui.checkbox(&mut on, d).changed() {
                    if on {
                        chosen.push(d.clone());
                    } else {
                        chosen.retain(|c| c != d);
                    }
                }
            }
        });

        ui.add_space(4.0);
        ui.label(egui::RichText::new("Drag to reorder axes").weak().small());
        dnd(ui, Id::new("parcoords_axis_order")).show_vec(&mut chosen, |ui, name, handle, _state| {
            ui.horizontal(|ui| {
                handle.ui(ui, |ui| {
                    ui.label(DOTS_SIX_VERTICAL);
                });
                ui.label(name.as_str());
            });
        });

        if chosen != current {
            actions.push(Action::SetGraphDimensions(chosen));
        }
    }
}
