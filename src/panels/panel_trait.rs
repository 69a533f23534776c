use egui::Ui;

use crate::color_scheme::Theme;
use crate::data::session::{Action, ParCoords};

#[derive(Debug, Clone, Copy, Default)]
pub struct PanelState {
    pub visible: bool,
}

/// A sub-widget of the plot. Panels read the session and report user input
/// as [`Action`]s; the app applies them after the frame's panels have drawn.
pub trait Panel {
    fn name(&self) -> &'static str;
    fn state(&self) -> &PanelState;
    fn state_mut(&mut self) -> &mut PanelState;

    fn render_panel(&mut self, ui: &mut Ui, pc: &ParCoords, theme: Theme, actions: &mut Vec<Action>);
}
