//! Parallel-coordinates chart drawn with egui_plot.
//!
//! Axis `i` sits at plot x = `i`, plot y is the normalized axis position.
//! Dragging vertically on an axis brushes it, a click on an axis clears its
//! brush, and the pointer over a line produces hover and click events.

use egui::{Align2, Color32, Pos2, RichText, Ui};
use egui_plot::{Line, Plot, PlotPoint, PlotTransform, Text, VLine};

use super::panel_trait::{Panel, PanelState};
use crate::color_scheme::{Theme, DEFAULT_LINE};
use crate::data::axis::{PLOT_HIGH, PLOT_LOW};
use crate::data::session::{Action, ParCoords};
use crate::data::selection::{PointerAction, PointerEvent, RowTarget};

/// Horizontal distance (plot units) from an axis that still grabs it.
const AXIS_GRAB: f64 = 0.12;
/// Pixel distance from a line that counts as hovering it.
const HOVER_PX: f32 = 4.0;
const LINE_ALPHA: f32 = 0.4;

pub const HINT: &str = "Use the Left Mouse Button to select a curve and the corresponding line in the table.\n\
Hover over the lines with mouse to see the row in the table.";

pub struct ChartPanel {
    state: PanelState,
    pub show_hint: bool,
    /// Axis being brushed and the plot y where the drag started.
    drag: Option<(usize, f64)>,
    hovered: Option<usize>,
    /// Dataset generation `drag` and `hovered` refer to.
    generation: u64,
}

impl Default for ChartPanel {
    fn default() -> Self {
        Self {
            state: PanelState { visible: true },
            show_hint: true,
            drag: None,
            hovered: None,
            generation: 0,
        }
    }
}

fn polyline(pc: &ParCoords, row: usize) -> Option<Vec<[f64; 2]>> {
    let cells = pc.dataset().rows().get(row)?;
    pc.axes()
        .iter()
        .enumerate()
        .map(|(i, axis)| {
            let y = axis.scale.to_plot(cells.get(axis.column)?)?;
            Some([i as f64, y])
        })
        .collect()
}

fn segment_distance(p: Pos2, a: Pos2, b: Pos2) -> f32 {
    let ab = b - a;
    let len2 = ab.length_sq();
    if len2 == 0.0 {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len2).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

/// Displayed line closest to `pos`, if within [`HOVER_PX`].
fn line_at(pc: &ParCoords, transform: &PlotTransform, pos: Pos2) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for row in 0..pc.dataset().row_count() {
        if !pc.is_displayed(row) {
            continue;
        }
        let Some(pts) = polyline(pc, row) else { continue };
        let screen: Vec<Pos2> = pts
            .iter()
            .map(|p| transform.position_from_point(&PlotPoint::new(p[0], p[1])))
            .collect();
        let d = screen
            .windows(2)
            .map(|w| segment_distance(pos, w[0], w[1]))
            .fold(f32::INFINITY, f32::min);
        if d <= HOVER_PX && best.map_or(true, |(_, bd)| d < bd) {
            best = Some((row, d));
        }
    }
    best.map(|(r, _)| r)
}

impl ChartPanel {
    fn line_color(pc: &ParCoords, row: usize) -> egui::Color32 {
        pc.clusters()
            .and_then(|c| c.row_color(row))
            .unwrap_or(DEFAULT_LINE)
            .with_alpha(LINE_ALPHA)
    }

    fn axis_at(pc: &ParCoords, x: f64) -> Option<usize> {
        let i = x.round();
        if i < 0.0 || (x - i).abs() > AXIS_GRAB {
            return None;
        }
        let i = i as usize;
        (i < pc.axes().len()).then_some(i)
    }

    fn draw(&self, plot_ui: &mut egui_plot::PlotUi, pc: &ParCoords, theme: Theme, drag_to: Option<f64>) {
        let n = pc.axes().len();
        plot_ui.set_plot_bounds_x(-0.5..=(n.max(1) as f64 - 0.5));
        plot_ui.set_plot_bounds_y((PLOT_LOW - 0.05)..=(PLOT_HIGH + 0.15));

        let background = theme.background_line();
        for row in 0..pc.dataset().row_count() {
            if let Some(pts) = polyline(pc, row) {
                plot_ui.line(Line::new("", pts).color(background).width(1.0));
            }
        }
        let highlighted = pc.highlighted();
        for row in 0..pc.dataset().row_count() {
            if !pc.is_displayed(row) || Some(row) == highlighted {
                continue;
            }
            if let Some(pts) = polyline(pc, row) {
                plot_ui.line(Line::new("", pts).color(Self::line_color(pc, row)).width(1.0));
            }
        }
        if let Some(row) = highlighted {
            if let Some(pts) = polyline(pc, row) {
                let c = pc
                    .clusters()
                    .and_then(|c| c.row_color(row))
                    .unwrap_or(DEFAULT_LINE)
                    .to_color32();
                plot_ui.line(Line::new("", pts).color(c).width(3.0));
            }
        }

        let axis_color = if theme == Theme::Dark {
            Color32::from_gray(200)
        } else {
            Color32::from_gray(40)
        };
        for (i, axis) in pc.axes().iter().enumerate() {
            let x = i as f64;
            plot_ui.vline(VLine::new("", x).color(axis_color).width(1.0));
            for (y, label) in axis.scale.ticks() {
                plot_ui.text(
                    Text::new("", PlotPoint::new(x - 0.03, y), RichText::new(label).small())
                        .color(axis_color)
                        .anchor(Align2::RIGHT_CENTER),
                );
            }
            let title_y = if i % 2 == 0 { PLOT_HIGH + 0.05 } else { PLOT_HIGH + 0.1 };
            plot_ui.text(
                Text::new("", PlotPoint::new(x, title_y), RichText::new(&axis.name).strong())
                    .color(axis_color)
                    .anchor(Align2::CENTER_BOTTOM),
            );

            let extent = match (self.drag, drag_to) {
                (Some((a, start)), Some(to)) if a == i => Some((start.min(to), start.max(to))),
                _ => axis.brush.map(|b| (b.low, b.high)),
            };
            if let Some((lo, hi)) = extent {
                plot_ui.line(
                    Line::new("", vec![[x, lo], [x, hi]])
                        .color(Color32::from_rgba_unmultiplied(128, 128, 128, 90))
                        .width(14.0),
                );
            }
        }
    }
}

impl Panel for ChartPanel {
    fn name(&self) -> &'static str {
        "Chart"
    }

    fn state(&self) -> &PanelState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    fn render_panel(&mut self, ui: &mut Ui, pc: &ParCoords, theme: Theme, actions: &mut Vec<Action>) {
        if pc.generation() != self.generation {
            self.drag = None;
            self.hovered = None;
            self.generation = pc.generation();
        }
        let height = (ui.available_height() * 0.55).max(260.0);
        let plot = Plot::new("parcoords_chart")
            .height(height)
            .allow_scroll(false)
            .allow_zoom(false)
            .allow_boxed_zoom(false)
            .allow_drag(false)
            .allow_double_click_reset(false)
            .show_axes(false)
            .show_grid(false)
            .show_x(false)
            .show_y(false);

        let plot_resp = plot.show(ui, |plot_ui| {
            let to = plot_ui.pointer_coordinate().map(|p| p.y.clamp(PLOT_LOW, PLOT_HIGH));
            self.draw(plot_ui, pc, theme, to);
        });
        self.handle_input(&plot_resp.response, &plot_resp.transform, pc, actions);

        if self.show_hint {
            ui.label(RichText::new(HINT).weak().small());
        }
    }
}

impl ChartPanel {
    fn handle_input(
        &mut self,
        resp: &egui::Response,
        transform: &PlotTransform,
        pc: &ParCoords,
        actions: &mut Vec<Action>,
    ) {
        let names = pc.axes().names();

        if resp.drag_started() {
            if let Some(pos) = resp.interact_pointer_pos() {
                let v = transform.value_from_position(pos);
                self.drag = Self::axis_at(pc, v.x).map(|a| (a, v.y.clamp(PLOT_LOW, PLOT_HIGH)));
            }
        }
        if resp.drag_stopped() {
            if let (Some((axis, start)), Some(pos)) = (self.drag.take(), resp.interact_pointer_pos()) {
                let end = transform.value_from_position(pos).y.clamp(PLOT_LOW, PLOT_HIGH);
                if let Some(name) = names.get(axis) {
                    actions.push(Action::Brush {
                        dimension: name.clone(),
                        lo: start,
                        hi: end,
                    });
                }
            }
            return;
        }
        if self.drag.is_some() {
            return;
        }

        let hover_pos = resp.hover_pos();
        let on_axis = hover_pos
            .map(|p| transform.value_from_position(p))
            .and_then(|v| Self::axis_at(pc, v.x));

        if resp.clicked() {
            if let (Some(axis), Some(pos)) = (on_axis, hover_pos) {
                let y = transform.value_from_position(pos).y;
                if let Some(name) = names.get(axis) {
                    actions.push(Action::Brush {
                        dimension: name.clone(),
                        lo: y,
                        hi: y,
                    });
                }
                return;
            }
        }

        let now = match hover_pos {
            Some(p) if on_axis.is_none() => line_at(pc, transform, p),
            _ => None,
        };
        if now != self.hovered {
            if let Some(prev) = self.hovered {
                actions.push(Action::Pointer(PointerEvent::new(
                    PointerAction::HoverOut,
                    RowTarget::ChartLine(prev),
                )));
            }
            if let Some(row) = now {
                actions.push(Action::Pointer(PointerEvent::new(
                    PointerAction::HoverIn,
                    RowTarget::ChartLine(row),
                )));
            }
            self.hovered = now;
        }
        if resp.clicked() {
            if let Some(row) = now {
                actions.push(Action::Pointer(PointerEvent::new(
                    PointerAction::Click,
                    RowTarget::ChartLine(row),
                )));
            }
        }
    }
}
