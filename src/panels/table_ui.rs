//! Data table: one row per dataset row, filtered by the brushes and the
//! search boxes, with sorting, paging and column toggles.

use egui::{Color32, RichText, Sense, Ui};
use egui_phosphor::regular::{CARET_DOWN, CARET_UP, COLUMNS, EXPORT, MAGNIFYING_GLASS};
use egui_table::{HeaderRow as EgHeaderRow, Table, TableDelegate};

use super::panel_trait::{Panel, PanelState};
use crate::color_scheme::Theme;
use crate::data::export::save_table_csv;
use crate::data::format::display_cell;
use crate::data::selection::{PointerAction, PointerEvent, RowTarget};
use crate::data::session::{Action, ParCoords};
use crate::data::table::{SortOrder, PAGE_LENGTHS};

const ROW_HEIGHT: f32 = 22.0;

pub struct TablePanel {
    state: PanelState,
    /// Offer the column visibility menu.
    pub colvis: bool,
    hovered: Option<usize>,
    /// Dataset generation `hovered` refers to.
    generation: u64,
}

impl Default for TablePanel {
    fn default() -> Self {
        Self {
            state: PanelState { visible: true },
            colvis: true,
            hovered: None,
            generation: 0,
        }
    }
}

struct RowsDelegate<'a> {
    pc: &'a ParCoords,
    rows: &'a [usize],
    columns: &'a [usize],
    highlighted: Option<usize>,
    hover_out: &'a mut Option<usize>,
    click_out: &'a mut Option<usize>,
    sort_out: &'a mut Option<usize>,
}

impl TableDelegate for RowsDelegate<'_> {
    fn header_cell_ui(&mut self, ui: &mut Ui, cell: &egui_table::HeaderCellInfo) {
        let Some(&col) = self.columns.get(cell.col_range.start) else {
            return;
        };
        let name = &self.pc.table().headers()[col];
        let marker = match self.pc.table().sort() {
            Some((c, SortOrder::Ascending)) if c == col => format!(" {CARET_UP}"),
            Some((c, SortOrder::Descending)) if c == col => format!(" {CARET_DOWN}"),
            _ => String::new(),
        };
        ui.add_space(4.0);
        let resp = ui.add(
            egui::Label::new(RichText::new(format!("{name}{marker}")).strong())
                .truncate()
                .sense(Sense::click()),
        );
        if resp.on_hover_text("Sort").clicked() {
            *self.sort_out = Some(col);
        }
    }

    fn cell_ui(&mut self, ui: &mut Ui, cell: &egui_table::CellInfo) {
        let Some(&row) = self.rows.get(cell.row_nr as usize) else {
            return;
        };
        let Some(&col) = self.columns.get(cell.col_nr) else {
            return;
        };
        let rect = ui.max_rect();
        if let Some(c) = self.pc.clusters().and_then(|c| c.row_color(row)) {
            ui.painter().rect_filled(rect, 0.0, c.with_alpha(0.2));
        }
        if self.highlighted == Some(row) {
            ui.painter()
                .rect_filled(rect, 0.0, Color32::from_rgba_unmultiplied(128, 128, 128, 70));
        }

        let resp = ui.interact(rect, ui.id().with(("row_cell", row, col)), Sense::click());
        if resp.hovered() {
            *self.hover_out = Some(row);
        }
        if resp.clicked() {
            *self.click_out = Some(row);
        }

        let raw = self.pc.row_index().rows()[row]
            .get(col)
            .map(String::as_str)
            .unwrap_or("");
        ui.add_space(4.0);
        ui.add(egui::Label::new(display_cell(raw)).truncate().selectable(false));
    }
}

impl TablePanel {
    /// Forget the hovered row when the dataset was replaced.
    fn track_generation(&mut self, generation: u64) {
        if generation != self.generation {
            self.hovered = None;
            self.generation = generation;
        }
    }

    fn controls(&self, ui: &mut Ui, pc: &ParCoords, actions: &mut Vec<Action>) {
        let table = pc.table();
        ui.horizontal(|ui| {
            ui.label("Show");
            let mut len = table.page_length();
            egui::ComboBox::from_id_salt("pc_page_length")
                .selected_text(len.to_string())
                .show_ui(ui, |ui| {
                    for l in PAGE_LENGTHS {
                        ui.selectable_value(&mut len, l, l.to_string());
                    }
                });
            if len != table.page_length() {
                actions.push(Action::SetPageLength(len));
            }
            ui.label("entries");

            ui.separator();
            ui.label(MAGNIFYING_GLASS);
            let mut search = table.global_search().to_string();
            if ui
                .add(egui::TextEdit::singleline(&mut search).hint_text("Search").desired_width(160.0))
                .changed()
            {
                actions.push(Action::GlobalSearch(search));
            }

            if self.colvis {
                ui.menu_button(format!("{COLUMNS} Columns"), |ui| {
                    for (c, name) in table.headers().iter().enumerate() {
                        let mut v = table.column_visible(c);
                        if ui.checkbox(&mut v, name).changed() {
                            actions.push(Action::SetColumnVisible { column: c, visible: v });
                        }
                    }
                });
            }

            if ui.button(format!("{EXPORT} CSV")).clicked() {
                if let Some(path) = rfd::FileDialog::new()
                    .set_file_name("parcoords_table.csv")
                    .add_filter("CSV", &["csv"])
                    .save_file()
                {
                    if let Err(e) = save_table_csv(&path, table, pc.row_index().rows()) {
                        log::error!("failed to export table to {}: {e}", path.display());
                    }
                }
            }
        });
    }

    fn column_searches(ui: &mut Ui, pc: &ParCoords, columns: &[usize], actions: &mut Vec<Action>) {
        ui.horizontal_wrapped(|ui| {
            for &c in columns {
                let mut text = pc.table().column_search(c).to_string();
                let hint = format!("Search {}", pc.table().headers()[c]);
                if ui
                    .add(egui::TextEdit::singleline(&mut text).hint_text(hint).desired_width(110.0))
                    .changed()
                {
                    actions.push(Action::ColumnSearch { column: c, text });
                }
            }
        });
    }

    fn pager(ui: &mut Ui, pc: &ParCoords, actions: &mut Vec<Action>) {
        let table = pc.table();
        ui.horizontal(|ui| {
            ui.label(table.info());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let page = table.page();
                let count = table.page_count();
                if ui.add_enabled(page + 1 < count, egui::Button::new("Next")).clicked() {
                    actions.push(Action::SetPage(page + 1));
                }
                ui.label(format!("{} / {}", page + 1, count));
                if ui.add_enabled(page > 0, egui::Button::new("Previous")).clicked() {
                    actions.push(Action::SetPage(page - 1));
                }
            });
        });
    }

    fn pointer(&mut self, pc: &ParCoords, hovered: Option<usize>, clicked: Option<usize>, actions: &mut Vec<Action>) {
        let target = |row: usize| RowTarget::TableRow(pc.row_index().rows()[row].clone());
        if hovered != self.hovered {
            if let Some(prev) = self.hovered.filter(|&p| p < pc.row_index().len()) {
                actions.push(Action::Pointer(PointerEvent::new(PointerAction::HoverOut, target(prev))));
            }
            if let Some(row) = hovered {
                actions.push(Action::Pointer(PointerEvent::new(PointerAction::HoverIn, target(row))));
            }
            self.hovered = hovered;
        }
        if let Some(row) = clicked {
            actions.push(Action::Pointer(PointerEvent::new(PointerAction::Click, target(row))));
        }
    }
}

impl Panel for TablePanel {
    fn name(&self) -> &'static str {
        "Table"
    }

    fn state(&self) -> &PanelState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    fn render_panel(&mut self, ui: &mut Ui, pc: &ParCoords, _theme: Theme, actions: &mut Vec<Action>) {
        self.track_generation(pc.generation());
        self.controls(ui, pc, actions);
        let columns = pc.table().visible_columns();
        Self::column_searches(ui, pc, &columns, actions);
        ui.add_space(4.0);

        let page_rows = pc.table().page_rows().to_vec();
        let mut hovered = None;
        let mut clicked = None;
        let mut sort = None;
        let mut delegate = RowsDelegate {
            pc,
            rows: &page_rows,
            columns: &columns,
            highlighted: pc.highlighted(),
            hover_out: &mut hovered,
            click_out: &mut clicked,
            sort_out: &mut sort,
        };

        let avail_w = ui.available_width();
        let col_w = (avail_w / columns.len().max(1) as f32).max(80.0);
        let height = ROW_HEIGHT * (page_rows.len() as f32 + 1.5);
        let (rect, _resp) = ui.allocate_exact_size(egui::vec2(avail_w, height), Sense::hover());
        let ui_builder = egui::UiBuilder::new()
            .max_rect(rect)
            .layout(egui::Layout::left_to_right(egui::Align::Min));
        let mut table_ui = ui.new_child(ui_builder);
        Table::new()
            .id_salt("parcoords_rows_table")
            .num_rows(page_rows.len() as u64)
            .columns(vec![egui_table::Column::new(col_w); columns.len()])
            .headers(vec![EgHeaderRow::new(24.0)])
            .show(&mut table_ui, &mut delegate);

        if let Some(col) = sort {
            actions.push(Action::ToggleSort(col));
        }
        self.pointer(pc, hovered, clicked, actions);
        Self::pager(ui, pc, actions);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::dataset::Cell;
    use crate::persistence::PlotInput;

    fn session(n: i32) -> ParCoords {
        let rows = (0..n).map(|i| vec![Cell::from(i)]).collect();
        ParCoords::new(PlotInput::new(vec!["i".into()], rows)).unwrap()
    }

    #[test]
    fn hover_from_previous_dataset_is_dropped() {
        let mut pc = session(5);
        let mut panel = TablePanel::default();
        panel.track_generation(pc.generation());

        let mut actions = Vec::new();
        panel.pointer(&pc, Some(4), None, &mut actions);
        assert_eq!(panel.hovered, Some(4));

        let other = (10..15).map(|i: i32| vec![Cell::from(i)]).collect();
        pc.update(PlotInput::new(vec!["i".into()], other)).unwrap();
        panel.track_generation(pc.generation());
        assert_eq!(panel.hovered, None);

        // no HoverOut is sent for the stale row
        actions.clear();
        panel.pointer(&pc, None, None, &mut actions);
        assert!(actions.is_empty());
    }
}
