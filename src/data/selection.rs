//! Selection coordinator: the single locked row and the transient hover
//! highlight, shared by the chart and the table.

use crate::data::row_index::{RowIndex, TableRowData};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    Idle,
    /// One row pinned by a click.
    Locked(usize),
}

/// Where a pointer event happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowTarget {
    /// A chart line, by dataset row index.
    ChartLine(usize),
    /// A table row, by its rendered tuple.
    TableRow(TableRowData),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerAction {
    HoverIn,
    HoverOut,
    Click,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointerEvent {
    pub action: PointerAction,
    pub target: RowTarget,
}

impl PointerEvent {
    pub fn new(action: PointerAction, target: RowTarget) -> Self {
        Self { action, target }
    }
}

/// Visual consequence of a handled event, applied to both the chart line and
/// its table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEffect {
    Highlight(usize),
    Unhighlight(usize),
    /// Bring the row into view in the table.
    RevealInTable(usize),
}

#[derive(Debug, Clone, Default)]
pub struct SelectionCoordinator {
    state: SelectionState,
    hovered: Option<usize>,
}

impl SelectionCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    /// Row currently drawn bold: the locked row, else the hovered one.
    pub fn highlighted(&self) -> Option<usize> {
        match self.state {
            SelectionState::Locked(r) => Some(r),
            SelectionState::Idle => self.hovered,
        }
    }

    /// Back to `Idle` with nothing highlighted.
    pub fn reset(&mut self) {
        self.state = SelectionState::Idle;
        self.hovered = None;
    }

    /// Advance the state machine. Table targets are resolved through `index`;
    /// an unresolved target yields no effects.
    pub fn handle(&mut self, event: &PointerEvent, index: &RowIndex) -> Vec<SelectionEffect> {
        let (row, from_chart) = match &event.target {
            RowTarget::ChartLine(i) if *i < index.len() => (*i, true),
            RowTarget::ChartLine(i) => {
                log::debug!("pointer event on unknown chart line {i}");
                return Vec::new();
            }
            RowTarget::TableRow(data) => match index.chart_index_for_table_row(data) {
                Some(i) => (i, false),
                None => {
                    log::debug!("no chart line matches table row {data:?}");
                    return Vec::new();
                }
            },
        };

        let mut effects = Vec::new();
        match (self.state, event.action) {
            (SelectionState::Idle, PointerAction::HoverIn) => {
                if let Some(prev) = self.hovered.replace(row) {
                    if prev != row {
                        effects.push(SelectionEffect::Unhighlight(prev));
                    }
                }
                effects.push(SelectionEffect::Highlight(row));
                if from_chart {
                    effects.push(SelectionEffect::RevealInTable(row));
                }
            }
            (SelectionState::Idle, PointerAction::HoverOut) => {
                if self.hovered == Some(row) {
                    self.hovered = None;
                    effects.push(SelectionEffect::Unhighlight(row));
                }
            }
            (SelectionState::Idle, PointerAction::Click) => {
                if let Some(prev) = self.hovered.take() {
                    if prev != row {
                        effects.push(SelectionEffect::Unhighlight(prev));
                    }
                }
                self.state = SelectionState::Locked(row);
                effects.push(SelectionEffect::Highlight(row));
                if from_chart {
                    effects.push(SelectionEffect::RevealInTable(row));
                }
            }
            (SelectionState::Locked(locked), PointerAction::Click) if locked == row => {
                self.state = SelectionState::Idle;
                effects.push(SelectionEffect::Unhighlight(row));
            }
            // Hover is suppressed while locked; clicking another row does nothing.
            (SelectionState::Locked(_), _) => {}
        }
        effects
    }
}
