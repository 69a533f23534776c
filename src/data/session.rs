//! One widget instance: dataset, axes, table, selection and clusters, kept in
//! sync through explicit actions.
//!
//! Data flows one way per action: a brush change updates the axis, the
//! visible set is recomputed, the table runs its filtering pass against
//! [`ParCoords::row_visible`], and the redraw notification drives exactly one
//! chart-line sync in [`ParCoords::on_table_drawn`]. The sync never triggers
//! another redraw.

use std::collections::{BTreeSet, HashSet};
use std::time::Instant;

use crate::config::{graph_dimensions, DrawMode, Options, SkipOptions};
use crate::data::axis::{Axes, RangeSelection};
use crate::data::clusters::{cluster_stats, ClusterAssignment, ClusterStats, ClusterSummary};
use crate::data::dataset::Dataset;
use crate::data::filter::compute_visible;
use crate::data::row_index::{RowIndex, TableRowData};
use crate::data::selection::{
    PointerAction, PointerEvent, RowTarget, SelectionCoordinator, SelectionEffect, SelectionState,
};
use crate::data::table::{Paging, TableDrawn, TableView};
use crate::data::timing::SearchTimings;
use crate::error::Result;
use crate::events::{EventController, EventKind, ParCoordsEvent};
use crate::persistence::PlotInput;

/// Explicit UI messages handled by [`ParCoords::apply`].
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Pointer(PointerEvent),
    /// Drag on an axis between two plot-space positions.
    Brush {
        dimension: String,
        lo: f64,
        hi: f64,
    },
    ClearBrush(String),
    ClearAllBrushes,
    SetGraphDimensions(Vec<String>),
    ColumnSearch {
        column: usize,
        text: String,
    },
    GlobalSearch(String),
    ToggleSort(usize),
    SetPageLength(usize),
    SetPage(usize),
    SetColumnVisible {
        column: usize,
        visible: bool,
    },
    /// Cluster shown in the statistics panel, `None` to close it.
    ChooseCluster(Option<String>),
}

/// Everything derived from one input, built before anything is replaced so
/// that a failing update leaves the session untouched.
struct Prepared {
    options: Options,
    dataset: Dataset,
    graph_dimensions: Vec<String>,
    axes: Axes,
    clusters: Option<ClusterAssignment>,
    row_index: RowIndex,
}

fn prepare(mut options: Options, input: &PlotInput) -> Result<Prepared> {
    options.merge(&input.options)?;
    let dataset = Dataset::new(input.dimensions.clone(), input.rows.clone())?;
    if options.skip.is_none() {
        options.skip = Some(SkipOptions::default_for(dataset.dimensions()));
    }
    let skip = options.skip.clone().unwrap_or_default();
    let graph_dimensions = graph_dimensions(dataset.dimensions(), &skip);
    let axes = Axes::build(&dataset, &graph_dimensions)?;
    let clusters = match options.draw.mode {
        DrawMode::Cluster => Some(ClusterAssignment::resolve(
            &dataset,
            input.clusters.as_ref(),
            input.color_scheme.as_ref(),
        )?),
        DrawMode::Print => None,
    };
    let colors = clusters.as_ref().map(|c| c.row_hex_colors());
    let row_index = RowIndex::new(dataset.ids(), colors.as_deref());
    Ok(Prepared {
        options,
        dataset,
        graph_dimensions,
        axes,
        clusters,
        row_index,
    })
}

pub struct ParCoords {
    options: Options,
    dataset: Dataset,
    graph_dimensions: Vec<String>,
    axes: Axes,
    row_index: RowIndex,
    /// Rows passing every brush.
    visible: BTreeSet<usize>,
    /// Tuples of `visible`, for the table predicate.
    visible_ids: HashSet<TableRowData>,
    table: TableView,
    /// Chart line `j` is drawn in the foreground.
    displayed: Vec<bool>,
    selection: SelectionCoordinator,
    clusters: Option<ClusterAssignment>,
    chosen_cluster: Option<String>,
    timings: SearchTimings,
    events: Option<EventController>,
    created: Instant,
    /// Bumped every time a dataset is installed.
    generation: u64,
}

impl ParCoords {
    pub fn new(input: PlotInput) -> Result<Self> {
        let created = Instant::now();
        let p = prepare(Options::default(), &input)?;
        let mut pc = Self {
            options: Options::default(),
            dataset: Dataset::default(),
            graph_dimensions: Vec::new(),
            axes: Axes::default(),
            row_index: RowIndex::default(),
            visible: BTreeSet::new(),
            visible_ids: HashSet::new(),
            table: TableView::new(Vec::new()),
            displayed: Vec::new(),
            selection: SelectionCoordinator::new(),
            clusters: None,
            chosen_cluster: None,
            timings: SearchTimings::default(),
            events: None,
            created,
            generation: 0,
        };
        pc.install(p);
        if pc.options.debug {
            log::info!(
                "Parallel Coordinates created in {}ms",
                created.elapsed().as_millis()
            );
        }
        Ok(pc)
    }

    /// Attach an event sink; later notifications go there.
    pub fn with_events(mut self, events: EventController) -> Self {
        self.events = Some(events);
        self
    }

    pub fn set_events(&mut self, events: Option<EventController>) {
        self.events = events;
    }

    /// Replace the dataset and merge `input.options` into the stored options.
    /// Brushes, selection and searches are reset. On error the session is
    /// unchanged.
    pub fn update(&mut self, input: PlotInput) -> Result<()> {
        let start = Instant::now();
        let p = prepare(self.options.clone(), &input)?;
        self.install(p);
        if self.options.debug {
            log::info!(
                "Parallel Coordinates updated in {}ms ({}ms from creation)",
                start.elapsed().as_millis(),
                self.created.elapsed().as_millis()
            );
        }
        self.emit(
            ParCoordsEvent::new(EventKind::DATA_RELOADED).with_visible_count(self.displayed_count()),
        );
        Ok(())
    }

    fn install(&mut self, p: Prepared) {
        self.options = p.options;
        self.dataset = p.dataset;
        self.graph_dimensions = p.graph_dimensions;
        self.axes = p.axes;
        self.clusters = p.clusters;
        self.row_index = p.row_index;
        self.table.reset_columns(self.dataset.dimensions().to_vec());
        self.displayed = vec![true; self.row_index.len()];
        self.selection.reset();
        self.chosen_cluster = None;
        self.timings = SearchTimings::default();
        self.generation += 1;
        log::debug!(
            "loaded {} rows x {} dimensions, {} axes, mode {:?}",
            self.dataset.row_count(),
            self.dataset.dimensions().len(),
            self.graph_dimensions.len(),
            self.options.draw.mode
        );
        self.refilter();
    }

    // ── Filtering loop ──────────────────────────────────────────────────

    /// Recompute the visible set, then redraw the table from its first page.
    fn refilter(&mut self) {
        self.visible = compute_visible(&self.dataset, &self.axes.active_ranges());
        let rows = self.row_index.rows();
        self.visible_ids = self.visible.iter().map(|&i| rows[i].clone()).collect();
        self.redraw_table(Paging::Reset);
    }

    fn redraw_table(&mut self, paging: Paging) {
        let ids = &self.visible_ids;
        let drawn = self
            .table
            .redraw(self.row_index.rows(), |r| ids.contains(r), paging);
        self.on_table_drawn(&drawn);
    }

    /// Table predicate: whether a rendered row passes every brush.
    pub fn row_visible(&self, table_row: &[String]) -> bool {
        self.visible_ids.contains(table_row)
    }

    /// Post-redraw sync: a chart line is displayed iff its tuple passed the
    /// table's filtering pass.
    pub fn on_table_drawn(&mut self, drawn: &TableDrawn) {
        let passed: HashSet<&[String]> = drawn.passed.iter().map(Vec::as_slice).collect();
        let displayed: Vec<bool> = self
            .row_index
            .rows()
            .iter()
            .map(|r| passed.contains(r.as_slice()))
            .collect();
        let changed = displayed != self.displayed;
        self.displayed = displayed;
        let count = self.displayed_count();
        let mut kinds = EventKind::TABLE_REDRAWN;
        if changed {
            kinds |= EventKind::VISIBILITY_CHANGED;
        }
        self.emit(ParCoordsEvent::new(kinds).with_visible_count(count));
    }

    /// Brush `dimension` between plot-space `lo` and `hi`; an empty brush
    /// clears it. Returns `false` for an unknown dimension.
    pub fn brush(&mut self, dimension: &str, lo: f64, hi: f64) -> bool {
        if !self.axes.set_brush(dimension, lo, hi) {
            log::debug!("brush on unknown axis '{dimension}' ignored");
            return false;
        }
        self.refilter();
        let range = self
            .axes
            .get(dimension)
            .and_then(|a| a.brush.map(|b| a.scale.plot_to_range(b)))
            .and_then(|r| match r {
                RangeSelection::Numeric { low, high } => Some((low, high)),
                RangeSelection::Categorical(_) => None,
            });
        self.emit(
            ParCoordsEvent::new(EventKind::BRUSH_CHANGED)
                .with_dimension(dimension)
                .with_range(range)
                .with_visible_count(self.visible.len()),
        );
        true
    }

    pub fn clear_brush(&mut self, dimension: &str) -> bool {
        if !self.axes.clear_brush(dimension) {
            return false;
        }
        self.refilter();
        self.emit(
            ParCoordsEvent::new(EventKind::BRUSH_CHANGED)
                .with_dimension(dimension)
                .with_visible_count(self.visible.len()),
        );
        true
    }

    pub fn clear_all_brushes(&mut self) {
        self.axes.clear_all_brushes();
        self.refilter();
        self.emit(
            ParCoordsEvent::new(EventKind::BRUSH_CHANGED).with_visible_count(self.visible.len()),
        );
    }

    /// Change the axes shown. Unknown names are an error; brushes are
    /// dropped.
    pub fn set_graph_dimensions(&mut self, names: Vec<String>) -> Result<()> {
        let axes = Axes::build(&self.dataset, &names)?;
        self.axes = axes;
        self.graph_dimensions = names;
        self.refilter();
        self.emit(ParCoordsEvent::new(EventKind::DIMENSIONS_CHANGED));
        Ok(())
    }

    // ── Pointer ─────────────────────────────────────────────────────────

    fn handle_pointer(&mut self, event: &PointerEvent) {
        let start = Instant::now();
        let before = self.selection.state();
        let effects = self.selection.handle(event, &self.row_index);
        let mut revealed = false;
        for effect in &effects {
            if let SelectionEffect::RevealInTable(row) = effect {
                if self.options.draw.parts_visible.table {
                    revealed |= self.table.reveal(*row);
                }
            }
        }
        if self.options.debug
            && revealed
            && event.action == PointerAction::HoverIn
            && matches!(event.target, RowTarget::ChartLine(_))
        {
            self.timings.record(start.elapsed());
        }

        let after = self.selection.state();
        match (before, after) {
            (SelectionState::Idle, SelectionState::Locked(r)) => {
                self.emit(ParCoordsEvent::new(EventKind::SELECTION_LOCKED).with_row(r))
            }
            (SelectionState::Locked(r), SelectionState::Idle) => {
                self.emit(ParCoordsEvent::new(EventKind::SELECTION_CLEARED).with_row(r))
            }
            _ => {
                for effect in effects {
                    match effect {
                        SelectionEffect::Highlight(r) | SelectionEffect::Unhighlight(r) => {
                            self.emit(ParCoordsEvent::new(EventKind::HOVER).with_row(r))
                        }
                        SelectionEffect::RevealInTable(_) => {}
                    }
                }
            }
        }
    }

    /// Dispatch one UI message.
    pub fn apply(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Pointer(ev) => self.handle_pointer(&ev),
            Action::Brush { dimension, lo, hi } => {
                self.brush(&dimension, lo, hi);
            }
            Action::ClearBrush(dimension) => {
                self.clear_brush(&dimension);
            }
            Action::ClearAllBrushes => self.clear_all_brushes(),
            Action::SetGraphDimensions(names) => self.set_graph_dimensions(names)?,
            Action::ColumnSearch { column, text } => {
                self.table.set_column_search(column, text);
                self.redraw_table(Paging::Reset);
            }
            Action::GlobalSearch(text) => {
                self.table.set_global_search(text);
                self.redraw_table(Paging::Reset);
            }
            Action::ToggleSort(column) => {
                self.table.toggle_sort(column);
                self.redraw_table(Paging::Reset);
            }
            Action::SetPageLength(len) => {
                self.table.set_page_length(len);
                self.redraw_table(Paging::Hold);
            }
            Action::SetPage(page) => self.table.set_page(page),
            Action::SetColumnVisible { column, visible } => {
                self.table.set_column_visible(column, visible);
                self.redraw_table(Paging::Hold);
            }
            Action::ChooseCluster(key) => {
                if let Some(k) = &key {
                    self.emit(ParCoordsEvent::new(EventKind::CLUSTER_CHOSEN).with_cluster(k.clone()));
                }
                self.chosen_cluster = key;
            }
        }
        Ok(())
    }

    fn emit(&self, event: ParCoordsEvent) {
        if let Some(ev) = &self.events {
            ev.emit(event);
        }
    }

    // ── Accessors ───────────────────────────────────────────────────────

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn graph_dimensions(&self) -> &[String] {
        &self.graph_dimensions
    }

    pub fn axes(&self) -> &Axes {
        &self.axes
    }

    pub fn row_index(&self) -> &RowIndex {
        &self.row_index
    }

    pub fn table(&self) -> &TableView {
        &self.table
    }

    /// Rows passing every brush.
    pub fn visible_rows(&self) -> &BTreeSet<usize> {
        &self.visible
    }

    pub fn is_displayed(&self, line: usize) -> bool {
        self.displayed.get(line).copied().unwrap_or(false)
    }

    pub fn displayed(&self) -> &[bool] {
        &self.displayed
    }

    pub fn displayed_count(&self) -> usize {
        self.displayed.iter().filter(|d| **d).count()
    }

    pub fn selection_state(&self) -> SelectionState {
        self.selection.state()
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.selection.highlighted()
    }

    pub fn clusters(&self) -> Option<&ClusterAssignment> {
        self.clusters.as_ref()
    }

    pub fn cluster_summaries(&self) -> Vec<ClusterSummary> {
        self.clusters
            .as_ref()
            .map(ClusterAssignment::summaries)
            .unwrap_or_default()
    }

    pub fn chosen_cluster(&self) -> Option<&str> {
        self.chosen_cluster.as_deref()
    }

    pub fn cluster_stats(&self, key: &str) -> Option<ClusterStats> {
        self.clusters
            .as_ref()
            .and_then(|c| cluster_stats(&self.dataset, c, key))
    }

    pub fn timings(&self) -> &SearchTimings {
        &self.timings
    }

    /// Changes whenever the dataset is replaced; panels use it to drop row
    /// indices from the previous data.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
