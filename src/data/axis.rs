//! Axis/range model: one scale per graph dimension mapping raw values into
//! plot space, plus the active brush (if any) on that axis.
//!
//! Plot space is the unit interval `[PLOT_LOW, PLOT_HIGH]`, bottom to top.
//! Numeric dimensions map linearly from the observed `[min, max]`;
//! categorical dimensions place their distinct values (first-seen order) at
//! evenly spaced positions. A numeric axis with a single distinct value maps
//! it to `PLOT_LOW`; a categorical axis with a single category centers it.

use crate::data::dataset::{Cell, Dataset, DimensionKind};
use crate::error::{ParCoordsError, Result};

pub const PLOT_LOW: f64 = 0.0;
pub const PLOT_HIGH: f64 = 1.0;

/// A closed interval in plot space, `low <= high`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotRange {
    pub low: f64,
    pub high: f64,
}

impl PlotRange {
    /// Build a range from two brush ends given in any order.
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    /// The whole plot-space interval.
    pub fn full() -> Self {
        Self {
            low: PLOT_LOW,
            high: PLOT_HIGH,
        }
    }

    pub fn contains(&self, y: f64) -> bool {
        self.low <= y && y <= self.high
    }

    /// A brush with zero extent counts as no brush.
    pub fn is_empty(&self) -> bool {
        self.low == self.high
    }
}

/// A plot-space range translated back into data terms.
#[derive(Debug, Clone, PartialEq)]
pub enum RangeSelection {
    /// Raw-value interval of a numeric dimension.
    Numeric { low: f64, high: f64 },
    /// Categories whose position falls inside the range.
    Categorical(Vec<String>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum AxisScale {
    Linear { min: f64, max: f64 },
    Point { domain: Vec<String> },
}

impl AxisScale {
    /// Build the scale for `column` of `dataset`.
    pub fn for_column(dataset: &Dataset, column: usize) -> Self {
        match dataset.kind(column) {
            Some(DimensionKind::Numeric) => {
                let mut min = f64::INFINITY;
                let mut max = f64::NEG_INFINITY;
                for v in dataset.column(column).filter_map(Cell::as_number) {
                    min = min.min(v);
                    max = max.max(v);
                }
                if min > max {
                    min = 0.0;
                    max = 0.0;
                }
                AxisScale::Linear { min, max }
            }
            _ => {
                let mut domain: Vec<String> = Vec::new();
                for c in dataset.column(column) {
                    let s = c.to_string();
                    if !domain.contains(&s) {
                        domain.push(s);
                    }
                }
                AxisScale::Point { domain }
            }
        }
    }

    /// Plot-space position of a cell, `None` for a category outside the domain
    /// or a non-numeric cell on a linear axis.
    pub fn to_plot(&self, cell: &Cell) -> Option<f64> {
        match self {
            AxisScale::Linear { .. } => cell.as_number().map(|v| self.value_to_plot(v)),
            AxisScale::Point { domain } => {
                let s = cell.to_string();
                domain
                    .iter()
                    .position(|d| *d == s)
                    .map(|i| Self::point_position(i, domain.len()))
            }
        }
    }

    /// Linear mapping of a raw number. On a point scale the number is matched
    /// against the category names.
    pub fn value_to_plot(&self, value: f64) -> f64 {
        match self {
            AxisScale::Linear { min, max } => {
                let span = max - min;
                if span == 0.0 {
                    PLOT_LOW
                } else {
                    PLOT_LOW + (value - min) / span * (PLOT_HIGH - PLOT_LOW)
                }
            }
            AxisScale::Point { .. } => self.to_plot(&Cell::Number(value)).unwrap_or(PLOT_LOW),
        }
    }

    fn point_position(index: usize, count: usize) -> f64 {
        if count <= 1 {
            (PLOT_LOW + PLOT_HIGH) / 2.0
        } else {
            PLOT_LOW + index as f64 / (count - 1) as f64 * (PLOT_HIGH - PLOT_LOW)
        }
    }

    /// Translate a plot-space brush into raw values or matching categories.
    pub fn plot_to_range(&self, range: PlotRange) -> RangeSelection {
        match self {
            AxisScale::Linear { min, max } => {
                let span = max - min;
                if span == 0.0 {
                    RangeSelection::Numeric {
                        low: *min,
                        high: *max,
                    }
                } else {
                    let unit = PLOT_HIGH - PLOT_LOW;
                    RangeSelection::Numeric {
                        low: min + (range.low - PLOT_LOW) / unit * span,
                        high: min + (range.high - PLOT_LOW) / unit * span,
                    }
                }
            }
            AxisScale::Point { domain } => RangeSelection::Categorical(
                domain
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| range.contains(Self::point_position(*i, domain.len())))
                    .map(|(_, d)| d.clone())
                    .collect(),
            ),
        }
    }

    /// Tick positions and labels for drawing the axis.
    pub fn ticks(&self) -> Vec<(f64, String)> {
        match self {
            AxisScale::Linear { min, max } => {
                if max == min {
                    return vec![(PLOT_LOW, crate::data::format::format_number(*min))];
                }
                (0..=4)
                    .map(|i| {
                        let t = i as f64 / 4.0;
                        let v = min + t * (max - min);
                        (self.value_to_plot(v), crate::data::format::format_number(v))
                    })
                    .collect()
            }
            AxisScale::Point { domain } => domain
                .iter()
                .enumerate()
                .map(|(i, d)| (Self::point_position(i, domain.len()), d.clone()))
                .collect(),
        }
    }
}

/// One vertical axis of the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub name: String,
    /// Column of the dimension in the dataset.
    pub column: usize,
    pub scale: AxisScale,
    pub brush: Option<PlotRange>,
}

/// A brush that currently constrains visibility.
#[derive(Debug, Clone, Copy)]
pub struct ActiveRange<'a> {
    pub column: usize,
    pub scale: &'a AxisScale,
    pub range: PlotRange,
}

/// All axes of the chart, left to right.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Axes {
    axes: Vec<Axis>,
}

impl Axes {
    /// Build scales for `graph_dimensions` (in that order). No brushes.
    pub fn build(dataset: &Dataset, graph_dimensions: &[String]) -> Result<Self> {
        let axes = graph_dimensions
            .iter()
            .map(|name| {
                let column = dataset
                    .dimension_index(name)
                    .ok_or_else(|| ParCoordsError::UnknownDimension(name.clone()))?;
                Ok(Axis {
                    name: name.clone(),
                    column,
                    scale: AxisScale::for_column(dataset, column),
                    brush: None,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { axes })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Axis> {
        self.axes.iter()
    }

    pub fn len(&self) -> usize {
        self.axes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }

    pub fn get(&self, dimension: &str) -> Option<&Axis> {
        self.axes.iter().find(|a| a.name == dimension)
    }

    fn get_mut(&mut self, dimension: &str) -> Option<&mut Axis> {
        self.axes.iter_mut().find(|a| a.name == dimension)
    }

    /// Names in axis order.
    pub fn names(&self) -> Vec<String> {
        self.axes.iter().map(|a| a.name.clone()).collect()
    }

    pub fn value_to_plot_space(&self, dimension: &str, raw: &Cell) -> Option<f64> {
        self.get(dimension).and_then(|a| a.scale.to_plot(raw))
    }

    pub fn plot_space_to_range(&self, dimension: &str, lo: f64, hi: f64) -> Option<RangeSelection> {
        self.get(dimension)
            .map(|a| a.scale.plot_to_range(PlotRange::new(lo, hi)))
    }

    /// Set the brush on `dimension` from a drag between `lo` and `hi`. An
    /// empty drag clears it. Returns whether the axis exists.
    pub fn set_brush(&mut self, dimension: &str, lo: f64, hi: f64) -> bool {
        match self.get_mut(dimension) {
            Some(axis) => {
                let range = PlotRange::new(lo, hi);
                axis.brush = if range.is_empty() { None } else { Some(range) };
                true
            }
            None => false,
        }
    }

    /// Remove the brush on `dimension`. Returns whether one was active.
    pub fn clear_brush(&mut self, dimension: &str) -> bool {
        self.get_mut(dimension)
            .and_then(|a| a.brush.take())
            .is_some()
    }

    pub fn clear_all_brushes(&mut self) {
        for a in self.axes.iter_mut() {
            a.brush = None;
        }
    }

    pub fn active_ranges(&self) -> Vec<ActiveRange<'_>> {
        self.axes
            .iter()
            .filter_map(|a| {
                a.brush.map(|range| ActiveRange {
                    column: a.column,
                    scale: &a.scale,
                    range,
                })
            })
            .collect()
    }
}
