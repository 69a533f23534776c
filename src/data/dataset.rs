//! Tabular input: dimension names, rows of mixed numeric/string cells, and the
//! numeric/categorical classification derived from them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ParCoordsError, Result};

/// One cell of the dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Number(f64),
    Text(String),
}

impl Cell {
    /// Finite numeric value of the cell, if it is a number or a string
    /// holding one. `NaN` and infinities count as text.
    pub fn as_number(&self) -> Option<f64> {
        let v = match self {
            Cell::Number(v) => Some(*v),
            Cell::Text(s) => {
                let t = s.trim();
                if t.is_empty() {
                    None
                } else {
                    t.parse::<f64>().ok()
                }
            }
        };
        v.filter(|v| v.is_finite())
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Number(v) => write!(f, "{}", v),
            Cell::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for Cell {
    fn from(v: f64) -> Self {
        Cell::Number(v)
    }
}

impl From<i32> for Cell {
    fn from(v: i32) -> Self {
        Cell::Number(v as f64)
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

/// How a dimension is scaled on its axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionKind {
    /// Every cell parses as a number.
    Numeric,
    /// Anything else.
    Categorical,
}

/// Immutable dataset for one rendering session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    dimensions: Vec<String>,
    rows: Vec<Vec<Cell>>,
    kinds: Vec<DimensionKind>,
}

impl Dataset {
    /// Validate row lengths and classify every dimension.
    pub fn new(dimensions: Vec<String>, rows: Vec<Vec<Cell>>) -> Result<Self> {
        for (i, row) in rows.iter().enumerate() {
            if row.len() != dimensions.len() {
                return Err(ParCoordsError::RaggedRow {
                    row: i,
                    found: row.len(),
                    expected: dimensions.len(),
                });
            }
        }
        let kinds = (0..dimensions.len())
            .map(|col| {
                if rows.iter().all(|r| r[col].as_number().is_some()) {
                    DimensionKind::Numeric
                } else {
                    DimensionKind::Categorical
                }
            })
            .collect();
        Ok(Self {
            dimensions,
            rows,
            kinds,
        })
    }

    pub fn dimensions(&self) -> &[String] {
        &self.dimensions
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn kinds(&self) -> &[DimensionKind] {
        &self.kinds
    }

    pub fn kind(&self, column: usize) -> Option<DimensionKind> {
        self.kinds.get(column).copied()
    }

    pub fn dimension_index(&self, name: &str) -> Option<usize> {
        self.dimensions.iter().position(|d| d == name)
    }

    /// Column `column` top to bottom.
    pub fn column(&self, column: usize) -> impl Iterator<Item = &Cell> + '_ {
        self.rows.iter().map(move |r| &r[column])
    }

    /// Names of the numeric dimensions, in dataset order.
    pub fn numeric_dimensions(&self) -> Vec<&str> {
        self.dimensions_of(DimensionKind::Numeric)
    }

    /// Names of the categorical dimensions, in dataset order.
    pub fn categorical_dimensions(&self) -> Vec<&str> {
        self.dimensions_of(DimensionKind::Categorical)
    }

    fn dimensions_of(&self, kind: DimensionKind) -> Vec<&str> {
        self.dimensions
            .iter()
            .zip(self.kinds.iter())
            .filter(|(_, k)| **k == kind)
            .map(|(d, _)| d.as_str())
            .collect()
    }

    /// Every row rendered as strings, the reference identity of a row.
    pub fn ids(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect()
    }
}
