//! Cluster mode: per-row cluster keys, their colors, and per-cluster
//! statistics.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use statrs::statistics::{Data, OrderStatistics, Statistics};

use crate::color_scheme::{palette_color, ColorSpec, Rgb, CLUSTER_PALETTE};
use crate::data::dataset::{Cell, Dataset, DimensionKind};
use crate::data::format::cmp_numeric_aware;
use crate::error::{ParCoordsError, Result};

/// Where cluster keys come from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClusterSpec {
    /// Name of the dimension holding the keys.
    Column(String),
    /// One key per row.
    Keys(Vec<Cell>),
}

/// Supplied key → color mapping.
pub type ColorSchemeInput = BTreeMap<String, ColorSpec>;

/// Inset of the badge for the smallest cluster; the largest gets none.
pub const BADGE_MAX_INSET: f32 = 11.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ClusterAssignment {
    /// Key of every row, stringified.
    row_keys: Vec<String>,
    /// Distinct keys in display order.
    keys: Vec<String>,
    colors: BTreeMap<String, Rgb>,
}

impl ClusterAssignment {
    /// Resolve keys and colors. Without a cluster source the second dimension
    /// is used.
    pub fn resolve(
        dataset: &Dataset,
        spec: Option<&ClusterSpec>,
        scheme: Option<&ColorSchemeInput>,
    ) -> Result<Self> {
        let row_keys: Vec<String> = match spec {
            Some(ClusterSpec::Keys(keys)) => {
                if keys.len() != dataset.row_count() {
                    return Err(ParCoordsError::ClusterLengthMismatch {
                        found: keys.len(),
                        expected: dataset.row_count(),
                    });
                }
                keys.iter().map(|k| k.to_string()).collect()
            }
            Some(ClusterSpec::Column(name)) => Self::column_keys(dataset, name)?,
            None => {
                let name = dataset
                    .dimensions()
                    .get(1)
                    .ok_or_else(|| ParCoordsError::UnknownDimension("<second dimension>".into()))?;
                Self::column_keys(dataset, name)?
            }
        };

        let mut keys: Vec<String> = Vec::new();
        for k in &row_keys {
            if !keys.contains(k) {
                keys.push(k.clone());
            }
        }
        keys.sort_by(|a, b| cmp_numeric_aware(a, b));

        let colors = match scheme.filter(|s| !s.is_empty()) {
            Some(scheme) => keys
                .iter()
                .map(|k| {
                    let spec = scheme
                        .get(k)
                        .ok_or_else(|| ParCoordsError::MissingClusterColor(k.clone()))?;
                    Ok((k.clone(), spec.to_rgb()?))
                })
                .collect::<Result<BTreeMap<_, _>>>()?,
            None => {
                if keys.len() > CLUSTER_PALETTE.len() {
                    log::warn!(
                        "{} clusters but only {} palette colors, colors will repeat",
                        keys.len(),
                        CLUSTER_PALETTE.len()
                    );
                }
                keys.iter()
                    .enumerate()
                    .map(|(i, k)| (k.clone(), palette_color(i)))
                    .collect()
            }
        };

        Ok(Self {
            row_keys,
            keys,
            colors,
        })
    }

    fn column_keys(dataset: &Dataset, name: &str) -> Result<Vec<String>> {
        let col = dataset
            .dimension_index(name)
            .ok_or_else(|| ParCoordsError::UnknownDimension(name.to_string()))?;
        Ok(dataset.column(col).map(|c| c.to_string()).collect())
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn row_key(&self, row: usize) -> Option<&str> {
        self.row_keys.get(row).map(String::as_str)
    }

    pub fn color_of(&self, key: &str) -> Option<Rgb> {
        self.colors.get(key).copied()
    }

    pub fn row_color(&self, row: usize) -> Option<Rgb> {
        self.row_key(row).and_then(|k| self.color_of(k))
    }

    /// `#rrggbb` of every row, appended to the table tuples.
    pub fn row_hex_colors(&self) -> Vec<String> {
        self.row_keys
            .iter()
            .map(|k| self.color_of(k).map(|c| c.hex()).unwrap_or_default())
            .collect()
    }

    /// Rows belonging to `key`.
    pub fn members(&self, key: &str) -> Vec<usize> {
        self.row_keys
            .iter()
            .enumerate()
            .filter(|(_, k)| k.as_str() == key)
            .map(|(i, _)| i)
            .collect()
    }

    /// One entry per key with its color, size and badge inset.
    pub fn summaries(&self) -> Vec<ClusterSummary> {
        let counts: Vec<usize> = self
            .keys
            .iter()
            .map(|k| self.row_keys.iter().filter(|r| *r == k).count())
            .collect();
        let min = counts.iter().copied().min().unwrap_or(0);
        let max = counts.iter().copied().max().unwrap_or(0);
        self.keys
            .iter()
            .zip(counts)
            .map(|(k, count)| ClusterSummary {
                key: k.clone(),
                color: self.color_of(k).unwrap_or(palette_color(0)),
                count,
                inset: badge_inset(count, min, max),
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClusterSummary {
    pub key: String,
    pub color: Rgb,
    pub count: usize,
    pub inset: f32,
}

/// Square-root scale of `count` from `[min, max]` onto
/// `[BADGE_MAX_INSET, 0]`. A single cluster size maps to the maximum inset.
pub fn badge_inset(count: usize, min: usize, max: usize) -> f32 {
    let (lo, hi) = ((min as f64).sqrt(), (max as f64).sqrt());
    if hi <= lo {
        return BADGE_MAX_INSET;
    }
    let t = (((count as f64).sqrt() - lo) / (hi - lo)) as f32;
    BADGE_MAX_INSET * (1.0 - t)
}

#[derive(Debug, Clone, PartialEq)]
pub struct NumericStats {
    pub dimension: String,
    pub min: f64,
    pub mean: f64,
    pub max: f64,
    pub median: f64,
    /// Sample standard deviation, absent for a single element.
    pub deviation: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryCounts {
    pub dimension: String,
    /// Distinct values with their counts, most frequent first.
    pub counts: Vec<(String, usize)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClusterStats {
    pub key: String,
    pub count: usize,
    pub numeric: Vec<NumericStats>,
    pub categorical: Vec<CategoryCounts>,
}

/// Statistics of one cluster over every dimension. `None` for a key without
/// members.
pub fn cluster_stats(
    dataset: &Dataset,
    assignment: &ClusterAssignment,
    key: &str,
) -> Option<ClusterStats> {
    let members = assignment.members(key);
    if members.is_empty() {
        return None;
    }

    let mut numeric = Vec::new();
    let mut categorical = Vec::new();
    for (col, name) in dataset.dimensions().iter().enumerate() {
        let cells = members.iter().map(|&r| &dataset.rows()[r][col]);
        match dataset.kind(col) {
            Some(DimensionKind::Numeric) => {
                let values: Vec<f64> = cells.map(|c| c.as_number().unwrap_or(0.0)).collect();
                let mut data = Data::new(values.clone());
                numeric.push(NumericStats {
                    dimension: name.clone(),
                    min: Statistics::min(values.iter()),
                    mean: Statistics::mean(values.iter()),
                    max: Statistics::max(values.iter()),
                    median: OrderStatistics::median(&mut data),
                    deviation: (values.len() > 1).then(|| Statistics::std_dev(values.iter())),
                });
            }
            _ => {
                let mut counts: Vec<(String, usize)> = Vec::new();
                for c in cells {
                    let s = c.to_string();
                    match counts.iter_mut().find(|(v, _)| *v == s) {
                        Some((_, n)) => *n += 1,
                        None => counts.push((s, 1)),
                    }
                }
                counts.sort_by(|a, b| b.1.cmp(&a.1));
                categorical.push(CategoryCounts {
                    dimension: name.clone(),
                    counts,
                });
            }
        }
    }

    Some(ClusterStats {
        key: key.to_string(),
        count: members.len(),
        numeric,
        categorical,
    })
}
