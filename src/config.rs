//! Configuration: widget options with their merge rules, and the native
//! window configuration.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color_scheme::Theme;
use crate::error::{ParCoordsError, Result};
use crate::events::EventController;

/// Number of dimensions shown when no skip rule was ever supplied.
pub const DEFAULT_SHOWN_DIMENSIONS: usize = 5;

// ─────────────────────────────────────────────────────────────────────────────
// Draw options
// ─────────────────────────────────────────────────────────────────────────────

/// Line coloring mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawMode {
    /// Single line color, no cluster panel.
    #[default]
    Print,
    /// Lines colored by cluster, with the cluster panel.
    Cluster,
}

impl FromStr for DrawMode {
    type Err = ParCoordsError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "print" => Ok(DrawMode::Print),
            "cluster" => Ok(DrawMode::Cluster),
            other => Err(ParCoordsError::InvalidDrawMode(other.to_string())),
        }
    }
}

/// Optional sub-widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartsVisible {
    pub table: bool,
    pub cluster_table: bool,
    pub hint: bool,
    pub selector: bool,
    pub table_colvis: bool,
}

impl Default for PartsVisible {
    fn default() -> Self {
        Self {
            table: true,
            cluster_table: true,
            hint: true,
            selector: true,
            table_colvis: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DrawOptions {
    pub mode: DrawMode,
    pub parts_visible: PartsVisible,
}

// ─────────────────────────────────────────────────────────────────────────────
// Skip rules
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkipMode {
    /// Only matching dimensions become axes.
    Show,
    /// Matching dimensions are left out.
    Hide,
    /// Every dimension becomes an axis.
    None,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SkipDims {
    pub mode: SkipMode,
    #[serde(default)]
    pub values: Vec<String>,
}

impl SkipDims {
    /// A value matches a dimension when either name contains the other.
    fn matches(&self, dimension: &str) -> bool {
        self.values
            .iter()
            .any(|v| v.contains(dimension) || dimension.contains(v.as_str()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SkipOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dims: Option<SkipDims>,
}

impl SkipOptions {
    /// Show the first `min(5, n)` of `dimensions`.
    pub fn default_for(dimensions: &[String]) -> Self {
        Self {
            dims: Some(SkipDims {
                mode: SkipMode::Show,
                values: dimensions
                    .iter()
                    .take(DEFAULT_SHOWN_DIMENSIONS)
                    .cloned()
                    .collect(),
            }),
        }
    }
}

/// Dimensions drawn as axes, in dataset order.
pub fn graph_dimensions(dimensions: &[String], skip: &SkipOptions) -> Vec<String> {
    dimensions
        .iter()
        .filter(|d| match &skip.dims {
            None => true,
            Some(rule) => match rule.mode {
                SkipMode::None => true,
                SkipMode::Show => rule.matches(d),
                SkipMode::Hide => !rule.matches(d),
            },
        })
        .cloned()
        .collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Options and partial updates
// ─────────────────────────────────────────────────────────────────────────────

/// Effective widget options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Options {
    pub draw: DrawOptions,
    /// `None` until a skip rule is supplied or derived from the first dataset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip: Option<SkipOptions>,
    #[serde(default)]
    pub debug: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartsVisiblePatch {
    pub table: Option<bool>,
    pub cluster_table: Option<bool>,
    pub hint: Option<bool>,
    pub selector: Option<bool>,
    pub table_colvis: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DrawPatch {
    /// Validated on merge so that a bad value is reported as a mode error.
    pub mode: Option<String>,
    pub parts_visible: Option<PartsVisiblePatch>,
}

/// Options as supplied by the caller: every key optional, unknown keys
/// rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OptionsPatch {
    pub draw: Option<DrawPatch>,
    pub skip: Option<SkipOptions>,
    pub debug: Option<bool>,
}

impl Options {
    /// Defaults with `patch` merged on top.
    pub fn from_patch(patch: &OptionsPatch) -> Result<Self> {
        let mut o = Self::default();
        o.merge(patch)?;
        Ok(o)
    }

    /// Merge a partial update:
    /// `draw.mode` and each `draw.parts_visible` flag overwrite individually,
    /// `skip` and `debug` replace the stored value. On error nothing changes.
    pub fn merge(&mut self, patch: &OptionsPatch) -> Result<()> {
        let mode = match patch.draw.as_ref().and_then(|d| d.mode.as_deref()) {
            Some(m) => Some(m.parse::<DrawMode>()?),
            None => None,
        };
        if let Some(mode) = mode {
            self.draw.mode = mode;
        }
        if let Some(p) = patch.draw.as_ref().and_then(|d| d.parts_visible.as_ref()) {
            let pv = &mut self.draw.parts_visible;
            let fields = [
                (&mut pv.table, p.table),
                (&mut pv.cluster_table, p.cluster_table),
                (&mut pv.hint, p.hint),
                (&mut pv.selector, p.selector),
                (&mut pv.table_colvis, p.table_colvis),
            ];
            for (slot, value) in fields {
                if let Some(v) = value {
                    *slot = v;
                }
            }
        }
        if let Some(skip) = &patch.skip {
            self.skip = Some(skip.clone());
        }
        if let Some(debug) = patch.debug {
            self.debug = debug;
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ParCoordsConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Configuration of the native window hosting the widget.
#[derive(Clone)]
pub struct ParCoordsConfig {
    /// Native window title.
    pub title: String,
    /// Optional headline rendered above the chart.
    pub headline: Option<String>,
    /// Optional eframe native-window options.
    pub native_options: Option<eframe::NativeOptions>,
    pub theme: Theme,
    /// Receives hover, selection, brush and redraw notifications.
    pub events: Option<EventController>,
}

impl Default for ParCoordsConfig {
    fn default() -> Self {
        Self {
            title: "Parallel Coordinates".to_string(),
            headline: None,
            native_options: None,
            theme: Theme::default(),
            events: None,
        }
    }
}
