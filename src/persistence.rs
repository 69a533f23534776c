//! Loading widget inputs from JSON/YAML files and saving options back.
//!
//! An input file mirrors the construction parameters:
//!
//! ```yaml
//! dimensions: [sepal_length, sepal_width, species]
//! rows:
//!   - [5.1, 3.5, setosa]
//!   - [7.0, 3.2, versicolor]
//! clusters: species            # or a list with one key per row
//! color_scheme:                # optional, "#rrggbb" or {r, g, b} in 0..1
//!   setosa: "#e6194b"
//! options:
//!   draw: { mode: cluster }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::{Options, OptionsPatch};
use crate::data::clusters::{ClusterSpec, ColorSchemeInput};
use crate::data::dataset::Cell;
use crate::error::Result;

/// Construction/update parameters of a [`ParCoords`](crate::ParCoords).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlotInput {
    pub dimensions: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clusters: Option<ClusterSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_scheme: Option<ColorSchemeInput>,
    #[serde(default)]
    pub options: OptionsPatch,
}

impl PlotInput {
    pub fn new(dimensions: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self {
            dimensions,
            rows,
            ..Self::default()
        }
    }

    pub fn with_clusters(mut self, clusters: ClusterSpec) -> Self {
        self.clusters = Some(clusters);
        self
    }

    pub fn with_color_scheme(mut self, scheme: ColorSchemeInput) -> Self {
        self.color_scheme = Some(scheme);
        self
    }

    pub fn with_options(mut self, options: OptionsPatch) -> Self {
        self.options = options;
        self
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_yaml_str(s: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(s)?)
    }
}

/// Load an input file; `.json` is parsed as JSON, anything else as YAML.
pub fn load_input(path: &Path) -> Result<PlotInput> {
    let text = std::fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));
    if is_json {
        PlotInput::from_json_str(&text)
    } else {
        PlotInput::from_yaml_str(&text)
    }
}

pub fn options_to_yaml(options: &Options) -> Result<String> {
    Ok(serde_yaml::to_string(options)?)
}

pub fn save_options_yaml(options: &Options, path: &Path) -> Result<()> {
    std::fs::write(path, options_to_yaml(options)?)?;
    Ok(())
}
