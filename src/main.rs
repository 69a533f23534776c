//! `parcoords [INPUT]`: show a JSON/YAML input file, or a built-in demo
//! dataset when no path is given.

use std::path::PathBuf;

use parcoords::config::DrawPatch;
use parcoords::{
    run_parcoords, Cell, ClusterSpec, ColorSchemeInput, ColorSpec, OptionsPatch, ParCoords,
    ParCoordsConfig, PlotInput,
};

/// Three synthetic flower species measured on four features.
fn demo_input() -> PlotInput {
    let dimensions = ["species", "sepal_length", "sepal_width", "petal_length", "petal_width", "site"]
        .map(String::from)
        .to_vec();
    let species = [
        ("setosa", [5.0, 3.4, 1.5, 0.25]),
        ("versicolor", [5.9, 2.8, 4.3, 1.3]),
        ("virginica", [6.6, 3.0, 5.5, 2.0]),
    ];
    let scheme: ColorSchemeInput = [("setosa", "#e41a1c"), ("versicolor", "#377eb8"), ("virginica", "#4daf4a")]
        .into_iter()
        .map(|(k, c)| (k.to_string(), ColorSpec::Hex(c.into())))
        .collect();
    let sites = ["north", "south", "east"];
    let mut rows = Vec::new();
    for (s, (name, base)) in species.iter().enumerate() {
        for i in 0..30usize {
            // Cheap deterministic jitter in [-0.5, 0.5).
            let j = |k: usize| (((i * 7 + k * 13 + s * 5) % 11) as f64 / 10.0) - 0.5;
            let mut row: Vec<Cell> = vec![Cell::from(*name)];
            for (k, b) in base.iter().enumerate() {
                let v = b + j(k) * b * 0.15;
                row.push(Cell::Number((v * 10.0).round() / 10.0));
            }
            row.push(Cell::from(sites[(i + s) % sites.len()]));
            rows.push(row);
        }
    }
    PlotInput::new(dimensions, rows)
        .with_clusters(ClusterSpec::Column("species".into()))
        .with_color_scheme(scheme)
        .with_options(OptionsPatch {
            draw: Some(DrawPatch {
                mode: Some("cluster".into()),
                parts_visible: None,
            }),
            ..OptionsPatch::default()
        })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let input = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => {
            log::info!("loading {}", path.display());
            parcoords::persistence::load_input(&path)?
        }
        None => demo_input(),
    };
    let pc = ParCoords::new(input)?;

    let cfg = ParCoordsConfig {
        headline: Some("Parallel Coordinates".into()),
        ..ParCoordsConfig::default()
    };
    run_parcoords(pc, cfg)?;
    Ok(())
}
