use parcoords::config::{graph_dimensions, DrawPatch, PartsVisiblePatch, SkipDims, SkipOptions};
use parcoords::{DrawMode, Options, OptionsPatch, ParCoordsError, SkipMode};

fn dims(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

#[test]
fn defaults() {
    let o = Options::default();
    assert_eq!(o.draw.mode, DrawMode::Print);
    assert!(o.draw.parts_visible.table);
    assert!(o.draw.parts_visible.cluster_table);
    assert!(o.draw.parts_visible.hint);
    assert!(o.draw.parts_visible.selector);
    assert!(o.draw.parts_visible.table_colvis);
    assert!(o.skip.is_none());
    assert!(!o.debug);
}

#[test]
fn parts_visible_flags_merge_individually() {
    let mut o = Options::default();
    let patch: OptionsPatch =
        serde_json::from_str(r#"{"draw": {"parts_visible": {"hint": false}}}"#).unwrap();
    o.merge(&patch).unwrap();
    assert!(!o.draw.parts_visible.hint);
    assert!(o.draw.parts_visible.table);

    let patch: OptionsPatch =
        serde_json::from_str(r#"{"draw": {"mode": "cluster", "parts_visible": {"table": false}}}"#)
            .unwrap();
    o.merge(&patch).unwrap();
    assert_eq!(o.draw.mode, DrawMode::Cluster);
    assert!(!o.draw.parts_visible.table);
    // earlier flag survives the second merge
    assert!(!o.draw.parts_visible.hint);
}

#[test]
fn skip_and_debug_are_replaced() {
    let mut o = Options::from_patch(&OptionsPatch {
        skip: Some(SkipOptions {
            dims: Some(SkipDims {
                mode: SkipMode::Hide,
                values: dims(&["a", "b"]),
            }),
        }),
        debug: Some(true),
        ..OptionsPatch::default()
    })
    .unwrap();
    assert!(o.debug);

    o.merge(&OptionsPatch {
        skip: Some(SkipOptions {
            dims: Some(SkipDims {
                mode: SkipMode::Show,
                values: dims(&["c"]),
            }),
        }),
        ..OptionsPatch::default()
    })
    .unwrap();
    let skip = o.skip.unwrap().dims.unwrap();
    assert_eq!(skip.mode, SkipMode::Show);
    assert_eq!(skip.values, dims(&["c"]));
    assert!(o.debug);
}

#[test]
fn invalid_mode_is_rejected_and_nothing_changes() {
    let mut o = Options::default();
    let patch = OptionsPatch {
        draw: Some(DrawPatch {
            mode: Some("scatter".into()),
            parts_visible: Some(PartsVisiblePatch {
                table: Some(false),
                ..PartsVisiblePatch::default()
            }),
        }),
        debug: Some(true),
        ..OptionsPatch::default()
    };
    let err = o.merge(&patch).unwrap_err();
    assert!(matches!(err, ParCoordsError::InvalidDrawMode(m) if m == "scatter"));
    assert_eq!(o, Options::default());
}

#[test]
fn unknown_keys_are_rejected() {
    assert!(serde_json::from_str::<OptionsPatch>(r#"{"colour": 1}"#).is_err());
    assert!(serde_json::from_str::<OptionsPatch>(r#"{"draw": {"style": "x"}}"#).is_err());
    assert!(serde_json::from_str::<OptionsPatch>(
        r#"{"draw": {"parts_visible": {"legend": true}}}"#
    )
    .is_err());
}

#[test]
fn skip_rules_pick_graph_dimensions() {
    let all = dims(&["name", "economy (mpg)", "cylinders", "power (hp)"]);

    let show = SkipOptions {
        dims: Some(SkipDims {
            mode: SkipMode::Show,
            values: dims(&["economy", "power (hp)"]),
        }),
    };
    assert_eq!(graph_dimensions(&all, &show), dims(&["economy (mpg)", "power (hp)"]));

    let hide = SkipOptions {
        dims: Some(SkipDims {
            mode: SkipMode::Hide,
            values: dims(&["name"]),
        }),
    };
    assert_eq!(
        graph_dimensions(&all, &hide),
        dims(&["economy (mpg)", "cylinders", "power (hp)"])
    );

    let none = SkipOptions {
        dims: Some(SkipDims {
            mode: SkipMode::None,
            values: dims(&["name"]),
        }),
    };
    assert_eq!(graph_dimensions(&all, &none), all);
    assert_eq!(graph_dimensions(&all, &SkipOptions::default()), all);
}

#[test]
fn default_skip_shows_the_first_five() {
    let all = dims(&["a1", "b2", "c3", "d4", "e5", "f6", "g7"]);
    let skip = SkipOptions::default_for(&all);
    assert_eq!(graph_dimensions(&all, &skip), dims(&["a1", "b2", "c3", "d4", "e5"]));

    let few = dims(&["p", "q"]);
    assert_eq!(graph_dimensions(&few, &SkipOptions::default_for(&few)), few);
}
