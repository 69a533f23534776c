use parcoords::data::axis::{Axes, RangeSelection};
use parcoords::data::filter::compute_visible;
use parcoords::data::dataset::DimensionKind;
use parcoords::{Cell, Dataset};

fn names(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

fn numeric_pairs() -> Dataset {
    Dataset::new(
        names(&["x", "y"]),
        vec![
            vec![Cell::from(1), Cell::from(10)],
            vec![Cell::from(2), Cell::from(20)],
            vec![Cell::from(3), Cell::from(30)],
        ],
    )
    .unwrap()
}

#[test]
fn no_brush_shows_every_row() {
    let ds = numeric_pairs();
    let axes = Axes::build(&ds, &names(&["x", "y"])).unwrap();
    let visible = compute_visible(&ds, &axes.active_ranges());
    assert_eq!(visible.into_iter().collect::<Vec<_>>(), vec![0, 1, 2]);
}

#[test]
fn numeric_brush_keeps_rows_inside() {
    let ds = numeric_pairs();
    let mut axes = Axes::build(&ds, &names(&["x", "y"])).unwrap();
    // raw [1.5, 2.5] on an axis spanning [1, 3]
    assert!(axes.set_brush("x", 0.25, 0.75));
    match axes.plot_space_to_range("x", 0.25, 0.75).unwrap() {
        RangeSelection::Numeric { low, high } => {
            assert!((low - 1.5).abs() < 1e-12);
            assert!((high - 2.5).abs() < 1e-12);
        }
        other => panic!("expected numeric range, got {other:?}"),
    }
    let visible = compute_visible(&ds, &axes.active_ranges());
    assert_eq!(visible.into_iter().collect::<Vec<_>>(), vec![1]);
}

#[test]
fn reversed_drag_is_the_same_brush() {
    let ds = numeric_pairs();
    let mut axes = Axes::build(&ds, &names(&["x", "y"])).unwrap();
    axes.set_brush("x", 0.75, 0.25);
    let visible = compute_visible(&ds, &axes.active_ranges());
    assert_eq!(visible.into_iter().collect::<Vec<_>>(), vec![1]);
}

#[test]
fn full_range_is_identity() {
    let ds = numeric_pairs();
    let mut axes = Axes::build(&ds, &names(&["x", "y"])).unwrap();
    axes.set_brush("y", 0.0, 1.0);
    assert_eq!(compute_visible(&ds, &axes.active_ranges()).len(), 3);
}

#[test]
fn brushes_intersect() {
    let ds = numeric_pairs();
    let mut axes = Axes::build(&ds, &names(&["x", "y"])).unwrap();
    axes.set_brush("x", 0.4, 1.0);
    axes.set_brush("y", 0.0, 0.6);
    let visible = compute_visible(&ds, &axes.active_ranges());
    assert_eq!(visible.into_iter().collect::<Vec<_>>(), vec![1]);
}

#[test]
fn brush_with_no_member_hides_everything() {
    let ds = numeric_pairs();
    let mut axes = Axes::build(&ds, &names(&["x", "y"])).unwrap();
    axes.set_brush("x", 0.1, 0.2);
    assert!(compute_visible(&ds, &axes.active_ranges()).is_empty());
}

#[test]
fn empty_brush_clears_the_axis() {
    let ds = numeric_pairs();
    let mut axes = Axes::build(&ds, &names(&["x", "y"])).unwrap();
    axes.set_brush("x", 0.1, 0.2);
    axes.set_brush("x", 0.5, 0.5);
    assert!(axes.active_ranges().is_empty());
    assert_eq!(compute_visible(&ds, &axes.active_ranges()).len(), 3);
}

#[test]
fn categorical_brush_selects_by_position() {
    let ds = Dataset::new(
        names(&["kind", "n"]),
        vec![
            vec![Cell::from("a"), Cell::from(1)],
            vec![Cell::from("b"), Cell::from(2)],
            vec![Cell::from("a"), Cell::from(3)],
        ],
    )
    .unwrap();
    let mut axes = Axes::build(&ds, &names(&["kind", "n"])).unwrap();
    // "a" sits at the bottom of the axis, "b" at the top
    assert_eq!(axes.value_to_plot_space("kind", &Cell::from("a")), Some(0.0));
    assert_eq!(axes.value_to_plot_space("kind", &Cell::from("b")), Some(1.0));
    axes.set_brush("kind", 0.0, 0.2);
    assert_eq!(
        axes.plot_space_to_range("kind", 0.0, 0.2),
        Some(RangeSelection::Categorical(vec!["a".to_string()]))
    );
    let visible = compute_visible(&ds, &axes.active_ranges());
    assert_eq!(visible.into_iter().collect::<Vec<_>>(), vec![0, 2]);
}

#[test]
fn constant_column_does_not_divide_by_zero() {
    let ds = Dataset::new(
        names(&["c"]),
        vec![vec![Cell::from(4)], vec![Cell::from(4)]],
    )
    .unwrap();
    let mut axes = Axes::build(&ds, &names(&["c"])).unwrap();
    let y = axes.value_to_plot_space("c", &Cell::from(4)).unwrap();
    assert!(y.is_finite());
    axes.set_brush("c", 0.0, 0.1);
    assert_eq!(compute_visible(&ds, &axes.active_ranges()).len(), 2);
}

#[test]
fn unknown_axis_is_rejected() {
    let ds = numeric_pairs();
    assert!(Axes::build(&ds, &names(&["nope"])).is_err());
    let mut axes = Axes::build(&ds, &names(&["x"])).unwrap();
    assert!(!axes.set_brush("y", 0.0, 0.5));
}

#[test]
fn non_finite_values_make_a_column_categorical() {
    for bad in [Cell::from("NaN"), Cell::from("inf"), Cell::Number(f64::NAN), Cell::Number(f64::INFINITY)] {
        let ds = Dataset::new(
            names(&["v"]),
            vec![vec![bad.clone()], vec![Cell::from("1")], vec![Cell::from("2")]],
        )
        .unwrap();
        assert_eq!(ds.kind(0), Some(DimensionKind::Categorical), "{bad:?}");

        let mut axes = Axes::build(&ds, &names(&["v"])).unwrap();
        let y = axes.value_to_plot_space("v", &bad).unwrap();
        assert!(y.is_finite());

        // a brush over the whole axis keeps every row
        axes.set_brush("v", 0.0, 1.0);
        assert_eq!(compute_visible(&ds, &axes.active_ranges()).len(), 3, "{bad:?}");
    }
}
