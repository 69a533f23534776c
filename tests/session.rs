use parcoords::config::DrawPatch;
use parcoords::data::table::SortOrder;
use parcoords::events::EventFilter;
use parcoords::{
    Action, Cell, ClusterSpec, EventController, EventKind, OptionsPatch, ParCoords, PlotInput,
    PointerAction, PointerEvent, RowTarget, SelectionState,
};

fn cars() -> PlotInput {
    let dims = ["name", "cyl", "mpg", "hp", "year", "origin", "weight"]
        .map(String::from)
        .to_vec();
    let rows = vec![
        vec![Cell::from("a"), Cell::from(4), Cell::from(30), Cell::from(70), Cell::from(80), Cell::from("eu"), Cell::from(2000)],
        vec![Cell::from("b"), Cell::from(6), Cell::from(20), Cell::from(110), Cell::from(75), Cell::from("us"), Cell::from(3000)],
        vec![Cell::from("c"), Cell::from(8), Cell::from(10), Cell::from(150), Cell::from(70), Cell::from("us"), Cell::from(4000)],
    ];
    PlotInput::new(dims, rows)
}

fn cluster_mode() -> OptionsPatch {
    OptionsPatch {
        draw: Some(DrawPatch {
            mode: Some("cluster".into()),
            parts_visible: None,
        }),
        ..OptionsPatch::default()
    }
}

#[test]
fn first_five_dimensions_become_axes() {
    let pc = ParCoords::new(cars()).unwrap();
    assert_eq!(pc.graph_dimensions(), &["name", "cyl", "mpg", "hp", "year"]);
    assert!(pc.options().skip.is_some());
    assert_eq!(pc.displayed_count(), 3);
    assert!(pc.clusters().is_none());
    assert_eq!(pc.table().headers().len(), 7);
}

#[test]
fn brushing_syncs_table_and_chart() {
    let mut pc = ParCoords::new(cars()).unwrap();
    // mpg spans [10, 30]; keep 15..=35
    assert!(pc.brush("mpg", 0.25, 1.0));
    assert_eq!(pc.visible_rows().iter().copied().collect::<Vec<_>>(), vec![0, 1]);
    assert_eq!(pc.table().filtered(), &[0, 1]);
    assert_eq!(pc.displayed(), &[true, true, false]);

    assert!(pc.clear_brush("mpg"));
    assert_eq!(pc.displayed_count(), 3);
    assert!(!pc.brush("weight", 0.0, 0.5));
}

#[test]
fn table_search_also_hides_chart_lines() {
    let mut pc = ParCoords::new(cars()).unwrap();
    pc.apply(Action::ColumnSearch { column: 5, text: "US".into() }).unwrap();
    assert_eq!(pc.displayed(), &[false, true, true]);
    // the brush set is untouched by the search
    assert_eq!(pc.visible_rows().len(), 3);
    pc.apply(Action::ColumnSearch { column: 5, text: String::new() }).unwrap();
    assert_eq!(pc.displayed_count(), 3);
}

#[test]
fn sort_does_not_change_displayed_lines() {
    let mut pc = ParCoords::new(cars()).unwrap();
    pc.brush("cyl", 0.4, 1.0);
    pc.apply(Action::ToggleSort(3)).unwrap();
    pc.apply(Action::ToggleSort(3)).unwrap();
    assert_eq!(pc.table().sort(), Some((3, SortOrder::Descending)));
    assert_eq!(pc.table().filtered(), &[2, 1]);
    assert_eq!(pc.displayed(), &[false, true, true]);
}

#[test]
fn update_is_idempotent_and_keeps_skip() {
    let mut pc = ParCoords::new(cars()).unwrap();
    let before = pc.graph_dimensions().to_vec();
    pc.brush("mpg", 0.5, 1.0);
    pc.update(cars()).unwrap();
    let once = (pc.graph_dimensions().to_vec(), pc.displayed().to_vec(), pc.options().clone());
    pc.update(cars()).unwrap();
    let twice = (pc.graph_dimensions().to_vec(), pc.displayed().to_vec(), pc.options().clone());
    assert_eq!(once, twice);
    assert_eq!(once.0, before);
    // brushes are reset by an update
    assert_eq!(pc.displayed_count(), 3);
}

#[test]
fn failed_update_leaves_session_untouched() {
    let mut pc = ParCoords::new(cars()).unwrap();
    pc.brush("mpg", 0.5, 1.0);
    let bad = cars().with_options(OptionsPatch {
        draw: Some(DrawPatch {
            mode: Some("bogus".into()),
            parts_visible: None,
        }),
        ..OptionsPatch::default()
    });
    assert!(pc.update(bad).is_err());

    let mut ragged = cars();
    ragged.rows[1].pop();
    assert!(pc.update(ragged).is_err());

    assert_eq!(pc.displayed(), &[true, true, false]);
    assert_eq!(pc.axes().get("mpg").and_then(|a| a.brush).map(|b| b.low), Some(0.5));
    assert_eq!(pc.dataset().row_count(), 3);
}

#[test]
fn cluster_mode_colors_rows_and_offers_stats() {
    let input = cars()
        .with_clusters(ClusterSpec::Column("origin".into()))
        .with_options(cluster_mode());
    let mut pc = ParCoords::new(input).unwrap();
    let clusters = pc.clusters().unwrap();
    assert_eq!(clusters.keys(), &["eu".to_string(), "us".to_string()]);
    // the cluster color is part of the row tuple
    assert_eq!(pc.row_index().rows()[0].len(), 8);
    assert!(pc.row_index().rows()[0][7].starts_with('#'));

    let summaries = pc.cluster_summaries();
    assert_eq!(summaries.len(), 2);

    pc.apply(Action::ChooseCluster(Some("us".into()))).unwrap();
    assert_eq!(pc.chosen_cluster(), Some("us"));
    let stats = pc.cluster_stats("us").unwrap();
    assert_eq!(stats.count, 2);
    let mpg = stats.numeric.iter().find(|n| n.dimension == "mpg").unwrap();
    assert_eq!(mpg.mean, 15.0);
}

#[test]
fn pointer_lock_reveals_row_in_table() {
    let rows: Vec<Vec<Cell>> = (0..30).map(|i| vec![Cell::from(i), Cell::from(i * 2)]).collect();
    let mut pc = ParCoords::new(PlotInput::new(vec!["i".into(), "j".into()], rows)).unwrap();
    assert_eq!(pc.table().page(), 0);

    pc.apply(Action::Pointer(PointerEvent::new(PointerAction::Click, RowTarget::ChartLine(25))))
        .unwrap();
    assert_eq!(pc.selection_state(), SelectionState::Locked(25));
    assert_eq!(pc.table().page(), 2);
    assert_eq!(pc.highlighted(), Some(25));

    // hover from the table is ignored while locked
    let row3 = pc.row_index().rows()[3].clone();
    pc.apply(Action::Pointer(PointerEvent::new(PointerAction::HoverIn, RowTarget::TableRow(row3))))
        .unwrap();
    assert_eq!(pc.highlighted(), Some(25));

    let row25 = pc.row_index().rows()[25].clone();
    pc.apply(Action::Pointer(PointerEvent::new(PointerAction::Click, RowTarget::TableRow(row25))))
        .unwrap();
    assert_eq!(pc.selection_state(), SelectionState::Idle);
}

#[test]
fn changing_axes_drops_brushes() {
    let mut pc = ParCoords::new(cars()).unwrap();
    pc.brush("mpg", 0.5, 1.0);
    pc.apply(Action::SetGraphDimensions(vec!["weight".into(), "mpg".into()])).unwrap();
    assert_eq!(pc.axes().names(), vec!["weight".to_string(), "mpg".to_string()]);
    assert_eq!(pc.displayed_count(), 3);
    assert!(pc
        .apply(Action::SetGraphDimensions(vec!["nope".into()]))
        .is_err());
    assert_eq!(pc.graph_dimensions(), &["weight", "mpg"]);
}

#[test]
fn events_follow_the_filtering_loop() {
    let events = EventController::new();
    let brushes = events.subscribe(EventFilter::only(EventKind::BRUSH_CHANGED));
    let redraws = events.subscribe(EventFilter::only(EventKind::VISIBILITY_CHANGED));
    let mut pc = ParCoords::new(cars()).unwrap().with_events(events.clone());

    pc.brush("mpg", 0.0, 0.25);
    let ev = brushes.try_recv().unwrap();
    assert_eq!(ev.dimension.as_deref(), Some("mpg"));
    let (lo, hi) = ev.range.unwrap();
    assert!((lo - 10.0).abs() < 1e-9 && (hi - 15.0).abs() < 1e-9);
    assert_eq!(ev.visible_count, Some(1));

    let vis = redraws.try_recv().unwrap();
    assert!(vis.kinds.contains(EventKind::TABLE_REDRAWN));
    assert_eq!(vis.visible_count, Some(1));

    // same brush again: table redraws but nothing changes visibility
    pc.brush("mpg", 0.0, 0.25);
    assert!(brushes.try_recv().is_ok());
    assert!(redraws.try_recv().is_err());
}

#[test]
fn debug_mode_times_chart_hover_lookups() {
    let input = cars().with_options(OptionsPatch {
        debug: Some(true),
        ..OptionsPatch::default()
    });
    let mut pc = ParCoords::new(input).unwrap();
    assert_eq!(pc.timings().count, 0);
    pc.apply(Action::Pointer(PointerEvent::new(PointerAction::HoverIn, RowTarget::ChartLine(1))))
        .unwrap();
    pc.apply(Action::Pointer(PointerEvent::new(PointerAction::HoverOut, RowTarget::ChartLine(1))))
        .unwrap();
    assert_eq!(pc.timings().count, 1);
    assert!(pc.timings().average_ms() >= 0.0);
}

#[test]
fn locked_row_survives_filtering_and_update_releases_it() {
    let mut pc = ParCoords::new(cars()).unwrap();
    pc.apply(Action::Pointer(PointerEvent::new(PointerAction::Click, RowTarget::ChartLine(0))))
        .unwrap();
    assert_eq!(pc.selection_state(), SelectionState::Locked(0));

    // mpg 20 only: row 0 (mpg 30) is brushed out but stays locked
    pc.brush("mpg", 0.4, 0.6);
    assert_eq!(pc.visible_rows().iter().copied().collect::<Vec<_>>(), vec![1]);
    assert_eq!(pc.displayed(), &[false, true, false]);
    assert_eq!(pc.selection_state(), SelectionState::Locked(0));
    assert_eq!(pc.highlighted(), Some(0));

    pc.update(cars()).unwrap();
    assert_eq!(pc.selection_state(), SelectionState::Idle);
    assert_eq!(pc.highlighted(), None);
    assert_eq!(pc.displayed_count(), 3);
}

#[test]
fn generation_tracks_installed_datasets() {
    let mut pc = ParCoords::new(cars()).unwrap();
    let first = pc.generation();
    pc.brush("mpg", 0.0, 0.5);
    assert_eq!(pc.generation(), first);
    pc.update(cars()).unwrap();
    assert_eq!(pc.generation(), first + 1);
    let mut ragged = cars();
    ragged.rows[0].pop();
    assert!(pc.update(ragged).is_err());
    assert_eq!(pc.generation(), first + 1);
}
