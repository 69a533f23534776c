use parcoords::data::row_index::TableRowData;
use parcoords::data::table::{Paging, SortOrder, TableView};

fn rows() -> Vec<TableRowData> {
    [
        ["10", "Alpha"],
        ["2", "beta"],
        ["33", "Gamma"],
        ["2.5", "alphabet"],
    ]
    .iter()
    .map(|r| r.iter().map(|s| s.to_string()).collect())
    .collect()
}

fn view() -> TableView {
    TableView::new(vec!["n".into(), "name".into()])
}

#[test]
fn predicate_decides_which_rows_pass() {
    let rows = rows();
    let mut t = view();
    let drawn = t.redraw(&rows, |r| r[0] != "33", Paging::Reset);
    assert_eq!(t.filtered(), &[0, 1, 3]);
    assert_eq!(drawn.passed.len(), 3);
    assert_eq!(drawn.passed[0], rows[0]);
    assert_eq!(
        t.info(),
        "Showing 1 to 3 of 3 entries (filtered from 4 total entries)"
    );
}

#[test]
fn search_is_case_insensitive() {
    let rows = rows();
    let mut t = view();
    t.set_global_search("ALPHA");
    t.redraw(&rows, |_| true, Paging::Reset);
    assert_eq!(t.filtered(), &[0, 3]);

    t.set_global_search("");
    t.set_column_search(1, "ta");
    t.redraw(&rows, |_| true, Paging::Reset);
    assert_eq!(t.filtered(), &[1]);
}

#[test]
fn global_search_skips_hidden_columns() {
    let rows = rows();
    let mut t = view();
    t.set_column_visible(1, false);
    t.set_global_search("gamma");
    t.redraw(&rows, |_| true, Paging::Reset);
    assert!(t.filtered().is_empty());
    assert_eq!(t.visible_columns(), vec![0]);
}

#[test]
fn sort_is_numeric_aware_and_toggles() {
    let rows = rows();
    let mut t = view();
    t.toggle_sort(0);
    assert_eq!(t.sort(), Some((0, SortOrder::Ascending)));
    t.redraw(&rows, |_| true, Paging::Reset);
    assert_eq!(t.filtered(), &[1, 3, 0, 2]);

    t.toggle_sort(0);
    assert_eq!(t.sort(), Some((0, SortOrder::Descending)));
    t.redraw(&rows, |_| true, Paging::Reset);
    assert_eq!(t.filtered(), &[2, 0, 3, 1]);
}

#[test]
fn paging_and_reveal() {
    let rows: Vec<TableRowData> = (0..23).map(|i| vec![i.to_string(), format!("r{i}")]).collect();
    let mut t = view();
    t.redraw(&rows, |_| true, Paging::Reset);
    assert_eq!(t.page_length(), 10);
    assert_eq!(t.page_count(), 3);
    assert_eq!(t.page_rows(), &(0..10).collect::<Vec<_>>()[..]);

    assert!(t.reveal(21));
    assert_eq!(t.page(), 2);
    assert_eq!(t.page_rows(), &[20, 21, 22]);
    assert_eq!(t.info(), "Showing 21 to 23 of 23 entries");

    // holding the page clamps it to the new page count
    t.redraw(&rows, |r| r[0].len() == 1, Paging::Hold);
    assert_eq!(t.page(), 0);
    assert!(!t.reveal(21));

    t.set_page_length(7);
    assert_eq!(t.page_length(), 10);
    t.set_page_length(25);
    t.redraw(&rows, |_| true, Paging::Reset);
    assert_eq!(t.page_count(), 1);
}

#[test]
fn empty_table_info() {
    let mut t = view();
    t.redraw(&[], |_| true, Paging::Reset);
    assert_eq!(t.info(), "Showing 0 to 0 of 0 entries");
    assert_eq!(t.page_count(), 1);
}

#[test]
fn reset_columns_keeps_layout_for_same_headers() {
    let mut t = view();
    t.set_column_visible(0, false);
    t.set_page_length(50);
    t.set_global_search("x");
    t.reset_columns(vec!["n".into(), "name".into()]);
    assert!(!t.column_visible(0));
    assert_eq!(t.page_length(), 50);
    assert_eq!(t.global_search(), "");

    t.reset_columns(vec!["other".into()]);
    assert!(t.column_visible(0));
    assert_eq!(t.page_length(), 10);
}
