//! View model of the data table: search, sort, pagination and column
//! visibility over the row tuples of a [`RowIndex`](crate::data::row_index::RowIndex).
//!
//! Every redraw runs a filtering pass that asks an external predicate whether
//! each row may be shown, then reports which rows passed so the chart can be
//! synchronized with what the table displays.

use crate::data::format::{cmp_numeric_aware, display_cell};
use crate::data::row_index::TableRowData;

/// Page lengths offered by the table.
pub const PAGE_LENGTHS: [usize; 4] = [10, 25, 50, 100];

/// What a redraw does with the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paging {
    /// Go back to the first page.
    Reset,
    /// Stay on the current page, clamped to the new page count.
    Hold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Notification emitted at the end of a redraw.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableDrawn {
    /// Tuples of every row that passed the filtering pass, in display order.
    pub passed: Vec<TableRowData>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableView {
    headers: Vec<String>,
    column_visible: Vec<bool>,
    column_search: Vec<String>,
    global_search: String,
    sort: Option<(usize, SortOrder)>,
    page_length: usize,
    page: usize,
    /// Row indices after the last filtering pass, in display order.
    filtered: Vec<usize>,
    total: usize,
}

impl TableView {
    pub fn new(headers: Vec<String>) -> Self {
        let n = headers.len();
        Self {
            headers,
            column_visible: vec![true; n],
            column_search: vec![String::new(); n],
            global_search: String::new(),
            sort: None,
            page_length: PAGE_LENGTHS[0],
            page: 0,
            filtered: Vec::new(),
            total: 0,
        }
    }

    /// Replace the headers. Column visibility and page length survive when
    /// the headers are unchanged; search and sort are reset.
    pub fn reset_columns(&mut self, headers: Vec<String>) {
        let keep = headers == self.headers;
        let visible = std::mem::take(&mut self.column_visible);
        let page_length = self.page_length;
        *self = Self::new(headers);
        if keep {
            self.column_visible = visible;
            self.page_length = page_length;
        }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn column_visible(&self, col: usize) -> bool {
        self.column_visible.get(col).copied().unwrap_or(false)
    }

    pub fn set_column_visible(&mut self, col: usize, visible: bool) {
        if let Some(v) = self.column_visible.get_mut(col) {
            *v = visible;
        }
    }

    /// Indices of the columns currently shown.
    pub fn visible_columns(&self) -> Vec<usize> {
        (0..self.headers.len())
            .filter(|&c| self.column_visible[c])
            .collect()
    }

    pub fn column_search(&self, col: usize) -> &str {
        self.column_search.get(col).map(String::as_str).unwrap_or("")
    }

    pub fn set_column_search(&mut self, col: usize, text: impl Into<String>) {
        if let Some(s) = self.column_search.get_mut(col) {
            *s = text.into();
        }
    }

    pub fn global_search(&self) -> &str {
        &self.global_search
    }

    pub fn set_global_search(&mut self, text: impl Into<String>) {
        self.global_search = text.into();
    }

    pub fn sort(&self) -> Option<(usize, SortOrder)> {
        self.sort
    }

    /// Header click: sort ascending by `col`, or flip the order if already
    /// sorted by it.
    pub fn toggle_sort(&mut self, col: usize) {
        if col >= self.headers.len() {
            return;
        }
        self.sort = match self.sort {
            Some((c, SortOrder::Ascending)) if c == col => Some((col, SortOrder::Descending)),
            _ => Some((col, SortOrder::Ascending)),
        };
    }

    pub fn page_length(&self) -> usize {
        self.page_length
    }

    /// Ignored unless `len` is one of [`PAGE_LENGTHS`].
    pub fn set_page_length(&mut self, len: usize) {
        if PAGE_LENGTHS.contains(&len) {
            self.page_length = len;
            self.page = 0;
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_count(&self) -> usize {
        self.filtered.len().div_ceil(self.page_length).max(1)
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.min(self.page_count() - 1);
    }

    /// Rows that passed the last filtering pass, in display order.
    pub fn filtered(&self) -> &[usize] {
        &self.filtered
    }

    /// Rows on the current page.
    pub fn page_rows(&self) -> &[usize] {
        let start = (self.page * self.page_length).min(self.filtered.len());
        let end = (start + self.page_length).min(self.filtered.len());
        &self.filtered[start..end]
    }

    /// "Showing a to b of n entries", with the unfiltered total when a
    /// search or brush hides rows.
    pub fn info(&self) -> String {
        let rows = self.page_rows();
        let n = self.filtered.len();
        let (a, b) = if rows.is_empty() {
            (0, 0)
        } else {
            let start = self.page * self.page_length;
            (start + 1, start + rows.len())
        };
        if n == self.total {
            format!("Showing {a} to {b} of {n} entries")
        } else {
            format!(
                "Showing {a} to {b} of {n} entries (filtered from {} total entries)",
                self.total
            )
        }
    }

    /// Jump to the page containing `row`. Returns whether the row is shown.
    pub fn reveal(&mut self, row: usize) -> bool {
        match self.filtered.iter().position(|&r| r == row) {
            Some(pos) => {
                self.page = pos / self.page_length;
                true
            }
            None => false,
        }
    }

    fn search_matches(&self, row: &[String]) -> bool {
        let cols = self.headers.len().min(row.len());
        for (col, needle) in self.column_search.iter().enumerate().take(cols) {
            if !needle.is_empty() && !contains_ci(&display_cell(&row[col]), needle) {
                return false;
            }
        }
        if self.global_search.is_empty() {
            return true;
        }
        (0..cols)
            .filter(|&c| self.column_visible[c])
            .any(|c| contains_ci(&display_cell(&row[c]), &self.global_search))
    }

    /// Filtering pass over `rows`: a row is kept when `predicate` accepts it
    /// and every search matches. The result is sorted and the page adjusted.
    pub fn redraw<F>(&mut self, rows: &[TableRowData], predicate: F, paging: Paging) -> TableDrawn
    where
        F: Fn(&[String]) -> bool,
    {
        self.total = rows.len();
        let mut filtered: Vec<usize> = rows
            .iter()
            .enumerate()
            .filter(|(_, r)| predicate(r) && self.search_matches(r))
            .map(|(i, _)| i)
            .collect();

        if let Some((col, order)) = self.sort {
            filtered.sort_by(|&a, &b| {
                let (x, y) = (
                    rows[a].get(col).map(String::as_str).unwrap_or(""),
                    rows[b].get(col).map(String::as_str).unwrap_or(""),
                );
                match order {
                    SortOrder::Ascending => cmp_numeric_aware(x, y),
                    SortOrder::Descending => cmp_numeric_aware(y, x),
                }
            });
        }

        self.filtered = filtered;
        match paging {
            Paging::Reset => self.page = 0,
            Paging::Hold => self.set_page(self.page),
        }

        TableDrawn {
            passed: self.filtered.iter().map(|&i| rows[i].clone()).collect(),
        }
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
