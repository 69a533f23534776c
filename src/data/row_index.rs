//! Correspondence between chart lines and table rows.
//!
//! The table reorders, filters and paginates its rows, so a table row is
//! identified by its full rendered tuple and matched back to a chart line by
//! value equality every time a correspondence is needed.

/// Rendered tuple of one table row: every cell as shown plus, in cluster mode,
/// the `#rrggbb` color of the row's cluster.
pub type TableRowData = Vec<String>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowIndex {
    rows: Vec<TableRowData>,
}

impl RowIndex {
    /// Build from the dataset ids and, in cluster mode, one color per row.
    pub fn new(ids: Vec<Vec<String>>, colors: Option<&[String]>) -> Self {
        let rows = match colors {
            Some(colors) => ids
                .into_iter()
                .zip(colors.iter())
                .map(|(mut id, c)| {
                    id.push(c.clone());
                    id
                })
                .collect(),
            None => ids,
        };
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[TableRowData] {
        &self.rows
    }

    pub fn table_row_for_chart_index(&self, index: usize) -> Option<&TableRowData> {
        self.rows.get(index)
    }

    /// First chart line whose tuple equals `row` cell by cell. `None` on a miss.
    pub fn chart_index_for_table_row(&self, row: &[String]) -> Option<usize> {
        self.rows.iter().position(|r| r.as_slice() == row)
    }
}
