use std::io::Write;
use std::path::Path;

use crate::data::row_index::TableRowData;
use crate::data::table::TableView;

fn csv_field(s: &str) -> String {
    if s.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// Write the rows the table currently shows (all pages, display order,
/// visible columns only) as CSV.
pub fn write_table_csv<W: Write>(
    mut out: W,
    table: &TableView,
    rows: &[TableRowData],
) -> std::io::Result<()> {
    let cols = table.visible_columns();
    let header: Vec<String> = cols
        .iter()
        .map(|&c| csv_field(&table.headers()[c]))
        .collect();
    writeln!(out, "{}", header.join(","))?;
    for &r in table.filtered() {
        let Some(row) = rows.get(r) else { continue };
        let line: Vec<String> = cols
            .iter()
            .map(|&c| csv_field(row.get(c).map(String::as_str).unwrap_or("")))
            .collect();
        writeln!(out, "{}", line.join(","))?;
    }
    Ok(())
}

pub fn save_table_csv<P: AsRef<Path>>(
    path: P,
    table: &TableView,
    rows: &[TableRowData],
) -> std::io::Result<()> {
    let mut w = std::io::BufWriter::new(std::fs::File::create(path)?);
    write_table_csv(&mut w, table, rows)?;
    w.flush()
}
