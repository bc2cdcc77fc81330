use super::prepare_columns;
use crate::text::width;

/// Renders columns as a Markdown table with padded cells.
///
/// The first cell of every column is its header. A single column gets
/// outer pipes so it still reads as a table.
pub fn make_table_md<C, S>(columns: &[C]) -> String
where
    C: AsRef<[S]>,
    S: AsRef<str>,
{
    let columns = prepare_columns(columns);
    if columns.is_empty() {
        return String::new();
    }

    let columns: Vec<Vec<String>> = columns.iter().map(|column| format_column(column)).collect();
    let height = columns[0].len();

    (0..height)
        .map(|row| {
            let cells: Vec<&str> = columns.iter().map(|column| column[row].as_str()).collect();
            join_row(&cells)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pads every cell to the column width and inserts the dashed underline.
fn format_column(cells: &[String]) -> Vec<String> {
    let max_width = cells.iter().map(|cell| width(cell)).max().unwrap_or(0);

    let mut lines: Vec<String> = cells
        .iter()
        .map(|cell| format!("{cell}{}", " ".repeat(max_width - width(cell))))
        .collect();
    lines.insert(1, "-".repeat(max_width));
    lines
}

fn join_row(cells: &[&str]) -> String {
    match cells {
        [single] => format!("| {single} |"),
        _ => cells.join(" | "),
    }
}
