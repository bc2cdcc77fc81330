use super::prepare_columns;
use crate::text::indent;

/// Renders columns as an HTML table; the first row uses `<th>` cells.
///
/// `indent_width` is the number of spaces per nesting level.
pub fn make_table_html<C, S>(columns: &[C], indent_width: usize) -> String
where
    C: AsRef<[S]>,
    S: AsRef<str>,
{
    let columns = prepare_columns(columns);
    if columns.is_empty() {
        return String::new();
    }

    let prefix = " ".repeat(indent_width);
    let height = columns[0].len();

    let rows: Vec<String> = (0..height)
        .map(|row| {
            let cells: Vec<&str> = columns.iter().map(|column| column[row].as_str()).collect();
            make_row(&cells, row == 0, &prefix)
        })
        .collect();

    format!("<table>\n{}\n</table>", indent(&rows.join("\n"), &prefix))
}

fn make_row(cells: &[&str], header: bool, prefix: &str) -> String {
    let tag = if header { "th" } else { "td" };
    let items = cells
        .iter()
        .map(|cell| format!("<{tag}>{cell}</{tag}>"))
        .collect::<Vec<_>>()
        .join("\n");
    format!("<tr>\n{}\n</tr>", indent(&items, prefix))
}
