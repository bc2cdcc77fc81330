use crate::markdown::emphasis;
use crate::options::MarkdownOptions;
use crate::tables::make_table_html;

/// Pipe table: one line per row, the second line is the header underline.
///
/// ```text
/// Name  | Info
/// ------|--------
/// Alfa  | Bravo
/// ```
pub struct Table;

impl Table {
    pub const SEPARATOR: char = '|';

    pub fn matches(par: &str) -> bool {
        if !par.contains('\n') || !par.contains(Self::SEPARATOR) {
            return false;
        }

        let lines: Vec<&str> = par.lines().collect();
        if lines.len() < 2 {
            return false;
        }

        let bars = lines[0].matches(Self::SEPARATOR).count();
        let equal_bars = lines
            .iter()
            .all(|line| line.matches(Self::SEPARATOR).count() == bars);

        equal_bars && lines[1].trim_matches(['-', '|', ' ']).is_empty()
    }

    /// Splits the table into columns, header cell first.
    ///
    /// Rows are cut to the shortest one.
    pub fn fetch_columns(text: &str) -> Vec<Vec<String>> {
        let rows: Vec<Vec<&str>> = text
            .lines()
            .enumerate()
            .filter(|(i, _)| *i != 1)
            .map(|(_, line)| line.trim_matches(Self::SEPARATOR).split(Self::SEPARATOR).collect())
            .collect();

        let Some(width) = rows.iter().map(Vec::len).min() else {
            return Vec::new();
        };
        if rows.iter().any(|row| row.len() != width) {
            log::debug!("ragged table rows clipped to {width} columns");
        }

        (0..width)
            .map(|col| rows.iter().map(|row| row[col].to_string()).collect())
            .collect()
    }

    pub fn to_html(text: &str, options: &MarkdownOptions) -> String {
        let text = emphasis::translate(text);
        let columns = Self::fetch_columns(&text);
        make_table_html(&columns, options.html_indent)
    }
}
