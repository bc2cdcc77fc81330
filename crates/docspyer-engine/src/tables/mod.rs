//! Column-oriented table renderers.
//!
//! Both renderers take columns (header first) and share the same
//! preparation: empty columns are dropped, the rest are cut to the
//! shortest one and every cell is collapsed onto one line.

mod html;
mod markdown;

pub use html::make_table_html;
pub use markdown::make_table_md;

use crate::text::text_to_line;

/// Drops empty columns, truncates to the shortest and flattens cells.
fn prepare_columns<C, S>(columns: &[C]) -> Vec<Vec<String>>
where
    C: AsRef<[S]>,
    S: AsRef<str>,
{
    let columns: Vec<&[S]> = columns
        .iter()
        .map(<C as AsRef<[S]>>::as_ref)
        .filter(|column| !column.is_empty())
        .collect();

    let Some(min_len) = columns.iter().map(|column| column.len()).min() else {
        return Vec::new();
    };

    columns
        .iter()
        .map(|column| {
            column[..min_len]
                .iter()
                .map(|cell| text_to_line(cell.as_ref()))
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn prepare_drops_empty_and_truncates() {
        let columns = vec![
            vec!["Name", "Alfa", "Bravo"],
            vec![],
            vec!["Description", "First \n item"],
        ];
        assert_eq!(
            prepare_columns(&columns),
            vec![vec!["Name", "Alfa"], vec!["Description", "First item"]]
        );
    }

    #[test]
    fn prepare_nothing() {
        let columns: Vec<Vec<&str>> = vec![vec![], vec![]];
        assert!(prepare_columns(&columns).is_empty());
    }
}
