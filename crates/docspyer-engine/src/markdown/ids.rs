//! GitHub-style anchor ids for headings.

use std::collections::HashMap;

/// Makes one id per heading text.
///
/// `()` is removed, the text is lowercased and its words joined with `-`.
/// Repeated ids get `-1`, `-2`, … from the second occurrence on.
pub fn make_ids<S: AsRef<str>>(headings: &[S]) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();

    headings
        .iter()
        .map(|heading| {
            let id = primary_id(heading.as_ref());
            let count = seen.entry(id.clone()).or_insert(0);
            let unique = match *count {
                0 => id,
                n => format!("{id}-{n}"),
            };
            *count += 1;
            unique
        })
        .collect()
}

fn primary_id(heading: &str) -> String {
    heading
        .replace("()", "")
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}
