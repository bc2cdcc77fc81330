//! Small text helpers shared by the parsers and renderers.

/// Removes the whitespace prefix common to every non-blank line.
///
/// Whitespace-only lines are emptied and do not take part in the margin.
pub fn dedent(text: &str) -> String {
    let lines: Vec<&str> = text
        .split('\n')
        .map(|line| if line.trim().is_empty() { "" } else { line })
        .collect();

    let mut margin: Option<&str> = None;
    for line in lines.iter().filter(|line| !line.is_empty()) {
        let width = line.len() - line.trim_start_matches([' ', '\t']).len();
        let prefix = &line[..width];
        margin = Some(match margin {
            None => prefix,
            Some(current) => common_prefix(current, prefix),
        });
    }

    let margin = margin.unwrap_or("");
    lines
        .iter()
        .map(|&line| line.strip_prefix(margin).unwrap_or(line))
        .collect::<Vec<_>>()
        .join("\n")
}

fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let len = a
        .bytes()
        .zip(b.bytes())
        .take_while(|(x, y)| x == y)
        .count();
    &a[..len]
}

/// Prepends `prefix` to every line that has non-whitespace content.
pub fn indent(text: &str, prefix: &str) -> String {
    text.split_inclusive('\n')
        .map(|line| {
            if line.trim().is_empty() {
                line.to_string()
            } else {
                format!("{prefix}{line}")
            }
        })
        .collect()
}

/// Collapses all whitespace runs, newlines included, into single spaces.
pub fn text_to_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Number of displayed characters, used for column padding.
pub fn width(text: &str) -> usize {
    text.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("  a\n  b", "a\nb")]
    #[case("  a\n    b", "a\n  b")]
    #[case("  a\n   \n  b", "a\n\nb")]
    #[case("a\n  b", "a\n  b")]
    #[case("\t x\n\t y", "x\ny")]
    #[case("", "")]
    fn dedent_cases(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(dedent(input), expected);
    }

    #[test]
    fn indent_skips_blank_lines() {
        assert_eq!(indent("a\n\nb", "  "), "  a\n\n  b");
        assert_eq!(indent("a\n", "> "), "> a\n");
    }

    #[test]
    fn text_to_line_collapses_whitespace() {
        assert_eq!(text_to_line("  Bravo\n Charlie \tDelta\n"), "Bravo Charlie Delta");
        assert_eq!(text_to_line("   "), "");
    }

    #[test]
    fn width_counts_chars() {
        assert_eq!(width("naïve"), 5);
    }
}
