use crate::options::MarkdownOptions;
use regex::Regex;
use std::sync::LazyLock;

static PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#+\s").expect("valid heading regex"));

pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';

    /// A heading is a single line opening with `#` markers and whitespace.
    pub fn matches(par: &str) -> bool {
        !par.contains('\n') && PREFIX.is_match(par)
    }

    pub fn level(text: &str) -> usize {
        text.chars().take_while(|c| *c == Self::MARKER).count()
    }

    pub fn content(text: &str) -> &str {
        text.trim_start_matches([Self::MARKER, ' '])
    }

    pub fn to_html(text: &str, options: &MarkdownOptions) -> String {
        let level = Self::level(text);
        let content = Self::content(text);
        format!("{}<h{level}>{content}</h{level}>", options.toc_anchor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# Alfa", true)]
    #[case("### Charlie", true)]
    #[case("#Alfa", false)]
    #[case("# Alfa\ntext", false)]
    #[case("text # Alfa", false)]
    fn detection(#[case] par: &str, #[case] expected: bool) {
        assert_eq!(Heading::matches(par), expected);
    }

    #[test]
    fn level_counts_leading_markers_only() {
        assert_eq!(Heading::level("## C# notes"), 2);
        assert_eq!(Heading::content("## C# notes"), "C# notes");
    }

    #[test]
    fn html_with_anchor() {
        assert_eq!(
            Heading::to_html("## Bravo", &MarkdownOptions::default()),
            r#"<div class="toc-anchor"></div><h2>Bravo</h2>"#
        );
    }
}
