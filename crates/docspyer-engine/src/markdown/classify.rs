use super::kinds::{CodeFence, Heading, List, Rule, Table};
use super::types::BlockKind;

/// Decides the kind of a whole paragraph.
///
/// Checks run in a fixed order and the first match wins, so `---` is a
/// rule rather than a list and a dash list holding pipes stays a list.
#[derive(Debug, Default, Clone, Copy)]
pub struct ParagraphClassifier;

impl ParagraphClassifier {
    pub fn classify(&self, par: &str) -> BlockKind {
        if Rule::matches(par) {
            BlockKind::HorizontalRule
        } else if Heading::matches(par) {
            BlockKind::Heading
        } else if List::matches(par) {
            BlockKind::List
        } else if Table::matches(par) {
            BlockKind::Table
        } else if CodeFence::matches(par) {
            BlockKind::Code
        } else {
            BlockKind::Paragraph
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("---", BlockKind::HorizontalRule)]
    #[case("===", BlockKind::HorizontalRule)]
    #[case("***", BlockKind::HorizontalRule)]
    #[case("# Alfa", BlockKind::Heading)]
    #[case("## Bravo", BlockKind::Heading)]
    #[case("### Charlie", BlockKind::Heading)]
    #[case("- Alfa\n- Bravo", BlockKind::List)]
    #[case("- a | b\n- c | d", BlockKind::List)]
    #[case("Name  | Description\n----  | -----------\nAlfa  | First item", BlockKind::Table)]
    #[case("```\nAlfa\n\nBravo\n```", BlockKind::Code)]
    #[case("<tag>\n</tag>", BlockKind::Paragraph)]
    #[case("# Alfa\nmore", BlockKind::Paragraph)]
    fn kinds(#[case] par: &str, #[case] expected: BlockKind) {
        assert_eq!(ParagraphClassifier.classify(par), expected);
    }
}
