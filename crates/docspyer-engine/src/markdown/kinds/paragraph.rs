use crate::markdown::emphasis;
use regex::Regex;
use std::sync::LazyLock;

static HTML_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^<(p|dl|div|svg)").expect("valid html block regex"));

/// Plain text, or raw HTML passed through untouched.
pub struct Paragraph;

impl Paragraph {
    pub const COMMENT_START: &'static str = "<!--";
    pub const COMMENT_END: &'static str = "-->";

    /// HTML blocks and comments are emitted verbatim.
    pub fn is_verbatim(text: &str) -> bool {
        Self::is_comment(text) || HTML_BLOCK.is_match(text)
    }

    fn is_comment(text: &str) -> bool {
        text.starts_with(Self::COMMENT_START) && text.ends_with(Self::COMMENT_END)
    }

    pub fn to_html(text: &str) -> String {
        if Self::is_verbatim(text) {
            return text.to_string();
        }
        format!("<p>{}</p>", emphasis::translate(text))
    }
}
