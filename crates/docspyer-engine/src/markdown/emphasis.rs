//! Inline emphasis: quote marks, backticks, asterisks and links to HTML.
//!
//! Each marker type is one regex pass over the text padded with a space on
//! both sides. A run must be preceded by whitespace or `>` and followed by
//! whitespace, `,`, `.`, `:` or `<`. Matches do not overlap, so in
//! `` `a` `b` `` only the first run is converted.

use regex::{Captures, Regex};
use std::sync::LazyLock;

static QUOTE_MARKS: LazyLock<Regex> = LazyLock::new(|| marker_regex("\""));
static BACKTICKS: LazyLock<Regex> = LazyLock::new(|| marker_regex("`"));
static ASTERISKS: LazyLock<Regex> = LazyLock::new(|| marker_regex(r"\*"));

static LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s\[(?P<name>[.\w\s]+(?:\(\w*\))?)\]\((?P<path>[\w.#-]*)\)[\s,.:]")
        .expect("valid link regex")
});

fn marker_regex(symbol: &str) -> Regex {
    let pattern = format!(r"[\s>]{symbol}+[^{symbol}]+{symbol}+[\s,.:<]");
    Regex::new(&pattern).expect("valid marker regex")
}

/// Translates inline Markdown emphasis and links to HTML.
///
/// ```
/// use docspyer_engine::markdown::emphasis::translate;
///
/// assert_eq!(translate("**TEXT**"), "<b>TEXT</b>");
/// assert_eq!(translate("see [Alfa](alfa.md)."), r#"see <a href="alfa.md">Alfa</a>."#);
/// ```
pub fn translate(text: &str) -> String {
    let text = edit_pattern(text, &QUOTE_MARKS, translate_quote_marks);
    let text = edit_pattern(&text, &BACKTICKS, translate_backticks);
    let text = edit_pattern(&text, &ASTERISKS, translate_asterisks);
    edit_pattern(&text, &LINK, translate_link)
}

/// Replaces every occurrence of every snippet matched in the padded text.
fn edit_pattern(text: &str, pattern: &Regex, translator: fn(&str) -> String) -> String {
    let padded = format!(" {text} ");
    let snippets: Vec<&str> = pattern.find_iter(&padded).map(|m| m.as_str()).collect();

    let mut edited = padded.clone();
    for snippet in snippets {
        edited = edited.replace(snippet, &translator(snippet));
    }

    let edited = edited.strip_prefix(' ').unwrap_or(&edited);
    edited.strip_suffix(' ').unwrap_or(edited).to_string()
}

/// Replaces the first two occurrences of `symbol` with `start` and `end`.
fn edit_snippet(snippet: &str, symbol: &str, start: &str, end: &str) -> String {
    snippet.replacen(symbol, start, 1).replacen(symbol, end, 1)
}

fn translate_quote_marks(snippet: &str) -> String {
    edit_snippet(snippet, "\"", "<i>&quot;", "&quot;</i>")
}

fn translate_backticks(snippet: &str) -> String {
    edit_snippet(snippet, "`", "<code>", "</code>")
}

fn translate_asterisks(snippet: &str) -> String {
    match snippet.matches('*').count() {
        2 => edit_snippet(snippet, "*", "<em>", "</em>"),
        4 => edit_snippet(snippet, "**", "<b>", "</b>"),
        6 => edit_snippet(snippet, "***", "<b><em>", "</em></b>"),
        _ => snippet.to_string(),
    }
}

fn translate_link(snippet: &str) -> String {
    LINK.replace(snippet, |caps: &Captures| {
        let whole = &caps[0];
        let name = &caps["name"];
        let path = &caps["path"];
        let old_link = format!("[{name}]({path})");
        whole.replace(&old_link, &format!(r#"<a href="{path}">{name}</a>"#))
    })
    .into_owned()
}
