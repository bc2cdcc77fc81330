use crate::markdown::emphasis as inline;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static KEYWORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<before>\W)(?P<keyword>True|False|None)(?P<after>\W)")
        .expect("valid keyword regex")
});

/// Emphasises `True`, `False` and `None`, then inline Markdown.
pub fn emphasize(text: &str) -> String {
    inline::translate(&emphasize_keywords(text))
}

/// Wraps standalone keywords in `<em>`; keywords inside words are kept.
pub fn emphasize_keywords(text: &str) -> String {
    let padded = format!(" {text} ");
    let edited = KEYWORD.replace_all(&padded, |caps: &Captures| {
        format!(
            "{}<em>{}</em>{}",
            &caps["before"], &caps["keyword"], &caps["after"]
        )
    });

    let edited = edited.strip_prefix(' ').unwrap_or(&edited);
    edited.strip_suffix(' ').unwrap_or(edited).to_string()
}
