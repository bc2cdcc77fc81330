use crate::options::MarkdownOptions;
use crate::text::dedent;

/// Fenced code block; the opening fence may name a language.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    pub fn is_fence_line(line: &str) -> bool {
        line.starts_with(Self::BACKTICKS)
    }

    /// A code block spans several lines and is wrapped in fences.
    pub fn matches(par: &str) -> bool {
        par.contains('\n') && par.starts_with(Self::BACKTICKS) && par.ends_with(Self::BACKTICKS)
    }

    pub fn lang(text: &str) -> &str {
        let first_line = text.split('\n').next().unwrap_or_default();
        first_line.trim_matches(['`', ' '])
    }

    /// Lines between the fences, dedented and HTML-escaped.
    pub fn body(text: &str) -> String {
        let lines: Vec<&str> = text.lines().collect();
        let inner = match lines.len() {
            0..=2 => String::new(),
            n => lines[1..n - 1].join("\n"),
        };
        html_escape::encode_quoted_attribute(&dedent(&inner)).into_owned()
    }

    pub fn to_html(text: &str, options: &MarkdownOptions) -> String {
        let lang = Self::lang(text);
        let body = Self::body(text);

        if !lang.is_empty() && options.is_code_language(lang) {
            let title = title_case(lang);
            return format!(
                r#"<pre><span class="lang-name">{title}</span><code class="language-{lang}">{body}</code></pre>"#
            );
        }

        let class = if lang.is_empty() {
            options.default_code_class.as_str()
        } else {
            lang
        };
        format!(r#"<pre class="{class}">{body}</pre>"#)
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn detection() {
        assert!(CodeFence::matches("```\ncode\n```"));
        assert!(!CodeFence::matches("```inline```"));
        assert!(!CodeFence::matches("```\ncode"));
    }

    #[test]
    fn lang_from_first_line() {
        assert_eq!(CodeFence::lang("``` python\nx\n```"), "python");
        assert_eq!(CodeFence::lang("```\nx\n```"), "");
    }

    #[test]
    fn python_block() {
        let text = "```python\n    if a < b:\n        pass\n```";
        assert_eq!(
            CodeFence::to_html(text, &MarkdownOptions::default()),
            "<pre><span class=\"lang-name\">Python</span><code class=\"language-python\">if a &lt; b:\n    pass</code></pre>"
        );
    }

    #[test]
    fn unknown_language_becomes_class() {
        assert_eq!(
            CodeFence::to_html("```text\nA & B\n```", &MarkdownOptions::default()),
            "<pre class=\"text\">A &amp; B</pre>"
        );
    }

    #[test]
    fn no_language_uses_default_class() {
        assert_eq!(
            CodeFence::to_html("```\nAlfa\n\nBravo\n```", &MarkdownOptions::default()),
            "<pre class=\"docstring\">Alfa\n\nBravo</pre>"
        );
    }

    #[test]
    fn title_case_lowercases_tail() {
        assert_eq!(title_case("pYTHON"), "Python");
        assert_eq!(title_case("c"), "C");
    }
}
