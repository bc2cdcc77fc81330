use regex::Regex;
use std::sync::LazyLock;

static RULE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-=*]{3,}$").expect("valid rule regex"));

pub struct Rule;

impl Rule {
    pub const HTML: &'static str = "<hr>";

    pub fn matches(par: &str) -> bool {
        !par.contains('\n') && RULE.is_match(par)
    }
}
