use super::types::{DocBlock, VarRecord};
use crate::error::{Error, Result};
use crate::options::DocstringVocabulary;
use crate::text::dedent;
use regex::Regex;
use std::sync::LazyLock;

static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("valid paragraph regex"));

/// Minimum length of a heading underline.
const UNDERLINE_MIN: usize = 3;

/// Splits text on blank lines; paragraphs keep their indentation.
pub fn fetch_paragraphs(text: &str) -> Vec<String> {
    PARAGRAPH_BREAK
        .split(text)
        .map(|par| par.trim_matches('\n'))
        .filter(|par| !par.is_empty())
        .map(String::from)
        .collect()
}

/// Kind of a docstring paragraph, decided from its first two lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParagraphKind {
    Section,
    Varlist,
    Textdata,
}

/// Parses numpy-style docstrings into [`DocBlock`]s.
#[derive(Debug, Clone, Default)]
pub struct DocParser {
    vocabulary: DocstringVocabulary,
}

impl DocParser {
    pub fn new(vocabulary: DocstringVocabulary) -> Self {
        Self { vocabulary }
    }

    pub fn parse(&self, doc: &str) -> Result<Vec<DocBlock>> {
        fetch_paragraphs(doc)
            .iter()
            .map(|par| self.read_paragraph(par))
            .collect()
    }

    pub fn read_paragraph(&self, par: &str) -> Result<DocBlock> {
        match self.paragraph_kind(par) {
            ParagraphKind::Section => make_section(par),
            ParagraphKind::Varlist => make_varlist(par),
            ParagraphKind::Textdata => Ok(DocBlock::Textdata {
                content: par.to_string(),
            }),
        }
    }

    /// Section headings are checked before variable list headings.
    pub fn paragraph_kind(&self, par: &str) -> ParagraphKind {
        if has_header(par, &self.vocabulary.sections) {
            ParagraphKind::Section
        } else if has_header(par, &self.vocabulary.varlists) {
            ParagraphKind::Varlist
        } else {
            ParagraphKind::Textdata
        }
    }
}

/// True when `par` opens with a vocabulary word underlined by dashes.
fn has_header(par: &str, words: &[String]) -> bool {
    let Some((first, rest)) = par.split_once('\n') else {
        return false;
    };
    let underline = rest.split('\n').next().unwrap_or_default();

    words.iter().any(|word| word == first)
        && underline.len() >= UNDERLINE_MIN
        && underline.chars().all(|c| c == '-')
}

/// Splits a headed paragraph into its heading and the text after the underline.
fn split_header(par: &str) -> Result<(&str, &str)> {
    let malformed = || Error::MalformedSection {
        heading: par.lines().next().unwrap_or_default().to_string(),
    };

    let start = par.find("\n-").ok_or_else(malformed)?;
    let heading = &par[..start];
    let body = par[start + 1..].trim_start_matches('-');
    Ok((heading, body))
}

fn make_section(par: &str) -> Result<DocBlock> {
    let (heading, body) = split_header(par)?;
    Ok(DocBlock::Section {
        heading: heading.to_string(),
        content: body.trim().to_string(),
    })
}

fn make_varlist(par: &str) -> Result<DocBlock> {
    let (heading, body) = split_header(par)?;
    Ok(DocBlock::Varlist {
        heading: heading.to_string(),
        variables: read_variables(body),
    })
}

/// Pairs every definition line with the indented lines below it.
fn read_variables(body: &str) -> Vec<VarRecord> {
    if body.trim().is_empty() {
        return Vec::new();
    }

    let mut entries: Vec<(&str, Vec<&str>)> = Vec::new();
    for line in body.lines().filter(|line| !line.is_empty()) {
        if is_vardef(line) {
            entries.push((line, Vec::new()));
        } else if let Some((_, doc)) = entries.last_mut() {
            doc.push(line);
        } else {
            log::debug!("description line without a variable dropped: {line:?}");
        }
    }

    entries
        .into_iter()
        .map(|(vardef, doc)| make_record(vardef, &doc.join("\n")))
        .collect()
}

fn is_vardef(line: &str) -> bool {
    !line.starts_with(' ')
}

/// Builds a record from a `name : type` line and its raw description.
pub fn make_record(vardef: &str, vardoc: &str) -> VarRecord {
    let (varname, vartype) = match vardef.split_once(':') {
        Some((name, kind)) => (name.trim(), kind.trim()),
        None => (vardef.trim(), ""),
    };
    VarRecord::new(varname, vartype, dedent(vardoc))
}
