use super::classify::ParagraphClassifier;
use super::kinds::CodeFence;
use super::types::Block;
use crate::error::{Error, Result};

/// Splits Markdown text into typed blocks.
///
/// Blank lines separate paragraphs, except inside fenced code where they
/// belong to the code block.
#[derive(Default)]
pub struct MarkdownParser {
    classifier: ParagraphClassifier,
}

impl MarkdownParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse(&self, text: &str) -> Result<Vec<Block>> {
        let paragraphs = fetch_paragraphs(text)?;
        log::trace!("markdown text split into {} paragraphs", paragraphs.len());

        Ok(paragraphs
            .into_iter()
            .map(|par| Block::new(self.classifier.classify(&par), par))
            .collect())
    }
}

/// Paragraphs of `text`, trimmed, with code fences kept whole.
pub(crate) fn fetch_paragraphs(text: &str) -> Result<Vec<String>> {
    let mut paragraphs = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut open_fence: Option<usize> = None;

    for (index, line) in text.lines().enumerate() {
        if CodeFence::is_fence_line(line) {
            open_fence = match open_fence {
                Some(_) => None,
                None => Some(index + 1),
            };
            current.push(line);
        } else if open_fence.is_some() || !line.trim().is_empty() {
            current.push(line);
        } else {
            flush(&mut current, &mut paragraphs);
        }
    }

    if let Some(line) = open_fence {
        return Err(Error::UnclosedCodeFence { line });
    }

    flush(&mut current, &mut paragraphs);
    Ok(paragraphs)
}

fn flush(current: &mut Vec<&str>, paragraphs: &mut Vec<String>) {
    let par = current.join("\n");
    let par = par.trim();
    if !par.is_empty() {
        paragraphs.push(par.to_string());
    }
    current.clear();
}
