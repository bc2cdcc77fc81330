use thiserror::Error;

/// Errors raised while converting documentation text.
///
/// Parser-level errors abort the whole document; renderers never fail.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("text has an unclosed code block opened at line {line}")]
    UnclosedCodeFence { line: usize },

    #[error("section '{heading}' has an underline but no body can be split off")]
    MalformedSection { heading: String },

    #[error("document not found: {name}")]
    MissingDocument { name: String },

    #[error("heading '{heading}' not found in document {document}")]
    MissingHeading { document: String, heading: String },
}

pub type Result<T> = std::result::Result<T, Error>;
