use serde::Serialize;

/// One documented variable of a variable list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VarRecord {
    pub varname: String,
    /// Empty when the definition line has no `: type` part.
    pub vartype: String,
    /// Description with its common indentation removed.
    pub vardoc: String,
}

impl VarRecord {
    pub fn new(
        varname: impl Into<String>,
        vartype: impl Into<String>,
        vardoc: impl Into<String>,
    ) -> Self {
        Self {
            varname: varname.into(),
            vartype: vartype.into(),
            vardoc: vardoc.into(),
        }
    }
}

/// Structural block of a docstring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum DocBlock {
    /// A free-form paragraph.
    Textdata { content: String },
    /// A headed free-text section such as `Notes`.
    Section { heading: String, content: String },
    /// A headed variable list such as `Parameters`.
    Varlist {
        heading: String,
        variables: Vec<VarRecord>,
    },
}

impl DocBlock {
    pub fn is_textdata(&self) -> bool {
        matches!(self, DocBlock::Textdata { .. })
    }

    pub fn is_section(&self) -> bool {
        matches!(self, DocBlock::Section { .. })
    }

    pub fn is_varlist(&self) -> bool {
        matches!(self, DocBlock::Varlist { .. })
    }
}
