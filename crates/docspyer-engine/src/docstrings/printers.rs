//! Docstring block printers.
//!
//! Variables are always printed as HTML fragments; the RST printer embeds
//! them in a `.. raw:: html` directive.

use super::emphasis::emphasize;
use super::types::{DocBlock, VarRecord};
use crate::text::indent;

/// Prints [`DocBlock`]s one at a time.
pub trait DocPrinter {
    fn render_textdata(&self, content: &str) -> String {
        content.to_string()
    }

    fn render_heading(&self, heading: &str) -> String;

    fn render_section_content(&self, content: &str) -> String;

    /// Wraps the already rendered variables of a non-empty list.
    fn format_variables(&self, variables: &str) -> String;

    fn print_block(&self, block: &DocBlock) -> String {
        match block {
            DocBlock::Textdata { content } => self.render_textdata(content),
            DocBlock::Section { heading, content } => assemble(
                &self.render_heading(heading),
                &self.render_section_content(content),
            ),
            DocBlock::Varlist { heading, variables } => {
                let rendered = render_variables(variables);
                let body = if rendered.is_empty() {
                    rendered
                } else {
                    self.format_variables(&rendered)
                };
                assemble(&self.render_heading(heading), &body)
            }
        }
    }

    fn print_blocks(&self, blocks: &[DocBlock]) -> String {
        blocks
            .iter()
            .map(|block| self.print_block(block))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// Markdown with inline HTML.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownPrinter;

impl DocPrinter for MarkdownPrinter {
    fn render_heading(&self, heading: &str) -> String {
        format!("<b>{heading}</b>")
    }

    fn render_section_content(&self, content: &str) -> String {
        emphasize(content)
    }

    fn format_variables(&self, variables: &str) -> String {
        variables.to_string()
    }
}

/// reStructuredText.
#[derive(Debug, Default, Clone, Copy)]
pub struct RstPrinter;

impl RstPrinter {
    pub const RAW_HTML: &'static str = ".. raw:: html";
    pub const INDENT: &'static str = "   ";
}

impl DocPrinter for RstPrinter {
    fn render_heading(&self, heading: &str) -> String {
        format!("**{heading}**")
    }

    fn render_section_content(&self, content: &str) -> String {
        content.to_string()
    }

    fn format_variables(&self, variables: &str) -> String {
        format!("{}\n\n{}", Self::RAW_HTML, indent(variables, Self::INDENT))
    }
}

/// Joins the non-empty parts with a blank line.
fn assemble(heading: &str, content: &str) -> String {
    [heading, content]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn render_variables(variables: &[VarRecord]) -> String {
    variables
        .iter()
        .map(print_var)
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn print_var(record: &VarRecord) -> String {
    format!(
        "{}\n\n{}",
        render_vardef(&record.varname, &record.vartype),
        render_vardoc(&record.vardoc)
    )
}

pub fn render_varname(varname: &str) -> String {
    if varname.is_empty() {
        return String::new();
    }
    format!("<code>{varname}</code>")
}

pub fn render_vartype(vartype: &str) -> String {
    if vartype.is_empty() {
        return String::new();
    }
    format!("<em>{vartype}</em>")
}

/// `name : type`; a bare name is shown in italics instead of code.
pub fn make_vardef(varname: &str, vartype: &str) -> String {
    let varname = render_varname(varname);
    let vartype = render_vartype(vartype);

    if varname.is_empty() || vartype.is_empty() {
        let single = if varname.is_empty() { vartype } else { varname };
        return single.replace("<code>", "<em>").replace("</code>", "</em>");
    }
    format!("{varname} : {vartype}")
}

pub fn render_vardef(varname: &str, vartype: &str) -> String {
    format!(
        "<p><span class=\"vardef\">{}</span></p>",
        make_vardef(varname, vartype)
    )
}

/// Description lines left-stripped and indented by two spaces.
pub fn render_vardoc(vardoc: &str) -> String {
    let text = emphasize(vardoc)
        .lines()
        .map(|line| format!("  {}", line.trim_start()))
        .collect::<Vec<_>>()
        .join("\n");
    format!("<dl><dd>\n{text}\n</dd></dl>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn varname_and_vartype() {
        assert_eq!(render_varname(""), "");
        assert_eq!(render_varname("VAR"), "<code>VAR</code>");
        assert_eq!(render_vartype(""), "");
        assert_eq!(render_vartype("TYPE"), "<em>TYPE</em>");
    }

    #[test]
    fn vardef_with_and_without_type() {
        assert_eq!(make_vardef("VAR", ""), "<em>VAR</em>");
        assert_eq!(make_vardef("VAR", "TYPE"), "<code>VAR</code> : <em>TYPE</em>");
        assert_eq!(make_vardef("", "TYPE"), "<em>TYPE</em>");
    }

    #[test]
    fn vardoc() {
        assert_eq!(render_vardoc("DOC"), "<dl><dd>\n  DOC\n</dd></dl>");
        assert_eq!(render_vardoc(""), "<dl><dd>\n\n</dd></dl>");
        assert_eq!(
            render_vardoc("If True,\n    stop."),
            "<dl><dd>\n  If <em>True</em>,\n  stop.\n</dd></dl>"
        );
    }

    #[test]
    fn section_only_heading() {
        let block = DocBlock::Section {
            heading: "Notes".to_string(),
            content: String::new(),
        };
        assert_eq!(MarkdownPrinter.print_block(&block), "<b>Notes</b>");
        assert_eq!(RstPrinter.print_block(&block), "**Notes**");
    }

    #[test]
    fn section_content_emphasis_differs_per_printer() {
        let block = DocBlock::Section {
            heading: "Notes".to_string(),
            content: "Use `x`.".to_string(),
        };
        assert_eq!(
            MarkdownPrinter.print_block(&block),
            "<b>Notes</b>\n\nUse <code>x</code>."
        );
        assert_eq!(RstPrinter.print_block(&block), "**Notes**\n\nUse `x`.");
    }

    #[test]
    fn empty_varlist() {
        let block = DocBlock::Varlist {
            heading: "Parameters".to_string(),
            variables: Vec::new(),
        };
        assert_eq!(MarkdownPrinter.print_block(&block), "<b>Parameters</b>");
        assert_eq!(RstPrinter.print_block(&block), "**Parameters**");
    }

    #[test]
    fn textdata_is_verbatim() {
        let block = DocBlock::Textdata {
            content: "Some *text*".to_string(),
        };
        assert_eq!(MarkdownPrinter.print_block(&block), "Some *text*");
        assert_eq!(RstPrinter.print_block(&block), "Some *text*");
    }
}
