//! One marker type per block kind, each owning its delimiters and its
//! HTML rendering.

pub mod code_fence;
pub mod heading;
pub mod list;
pub mod paragraph;
pub mod rule;
pub mod table;

pub use code_fence::CodeFence;
pub use heading::Heading;
pub use list::List;
pub use paragraph::Paragraph;
pub use rule::Rule;
pub use table::Table;
