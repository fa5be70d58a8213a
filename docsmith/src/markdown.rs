//! Markdown support helper
//!
//! Typed markdown elements used to build document titles and descriptions.
//! Every element renders itself through [`Markdownable`].

mod code;
mod inline;
mod list;
mod quote;
mod table;
mod title;

pub use code::Code;
pub use list::List;
pub use quote::Quote;
pub use table::{Alignment, Table};
pub use title::Title;

/// Anything that can be written out as markdown
pub trait Markdownable {
    /// Render to a markdown string without a trailing blank line
    fn to_markdown(&self) -> String;
}

/// Constructors for markdown elements
///
/// This mirrors the helper documents use to build headings and body blocks,
/// e.g. `Markdown::title("Usage", 2)`.
pub struct Markdown;

impl Markdown {
    /// Create a heading at the given depth
    pub fn title(text: impl Into<String>, depth: u32) -> Title {
        Title::new(text, depth)
    }

    /// Create a fenced code block
    pub fn code(language: Option<&str>, source: impl Into<String>) -> Code {
        Code::new(language.map(str::to_string), source)
    }

    /// Create a bullet list
    pub fn list<I, S>(items: I) -> List
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        List::bullet(items)
    }

    /// Create an ordered list starting at 1
    pub fn ordered_list<I, S>(items: I) -> List
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        List::ordered(1, items)
    }

    /// Create a table from a header row and data rows
    pub fn table(headers: Vec<String>, rows: Vec<Vec<String>>) -> Table {
        Table::new(headers, rows)
    }

    /// Create a block quote
    pub fn quote(text: impl Into<String>) -> Quote {
        Quote::new(text)
    }

    /// `**text**`
    pub fn bold(text: &str) -> String {
        inline::wrap(text, "**")
    }

    /// `*text*`
    pub fn italic(text: &str) -> String {
        inline::wrap(text, "*")
    }

    /// Inline code span, using a longer fence when the text contains backticks
    pub fn inline_code(text: &str) -> String {
        inline::code_span(text)
    }

    /// `[text](url)`
    pub fn link(text: &str, url: &str) -> String {
        format!("[{}]({})", text, url)
    }
}
