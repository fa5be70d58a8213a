//! Concrete document kinds
//!
//! - [`PageDoc`]: title and description held in memory
//! - [`MarkdownFileDoc`]: a single markdown file
//! - [`DirectoryDoc`]: a directory of markdown files and CSV tables

mod directory;
mod markdown_file;
mod names;
mod page;
mod source;

pub use directory::{DirectoryDoc, DEFAULT_MAX_DEPTH};
pub use markdown_file::MarkdownFileDoc;
pub use names::humanize;
pub use page::PageDoc;
pub use source::{parse_source, MarkdownSource, SourceBlock};
