//! Rendering engines
//!
//! Documents never render themselves. They pass themselves to an [`Engine`],
//! which decides how a title and a flattened description turn into markdown
//! or HTML.

use itertools::Itertools;
use pulldown_cmark::{html, Options, Parser};

use crate::doc::Document;
use crate::error::Result;
use crate::html_page::wrap_page;
use crate::markdown::{Markdownable, Title};

/// Renders documents to markdown and HTML
pub trait Engine {
    /// Render a document as markdown
    fn render_markdown(&self, doc: &dyn Document) -> Result<String>;

    /// Render a document as HTML
    ///
    /// Returns `Ok(None)` when there is nothing to render.
    fn render_html(&self, doc: &dyn Document) -> Result<Option<String>>;
}

/// Options for [`MarkdownEngine`]
#[derive(Debug, Clone, Default)]
pub struct EngineOptions {
    /// Wrap HTML output in a complete page
    pub standalone: bool,
    /// CSS embedded in standalone pages (built-in stylesheet when `None`)
    pub stylesheet: Option<String>,
}

/// Default engine: joins markdown blocks and converts them with pulldown-cmark
#[derive(Debug, Clone, Default)]
pub struct MarkdownEngine {
    options: EngineOptions,
}

impl MarkdownEngine {
    /// Engine producing HTML fragments
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with explicit options
    pub fn with_options(options: EngineOptions) -> Self {
        Self { options }
    }

    /// Current options
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Title and assembled markdown for a document
    fn assemble(&self, doc: &dyn Document) -> Result<(Title, String)> {
        let title = doc.get_title()?;
        let description = doc.get_description()?;

        let heading = if title.text().trim().is_empty() {
            None
        } else {
            Some(title.to_markdown())
        };

        let body = heading
            .into_iter()
            .chain(description.iter().map(Markdownable::to_markdown))
            .filter(|block| !block.trim().is_empty())
            .join("\n\n");

        log::debug!(
            "Assembled {} ({} description items, depth {})",
            doc.path().display(),
            description.len(),
            doc.depth()
        );

        if body.is_empty() {
            Ok((title, body))
        } else {
            Ok((title, body + "\n"))
        }
    }
}

/// Markdown extensions enabled for HTML conversion
pub(crate) fn parser_options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_FOOTNOTES);
    options
}

/// Convert markdown to an HTML fragment
pub fn markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, parser_options());
    let mut output = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut output, parser);
    output
}

impl Engine for MarkdownEngine {
    fn render_markdown(&self, doc: &dyn Document) -> Result<String> {
        let (_, markdown) = self.assemble(doc)?;
        Ok(markdown)
    }

    fn render_html(&self, doc: &dyn Document) -> Result<Option<String>> {
        let (title, markdown) = self.assemble(doc)?;
        if markdown.is_empty() {
            return Ok(None);
        }

        let fragment = markdown_to_html(&markdown);
        if !self.options.standalone {
            return Ok(Some(fragment));
        }

        Ok(Some(wrap_page(
            title.text(),
            &fragment,
            self.options.stylesheet.as_deref(),
        )))
    }
}
