//! Document base abstraction
//!
//! A document node owns its path and heading depth and borrows the engine
//! that renders it. Concrete document kinds only supply a title and a
//! description through [`DocContent`]; [`BaseDoc`] does the rest.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::description::{Description, DescriptionItem};
use crate::engine::Engine;
use crate::error::Result;
use crate::markdown::{Markdown, Title};

/// Depth a new document starts at
pub const DEFAULT_DEPTH: u32 = 1;

/// Title as returned by a document kind: raw text or an already formatted heading
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleSource {
    /// Plain text, formatted at the document's depth
    Raw(String),
    /// Heading passed through unchanged
    Formatted(Title),
}

impl From<&str> for TitleSource {
    fn from(text: &str) -> Self {
        TitleSource::Raw(text.to_string())
    }
}

impl From<String> for TitleSource {
    fn from(text: String) -> Self {
        TitleSource::Raw(text)
    }
}

impl From<Title> for TitleSource {
    fn from(title: Title) -> Self {
        TitleSource::Formatted(title)
    }
}

/// What a document kind can see about the node it belongs to
#[derive(Debug, Clone, Copy)]
pub struct DocContext<'a> {
    path: &'a Path,
    depth: u32,
}

impl<'a> DocContext<'a> {
    /// Context for a node at `path` and `depth`
    pub fn new(path: &'a Path, depth: u32) -> Self {
        Self { path, depth }
    }

    /// Source path of the node
    pub fn path(&self) -> &'a Path {
        self.path
    }

    /// Current depth of the node
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Heading `relative_depth` levels below the node
    pub fn sub_title(&self, text: impl Into<String>, relative_depth: u32) -> Title {
        Markdown::title(text, self.depth.saturating_add(relative_depth))
    }

    /// Heading one level below the node
    pub fn child_title(&self, text: impl Into<String>) -> Title {
        self.sub_title(text, 1)
    }
}

/// Title and description supplied by a concrete document kind
pub trait DocContent {
    /// Document title
    fn title(&self, ctx: &DocContext<'_>) -> Result<TitleSource>;

    /// Document body, possibly grouped
    fn describe(&self, ctx: &DocContext<'_>) -> Result<Description>;
}

/// The view of a document that engines render
pub trait Document {
    /// Source path
    fn path(&self) -> &Path;

    /// Heading depth
    fn depth(&self) -> u32;

    /// Formatted title
    fn get_title(&self) -> Result<Title>;

    /// Flattened description
    fn get_description(&self) -> Result<Vec<DescriptionItem>>;
}

/// A document node: engine reference, path, depth and content
pub struct BaseDoc<'e, C> {
    engine: &'e dyn Engine,
    path: PathBuf,
    depth: u32,
    content: C,
}

impl<'e, C: DocContent> BaseDoc<'e, C> {
    /// Create a document node at [`DEFAULT_DEPTH`]
    ///
    /// # Parameters
    /// * `engine` - Engine used by [`BaseDoc::to_markdown`] and [`BaseDoc::to_html`]
    /// * `path` - Source path of the document
    /// * `content` - Concrete document kind
    pub fn new(engine: &'e dyn Engine, path: impl Into<PathBuf>, content: C) -> Self {
        Self {
            engine,
            path: path.into(),
            depth: DEFAULT_DEPTH,
            content,
        }
    }

    /// Source path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Concrete document kind
    pub fn content(&self) -> &C {
        &self.content
    }

    /// Mutable access to the document kind
    pub fn content_mut(&mut self) -> &mut C {
        &mut self.content
    }

    fn context(&self) -> DocContext<'_> {
        DocContext::new(&self.path, self.depth)
    }

    /// Heading at `depth + relative_depth`
    pub fn sub_title(&self, text: impl Into<String>, relative_depth: u32) -> Title {
        self.context().sub_title(text, relative_depth)
    }

    /// Title of the document
    ///
    /// A formatted title is returned as-is. Raw text becomes a heading at the
    /// current depth.
    pub fn get_title(&self) -> Result<Title> {
        match self.content.title(&self.context())? {
            TitleSource::Formatted(title) => Ok(title),
            TitleSource::Raw(text) => Ok(Markdown::title(text, self.depth)),
        }
    }

    /// Description with groups flattened one level
    pub fn get_description(&self) -> Result<Vec<DescriptionItem>> {
        Ok(self.content.describe(&self.context())?.flatten())
    }

    /// Set the depth; returns `self` for chaining
    pub fn set_depth(&mut self, depth: u32) -> &mut Self {
        self.depth = depth;
        self
    }

    /// Current depth
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Render through the engine as markdown
    pub fn to_markdown(&self) -> Result<String> {
        self.engine.render_markdown(self)
    }

    /// Render through the engine as HTML
    pub fn to_html(&self) -> Result<Option<String>> {
        self.engine.render_html(self)
    }
}

impl<C: DocContent> Document for BaseDoc<'_, C> {
    fn path(&self) -> &Path {
        BaseDoc::path(self)
    }

    fn depth(&self) -> u32 {
        BaseDoc::depth(self)
    }

    fn get_title(&self) -> Result<Title> {
        BaseDoc::get_title(self)
    }

    fn get_description(&self) -> Result<Vec<DescriptionItem>> {
        BaseDoc::get_description(self)
    }
}

impl<C: fmt::Debug> fmt::Debug for BaseDoc<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BaseDoc")
            .field("path", &self.path)
            .field("depth", &self.depth)
            .field("content", &self.content)
            .finish_non_exhaustive()
    }
}

/// Renders HTML, or nothing when the engine produces no output or fails
impl<C: DocContent> fmt::Display for BaseDoc<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_html() {
            Ok(Some(html)) => f.write_str(&html),
            Ok(None) => Ok(()),
            Err(e) => {
                log::warn!("Failed to render {} as HTML: {}", self.path.display(), e);
                Ok(())
            }
        }
    }
}
