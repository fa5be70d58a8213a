//! Document backed by a single markdown file

use std::fs;
use std::path::Path;

use super::names::humanize;
use super::source::{parse_source, MarkdownSource};
use crate::description::Description;
use crate::doc::{DocContent, DocContext, TitleSource};
use crate::error::{DocError, Result};

/// A markdown file read from the node's path
///
/// The file is read again on every call so edits show up on the next render.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownFileDoc;

impl MarkdownFileDoc {
    /// Create a markdown file document
    pub fn new() -> Self {
        Self
    }

    /// Read and split the file at `path`
    pub fn load(path: &Path) -> Result<MarkdownSource> {
        log::debug!("Reading markdown file {}", path.display());
        let content = fs::read_to_string(path).map_err(|e| DocError::io(path, e))?;
        Ok(parse_source(&content))
    }

    /// Title to use when the file has no leading `h1`
    pub fn fallback_title(path: &Path) -> String {
        path.file_stem()
            .and_then(|s| s.to_str())
            .map(humanize)
            .unwrap_or_default()
    }
}

impl DocContent for MarkdownFileDoc {
    fn title(&self, ctx: &DocContext<'_>) -> Result<TitleSource> {
        let source = Self::load(ctx.path())?;
        Ok(source
            .leading_title
            .unwrap_or_else(|| Self::fallback_title(ctx.path()))
            .into())
    }

    fn describe(&self, ctx: &DocContext<'_>) -> Result<Description> {
        let source = Self::load(ctx.path())?;
        Ok(Description::from(source.items_at(ctx.depth())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::description::DescriptionItem;
    use crate::markdown::Title;
    use std::path::PathBuf;

    fn write_temp(name: &str, content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn test_title_from_leading_heading() {
        let (_dir, path) = write_temp("01_intro.md", "# Introduction\n\nHello.\n");
        let ctx = DocContext::new(&path, 1);
        assert_eq!(
            MarkdownFileDoc.title(&ctx).unwrap(),
            TitleSource::Raw("Introduction".to_string())
        );
    }

    #[test]
    fn test_title_falls_back_to_file_name() {
        let (_dir, path) = write_temp("02_getting-started.md", "No heading here.\n");
        let ctx = DocContext::new(&path, 1);
        assert_eq!(
            MarkdownFileDoc.title(&ctx).unwrap(),
            TitleSource::Raw("Getting Started".to_string())
        );
    }

    #[test]
    fn test_describe_rebases_headings() {
        let (_dir, path) = write_temp("guide.md", "# Guide\n\n## Setup\n\nSteps.\n");
        let ctx = DocContext::new(&path, 2);
        assert_eq!(
            MarkdownFileDoc.describe(&ctx).unwrap().flatten(),
            vec![
                DescriptionItem::Title(Title::new("Setup", 3)),
                DescriptionItem::Raw("Steps.".to_string()),
            ]
        );
    }

    #[test]
    fn test_missing_file_reports_path() {
        let path = PathBuf::from("/nonexistent/docsmith/missing.md");
        let ctx = DocContext::new(&path, 1);
        match MarkdownFileDoc.title(&ctx) {
            Err(DocError::Io { path: err_path, .. }) => assert_eq!(err_path, path),
            other => panic!("expected IO error, got {:?}", other),
        }
    }
}
