//! Rendering a documentation source to a string

use std::path::Path;

use crate::config::{DocsConfig, Format};
use crate::doc::{BaseDoc, DocContent};
use crate::docs::MarkdownFileDoc;
use crate::engine::MarkdownEngine;
use crate::error::{DocError, Result};

/// Directory that holds the configuration for `input`
pub fn source_root(input: &Path) -> &Path {
    if input.is_dir() {
        input
    } else {
        input.parent().unwrap_or_else(|| Path::new("."))
    }
}

/// Render a directory or a single markdown file
///
/// # Parameters
/// * `input` - Documentation directory or markdown file
/// * `config` - Build configuration
/// * `format` - Output format
///
/// # Returns
/// * `Ok(String)` - Rendered output (empty when there is nothing to render)
/// * `Err(DocError)` - Error reading sources or the configured stylesheet
pub fn render(input: &Path, config: &DocsConfig, format: Format) -> Result<String> {
    if !input.exists() {
        return Err(DocError::io(
            input,
            std::io::Error::new(std::io::ErrorKind::NotFound, "input does not exist"),
        ));
    }

    let options = config.engine_options(source_root(input))?;
    let engine = MarkdownEngine::with_options(options);

    if input.is_dir() {
        let mut doc = BaseDoc::new(&engine, input, config.directory_doc());
        doc.set_depth(config.depth);
        render_doc(&doc, format)
    } else {
        let mut doc = BaseDoc::new(&engine, input, MarkdownFileDoc::new());
        doc.set_depth(config.depth);
        render_doc(&doc, format)
    }
}

fn render_doc<C: DocContent>(doc: &BaseDoc<'_, C>, format: Format) -> Result<String> {
    log::info!(
        "Rendering {} as {:?} at depth {}",
        doc.path().display(),
        format,
        doc.depth()
    );
    match format {
        Format::Markdown => doc.to_markdown(),
        Format::Html => Ok(doc.to_html()?.unwrap_or_default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_render_single_file_markdown() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("guide.md");
        fs::write(&path, "# Guide\n\n## Setup\n\nDo it.\n").unwrap();

        let config = DocsConfig {
            depth: 2,
            ..DocsConfig::default()
        };
        let output = render(&path, &config, Format::Markdown).unwrap();
        assert_eq!(output, "## Guide\n\n### Setup\n\nDo it.\n");
    }

    #[test]
    fn test_render_missing_input() {
        let config = DocsConfig::default();
        let result = render(Path::new("/nonexistent/docsmith"), &config, Format::Html);
        assert!(matches!(result, Err(DocError::Io { .. })));
    }

    #[test]
    fn test_source_root() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a.md");
        fs::write(&file, "x").unwrap();
        assert_eq!(source_root(dir.path()), dir.path());
        assert_eq!(source_root(&file), dir.path());
    }
}
