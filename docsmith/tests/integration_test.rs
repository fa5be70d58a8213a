use docsmith::config::{DocsConfig, Format, CONFIG_FILE_NAME};
use docsmith::description::{Description, DescriptionItem};
use docsmith::doc::{BaseDoc, DocContent, DocContext, Document, TitleSource};
use docsmith::docs::{DirectoryDoc, PageDoc};
use docsmith::engine::{Engine, MarkdownEngine};
use docsmith::markdown::{Markdown, Title};
use docsmith::{build, Result};
use std::fs;
use std::path::Path;

/// Engine whose HTML output never exists
struct SilentEngine;

impl Engine for SilentEngine {
    fn render_markdown(&self, doc: &dyn Document) -> Result<String> {
        Ok(doc.get_title()?.to_string())
    }

    fn render_html(&self, _doc: &dyn Document) -> Result<Option<String>> {
        Ok(None)
    }
}

/// Document kind that emits grouped reference sections
struct ApiReference {
    functions: Vec<(&'static str, &'static str)>,
}

impl DocContent for ApiReference {
    fn title(&self, _ctx: &DocContext<'_>) -> Result<TitleSource> {
        Ok("API Reference".into())
    }

    fn describe(&self, ctx: &DocContext<'_>) -> Result<Description> {
        let mut description = Description::new();
        description.push("Functions exported by the crate.");
        for (name, summary) in &self.functions {
            description.group(vec![
                DescriptionItem::from(ctx.sub_title(*name, 1)),
                DescriptionItem::from(*summary),
            ]);
        }
        Ok(description)
    }
}

fn write_tree(root: &Path) {
    fs::write(root.join("index.md"), "# Handbook\n\nWelcome.\n").unwrap();
    fs::write(
        root.join("01_setup.md"),
        "# Setup\n\n```sh\ncargo install docsmith\n```\n",
    )
    .unwrap();
    fs::write(root.join("02_faq.md"), "## Why?\n\nBecause.\n").unwrap();
}

#[test]
fn test_custom_document_kind_renders_nested_headings() {
    let engine = MarkdownEngine::new();
    let content = ApiReference {
        functions: vec![("render", "Render a node."), ("flatten", "Flatten groups.")],
    };
    let mut doc = BaseDoc::new(&engine, "api.md", content);
    doc.set_depth(2);

    assert_eq!(
        doc.to_markdown().unwrap(),
        "## API Reference\n\nFunctions exported by the crate.\n\n### render\n\nRender a node.\n\n### flatten\n\nFlatten groups.\n"
    );
}

#[test]
fn test_description_flattening_matches_groups() {
    let engine = MarkdownEngine::new();
    let content = ApiReference {
        functions: vec![("a", "first"), ("b", "second")],
    };
    let doc = BaseDoc::new(&engine, "api.md", content);

    let items = doc.get_description().unwrap();
    assert_eq!(items.len(), 5);
    assert_eq!(items[1], DescriptionItem::Title(Title::new("a", 2)));
    assert_eq!(items[4], DescriptionItem::Text("second".to_string()));
}

#[test]
fn test_display_is_empty_without_html() {
    let engine = SilentEngine;
    let doc = BaseDoc::new(&engine, "page.md", PageDoc::new("Notes", Description::new()));
    assert_eq!(doc.to_string(), "");
    assert_eq!(doc.to_markdown().unwrap(), "# Notes");
}

#[test]
fn test_formatted_title_is_not_rewrapped() {
    let engine = MarkdownEngine::new();
    let mut doc = BaseDoc::new(
        &engine,
        "page.md",
        PageDoc::new(Markdown::title("Pinned", 4), Description::new()),
    );
    doc.set_depth(1);
    assert_eq!(doc.get_title().unwrap(), Title::new("Pinned", 4));
    assert_eq!(doc.to_markdown().unwrap(), "#### Pinned\n");
}

#[test]
fn test_directory_to_markdown() {
    let dir = tempfile::tempdir().unwrap();
    write_tree(dir.path());

    let engine = MarkdownEngine::new();
    let doc = BaseDoc::new(
        &engine,
        dir.path(),
        DirectoryDoc::new().with_title("Handbook"),
    );

    assert_eq!(
        doc.to_markdown().unwrap(),
        "# Handbook\n\nWelcome.\n\n## Setup\n\n```sh\ncargo install docsmith\n```\n\n## Faq\n\n### Why?\n\nBecause.\n"
    );
}

#[test]
fn test_build_directory_to_html_with_config() {
    let dir = tempfile::tempdir().unwrap();
    write_tree(dir.path());
    fs::write(dir.path().join("theme.css"), "h1 { color: teal; }").unwrap();
    fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        "title = \"Team Handbook\"\n\n[html]\nstylesheet = \"theme.css\"\n",
    )
    .unwrap();

    let config = DocsConfig::load_or_default(dir.path()).unwrap();
    let html = build::render(dir.path(), &config, Format::Html).unwrap();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Team Handbook</title>"));
    assert!(html.contains("h1 { color: teal; }"));
    assert!(html.contains("<h1>Team Handbook</h1>"));
    assert!(html.contains("<h2>Setup</h2>"));
    assert!(html.contains("<code class=\"language-sh\">cargo install docsmith\n</code>"));
}

#[test]
fn test_build_fragment_without_standalone() {
    let dir = tempfile::tempdir().unwrap();
    write_tree(dir.path());

    let mut config = DocsConfig::default();
    config.html.standalone = false;
    let html = build::render(&dir.path().join("02_faq.md"), &config, Format::Html).unwrap();

    assert_eq!(html, "<h1>Faq</h1>\n<h2>Why?</h2>\n<p>Because.</p>\n");
}
