//! Document built from a directory of markdown files

use std::fs::File;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::markdown_file::MarkdownFileDoc;
use super::names::humanize;
use crate::description::{Description, DescriptionEntry, DescriptionItem};
use crate::doc::{DocContent, DocContext, TitleSource};
use crate::error::{DocError, Result};
use crate::markdown::{Markdown, Table};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// File names whose content introduces the directory itself, by preference
const INDEX_FILES: [&str; 2] = ["index.md", "readme.md"];

/// Default limit on sub-directory recursion
pub const DEFAULT_MAX_DEPTH: usize = 8;

/// Kind of entry found in a documentation directory
#[derive(Debug, Clone, PartialEq, Eq)]
enum Entry {
    Markdown(PathBuf),
    Csv(PathBuf),
    Directory(PathBuf),
}

/// A directory rendered as one document
///
/// An index file (`index.md`, otherwise `README.md`) opens the description
/// and its leading `h1` titles the directory unless a title is set. Every
/// other markdown file, CSV table and sub-directory follows in file-name
/// order as a group headed one level below the directory.
#[derive(Debug, Clone)]
pub struct DirectoryDoc {
    title: Option<String>,
    max_depth: usize,
    include_tables: bool,
}

impl Default for DirectoryDoc {
    fn default() -> Self {
        Self {
            title: None,
            max_depth: DEFAULT_MAX_DEPTH,
            include_tables: true,
        }
    }
}

impl DirectoryDoc {
    /// Directory document with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fixed title instead of the directory name
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Limit how many levels of sub-directories are included
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Include or skip CSV tables
    pub fn with_tables(mut self, include_tables: bool) -> Self {
        self.include_tables = include_tables;
        self
    }

    /// Sub-directory document with one less level of recursion
    fn child(&self) -> Self {
        Self {
            title: None,
            max_depth: self.max_depth.saturating_sub(1),
            include_tables: self.include_tables,
        }
    }

    /// Index file and remaining entries of `root`, sorted by file name
    fn scan(&self, root: &Path) -> Result<(Option<PathBuf>, Vec<Entry>)> {
        let mut entries = Vec::new();

        for entry in WalkDir::new(root)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
            .sort_by_file_name()
        {
            let entry = entry?;
            let path = entry.path().to_path_buf();

            if entry.file_name().to_string_lossy().starts_with('.') {
                continue;
            }

            if entry.file_type().is_dir() {
                if self.max_depth > 0 {
                    entries.push(Entry::Directory(path));
                } else {
                    log::warn!("Skipping {} (max depth reached)", path.display());
                }
                continue;
            }

            match path.extension().and_then(|s| s.to_str()) {
                Some("md") | Some("markdown") => entries.push(Entry::Markdown(path)),
                Some("csv") if self.include_tables => entries.push(Entry::Csv(path)),
                _ => log::debug!("Ignoring {}", path.display()),
            }
        }

        let index = INDEX_FILES.iter().find_map(|index_name| {
            entries.iter().position(|entry| match entry {
                Entry::Markdown(path) => file_name_is(path, index_name),
                _ => false,
            })
        });
        let index = index.map(|pos| match entries.remove(pos) {
            Entry::Markdown(path) | Entry::Csv(path) | Entry::Directory(path) => path,
        });

        Ok((index, entries))
    }

    /// Leading `h1` of the directory's index file
    fn index_title(&self, root: &Path) -> Result<Option<String>> {
        match self.scan(root)?.0 {
            Some(index) => Ok(MarkdownFileDoc::load(&index)?.leading_title),
            None => Ok(None),
        }
    }

    /// Describe one entry as a group headed at `depth`
    fn describe_entry(&self, entry: &Entry, depth: u32) -> Result<Option<DescriptionEntry>> {
        match entry {
            Entry::Markdown(path) => {
                let ctx = DocContext::new(path, depth);
                let content = MarkdownFileDoc::new();
                let mut items = vec![title_item(content.title(&ctx)?, depth)];
                items.extend(content.describe(&ctx)?.flatten());
                Ok(Some(DescriptionEntry::Group(items)))
            }
            Entry::Csv(path) => {
                let file = File::open(path).map_err(|e| DocError::io(path, e))?;
                let table = Table::from_csv(file).map_err(|source| DocError::Csv {
                    path: path.clone(),
                    source,
                })?;
                let title = MarkdownFileDoc::fallback_title(path);
                Ok(Some(DescriptionEntry::Group(vec![
                    Markdown::title(title, depth).into(),
                    table.into(),
                ])))
            }
            Entry::Directory(path) => {
                let ctx = DocContext::new(path, depth);
                let child = self.child();
                let description = child.describe(&ctx)?;
                if description.is_empty() {
                    log::debug!("Skipping empty directory {}", path.display());
                    return Ok(None);
                }
                let mut items = vec![title_item(child.title(&ctx)?, depth)];
                items.extend(description.flatten());
                Ok(Some(DescriptionEntry::Group(items)))
            }
        }
    }
}

/// Case-insensitive file name check
fn file_name_is(path: &Path, name: &str) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .is_some_and(|file_name| file_name.eq_ignore_ascii_case(name))
}

/// Format a child title at `depth` the way a document node would
fn title_item(title: TitleSource, depth: u32) -> DescriptionItem {
    match title {
        TitleSource::Formatted(title) => title.into(),
        TitleSource::Raw(text) => Markdown::title(text, depth).into(),
    }
}

/// Name of a directory, resolving `.` and `..` through the file system
fn directory_name(path: &Path) -> String {
    if let Some(name) = path.file_name().and_then(|s| s.to_str()) {
        return name.to_string();
    }
    path.canonicalize()
        .ok()
        .and_then(|p| p.file_name().and_then(|s| s.to_str()).map(str::to_string))
        .unwrap_or_else(|| "Documentation".to_string())
}

impl DocContent for DirectoryDoc {
    fn title(&self, ctx: &DocContext<'_>) -> Result<TitleSource> {
        if let Some(title) = &self.title {
            return Ok(title.clone().into());
        }
        match self.index_title(ctx.path())? {
            Some(title) => Ok(title.into()),
            None => Ok(humanize(&directory_name(ctx.path())).into()),
        }
    }

    fn describe(&self, ctx: &DocContext<'_>) -> Result<Description> {
        let (index, entries) = self.scan(ctx.path())?;
        log::info!(
            "Describing {} ({} entries)",
            ctx.path().display(),
            entries.len()
        );

        let mut description = Description::new();

        if let Some(index) = index {
            let index_ctx = DocContext::new(&index, ctx.depth());
            let index_items = MarkdownFileDoc::new().describe(&index_ctx)?.flatten();
            description.extend(index_items.into_iter().map(DescriptionEntry::Item));
        }

        let child_depth = ctx.depth().saturating_add(1);

        #[cfg(feature = "parallel")]
        let groups: Result<Vec<_>> = entries
            .par_iter()
            .map(|entry| self.describe_entry(entry, child_depth))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let groups: Result<Vec<_>> = entries
            .iter()
            .map(|entry| self.describe_entry(entry, child_depth))
            .collect();

        description.extend(groups?.into_iter().flatten());

        Ok(description)
    }
}
