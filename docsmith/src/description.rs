//! Description model
//!
//! A document describes itself as an ordered list of entries. Each entry is
//! either a single markdown element or a group of elements; groups let a
//! document emit a sub-heading together with the blocks that belong to it.
//! [`Description::flatten`] collapses groups one level into a single ordered
//! sequence of items.

use crate::markdown::{Code, List, Markdownable, Quote, Table, Title};

/// One markdown element in a document description
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptionItem {
    /// A heading
    Title(Title),
    /// A paragraph of inline markdown
    Text(String),
    /// A fenced code block
    Code(Code),
    /// A flat list
    List(List),
    /// A pipe table
    Table(Table),
    /// A block quote
    Quote(Quote),
    /// A horizontal rule
    Rule,
    /// Markdown emitted as-is
    Raw(String),
}

impl DescriptionItem {
    /// Shift a heading item by `offset` levels; other items are unchanged
    pub fn rebased(self, offset: u32) -> Self {
        match self {
            DescriptionItem::Title(title) => {
                let depth = title.depth().saturating_add(offset);
                DescriptionItem::Title(title.with_depth(depth))
            }
            other => other,
        }
    }
}

impl Markdownable for DescriptionItem {
    fn to_markdown(&self) -> String {
        match self {
            DescriptionItem::Title(title) => title.to_markdown(),
            DescriptionItem::Text(text) => text.trim().to_string(),
            DescriptionItem::Code(code) => code.to_markdown(),
            DescriptionItem::List(list) => list.to_markdown(),
            DescriptionItem::Table(table) => table.to_markdown(),
            DescriptionItem::Quote(quote) => quote.to_markdown(),
            DescriptionItem::Rule => "---".to_string(),
            DescriptionItem::Raw(raw) => raw.trim_end().to_string(),
        }
    }
}

impl From<Title> for DescriptionItem {
    fn from(title: Title) -> Self {
        DescriptionItem::Title(title)
    }
}

impl From<Code> for DescriptionItem {
    fn from(code: Code) -> Self {
        DescriptionItem::Code(code)
    }
}

impl From<List> for DescriptionItem {
    fn from(list: List) -> Self {
        DescriptionItem::List(list)
    }
}

impl From<Table> for DescriptionItem {
    fn from(table: Table) -> Self {
        DescriptionItem::Table(table)
    }
}

impl From<Quote> for DescriptionItem {
    fn from(quote: Quote) -> Self {
        DescriptionItem::Quote(quote)
    }
}

impl From<String> for DescriptionItem {
    fn from(text: String) -> Self {
        DescriptionItem::Text(text)
    }
}

impl From<&str> for DescriptionItem {
    fn from(text: &str) -> Self {
        DescriptionItem::Text(text.to_string())
    }
}

/// A description entry: a single item or a group of items
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptionEntry {
    /// A single item
    Item(DescriptionItem),
    /// Items spliced into the surrounding sequence when flattened
    Group(Vec<DescriptionItem>),
}

impl From<DescriptionItem> for DescriptionEntry {
    fn from(item: DescriptionItem) -> Self {
        DescriptionEntry::Item(item)
    }
}

impl From<Vec<DescriptionItem>> for DescriptionEntry {
    fn from(items: Vec<DescriptionItem>) -> Self {
        DescriptionEntry::Group(items)
    }
}

/// Ordered description of a document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Description {
    entries: Vec<DescriptionEntry>,
}

impl Description {
    /// Empty description
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single item
    pub fn push(&mut self, item: impl Into<DescriptionItem>) -> &mut Self {
        self.entries.push(DescriptionEntry::Item(item.into()));
        self
    }

    /// Append a group of items that is spliced in place when flattened
    pub fn group<I>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<DescriptionItem>,
    {
        self.entries.push(DescriptionEntry::Group(
            items.into_iter().map(Into::into).collect(),
        ));
        self
    }

    /// Number of top-level entries (groups count once)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when there are no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Top-level entries
    pub fn entries(&self) -> &[DescriptionEntry] {
        &self.entries
    }

    /// Flatten groups one level, preserving order
    pub fn flatten(self) -> Vec<DescriptionItem> {
        let mut items = Vec::with_capacity(self.entries.len());
        for entry in self.entries {
            match entry {
                DescriptionEntry::Item(item) => items.push(item),
                DescriptionEntry::Group(group) => items.extend(group),
            }
        }
        items
    }
}

impl From<Vec<DescriptionEntry>> for Description {
    fn from(entries: Vec<DescriptionEntry>) -> Self {
        Self { entries }
    }
}

impl From<Vec<DescriptionItem>> for Description {
    fn from(items: Vec<DescriptionItem>) -> Self {
        Self {
            entries: items.into_iter().map(DescriptionEntry::Item).collect(),
        }
    }
}

impl FromIterator<DescriptionEntry> for Description {
    fn from_iter<I: IntoIterator<Item = DescriptionEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Extend<DescriptionEntry> for Description {
    fn extend<I: IntoIterator<Item = DescriptionEntry>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}
