//! Markdown source splitting
//!
//! A markdown file is split into its top-level blocks. Headings are kept
//! with their source level so they can be re-based under the document that
//! includes them; code blocks become [`Code`]; everything else is carried
//! through as raw markdown.

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Parser, Tag};
use std::ops::Range;

use crate::description::DescriptionItem;
use crate::engine::parser_options;
use crate::markdown::{Code, Title};

/// A top-level block of a markdown file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceBlock {
    /// Heading with its level in the source file (1..=6)
    Heading {
        /// Source level
        level: u32,
        /// Heading text without markers
        text: String,
    },
    /// Any other block
    Item(DescriptionItem),
}

/// Parsed markdown file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkdownSource {
    /// Text of a level-1 heading that opens the file
    pub leading_title: Option<String>,
    /// Remaining blocks in source order
    pub blocks: Vec<SourceBlock>,
}

impl MarkdownSource {
    /// Description items with headings placed under `depth`
    ///
    /// The shallowest remaining heading lands one level below `depth` and
    /// deeper headings keep their distance from it, so a file that opens
    /// with `##` does not skip a level.
    pub fn items_at(&self, depth: u32) -> Vec<DescriptionItem> {
        let top = self.shallowest_heading().unwrap_or(1);

        self.blocks
            .iter()
            .map(|block| match block {
                SourceBlock::Heading { level, text } => {
                    let depth = depth.saturating_add(1 + level.saturating_sub(top));
                    DescriptionItem::Title(Title::new(text.clone(), depth))
                }
                SourceBlock::Item(item) => item.clone(),
            })
            .collect()
    }

    /// Lowest heading level among the blocks
    fn shallowest_heading(&self) -> Option<u32> {
        self.blocks
            .iter()
            .filter_map(|block| match block {
                SourceBlock::Heading { level, .. } => Some(*level),
                SourceBlock::Item(_) => None,
            })
            .min()
    }
}

/// State of the top-level block currently being read
enum OpenBlock {
    Heading { level: u32, range: Range<usize> },
    Code { language: Option<String>, source: String },
    Other { range: Range<usize> },
}

/// Split markdown content into top-level blocks
pub fn parse_source(content: &str) -> MarkdownSource {
    let mut blocks = Vec::new();
    let mut nesting = 0usize;
    let mut open: Option<OpenBlock> = None;

    for (event, range) in Parser::new_ext(content, parser_options()).into_offset_iter() {
        match event {
            Event::Start(tag) => {
                if nesting == 0 {
                    open = Some(open_block(tag, range));
                }
                nesting += 1;
            }
            Event::End(_) => {
                nesting = nesting.saturating_sub(1);
                if nesting == 0 {
                    if let Some(block) = open.take() {
                        blocks.push(close_block(block, content));
                    }
                }
            }
            Event::Text(text) if nesting > 0 => {
                if let Some(OpenBlock::Code { source, .. }) = open.as_mut() {
                    source.push_str(&text);
                }
            }
            Event::Rule if nesting == 0 => {
                blocks.push(SourceBlock::Item(DescriptionItem::Rule));
            }
            _ => {}
        }
    }

    let mut leading_title = None;
    if let Some(SourceBlock::Heading { level: 1, text }) = blocks.first() {
        leading_title = Some(text.clone());
        blocks.remove(0);
    }

    MarkdownSource {
        leading_title,
        blocks,
    }
}

fn open_block(tag: Tag<'_>, range: Range<usize>) -> OpenBlock {
    match tag {
        Tag::Heading { level, .. } => OpenBlock::Heading {
            level: heading_level(level),
            range,
        },
        Tag::CodeBlock(kind) => {
            let language = match kind {
                CodeBlockKind::Fenced(info) => info.split_whitespace().next().map(str::to_string),
                CodeBlockKind::Indented => None,
            };
            OpenBlock::Code {
                language,
                source: String::new(),
            }
        }
        _ => OpenBlock::Other { range },
    }
}

fn close_block(block: OpenBlock, content: &str) -> SourceBlock {
    match block {
        OpenBlock::Heading { level, range } => SourceBlock::Heading {
            level,
            text: heading_text(&content[range]),
        },
        OpenBlock::Code { language, source } => {
            SourceBlock::Item(DescriptionItem::Code(Code::new(language, source)))
        }
        OpenBlock::Other { range } => {
            SourceBlock::Item(DescriptionItem::Raw(content[range].trim_end().to_string()))
        }
    }
}

fn heading_level(level: HeadingLevel) -> u32 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

/// Heading text without ATX markers or a setext underline
fn heading_text(raw: &str) -> String {
    let trimmed = raw.trim();

    if trimmed.starts_with('#') {
        let body = trimmed.trim_start_matches('#').trim();
        let stripped = body.trim_end_matches('#');
        // A closing sequence only counts when separated by a space
        if stripped.len() < body.len()
            && (stripped.is_empty() || stripped.ends_with(char::is_whitespace))
        {
            return stripped.trim_end().to_string();
        }
        return body.to_string();
    }

    let mut lines: Vec<&str> = trimmed.lines().collect();
    lines.pop();
    lines
        .iter()
        .map(|line| line.trim())
        .collect::<Vec<_>>()
        .join(" ")
}
