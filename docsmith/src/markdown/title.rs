//! Heading element

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

use super::Markdownable;

/// Deepest heading level markdown supports
pub const MAX_HEADING_LEVEL: u32 = 6;

static NON_SLUG_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\w\- ]").expect("static regex is valid")
});

/// A formatted heading: text plus nesting depth
///
/// The depth is kept as given. Rendering clamps it into the 1..=6 range
/// markdown can express.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title {
    text: String,
    depth: u32,
}

impl Title {
    /// Create a heading at the given depth
    pub fn new(text: impl Into<String>, depth: u32) -> Self {
        Self {
            text: text.into(),
            depth,
        }
    }

    /// Heading text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Depth as requested by the document
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Heading level actually written (1..=6)
    pub fn level(&self) -> u32 {
        self.depth.clamp(1, MAX_HEADING_LEVEL)
    }

    /// Same text at a different depth
    pub fn with_depth(&self, depth: u32) -> Self {
        Self::new(self.text.clone(), depth)
    }

    /// GitHub-style anchor slug for links into the rendered page
    pub fn anchor(&self) -> String {
        NON_SLUG_CHARS
            .replace_all(&self.text.trim().to_lowercase(), "")
            .replace(' ', "-")
    }
}

impl Markdownable for Title {
    fn to_markdown(&self) -> String {
        format!("{} {}", "#".repeat(self.level() as usize), self.text.trim())
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_markdown())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_to_markdown() {
        assert_eq!(Title::new("Overview", 1).to_markdown(), "# Overview");
        assert_eq!(Title::new("Details", 4).to_markdown(), "#### Details");
    }

    #[test]
    fn test_level_is_clamped_but_depth_is_kept() {
        let deep = Title::new("Deep", 9);
        assert_eq!(deep.depth(), 9);
        assert_eq!(deep.level(), 6);
        assert_eq!(deep.to_markdown(), "###### Deep");

        let zero = Title::new("Root", 0);
        assert_eq!(zero.depth(), 0);
        assert_eq!(zero.to_markdown(), "# Root");
    }

    #[test]
    fn test_anchor() {
        assert_eq!(Title::new("Getting Started!", 2).anchor(), "getting-started");
        assert_eq!(Title::new("API: v2 & more", 2).anchor(), "api-v2--more");
    }

    #[test]
    fn test_display_matches_markdown() {
        let title = Title::new("Usage", 2);
        assert_eq!(title.to_string(), "## Usage");
    }
}
