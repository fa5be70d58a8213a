//! Fenced code block element

use super::inline::longest_run;
use super::Markdownable;

/// A fenced code block with an optional language tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Code {
    /// Info string after the opening fence
    pub language: Option<String>,
    /// Code without the fences
    pub source: String,
}

impl Code {
    /// Create a code block
    pub fn new(language: Option<String>, source: impl Into<String>) -> Self {
        Self {
            language: language.filter(|lang| !lang.trim().is_empty()),
            source: source.into(),
        }
    }
}

impl Markdownable for Code {
    fn to_markdown(&self) -> String {
        // The fence must be longer than any backtick run in the body
        let fence = "`".repeat(longest_run(&self.source, '`').max(2) + 1);
        let lang = self.language.as_deref().unwrap_or("");
        let body = self.source.trim_end_matches('\n');
        format!("{fence}{lang}\n{body}\n{fence}")
    }
}
