//! Block quote element

use super::Markdownable;

/// A block quote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    /// Quoted markdown
    pub text: String,
}

impl Quote {
    /// Create a quote
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Markdownable for Quote {
    fn to_markdown(&self) -> String {
        self.text
            .lines()
            .map(|line| {
                if line.is_empty() {
                    ">".to_string()
                } else {
                    format!("> {}", line)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
