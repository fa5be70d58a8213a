//! List element

use super::Markdownable;

/// A flat list of inline markdown items
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct List {
    /// Starting number for ordered lists, `None` for bullet lists
    pub start: Option<u64>,
    /// Item contents (inline markdown)
    pub items: Vec<String>,
}

impl List {
    /// Bullet list
    pub fn bullet<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            start: None,
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// Ordered list starting at `start`
    pub fn ordered<I, S>(start: u64, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            start: Some(start),
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// Marker for the item at `index`
    fn marker(&self, index: usize) -> String {
        match self.start {
            Some(start) => format!("{}. ", start + index as u64),
            None => "- ".to_string(),
        }
    }
}

impl Markdownable for List {
    fn to_markdown(&self) -> String {
        let mut output = Vec::with_capacity(self.items.len());
        for (i, item) in self.items.iter().enumerate() {
            let marker = self.marker(i);
            let continuation = " ".repeat(marker.len());
            let mut lines = item.lines();
            let first = lines.next().unwrap_or("");
            let mut rendered = format!("{}{}", marker, first);
            for line in lines {
                rendered.push('\n');
                if !line.is_empty() {
                    rendered.push_str(&continuation);
                    rendered.push_str(line);
                }
            }
            output.push(rendered);
        }
        output.join("\n")
    }
}
