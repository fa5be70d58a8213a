//! In-memory document

use crate::description::Description;
use crate::doc::{DocContent, DocContext, TitleSource};
use crate::error::Result;

/// A document whose title and description are supplied directly
#[derive(Debug, Clone)]
pub struct PageDoc {
    title: TitleSource,
    description: Description,
}

impl PageDoc {
    /// Create a page
    pub fn new(title: impl Into<TitleSource>, description: Description) -> Self {
        Self {
            title: title.into(),
            description,
        }
    }

    /// Mutable access to the description
    pub fn description_mut(&mut self) -> &mut Description {
        &mut self.description
    }
}

impl DocContent for PageDoc {
    fn title(&self, _ctx: &DocContext<'_>) -> Result<TitleSource> {
        Ok(self.title.clone())
    }

    fn describe(&self, _ctx: &DocContext<'_>) -> Result<Description> {
        Ok(self.description.clone())
    }
}
