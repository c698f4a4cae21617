use std::fmt;

/// Identifier of a todo. Unique among the items of one store.
pub type ItemId = u32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    title: String,
}

impl Item {
    pub fn new(id: ItemId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Replace the title. An empty title is ignored and the old one is kept.
    pub fn set_title(&mut self, title: impl Into<String>) {
        let title = title.into();
        if !title.is_empty() {
            self.title = title;
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.id, self.title)
    }
}
