/// Category label used when an item carries no badge, or an empty one.
pub const GENERAL_CATEGORY: &str = "general";

/// The two item collections a moderation pass can scope itself to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Board,
    Comment,
}

/// One board row or comment, abstracted away from its rendering.
///
/// Built fresh from the current page state on every pass and discarded once
/// the pass has annotated the page.
#[derive(Debug, Clone)]
pub struct ContentItem {
    pub author_identity: String,
    pub text: String,
    pub category: String,
    pub is_deleted: bool,
}

impl ContentItem {
    pub fn new(author_identity: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            author_identity: author_identity.into(),
            text: text.into(),
            category: GENERAL_CATEGORY.to_string(),
            is_deleted: false,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn deleted(mut self) -> Self {
        self.is_deleted = true;
        self
    }
}
