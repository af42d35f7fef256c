//! Rendered page sections.

/// A named, independently streamable part of the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Section name, used for timing marks and logs.
    pub name: String,
    /// Rendered HTML.
    pub html: String,
}

impl Section {
    /// Create a section from rendered HTML.
    pub fn new(name: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            html: html.into(),
        }
    }

    /// Whether the section rendered to nothing.
    pub fn is_empty(&self) -> bool {
        self.html.trim().is_empty()
    }
}
