//! Cross-document links
//!
//! Authors write wiki-links in their prose:
//! - `[[Doc]]` links to another document's title
//! - `[[Doc][Section]]` links to a depth-2 heading in another document
//! - `[[.][Section]]` links to a depth-2 heading in the current document
//!
//! See [crate::docs::links] for extraction from text.

use serde::Serialize;
use std::fmt;

/// Marker used in wiki-links for "the current document"
pub const CURRENT_DOCUMENT: &str = ".";

/// A parsed wiki-link. `target_doc` is `None` for links into the current document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LinkDescriptor {
    pub target_doc: Option<String>,
    pub target_section: Option<String>,
}

impl LinkDescriptor {
    pub fn new(target_doc: Option<String>, target_section: Option<String>) -> Self {
        Self {
            target_doc,
            target_section,
        }
    }

    pub fn to_document(title: impl Into<String>) -> Self {
        Self::new(Some(title.into()), None)
    }

    pub fn to_section(title: impl Into<String>, section: impl Into<String>) -> Self {
        Self::new(Some(title.into()), Some(section.into()))
    }

    pub fn to_local_section(section: impl Into<String>) -> Self {
        Self::new(None, Some(section.into()))
    }

    pub fn is_relative(&self) -> bool {
        self.target_doc.is_none()
    }
}

impl fmt::Display for LinkDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let doc = self.target_doc.as_deref().unwrap_or(CURRENT_DOCUMENT);
        match &self.target_section {
            Some(section) => write!(f, "[[{}][{}]]", doc, section),
            None => write!(f, "[[{}]]", doc),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_renders_wiki_syntax() {
        assert_eq!(LinkDescriptor::to_document("Docs").to_string(), "[[Docs]]");
        assert_eq!(
            LinkDescriptor::to_section("Docs", "Rules").to_string(),
            "[[Docs][Rules]]"
        );
        assert_eq!(
            LinkDescriptor::to_local_section("Install").to_string(),
            "[[.][Install]]"
        );
    }

    #[test]
    fn test_relative() {
        assert!(LinkDescriptor::to_local_section("Install").is_relative());
        assert!(!LinkDescriptor::to_document("Docs").is_relative());
    }
}
