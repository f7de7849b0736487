//! Document element
//!
//! A document is what one file contributes to the documentation set. Its identity is
//! its title (the first depth-1 heading), its internal navigation is the list of its
//! depth-2 headings.

use super::link::LinkDescriptor;
use super::markdown::MarkdownToken;
use serde::Serialize;

/// One markdown-tokenized unit of documentation text tied to a source line.
///
/// Source files produce one item per retained comment; markdown files produce a
/// single item at line 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocItem {
    pub line: usize,
    pub tokens: Vec<MarkdownToken>,
}

impl DocItem {
    pub fn new(line: usize, tokens: Vec<MarkdownToken>) -> Self {
        Self { line, tokens }
    }

    pub fn iter_tokens(&self) -> impl Iterator<Item = &MarkdownToken> {
        self.tokens.iter()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub filename: String,
    pub title: String,
    pub items: Vec<DocItem>,
    pub subheadings: Vec<String>,
    pub links: Vec<LinkDescriptor>,
}

impl Document {
    /// All tokens of the document in source order
    pub fn iter_tokens(&self) -> impl Iterator<Item = &MarkdownToken> {
        self.items.iter().flat_map(|item| item.iter_tokens())
    }

    pub fn has_subheading(&self, name: &str) -> bool {
        self.subheadings.iter().any(|subheading| subheading == name)
    }

    /// One-line description used by the command line summary output
    pub fn summary(&self) -> String {
        format!(
            "{}: {} ({} items, {} subheadings, {} links)",
            self.filename,
            self.title,
            self.items.len(),
            self.subheadings.len(),
            self.links.len()
        )
    }
}
