//! Cross-document link resolution
//!
//! Documents reference each other by title, and sections by their depth-2 heading. The
//! index collects the titles and subheadings of a set of processed documents so that the
//! wiki-links found in them can be checked. Relative links (`[[.][Section]]`) are resolved
//! against the subheadings of the document that contains them.

use crate::docs::ast::{Document, LinkDescriptor};
use std::collections::HashMap;
use std::fmt;
use tracing::warn;

/// Outcome of resolving one link
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkResolution {
    /// The target exists; `title` is the title of the target document
    Resolved { title: String },
    /// No document has the target title
    MissingDocument { title: String },
    /// The document exists but has no such depth-2 heading
    MissingSection { title: String, section: String },
}

impl LinkResolution {
    pub fn is_resolved(&self) -> bool {
        matches!(self, LinkResolution::Resolved { .. })
    }
}

impl fmt::Display for LinkResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkResolution::Resolved { title } => write!(f, "resolved to {}", title),
            LinkResolution::MissingDocument { title } => write!(f, "no document titled '{}'", title),
            LinkResolution::MissingSection { title, section } => {
                write!(f, "'{}' has no section '{}'", title, section)
            }
        }
    }
}

/// A link that could not be resolved, with the document it was found in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrokenLink {
    pub filename: String,
    pub link: LinkDescriptor,
    pub resolution: LinkResolution,
}

/// Titles and subheadings of a set of documents
#[derive(Debug, Default)]
pub struct DocumentIndex<'a> {
    by_title: HashMap<&'a str, &'a Document>,
    documents: Vec<&'a Document>,
}

impl<'a> DocumentIndex<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index over `documents`. When two documents share a title, the first wins.
    pub fn build(documents: impl IntoIterator<Item = &'a Document>) -> Self {
        let mut index = Self::new();
        for document in documents {
            index.insert(document);
        }
        index
    }

    pub fn insert(&mut self, document: &'a Document) {
        if self.by_title.contains_key(document.title.as_str()) {
            warn!(
                title = %document.title,
                filename = %document.filename,
                "duplicate document title, later document is not linkable"
            );
        } else {
            self.by_title.insert(document.title.as_str(), document);
        }
        self.documents.push(document);
    }

    pub fn get(&self, title: &str) -> Option<&'a Document> {
        self.by_title.get(title).copied()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Resolve `link` as found in `from`
    pub fn resolve(&self, from: &Document, link: &LinkDescriptor) -> LinkResolution {
        let target = if link.is_relative() {
            Some(from)
        } else {
            link.target_doc.as_deref().and_then(|title| self.get(title))
        };
        let title = link
            .target_doc
            .clone()
            .unwrap_or_else(|| from.title.clone());

        let Some(target) = target else {
            return LinkResolution::MissingDocument { title };
        };

        match &link.target_section {
            Some(section) if !target.has_subheading(section) => LinkResolution::MissingSection {
                title,
                section: section.clone(),
            },
            _ => LinkResolution::Resolved { title },
        }
    }

    /// Every unresolved link of every indexed document, in document then source order
    pub fn broken_links(&self) -> Vec<BrokenLink> {
        self.documents
            .iter()
            .flat_map(|document| {
                document.links.iter().filter_map(move |link| {
                    let resolution = self.resolve(document, link);
                    (!resolution.is_resolved()).then(|| BrokenLink {
                        filename: document.filename.clone(),
                        link: link.clone(),
                        resolution,
                    })
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docs::ast::{DocItem, MarkdownToken};

    fn document(filename: &str, title: &str, subheadings: &[&str], links: Vec<LinkDescriptor>) -> Document {
        Document {
            filename: filename.to_string(),
            title: title.to_string(),
            items: vec![DocItem::new(0, vec![MarkdownToken::heading(1, title)])],
            subheadings: subheadings.iter().map(|s| s.to_string()).collect(),
            links,
        }
    }

    #[test]
    fn test_resolves_links() {
        let docs = document(
            "docs.md",
            "Docs",
            &["How are documents generated?"],
            vec![],
        );
        let setup = document(
            "setup.md",
            "Setup",
            &["Install"],
            vec![
                LinkDescriptor::to_document("Docs"),
                LinkDescriptor::to_section("Docs", "How are documents generated?"),
                LinkDescriptor::to_local_section("Install"),
            ],
        );
        let all = [docs, setup];
        let index = DocumentIndex::build(&all);

        assert_eq!(index.len(), 2);
        for link in &all[1].links {
            assert!(index.resolve(&all[1], link).is_resolved(), "{link}");
        }
        assert!(index.broken_links().is_empty());
    }

    #[test]
    fn test_reports_broken_links() {
        let setup = document(
            "setup.md",
            "Setup",
            &["Install"],
            vec![
                LinkDescriptor::to_document("Missing"),
                LinkDescriptor::to_local_section("Uninstall"),
                LinkDescriptor::to_section("Setup", "Install"),
            ],
        );
        let all = [setup];
        let index = DocumentIndex::build(&all);
        let broken = index.broken_links();

        assert_eq!(broken.len(), 2);
        assert_eq!(
            broken[0].resolution,
            LinkResolution::MissingDocument {
                title: "Missing".to_string()
            }
        );
        assert_eq!(
            broken[1].resolution,
            LinkResolution::MissingSection {
                title: "Setup".to_string(),
                section: "Uninstall".to_string()
            }
        );
        assert_eq!(broken[1].filename, "setup.md");
    }

    #[test]
    fn test_empty_index() {
        let none: [Document; 0] = [];
        let index = DocumentIndex::build(&none);
        assert!(index.is_empty());
        assert!(index.broken_links().is_empty());
    }

    #[test]
    fn test_relative_link_resolves_against_linking_document() {
        let other = document("other.md", "Other", &["Install"], vec![]);
        let setup = document(
            "setup.md",
            "Setup",
            &["Usage"],
            vec![LinkDescriptor::to_local_section("Install")],
        );
        let all = [other, setup];
        let index = DocumentIndex::build(&all);

        assert_eq!(
            index.resolve(&all[1], &all[1].links[0]),
            LinkResolution::MissingSection {
                title: "Setup".to_string(),
                section: "Install".to_string(),
            }
        );
    }

    #[test]
    fn test_resolution_display() {
        let resolution = LinkResolution::MissingSection {
            title: "Setup".to_string(),
            section: "Uninstall".to_string(),
        };
        assert_eq!(resolution.to_string(), "'Setup' has no section 'Uninstall'");
    }

    #[test]
    fn test_first_duplicate_title_wins() {
        let all = [
            document("a.md", "Same", &["A"], vec![]),
            document("b.md", "Same", &["B"], vec![]),
        ];
        let index = DocumentIndex::build(&all);
        assert_eq!(index.get("Same").map(|d| d.filename.as_str()), Some("a.md"));
        assert_eq!(index.len(), 2);
    }
}
