//! Wiki-link extraction
//!
//!     Finds the `[[...]]` cross-reference syntax in markdown token text and parses each
//!     match into a [LinkDescriptor]:
//!
//!     - `[[Docs]]` links to the document titled "Docs".
//!     - `[[Docs][How are docs generated?]]` links to a depth-2 heading of "Docs".
//!     - `[[.][How are docs generated?]]` links to a depth-2 heading of the current document.
//!
//!     Neither part may contain a closing bracket. Matches are returned left to right and
//!     scanning resumes after each match.

use crate::docs::ast::link::CURRENT_DOCUMENT;
use crate::docs::ast::{DocItem, LinkDescriptor};
use once_cell::sync::Lazy;
use regex::Regex;

/// Separator between the document and section parts of a link body
pub const SECTION_SEPARATOR: &str = "][";

static LINK_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[\[([^\]]+(?:\]\[[^\]]+)?)\]\]").expect("link pattern is valid")
});

/// Bodies of all wiki-links in `text`, without the outer double brackets
pub fn extract_link_bodies(text: &str) -> Vec<&str> {
    LINK_PATTERN
        .captures_iter(text)
        .filter_map(|captures| captures.get(1))
        .map(|body| body.as_str())
        .collect()
}

/// Parse a link body such as `Docs][Rules` into its document and section parts
pub fn parse_link_body(body: &str) -> LinkDescriptor {
    let (doc, section) = match body.split_once(SECTION_SEPARATOR) {
        Some((doc, section)) => (doc, Some(section.to_string())),
        None => (body, None),
    };

    let target_doc = if doc == CURRENT_DOCUMENT {
        None
    } else {
        Some(doc.to_string())
    };

    LinkDescriptor::new(target_doc, section)
}

/// All links in `text`, parsed
pub fn find_links(text: &str) -> Vec<LinkDescriptor> {
    extract_link_bodies(text)
        .into_iter()
        .map(parse_link_body)
        .collect()
}

/// All links in the free text of every token of `items`, in document order
pub fn collect_links(items: &[DocItem]) -> Vec<LinkDescriptor> {
    items
        .iter()
        .flat_map(|item| item.iter_tokens())
        .filter_map(|token| token.text())
        .flat_map(find_links)
        .collect()
}
