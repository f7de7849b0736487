//! Markdown tokens
//!
//! A flat, ordered view of a markdown block tree. Container blocks (lists, block
//! quotes) are represented by start/end markers around their children, so a
//! document's structure survives while consumers can still scan tokens linearly.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MarkdownToken {
    Heading { depth: u8, text: String },
    Paragraph { text: String },
    Code { lang: Option<String>, text: String },
    Html { text: String },
    Table { text: String },
    Rule,
    BlockQuoteStart,
    BlockQuoteEnd,
    ListStart { ordered: bool },
    ListItemStart,
    ListItemEnd,
    ListEnd,
}

impl MarkdownToken {
    pub fn heading(depth: u8, text: impl Into<String>) -> Self {
        MarkdownToken::Heading {
            depth,
            text: text.into(),
        }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        MarkdownToken::Paragraph { text: text.into() }
    }

    /// The free-text field of the token, if it carries one.
    pub fn text(&self) -> Option<&str> {
        match self {
            MarkdownToken::Heading { text, .. }
            | MarkdownToken::Paragraph { text }
            | MarkdownToken::Code { text, .. }
            | MarkdownToken::Html { text }
            | MarkdownToken::Table { text } => Some(text),
            _ => None,
        }
    }

    /// Check if this token is a heading of the given depth
    pub fn is_heading(&self, level: u8) -> bool {
        matches!(self, MarkdownToken::Heading { depth, .. } if *depth == level)
    }
}
