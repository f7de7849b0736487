//! Markdown tokenization
//!
//! Converts markdown text into the flat [MarkdownToken] sequence used by the rest of the
//! pipeline. The conversion is reached through the [MarkdownParser] trait; the default
//! implementation delegates parsing to comrak and flattens its block tree.
//!
//! Inline formatting is reduced to plain text: headings and paragraphs carry the text of
//! their inline children, with emphasis, code spans and links unwrapped. Wiki-links are
//! not markdown links, so `[[Doc][Section]]` survives as literal text.

use crate::docs::ast::MarkdownToken;
use crate::docs::error::ParseError;
use comrak::nodes::{AstNode, ListType, NodeValue};
use comrak::{parse_document, Arena, Options};

/// Converts a text string into an ordered sequence of markdown tokens
pub trait MarkdownParser: Send + Sync {
    fn tokenize(&self, text: &str) -> Result<Vec<MarkdownToken>, ParseError>;
}

/// CommonMark (plus tables and strikethrough) via comrak
#[derive(Debug, Clone, Copy, Default)]
pub struct ComrakMarkdown;

impl ComrakMarkdown {
    pub fn new() -> Self {
        ComrakMarkdown
    }
}

impl MarkdownParser for ComrakMarkdown {
    fn tokenize(&self, text: &str) -> Result<Vec<MarkdownToken>, ParseError> {
        let arena = Arena::new();
        let options = default_comrak_options();
        let root = parse_document(&arena, text, &options);

        let mut tokens = Vec::new();
        collect_tokens(root, &mut tokens);
        Ok(tokens)
    }
}

fn default_comrak_options() -> Options<'static> {
    let mut options = Options::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options
}

/// Recursively flatten a comrak block node into tokens
fn collect_tokens<'a>(node: &'a AstNode<'a>, tokens: &mut Vec<MarkdownToken>) {
    let node_data = node.data.borrow();

    match &node_data.value {
        NodeValue::Document => {
            for child in node.children() {
                collect_tokens(child, tokens);
            }
        }

        NodeValue::Heading(heading) => {
            tokens.push(MarkdownToken::heading(heading.level, inline_text(node)));
        }

        NodeValue::Paragraph => {
            tokens.push(MarkdownToken::paragraph(inline_text(node)));
        }

        NodeValue::CodeBlock(code_block) => {
            let lang = code_block
                .info
                .split_whitespace()
                .next()
                .map(|lang| lang.to_string());
            tokens.push(MarkdownToken::Code {
                lang,
                text: code_block.literal.trim_end_matches('\n').to_string(),
            });
        }

        NodeValue::HtmlBlock(html) => {
            tokens.push(MarkdownToken::Html {
                text: html.literal.clone(),
            });
        }

        NodeValue::ThematicBreak => tokens.push(MarkdownToken::Rule),

        NodeValue::BlockQuote => {
            tokens.push(MarkdownToken::BlockQuoteStart);
            for child in node.children() {
                collect_tokens(child, tokens);
            }
            tokens.push(MarkdownToken::BlockQuoteEnd);
        }

        NodeValue::List(list) => {
            let ordered = matches!(list.list_type, ListType::Ordered);
            tokens.push(MarkdownToken::ListStart { ordered });
            for child in node.children() {
                collect_tokens(child, tokens);
            }
            tokens.push(MarkdownToken::ListEnd);
        }

        NodeValue::Item(_) => {
            tokens.push(MarkdownToken::ListItemStart);
            for child in node.children() {
                collect_tokens(child, tokens);
            }
            tokens.push(MarkdownToken::ListItemEnd);
        }

        NodeValue::Table(_) => {
            let rows: Vec<String> = node
                .children()
                .map(|row| {
                    row.children()
                        .map(inline_text)
                        .collect::<Vec<_>>()
                        .join(" | ")
                })
                .collect();
            tokens.push(MarkdownToken::Table {
                text: rows.join("\n"),
            });
        }

        _ => {
            // Other blocks (footnote definitions, front matter) carry no documentation
        }
    }
}

/// Plain text of a node's inline descendants
fn inline_text<'a>(node: &'a AstNode<'a>) -> String {
    let mut text = String::new();
    for child in node.children() {
        push_inline_text(child, &mut text);
    }
    text
}

fn push_inline_text<'a>(node: &'a AstNode<'a>, text: &mut String) {
    let node_data = node.data.borrow();

    match &node_data.value {
        NodeValue::Text(literal) | NodeValue::HtmlInline(literal) => text.push_str(literal),
        NodeValue::Code(code) => text.push_str(&code.literal),
        NodeValue::SoftBreak | NodeValue::LineBreak => text.push('\n'),
        _ => {
            for child in node.children() {
                push_inline_text(child, text);
            }
        }
    }
}
