//! Process a file
//!
//!     To process source files we extract comments and parse them as markdown. To process
//!     markdown files we treat the whole file as one big comment, so the data format is the
//!     same for both.
//!
//!     The assembler owns the two parsers it needs, behind the [SourceParser] and
//!     [MarkdownParser] traits, and is told which pipeline to run through [FileKind]. Mapping
//!     file names to kinds happens at the boundary, see [crate::docs::processor].
//!
//!     A file without a depth-1 heading yields `Ok(None)`: that's an undocumented file, not
//!     an error. Parser failures are errors and no partial document is produced.

use crate::docs::ast::{DocItem, Document, MarkdownToken, RawComment};
use crate::docs::config::ComdocConfig;
use crate::docs::error::{ParseError, ProcessingError};
use crate::docs::extraction::{extract_documentation, CommentFilter, IndentationStrategy};
use crate::docs::heading_gate::exclude_pre_heading_tokens;
use crate::docs::lexing::{CommentLexer, SourceParser};
use crate::docs::links::collect_links;
use crate::docs::markdown::{ComrakMarkdown, MarkdownParser};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Which pipeline a file goes through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FileKind {
    /// The whole file is markdown
    Markdown,
    /// Documentation lives in the comments of the file
    CommentedSource,
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileKind::Markdown => write!(f, "markdown"),
            FileKind::CommentedSource => write!(f, "commented-source"),
        }
    }
}

/// Builds [Document]s from file contents
#[derive(Clone)]
pub struct DocumentAssembler {
    source_parser: Arc<dyn SourceParser>,
    markdown_parser: Arc<dyn MarkdownParser>,
    filter: CommentFilter,
    indentation: IndentationStrategy,
}

impl DocumentAssembler {
    /// Assembler with the comment lexer, comrak, and default settings
    pub fn new() -> Self {
        Self::with_parsers(CommentLexer::new(), ComrakMarkdown::new())
    }

    pub fn with_parsers<S, M>(source_parser: S, markdown_parser: M) -> Self
    where
        S: SourceParser + 'static,
        M: MarkdownParser + 'static,
    {
        Self {
            source_parser: Arc::new(source_parser),
            markdown_parser: Arc::new(markdown_parser),
            filter: CommentFilter::default(),
            indentation: IndentationStrategy::default(),
        }
    }

    pub fn from_config(config: &ComdocConfig) -> Self {
        let extensions = config.files.char_literal_extensions.iter().cloned();
        let lexer = CommentLexer::with_char_literal_extensions(extensions);
        Self::with_parsers(lexer, ComrakMarkdown::new())
            .with_filter(CommentFilter::new(config.comments.sigil))
            .with_indentation(config.indentation.strategy)
    }

    pub fn with_filter(mut self, filter: CommentFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_indentation(mut self, strategy: IndentationStrategy) -> Self {
        self.indentation = strategy;
        self
    }

    /// Run the pipeline for `kind` over `source`.
    pub fn assemble(
        &self,
        filename: &str,
        kind: FileKind,
        source: &str,
    ) -> Result<Option<Document>, ProcessingError> {
        let items = match kind {
            FileKind::Markdown => self.markdown_items(source),
            FileKind::CommentedSource => self.commented_source_items(filename, source),
        }
        .map_err(|error| ProcessingError::parse(filename, error))?;

        let items = exclude_pre_heading_tokens(items);
        debug!(filename, %kind, items = items.len(), "gated documentation items");

        Ok(build_document(filename, items))
    }

    /// One item at line 0 holding the whole (trimmed) file
    fn markdown_items(&self, source: &str) -> Result<Vec<DocItem>, ParseError> {
        let tokens = self.markdown_parser.tokenize(source.trim())?;
        Ok(vec![DocItem::new(0, tokens)])
    }

    /// One item per documentation comment
    fn commented_source_items(
        &self,
        filename: &str,
        source: &str,
    ) -> Result<Vec<DocItem>, ParseError> {
        let comments = self.source_parser.parse_file_comments(filename, source)?;
        let documentation = extract_documentation(&comments, &self.filter, self.indentation);
        debug!(
            comments = comments.len(),
            retained = documentation.len(),
            "filtered comments"
        );

        documentation
            .iter()
            .map(|comment| self.comment_to_doc_item(comment))
            .collect()
    }

    fn comment_to_doc_item(&self, comment: &RawComment) -> Result<DocItem, ParseError> {
        let tokens = self
            .markdown_parser
            .tokenize(&comment.text)
            .map_err(|error| {
                // Positions reported by the markdown parser are relative to the comment
                let line = comment.line + error.line.saturating_sub(1);
                ParseError::new(error.message, line, error.column)
            })?;
        Ok(DocItem::new(comment.line, tokens))
    }
}

impl Default for DocumentAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DocumentAssembler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentAssembler")
            .field("filter", &self.filter)
            .field("indentation", &self.indentation)
            .finish_non_exhaustive()
    }
}

/// Text of every depth-2 heading, in document order
pub fn collect_subheadings(items: &[DocItem]) -> Vec<String> {
    items
        .iter()
        .flat_map(|item| item.iter_tokens())
        .filter_map(|token| match token {
            MarkdownToken::Heading { depth: 2, text } => Some(text.clone()),
            _ => None,
        })
        .collect()
}

/// Build the document from gated items; `None` when nothing survived the gate
fn build_document(filename: &str, items: Vec<DocItem>) -> Option<Document> {
    let title = items.first()?.tokens.first()?.text()?.to_string();
    let subheadings = collect_subheadings(&items);
    let links = collect_links(&items);

    Some(Document {
        filename: filename.to_string(),
        title,
        items,
        subheadings,
        links,
    })
}
