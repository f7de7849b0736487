//! Source lexing
//!
//!     Locates comments in source text. This is the first stage of the commented-source
//!     pipeline: it only finds comments, their bodies and their positions. Deciding which
//!     comments are documentation happens later, in [extraction](crate::docs::extraction).
//!
//!     The lexer is reached through the [SourceParser] trait so the assembler can be given
//!     a different implementation (another comment syntax, or a fixture in tests).
//!
//!     The default implementation, [CommentLexer], handles C-family syntax: `//` line
//!     comments and `/* */` block comments. String, character, template and regular
//!     expression literals are recognized so that comment markers inside them are not taken
//!     for comments. Whether `'` opens a string or a character literal depends on the
//!     [Dialect], which the lexer picks from the file extension.

pub mod line_index;
pub mod tokens;

pub use line_index::LineIndex;
pub use tokens::{Dialect, LexError, SourceToken};

use crate::docs::ast::RawComment;
use crate::docs::error::ParseError;
use logos::Logos;
use std::path::Path;

/// Extensions lexed with [Dialect::CharLiterals] unless configured otherwise
pub const DEFAULT_CHAR_LITERAL_EXTENSIONS: &[&str] = &["rs", "c", "h", "cpp", "hpp", "java", "go"];

/// Converts source text into the ordered sequence of comments it contains
pub trait SourceParser: Send + Sync {
    fn parse_comments(&self, source: &str) -> Result<Vec<RawComment>, ParseError>;

    /// Comments of `source`, read from `filename`. The default ignores the name.
    fn parse_file_comments(
        &self,
        filename: &str,
        source: &str,
    ) -> Result<Vec<RawComment>, ParseError> {
        let _ = filename;
        self.parse_comments(source)
    }
}

/// Tokenize source code with location information
///
/// Stops at the first lexing error, reporting it with the byte range where it occurred.
pub fn tokenize(
    source: &str,
    dialect: Dialect,
) -> Result<Vec<(SourceToken, logos::Span)>, (LexError, logos::Span)> {
    let mut lexer = SourceToken::lexer_with_extras(source, dialect);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push((token, lexer.span())),
            Err(error) => return Err((error, lexer.span())),
        }
    }

    Ok(tokens)
}

/// Comment lexer for `//` and `/* */` comment syntax
#[derive(Debug, Clone)]
pub struct CommentLexer {
    char_literal_extensions: Vec<String>,
}

impl CommentLexer {
    pub fn new() -> Self {
        Self::with_char_literal_extensions(DEFAULT_CHAR_LITERAL_EXTENSIONS.iter().copied())
    }

    pub fn with_char_literal_extensions<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            char_literal_extensions: extensions.into_iter().map(Into::into).collect(),
        }
    }

    /// Dialect for a file name; script syntax unless the extension is listed
    pub fn dialect_for(&self, filename: &str) -> Dialect {
        let extension = Path::new(filename)
            .extension()
            .and_then(|extension| extension.to_str())
            .unwrap_or("");
        let listed = self
            .char_literal_extensions
            .iter()
            .any(|candidate| candidate.eq_ignore_ascii_case(extension));
        if listed {
            Dialect::CharLiterals
        } else {
            Dialect::Script
        }
    }

    pub fn parse_with(
        &self,
        source: &str,
        dialect: Dialect,
    ) -> Result<Vec<RawComment>, ParseError> {
        let index = LineIndex::new(source);
        let tokens = tokenize(source, dialect).map_err(|(error, span)| {
            let (line, column) = index.position(span.start);
            ParseError::new(error.message(), line, column)
        })?;

        let comments = tokens
            .into_iter()
            .filter_map(|(token, span)| {
                let text = token.comment_text()?;
                let (line, column) = index.position(span.start);
                Some(RawComment::new(text, line, column))
            })
            .collect();

        Ok(comments)
    }
}

impl Default for CommentLexer {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceParser for CommentLexer {
    fn parse_comments(&self, source: &str) -> Result<Vec<RawComment>, ParseError> {
        self.parse_with(source, Dialect::default())
    }

    fn parse_file_comments(
        &self,
        filename: &str,
        source: &str,
    ) -> Result<Vec<RawComment>, ParseError> {
        self.parse_with(source, self.dialect_for(filename))
    }
}
