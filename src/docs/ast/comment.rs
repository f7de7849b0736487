//! Raw comments as located by the source lexer

use serde::Serialize;

/// A comment found in source text, before any filtering or normalization.
///
/// `text` is the comment body without its delimiters: for `// foo` it is `" foo"`,
/// for `/* foo */` it is `" foo "`. Lines are 1-based, columns 0-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawComment {
    pub text: String,
    pub is_multi_line: bool,
    pub line: usize,
    pub column: usize,
}

impl RawComment {
    pub fn new(text: impl Into<String>, line: usize, column: usize) -> Self {
        let text = text.into();
        let is_multi_line = text.contains('\n');
        Self {
            text,
            is_multi_line,
            line,
            column,
        }
    }

    /// Same comment with its body replaced, keeping its position.
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        Self::new(text, self.line, self.column)
    }
}
