//! Error types
//!
//!     A file that carries no documentation is not an error: the assembler returns
//!     `Ok(None)` for it. Errors are reserved for input that cannot be parsed, for file
//!     kinds no pipeline handles, and for I/O or configuration failures around the core.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure of the source or markdown parser on a piece of text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at line {line}, column {column}")]
pub struct ParseError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl ParseError {
    pub fn new(message: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            message: message.into(),
            line,
            column,
        }
    }
}

#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("Parse error in {filename}: {source}")]
    Parse {
        filename: String,
        #[source]
        source: ParseError,
    },

    #[error("Unsupported file type: {}", filename.display())]
    UnsupportedFileKind { filename: PathBuf },

    #[error("IO error reading {}: {source}", filename.display())]
    Io {
        filename: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Task failed: {0}")]
    Task(String),
}

impl ProcessingError {
    pub fn parse(filename: impl Into<String>, source: ParseError) -> Self {
        ProcessingError::Parse {
            filename: filename.into(),
            source,
        }
    }

    pub fn is_parse_failure(&self) -> bool {
        matches!(self, ProcessingError::Parse { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let error = ProcessingError::parse(
            "lib/widget.js",
            ParseError::new("Unterminated block comment", 3, 4),
        );
        assert_eq!(
            error.to_string(),
            "Parse error in lib/widget.js: Unterminated block comment at line 3, column 4"
        );
        assert!(error.is_parse_failure());

        let error = ProcessingError::UnsupportedFileKind {
            filename: PathBuf::from("image.png"),
        };
        assert_eq!(error.to_string(), "Unsupported file type: image.png");
        assert!(!error.is_parse_failure());
    }
}
