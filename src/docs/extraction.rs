//! Comment extraction
//!
//!     Turns the raw comments found by the lexer into documentation text:
//!
//!     - [filter] decides which comments are documentation. Multi-line comments are
//!       documentation by default; single-line comments must opt in with a sigil so that
//!       incidental code comments stay out of the docs.
//!     - [indentation] zeroes the indentation of a comment body so that an indented
//!       comment does not turn into a markdown code block.

pub mod filter;
pub mod indentation;

pub use filter::{is_documentation, CommentFilter, DEFAULT_SIGIL};
pub use indentation::{normalize_indentation, IndentationStrategy};

use crate::docs::ast::RawComment;

/// Filter then de-indent a file's comments, keeping their order
pub fn extract_documentation(
    comments: &[RawComment],
    filter: &CommentFilter,
    strategy: IndentationStrategy,
) -> Vec<RawComment> {
    comments
        .iter()
        .filter(|comment| filter.keep(comment))
        .map(|comment| comment.with_text(normalize_indentation(&comment.text, strategy)))
        .collect()
}
