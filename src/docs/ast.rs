//! Data model for extracted documentation
//!
//!     The pipeline moves through three shapes of data. The source lexer produces
//!     [RawComment](comment::RawComment)s. The markdown parser turns text into
//!     [MarkdownToken](markdown::MarkdownToken)s, grouped per unit of text into a
//!     [DocItem](document::DocItem). The assembler finally produces a
//!     [Document](document::Document), which carries its title, subheadings and the
//!     [LinkDescriptor](link::LinkDescriptor)s found in its prose.
//!
//!     Everything here is immutable once built and owned by whoever requested the
//!     processing of a file. All types serialize with serde so they can be emitted by
//!     the command line tool as JSON or YAML.

pub mod comment;
pub mod document;
pub mod link;
pub mod markdown;

pub use comment::RawComment;
pub use document::{DocItem, Document};
pub use link::LinkDescriptor;
pub use markdown::MarkdownToken;
