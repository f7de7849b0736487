//! # comdoc
//!
//! Extracts documentation from commented source files and markdown files into a
//! normalized, cross-referenceable document model.
//!
//! The pipeline lives in the [docs] module. See [docs::assembler] for the per-file
//! entry point and [docs::processor] for reading files from disk.

pub mod docs;

pub use docs::assembler::{DocumentAssembler, FileKind};
pub use docs::ast::{DocItem, Document, LinkDescriptor, MarkdownToken, RawComment};
pub use docs::config::{ComdocConfig, Loader};
pub use docs::error::ProcessingError;
pub use docs::processor::{process_file, process_files};
