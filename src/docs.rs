//! Main module for comdoc library functionality
//!
//!     Files flow through the pipeline as follows:
//!
//!     raw text
//!       → lexing (commented source only): locate raw comments
//!       → extraction (commented source only): filter and de-indent comments
//!       → markdown: tokenize each unit of text
//!       → heading_gate: drop everything before the first depth-1 heading
//!       → assembler: build the Document with subheadings and links
//!
//!     Every stage after the file read is a pure function of its input. The parsers
//!     are injected into the assembler so tests can substitute fixtures.

pub mod assembler;
pub mod ast;
pub mod config;
pub mod error;
pub mod extraction;
pub mod heading_gate;
pub mod index;
pub mod lexing;
pub mod links;
pub mod markdown;
pub mod processor;
