//! # markdown-sitegen-engine
//!
//! Converts a constrained markdown dialect into an HTML [`Node`] tree and
//! renders it to a string, for splicing into a page template.
//!
//! ```text
//! markdown → split_blocks → classify → block parsers ─┐
//!                                 tokenize → spans ───┴→ Node tree → render()
//! ```
//!
//! The dialect covers headings, fenced code, quotes, flat lists and
//! paragraphs, with bold, italic, code, links and images inline. Malformed
//! input fails with a typed [`Error`] rather than best-effort output.

pub mod error;
pub mod html;
pub mod parsing;

// Re-export key types for easier usage
pub use error::{Error, Result};
pub use html::{Attributes, Node};
pub use markdown_sitegen_config::MarkupConfig;
pub use parsing::blocks::{BlockKind, classify, split_blocks};
pub use parsing::inline::{InlineSpan, SpanKind, span_to_node, tokenize};
pub use parsing::{extract_title, parse_document, parse_document_with};
