//! # Inline Parsing
//!
//! Turns a run of text into typed [`InlineSpan`]s, then into leaf [`Node`]s.
//!
//! ## Architecture
//!
//! Inline parsing is separate from block parsing and runs over the text of
//! inline-eligible blocks (paragraphs, headings, quote lines, list items).
//! Fenced code blocks never reach it.
//!
//! Tokenizing is a fold over a growing span list: each pass rewrites only
//! plain spans and passes everything else through.
//!
//! ## Modules
//!
//! - **`types`**: `InlineSpan` and `SpanKind`
//! - **`kinds`**: Inline-specific types with owned delimiters (CodeSpan, Emphasis, Target)
//! - **`cursor`**: `Cursor` for byte-by-byte scanning of links and images
//! - **`parser`**: `tokenize()` main entry point and the individual passes
//! - **`convert`**: `span_to_node()` mapping spans to leaf nodes
//!
//! ## Pass Precedence
//!
//! Images, links, code, bold, italic. `![alt](x)` is never a link and
//! `` `*x*` `` is never italic.
//!
//! [`Node`]: crate::html::Node

pub mod convert;
pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use convert::{span_to_node, spans_to_nodes};
pub use parser::{
    extract_markdown_images, extract_markdown_links, split_delimiter, split_images, split_links,
    tokenize,
};
pub use types::{InlineSpan, SpanKind};

use crate::error::Result;
use crate::html::Node;

/// Tokenizes `text` and converts the spans to nodes in one step.
pub fn text_to_nodes(text: &str) -> Result<Vec<Node>> {
    spans_to_nodes(&tokenize(text)?)
}
