//! # Block Parsing
//!
//! Three steps turn a document into block nodes.
//!
//! ## Parsing Phases
//!
//! 1. **Splitting** (`split`): the document is cut into trimmed blocks on
//!    blank lines. Fenced code is kept whole.
//! 2. **Classification** (`classify`): each block gets exactly one `BlockKind`
//!    from line patterns, in fixed precedence order.
//! 3. **Parsing** (`kinds`): each kind owns its delimiters and builds one
//!    `Node` branch, inline-parsing its text where applicable.
//!
//! ## Modules
//!
//! - **`types`**: `BlockKind`
//! - **`kinds`**: Block-specific types with owned delimiters (Heading, CodeFence,
//!   BlockQuote, ListKind, Paragraph)
//! - **`split`**: `split_blocks` line state machine
//! - **`classify`**: `classify` precedence chain
//!
//! ## Key Invariants
//!
//! - Fenced code blocks are raw zones: no block/inline parsing inside
//! - Classification and parsing agree; a parser handed a block of the wrong
//!   shape fails with a typed error rather than guessing

pub mod classify;
pub mod kinds;
pub mod split;
pub mod types;

pub use classify::classify;
pub use split::split_blocks;
pub use types::BlockKind;

use markdown_sitegen_config::MarkupConfig;

use crate::error::Result;
use crate::html::Node;

use kinds::{BlockQuote, CodeFence, Heading, ListKind, Paragraph};

/// Classifies a block and parses it with the matching parser.
pub fn parse_block(block: &str, markup: &MarkupConfig) -> Result<Node> {
    let kind = classify(block);
    log::debug!(
        "block {kind:?}: {}",
        block.lines().next().unwrap_or_default()
    );
    parse_block_as(kind, block, markup)
}

/// Parses `block` as `kind` regardless of what `classify` would say.
pub fn parse_block_as(kind: BlockKind, block: &str, markup: &MarkupConfig) -> Result<Node> {
    match kind {
        BlockKind::Heading => parse_heading(block),
        BlockKind::FencedCode => {
            CodeFence::parse(block, markup.code_language_prefix.as_deref())
        }
        BlockKind::Quote => parse_quote(block),
        BlockKind::UnorderedList => parse_unordered_list(block),
        BlockKind::OrderedList => parse_ordered_list(block),
        BlockKind::Paragraph => parse_paragraph(block),
    }
}

pub fn parse_heading(block: &str) -> Result<Node> {
    Heading::parse(block)
}

/// Parses fenced code, keeping the whole fence interior verbatim.
pub fn parse_code_block(block: &str) -> Result<Node> {
    CodeFence::parse(block, None)
}

pub fn parse_quote(block: &str) -> Result<Node> {
    BlockQuote::parse(block)
}

pub fn parse_unordered_list(block: &str) -> Result<Node> {
    ListKind::Unordered.parse(block)
}

pub fn parse_ordered_list(block: &str) -> Result<Node> {
    ListKind::Ordered.parse(block)
}

pub fn parse_paragraph(block: &str) -> Result<Node> {
    Paragraph::parse(block)
}
