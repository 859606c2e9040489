//! # Document Parsing
//!
//! Assembles a whole markdown document into one [`Node`] tree: blocks are
//! split, classified and parsed, then wrapped in a single root element.

pub mod blocks;
pub mod inline;

use markdown_sitegen_config::MarkupConfig;

use crate::error::{Error, Result};
use crate::html::Node;

use blocks::{kinds::Heading, parse_block, split_blocks};

/// Parses a markdown document into a `<div>`-rooted node tree.
pub fn parse_document(markdown: &str) -> Result<Node> {
    parse_document_with(markdown, &MarkupConfig::default())
}

/// Parses a markdown document, taking the root tag and code class prefix
/// from `markup`.
///
/// An empty document yields a root with no children, which fails to render.
pub fn parse_document_with(markdown: &str, markup: &MarkupConfig) -> Result<Node> {
    let children = split_blocks(markdown)
        .into_iter()
        .map(|block| parse_block(block, markup))
        .collect::<Result<Vec<_>>>()?;
    log::debug!("parsed document into {} blocks", children.len());
    Ok(Node::branch(markup.root_tag.as_str(), children))
}

/// Returns the text of the first level 1 heading, trimmed.
///
/// Fails with [`Error::NoTitle`] if the document has no `# ` heading.
pub fn extract_title(markdown: &str) -> Result<String> {
    split_blocks(markdown)
        .into_iter()
        .filter_map(Heading::split)
        .find(|(level, _)| *level == 1)
        .map(|(_, text)| text.trim().to_string())
        .ok_or(Error::NoTitle)
}

#[cfg(test)]
mod tests;
