use crate::error::Result;
use crate::html::Node;
use crate::parsing::inline::text_to_nodes;

/// Paragraph block type.
///
/// Paragraphs have no delimiters - they are the default block when no other
/// block kind matches. The whole block is inline-parsed.
pub struct Paragraph;

impl Paragraph {
    pub const TAG: &'static str = "p";

    pub fn parse(block: &str) -> Result<Node> {
        Ok(Node::branch(Self::TAG, text_to_nodes(block)?))
    }
}
