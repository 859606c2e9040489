use crate::error::Result;
use crate::html::Node;
use crate::parsing::inline::text_to_nodes;

/// Blockquote block type with owned delimiter constant.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Whether every non-blank line of `block` starts with `>`.
    pub fn matches(block: &str) -> bool {
        block
            .lines()
            .map(str::trim_start)
            .filter(|line| !line.is_empty())
            .all(|line| line.starts_with(Self::PREFIX))
    }

    /// Strips one leading `>` and the whitespace after it.
    ///
    /// Lines without the prefix are returned with only leading whitespace removed.
    pub fn strip_prefix(line: &str) -> &str {
        let line = line.trim_start();
        line.strip_prefix(Self::PREFIX).unwrap_or(line).trim_start()
    }

    /// Parses a quote block into a `blockquote` branch.
    ///
    /// Lines left empty after stripping are dropped. A single remaining line
    /// is inline-parsed straight into the blockquote; several lines each
    /// become their own `p`.
    pub fn parse(block: &str) -> Result<Node> {
        let lines: Vec<&str> = block
            .lines()
            .map(Self::strip_prefix)
            .filter(|line| !line.is_empty())
            .collect();

        let children = match lines.as_slice() {
            [line] => text_to_nodes(line)?,
            _ => lines
                .iter()
                .map(|line| Ok(Node::branch("p", text_to_nodes(line)?)))
                .collect::<Result<Vec<_>>>()?,
        };
        Ok(Node::branch("blockquote", children))
    }
}
