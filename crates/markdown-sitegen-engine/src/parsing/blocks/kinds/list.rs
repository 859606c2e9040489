use std::sync::OnceLock;

use regex::Regex;

use crate::error::Result;
use crate::html::Node;
use crate::parsing::inline::text_to_nodes;

/// Flat list block types: `- item` and `1. item`.
///
/// Ordered item numbers are not validated; numbering is left to the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    pub const BULLET: &'static str = "- ";

    /// The list element for this kind.
    pub fn tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "ul",
            ListKind::Ordered => "ol",
        }
    }

    /// If `line` starts with this kind's item marker, returns the text after it.
    pub fn strip_marker(self, line: &str) -> Option<&str> {
        let line = line.trim_start();
        match self {
            ListKind::Unordered => line.strip_prefix(Self::BULLET),
            ListKind::Ordered => ordered_marker()
                .find(line)
                .map(|m| &line[m.end()..]),
        }
    }

    /// Whether every line of `block` starts with this kind's marker.
    pub fn matches(self, block: &str) -> bool {
        block.lines().all(|line| self.strip_marker(line).is_some())
    }

    /// Splits a list block into item texts.
    ///
    /// A line without a marker continues the previous item, joined with a
    /// single space.
    pub fn items(self, block: &str) -> Vec<String> {
        let mut items: Vec<String> = vec![];
        for line in block.lines() {
            match self.strip_marker(line) {
                Some(text) => items.push(text.trim().to_string()),
                None => match items.last_mut() {
                    Some(item) => {
                        item.push(' ');
                        item.push_str(line.trim());
                    }
                    None => items.push(line.trim().to_string()),
                },
            }
        }
        items
    }

    /// Parses a list block into `ul`/`ol` with one `li` per item.
    pub fn parse(self, block: &str) -> Result<Node> {
        let children = self
            .items(block)
            .iter()
            .map(|item| Ok(Node::branch("li", text_to_nodes(item)?)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Node::branch(self.tag(), children))
    }
}

fn ordered_marker() -> &'static Regex {
    static ORDERED_MARKER: OnceLock<Regex> = OnceLock::new();
    ORDERED_MARKER.get_or_init(|| Regex::new(r"^\d+\. ").expect("Invalid ordered list regex"))
}
