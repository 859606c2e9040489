use crate::error::{Error, Result};
use crate::html::Node;
use crate::parsing::inline::text_to_nodes;

/// ATX heading block type with owned marker constants.
///
/// `# Title` through `###### Title`. Seven or more hashes are not a heading.
pub struct Heading;

impl Heading {
    /// The heading marker character.
    pub const MARKER: char = '#';
    /// Deepest heading level.
    pub const MAX_LEVEL: usize = 6;

    /// Returns the heading level if `block` opens with 1-6 `#` and a space.
    pub fn level(block: &str) -> Option<u8> {
        let hashes = block.len() - block.trim_start_matches(Self::MARKER).len();
        if !(1..=Self::MAX_LEVEL).contains(&hashes) {
            return None;
        }
        if !block[hashes..].starts_with(' ') {
            return None;
        }
        u8::try_from(hashes).ok()
    }

    /// Splits a heading block into its level and text.
    ///
    /// The marker run and following spaces are stripped. Lines of a multi-line
    /// heading are trimmed and joined with a single space.
    pub fn split(block: &str) -> Option<(u8, String)> {
        let level = Self::level(block)?;
        let content = &block[usize::from(level)..];
        let text = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        Some((level, text))
    }

    /// Parses a heading block into an `h1`..`h6` branch.
    pub fn parse(block: &str) -> Result<Node> {
        let (level, text) =
            Self::split(block).ok_or_else(|| Error::InvalidHeading(block.to_string()))?;
        Ok(Node::branch(format!("h{level}"), text_to_nodes(&text)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("# a", Some(1))]
    #[case("## a", Some(2))]
    #[case("###### a", Some(6))]
    #[case("####### a", None)]
    #[case("#a", None)]
    #[case("#", None)]
    #[case("a # b", None)]
    fn heading_level(#[case] block: &str, #[case] expected: Option<u8>) {
        assert_eq!(Heading::level(block), expected);
    }

    #[test]
    fn split_strips_marker_and_joins_lines() {
        assert_eq!(
            Heading::split("##   A long\ntitle  \n  here"),
            Some((2, "A long title here".to_string()))
        );
    }

    #[rstest]
    #[case::h1("# Title", "<h1>Title</h1>")]
    #[case::h3("### Sub *title*", "<h3>Sub <i>title</i></h3>")]
    #[case::h6("###### Deep", "<h6>Deep</h6>")]
    fn parse_heading(#[case] block: &str, #[case] html: &str) {
        assert_eq!(Heading::parse(block).unwrap().render().unwrap(), html);
    }

    #[test]
    fn multi_line_heading_is_one_line_of_text() {
        let node = Heading::parse("# Title\ncontinued").unwrap();
        assert_eq!(node.render().unwrap(), "<h1>Title continued</h1>");
    }

    #[test]
    fn seven_hashes_is_invalid_heading() {
        assert_eq!(
            Heading::parse("####### x"),
            Err(Error::InvalidHeading("####### x".to_string()))
        );
    }
}
