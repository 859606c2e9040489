use crate::error::{Error, Result};
use crate::html::Node;

/// Fenced code block type with owned delimiter constant.
///
/// Fenced code is a raw zone: its interior is kept verbatim and never
/// split into blocks or inline-parsed.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Whether `line` opens a fence that stays open past this line.
    pub fn opens(line: &str) -> bool {
        let t = line.trim();
        t.starts_with(Self::BACKTICKS) && !Self::matches(t)
    }

    /// Whether `line` closes a fence opened on an earlier line.
    pub fn closes(line: &str) -> bool {
        line.trim_end().ends_with(Self::BACKTICKS)
    }

    /// Whether a whole block is fenced at both ends with distinct fences.
    pub fn matches(block: &str) -> bool {
        block.len() >= 2 * Self::BACKTICKS.len()
            && block.starts_with(Self::BACKTICKS)
            && block.ends_with(Self::BACKTICKS)
    }

    /// The text between the opening and closing fences, untouched.
    pub fn interior(block: &str) -> Option<&str> {
        if !Self::matches(block) {
            return None;
        }
        Some(&block[Self::BACKTICKS.len()..block.len() - Self::BACKTICKS.len()])
    }

    /// Splits a fenced block into its info string and the content after it.
    ///
    /// The info string is the rest of the opening fence line. Content starts
    /// after that line; a single-line fence has no info string.
    pub fn split(block: &str) -> Option<(&str, &str)> {
        let inner = Self::interior(block)?;
        Some(match inner.split_once('\n') {
            Some((info, content)) => (info.trim(), content),
            None => ("", inner),
        })
    }

    /// Parses a fenced block into `<pre><code>`.
    ///
    /// Without a `language_prefix` the whole interior is kept verbatim,
    /// including the rest of the opening fence line. With one, that line is
    /// read as an info string: it is removed from the content and, when
    /// non-empty, becomes `class="{language_prefix}{info}"` on `code`.
    pub fn parse(block: &str, language_prefix: Option<&str>) -> Result<Node> {
        let invalid = || Error::InvalidCodeBlock(block.to_string());
        let code = match language_prefix {
            None => Node::leaf("code", Self::interior(block).ok_or_else(invalid)?),
            Some(prefix) => {
                let (info, content) = Self::split(block).ok_or_else(invalid)?;
                let code = Node::leaf("code", content);
                if info.is_empty() {
                    code
                } else {
                    code.with_attribute("class", format!("{prefix}{info}"))
                }
            }
        };
        Ok(Node::branch("pre", vec![code]))
    }
}
