use super::{
    kinds::{BlockQuote, CodeFence, Heading, ListKind},
    types::BlockKind,
};

/// Classifies a trimmed block. First match wins:
/// heading, fenced code, quote, unordered list, ordered list, paragraph.
pub fn classify(block: &str) -> BlockKind {
    if Heading::level(block).is_some() {
        BlockKind::Heading
    } else if CodeFence::matches(block) {
        BlockKind::FencedCode
    } else if BlockQuote::matches(block) {
        BlockKind::Quote
    } else if ListKind::Unordered.matches(block) {
        BlockKind::UnorderedList
    } else if ListKind::Ordered.matches(block) {
        BlockKind::OrderedList
    } else {
        BlockKind::Paragraph
    }
}
