/// The kind of a block, decided by [`classify`](super::classify).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// `#` to `######` followed by a space.
    Heading,
    /// Opens and closes with a ```` ``` ```` fence. Raw zone: no inline parsing.
    FencedCode,
    /// Every non-blank line starts with `>`.
    Quote,
    /// Every line starts with `- `.
    UnorderedList,
    /// Every line starts with digits, `.` and a space.
    OrderedList,
    /// The default when nothing else matches.
    Paragraph,
}
