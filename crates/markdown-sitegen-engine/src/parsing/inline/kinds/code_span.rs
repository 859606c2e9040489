/// Code span inline type with owned delimiter constant.
///
/// Code spans are split out before bold and italic, so emphasis markers
/// inside backticks stay literal.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick that delimits code spans.
    pub const TICK: &'static str = "`";
}
