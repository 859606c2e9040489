/// Bold and italic delimiters.
///
/// `BOLD` is a doubled `ITALIC`, so bold must be split out first.
pub struct Emphasis;

impl Emphasis {
    pub const BOLD: &'static str = "**";
    pub const ITALIC: &'static str = "*";
}
