/// Bracket/paren syntax shared by links `[text](url)` and images `![alt](url)`.
///
/// Neither part nests: the text excludes `[` and `]`, the URL excludes `(` and `)`.
pub struct Target;

impl Target {
    /// Prefix that turns a link into an image.
    pub const IMAGE_MARKER: u8 = b'!';
    pub const TEXT_OPEN: u8 = b'[';
    pub const TEXT_CLOSE: u8 = b']';
    pub const URL_OPEN: u8 = b'(';
    pub const URL_CLOSE: u8 = b')';
}
