/// The semantic kind of an inline span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    /// Text that isn't part of any special construct.
    Plain,
    /// `**bold**`
    Bold,
    /// `*italic*`
    Italic,
    /// `` `code` ``. Never re-scanned for emphasis once extracted.
    Code,
    /// `[text](url)`
    Link,
    /// `![alt](url)`
    Image,
}

/// A run of inline text tagged with its [`SpanKind`].
///
/// `destination` is set for links and images and ignored for every other kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineSpan {
    pub text: String,
    pub kind: SpanKind,
    pub destination: Option<String>,
}

impl InlineSpan {
    pub fn new(text: impl Into<String>, kind: SpanKind) -> Self {
        Self {
            text: text.into(),
            kind,
            destination: None,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, SpanKind::Plain)
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: SpanKind::Link,
            destination: Some(url.into()),
        }
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: alt.into(),
            kind: SpanKind::Image,
            destination: Some(url.into()),
        }
    }

    pub fn is_plain(&self) -> bool {
        self.kind == SpanKind::Plain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_structural() {
        assert_eq!(
            InlineSpan::new("bold", SpanKind::Bold),
            InlineSpan::new("bold", SpanKind::Bold)
        );
        assert_ne!(
            InlineSpan::new("text", SpanKind::Bold),
            InlineSpan::new("text", SpanKind::Italic)
        );
    }

    #[test]
    fn equality_includes_destination() {
        assert_ne!(
            InlineSpan::link("site", "https://a.example"),
            InlineSpan::link("site", "https://b.example")
        );
        assert_ne!(InlineSpan::link("site", "x"), InlineSpan::new("site", SpanKind::Link));
    }

    #[test]
    fn link_and_image_with_same_fields_differ() {
        assert_ne!(InlineSpan::link("x", "x.png"), InlineSpan::image("x", "x.png"));
    }
}
