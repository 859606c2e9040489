use crate::error::{Error, Result};
use crate::html::Node;

use super::types::{InlineSpan, SpanKind};

/// Converts an inline span into the leaf node that renders it.
///
/// Links become `<a href>` and images become an empty `<img src alt>`; both
/// fail with [`Error::MissingDestination`] when the span has no URL.
pub fn span_to_node(span: &InlineSpan) -> Result<Node> {
    let node = match span.kind {
        SpanKind::Plain => Node::text(&span.text),
        SpanKind::Bold => Node::leaf("b", &span.text),
        SpanKind::Italic => Node::leaf("i", &span.text),
        SpanKind::Code => Node::leaf("code", &span.text),
        SpanKind::Link => Node::leaf("a", &span.text).with_attribute("href", destination(span)?),
        SpanKind::Image => Node::leaf("img", "")
            .with_attribute("src", destination(span)?)
            .with_attribute("alt", &span.text),
    };
    Ok(node)
}

/// Converts a span sequence into sibling nodes, preserving order.
pub fn spans_to_nodes(spans: &[InlineSpan]) -> Result<Vec<Node>> {
    spans.iter().map(span_to_node).collect()
}

fn destination(span: &InlineSpan) -> Result<&str> {
    span.destination
        .as_deref()
        .ok_or_else(|| Error::MissingDestination {
            kind: span.kind,
            text: span.text.clone(),
        })
}
