use crate::error::{Error, Result};

use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Emphasis, Target},
    types::{InlineSpan, SpanKind},
};

/// Tokenizes a run of inline text into typed spans.
///
/// Passes run in a fixed order and each one only rewrites plain spans:
/// images, links, code, bold, italic. A span typed by an earlier pass is
/// never re-scanned, so `` `a*b*` `` stays a single code span.
///
/// Fails with [`Error::UnmatchedDelimiter`] if a plain run holds an odd
/// number of some delimiter.
pub fn tokenize(text: &str) -> Result<Vec<InlineSpan>> {
    let spans = vec![InlineSpan::plain(text)];
    let spans = split_images(spans);
    let spans = split_links(spans);
    let spans = split_delimiter(spans, CodeSpan::TICK, SpanKind::Code)?;
    let spans = split_delimiter(spans, Emphasis::BOLD, SpanKind::Bold)?;
    let spans = split_delimiter(spans, Emphasis::ITALIC, SpanKind::Italic)?;
    log::trace!("tokenized {} bytes into {} spans", text.len(), spans.len());
    Ok(spans)
}

/// Splits every plain span on `delimiter`, typing odd-indexed segments as `kind`.
///
/// Empty segments (from adjacent or boundary delimiters) are dropped.
/// Non-plain spans pass through unchanged.
pub fn split_delimiter(
    spans: Vec<InlineSpan>,
    delimiter: &str,
    kind: SpanKind,
) -> Result<Vec<InlineSpan>> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let parts: Vec<&str> = span.text.split(delimiter).collect();
        // An even number of parts means an odd number of delimiters.
        if parts.len() % 2 == 0 {
            return Err(Error::UnmatchedDelimiter {
                delimiter: delimiter.to_string(),
                text: span.text.clone(),
            });
        }

        for (i, part) in parts.into_iter().enumerate() {
            if part.is_empty() {
                continue;
            }
            let part_kind = if i % 2 == 0 { SpanKind::Plain } else { kind };
            out.push(InlineSpan::new(part, part_kind));
        }
    }
    Ok(out)
}

/// Splits `![alt](url)` images out of every plain span.
pub fn split_images(spans: Vec<InlineSpan>) -> Vec<InlineSpan> {
    split_targets(spans, SpanKind::Image)
}

/// Splits `[text](url)` links out of every plain span.
///
/// A `[` directly preceded by `!` never starts a link.
pub fn split_links(spans: Vec<InlineSpan>) -> Vec<InlineSpan> {
    split_targets(spans, SpanKind::Link)
}

/// Returns `(alt, url)` for every image in `text`, in order.
pub fn extract_markdown_images(text: &str) -> Vec<(String, String)> {
    scan_targets(text, SpanKind::Image)
        .into_iter()
        .map(|m| (m.text.to_string(), m.url.to_string()))
        .collect()
}

/// Returns `(text, url)` for every link in `text`, in order. Images are skipped.
pub fn extract_markdown_links(text: &str) -> Vec<(String, String)> {
    scan_targets(text, SpanKind::Link)
        .into_iter()
        .map(|m| (m.text.to_string(), m.url.to_string()))
        .collect()
}

/// A link or image found in a string, with byte offsets of the whole match.
struct TargetMatch<'a> {
    start: usize,
    end: usize,
    text: &'a str,
    url: &'a str,
}

fn split_targets(spans: Vec<InlineSpan>, kind: SpanKind) -> Vec<InlineSpan> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let mut text_start = 0;
        for m in scan_targets(&span.text, kind) {
            push_plain(&mut out, &span.text[text_start..m.start]);
            out.push(InlineSpan {
                text: m.text.to_string(),
                kind,
                destination: Some(m.url.to_string()),
            });
            text_start = m.end;
        }
        push_plain(&mut out, &span.text[text_start..]);
    }
    out
}

fn push_plain(out: &mut Vec<InlineSpan>, text: &str) {
    if !text.is_empty() {
        out.push(InlineSpan::plain(text));
    }
}

fn scan_targets(s: &str, kind: SpanKind) -> Vec<TargetMatch<'_>> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];

    while !cur.eof() {
        if let Some(m) = try_parse_target(&mut cur, kind) {
            out.push(m);
            continue;
        }
        cur.bump();
    }
    out
}

/// Attempts to parse a link (or image, for [`SpanKind::Image`]) at the cursor.
///
/// On failure, cursor position is restored.
fn try_parse_target<'a>(cur: &mut Cursor<'a>, kind: SpanKind) -> Option<TargetMatch<'a>> {
    let saved = cur.clone();
    let start = cur.pos();

    if kind == SpanKind::Image {
        if !cur.eat(Target::IMAGE_MARKER) {
            return None;
        }
    } else if cur.prev() == Some(Target::IMAGE_MARKER) {
        return None;
    }

    match parse_target_body(cur) {
        Some((text, url)) => Some(TargetMatch {
            start,
            end: cur.pos(),
            text,
            url,
        }),
        None => {
            *cur = saved;
            None
        }
    }
}

/// Parses `[text](url)`, leaving the cursor after the closing paren.
fn parse_target_body<'a>(cur: &mut Cursor<'a>) -> Option<(&'a str, &'a str)> {
    if !cur.eat(Target::TEXT_OPEN) {
        return None;
    }
    let text_start = cur.pos();
    if !cur.bump_until(Target::TEXT_CLOSE, &[Target::TEXT_OPEN]) {
        return None;
    }
    let text = cur.slice(text_start, cur.pos());
    cur.bump(); // ]

    if !cur.eat(Target::URL_OPEN) {
        return None;
    }
    let url_start = cur.pos();
    if !cur.bump_until(Target::URL_CLOSE, &[Target::URL_OPEN]) {
        return None;
    }
    let url = cur.slice(url_start, cur.pos());
    cur.bump(); // )

    Some((text, url))
}
