//! Failures raised while parsing markdown or rendering the node tree.
//!
//! Every failure surfaces at the point of detection and aborts the whole
//! parse for that document; there is no partial-result mode.

use crate::parsing::inline::SpanKind;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A node breaks a tree invariant at render time.
    #[error("Invalid node structure: {0}")]
    Structural(String),

    /// An odd number of `delimiter` occurrences in a plain run.
    #[error("Found unmatched delimiter '{delimiter}' in text: {text}")]
    UnmatchedDelimiter { delimiter: String, text: String },

    /// A link or image span without a URL.
    #[error("{kind:?} span must have a destination: {text}")]
    MissingDestination { kind: SpanKind, text: String },

    #[error("Block is not a valid heading: {0}")]
    InvalidHeading(String),

    #[error("Block is not a valid fenced code block: {0}")]
    InvalidCodeBlock(String),

    #[error("No level 1 heading found")]
    NoTitle,

    #[error("No parser for block: {0}")]
    UnhandledBlock(String),
}

pub type Result<T> = std::result::Result<T, Error>;
