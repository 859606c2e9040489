//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters. The tokenizer
//! refers to these constants; it never hardcodes `**`, `` ` `` or `![`.
//!
//! ## Types
//!
//! - **`CodeSpan`**: `TICK = "`"`, extracted before emphasis
//! - **`Emphasis`**: `BOLD = "**"`, `ITALIC = "*"`
//! - **`Target`**: `[text](url)` syntax shared by links and images

pub mod code_span;
pub mod emphasis;
pub mod target;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use target::Target;
