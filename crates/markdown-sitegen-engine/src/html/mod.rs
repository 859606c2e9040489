//! # HTML Node Tree
//!
//! The output representation of the parser: a [`Node`] is either a leaf
//! (optional tag, text content, attributes) or a branch (tag, children,
//! attributes). Trees are built bottom-up and never mutated afterwards;
//! [`Node::render`] serializes a tree to markup.

pub mod node;

pub use node::{Attributes, Node};
