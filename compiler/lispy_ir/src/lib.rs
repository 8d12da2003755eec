//! Lispy IR - syntax tree types.
//!
//! This crate is the only contract between the parser and the evaluator:
//! - `Span` for source locations
//! - `AstNode`, a tagged tree node in the shape produced by the grammar
//! - `tags`, the tag vocabulary the evaluator's reader understands
//!
//! The evaluator never sees tokens or grammar rules. It reads an `AstNode`
//! tree by inspecting tags and delimiter contents, so any front end that
//! builds the same shape can feed it.

pub mod ast;
mod span;

pub use ast::{tags, AstNode};
pub use span::{Span, SpanError};
