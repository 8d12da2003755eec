//! Tagged syntax tree nodes.
//!
//! Nodes follow the layout of a combinator-grammar parse tree: each node has a
//! `|`-separated tag naming the rules that matched it, leaf text in
//! `contents`, and ordered children. Delimiters and input boundaries appear
//! as their own leaf nodes, so consumers must skip them (see
//! [`AstNode::is_structural_noise`]).
//!
//! ```text
//! >
//!   regex
//!   expr|sexpr|>
//!     char '('
//!     expr|symbol|regex '+'
//!     expr|number|regex '1'
//!     char ')'
//!   regex
//! ```

use std::fmt;

use crate::Span;

/// Tag vocabulary shared by the parser and the reader.
pub mod tags {
    /// Tag of the tree root.
    pub const ROOT: &str = ">";
    /// Tag of the zero-width start/end-of-input markers.
    pub const REGEX: &str = "regex";
    /// Tag of delimiter leaves.
    pub const CHAR: &str = "char";

    pub const NUMBER: &str = "expr|number|regex";
    pub const SYMBOL: &str = "expr|symbol|regex";
    pub const SEXPR: &str = "expr|sexpr|>";
    pub const QEXPR: &str = "expr|qexpr|>";

    // Fragments the reader matches with `contains`.
    pub const NUMBER_RULE: &str = "number";
    pub const SYMBOL_RULE: &str = "symbol";
    pub const SEXPR_RULE: &str = "sexpr";
    pub const QEXPR_RULE: &str = "qexpr";
}

/// Delimiter contents that carry no meaning once the tree is built.
const DELIMITERS: [&str; 4] = ["(", ")", "{", "}"];

/// A node of the syntax tree.
#[derive(Clone, PartialEq, Eq)]
pub struct AstNode {
    tag: String,
    contents: String,
    span: Span,
    children: Vec<AstNode>,
}

impl AstNode {
    /// Create a leaf node carrying literal text.
    pub fn leaf(tag: impl Into<String>, contents: impl Into<String>, span: Span) -> Self {
        AstNode {
            tag: tag.into(),
            contents: contents.into(),
            span,
            children: Vec::new(),
        }
    }

    /// Create an interior node.
    pub fn branch(tag: impl Into<String>, children: Vec<AstNode>, span: Span) -> Self {
        AstNode {
            tag: tag.into(),
            contents: String::new(),
            span,
            children,
        }
    }

    /// Create a root node around top-level expressions, adding the boundary
    /// markers the grammar emits at start and end of input.
    pub fn root(exprs: Vec<AstNode>, span: Span) -> Self {
        let mut children = Vec::with_capacity(exprs.len() + 2);
        children.push(AstNode::leaf(tags::REGEX, "", Span::point(span.start)));
        children.extend(exprs);
        children.push(AstNode::leaf(tags::REGEX, "", Span::point(span.end)));
        AstNode::branch(tags::ROOT, children, span)
    }

    #[inline]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    #[inline]
    pub fn contents(&self) -> &str {
        &self.contents
    }

    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    #[inline]
    pub fn children(&self) -> &[AstNode] {
        &self.children
    }

    /// Whether the tag names `rule` anywhere in its `|`-separated chain.
    #[inline]
    pub fn has_rule(&self, rule: &str) -> bool {
        self.tag.contains(rule)
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.tag == tags::ROOT
    }

    /// Delimiters and input-boundary markers.
    pub fn is_structural_noise(&self) -> bool {
        self.tag == tags::REGEX || DELIMITERS.contains(&self.contents.as_str())
    }

    /// Children that carry expressions, in order.
    pub fn expressions(&self) -> impl Iterator<Item = &AstNode> {
        self.children.iter().filter(|c| !c.is_structural_noise())
    }

    fn write_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        write!(f, "{:width$}{}", "", self.tag, width = depth * 2)?;
        if !self.contents.is_empty() {
            write!(f, " '{}'", self.contents)?;
        }
        writeln!(f)?;
        for child in &self.children {
            child.write_indented(f, depth + 1)?;
        }
        Ok(())
    }
}

impl fmt::Debug for AstNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AstNode")
            .field("tag", &self.tag)
            .field("contents", &self.contents)
            .field("span", &self.span)
            .field("children", &self.children)
            .finish()
    }
}

/// Tears the tree down with a work list so nesting depth never reaches the
/// call stack.
impl Drop for AstNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

/// Indented outline of the tree, one node per line.
impl fmt::Display for AstNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}

#[cfg(test)]
mod tests;
