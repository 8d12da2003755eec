//! Parse errors.

use lispy_ir::{Span, SpanError};
use thiserror::Error;

/// Failure to turn source text into a syntax tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unexpected character `{found}`")]
    InvalidCharacter { found: String, span: Span },

    #[error("unclosed `{open}`")]
    UnclosedDelimiter { open: char, span: Span },

    #[error("unexpected `{found}` with no matching opener")]
    UnexpectedCloser { found: char, span: Span },

    #[error("`{open}` closed by `{close}`")]
    MismatchedDelimiter { open: char, close: char, span: Span },

    #[error("source too large: {0}")]
    TooLarge(#[from] SpanError),
}

impl ParseError {
    /// Location the error points at, if it has one.
    pub fn span(&self) -> Option<Span> {
        match self {
            ParseError::InvalidCharacter { span, .. }
            | ParseError::UnclosedDelimiter { span, .. }
            | ParseError::UnexpectedCloser { span, .. }
            | ParseError::MismatchedDelimiter { span, .. } => Some(*span),
            ParseError::TooLarge(_) => None,
        }
    }
}

/// 1-based line and column of a byte offset.
pub fn line_col(source: &str, offset: u32) -> (usize, usize) {
    let offset = (offset as usize).min(source.len());
    let before = source.get(..offset).unwrap_or(source);
    let line = before.matches('\n').count() + 1;
    let column = before.rsplit('\n').next().map_or(0, |l| l.chars().count()) + 1;
    (line, column)
}
