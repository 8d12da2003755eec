//! Tokenizer built on logos.

use logos::Logos;
use lispy_ir::Span;

use crate::ParseError;

/// Token categories.
///
/// `Number` outranks `Symbol` so `-5` and `42` are numbers while `-` and
/// `5x` stay symbols (the longest match wins first).
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(skip r";[^\n]*")]
pub enum TokenKind {
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[regex(r"-?[0-9]+", priority = 3)]
    Number,
    #[regex(r"[a-zA-Z0-9_+\-*/\\=<>!&%]+", priority = 1)]
    Symbol,
}

impl TokenKind {
    /// Delimiter character for bracket tokens.
    pub fn delimiter(self) -> Option<char> {
        match self {
            TokenKind::LParen => Some('('),
            TokenKind::RParen => Some(')'),
            TokenKind::LBrace => Some('{'),
            TokenKind::RBrace => Some('}'),
            TokenKind::Number | TokenKind::Symbol => None,
        }
    }
}

/// A token with its location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    /// Source text covered by this token.
    pub fn text<'src>(&self, source: &'src str) -> &'src str {
        source
            .get(self.span.start as usize..self.span.end as usize)
            .unwrap_or("")
    }
}

/// Tokenize `source`, failing on the first character no rule accepts.
pub fn lex(source: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    for (result, range) in TokenKind::lexer(source).spanned() {
        let span = Span::try_from_range(range.clone())?;
        match result {
            Ok(kind) => tokens.push(Token { kind, span }),
            Err(()) => {
                return Err(ParseError::InvalidCharacter {
                    found: source.get(range).unwrap_or("").to_string(),
                    span,
                })
            }
        }
    }
    Ok(tokens)
}
