//! Recursive-descent parser producing tagged syntax trees.

use lispy_ir::{tags, AstNode, Span};
use lispy_stack::ensure_sufficient_stack;

use crate::lexer::{lex, Token, TokenKind};
use crate::ParseError;

/// Parse a whole input into a root node holding every top-level expression.
pub fn parse(source: &str) -> Result<AstNode, ParseError> {
    let tokens = lex(source)?;
    let mut parser = Parser {
        source,
        tokens,
        pos: 0,
    };
    let mut exprs = Vec::new();
    while let Some(token) = parser.peek() {
        exprs.push(parser.parse_expr(token)?);
    }
    let end = Span::try_from_range(source.len()..source.len())?;
    Ok(AstNode::root(exprs, Span::new(0, end.end)))
}

struct Parser<'src> {
    source: &'src str,
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn bump(&mut self) {
        self.pos += 1;
    }

    fn parse_expr(&mut self, token: Token) -> Result<AstNode, ParseError> {
        ensure_sufficient_stack(|| match token.kind {
            TokenKind::Number => {
                self.bump();
                Ok(AstNode::leaf(tags::NUMBER, token.text(self.source), token.span))
            }
            TokenKind::Symbol => {
                self.bump();
                Ok(AstNode::leaf(tags::SYMBOL, token.text(self.source), token.span))
            }
            TokenKind::LParen => self.parse_list(token, tags::SEXPR, TokenKind::RParen),
            TokenKind::LBrace => self.parse_list(token, tags::QEXPR, TokenKind::RBrace),
            TokenKind::RParen | TokenKind::RBrace => Err(ParseError::UnexpectedCloser {
                found: token.kind.delimiter().unwrap_or(')'),
                span: token.span,
            }),
        })
    }

    /// Parse a bracketed list whose opener is `open`, keeping the delimiters
    /// as `char` leaves around the elements.
    fn parse_list(
        &mut self,
        open: Token,
        tag: &str,
        close: TokenKind,
    ) -> Result<AstNode, ParseError> {
        let open_char = open.kind.delimiter().unwrap_or('(');
        self.bump();
        let mut children = vec![AstNode::leaf(
            tags::CHAR,
            open_char.to_string(),
            open.span,
        )];
        loop {
            let Some(token) = self.peek() else {
                return Err(ParseError::UnclosedDelimiter {
                    open: open_char,
                    span: open.span,
                });
            };
            if token.kind == close {
                self.bump();
                children.push(AstNode::leaf(
                    tags::CHAR,
                    token.text(self.source),
                    token.span,
                ));
                return Ok(AstNode::branch(tag, children, open.span.merge(token.span)));
            }
            if matches!(token.kind, TokenKind::RParen | TokenKind::RBrace) {
                return Err(ParseError::MismatchedDelimiter {
                    open: open_char,
                    close: token.kind.delimiter().unwrap_or(')'),
                    span: token.span,
                });
            }
            children.push(self.parse_expr(token)?);
        }
    }
}
