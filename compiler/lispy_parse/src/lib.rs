//! Lispy Parse - text to syntax tree.
//!
//! Grammar:
//!
//! ```text
//! number  : /-?[0-9]+/ ;
//! symbol  : /[a-zA-Z0-9_+\-*\/\\=<>!&%]+/ ;
//! sexpr   : '(' <expr>* ')' ;
//! qexpr   : '{' <expr>* '}' ;
//! expr    : <number> | <symbol> | <sexpr> | <qexpr> ;
//! program : /^/ <expr>* /$/ ;
//! ```
//!
//! Whitespace and `;` line comments are skipped. The output is an
//! [`lispy_ir::AstNode`] tree in the tagged shape the evaluator's reader
//! expects.

mod error;
mod lexer;
mod parser;

pub use error::{line_col, ParseError};
pub use lexer::{lex, Token, TokenKind};
pub use parser::parse;
