//! Conversion from syntax trees to values.

use lispy_ir::{tags, AstNode};
use lispy_stack::ensure_sufficient_stack;

use crate::errors::{invalid_number, malformed_syntax};
use crate::Value;

/// Convert a syntax tree into an unevaluated value.
///
/// The root becomes an S-expression of its top-level expressions.
/// Out-of-range numbers and unknown node kinds are read as error values so
/// that evaluating them reports the failure.
pub fn read(node: &AstNode) -> Value {
    ensure_sufficient_stack(|| {
        if node.has_rule(tags::NUMBER_RULE) {
            read_number(node.contents())
        } else if node.has_rule(tags::SYMBOL_RULE) {
            Value::symbol(node.contents())
        } else if node.is_root() || node.has_rule(tags::SEXPR_RULE) {
            Value::SExpr(read_children(node))
        } else if node.has_rule(tags::QEXPR_RULE) {
            Value::QExpr(read_children(node))
        } else {
            Value::Error(malformed_syntax(node.tag()))
        }
    })
}

fn read_number(literal: &str) -> Value {
    match literal.parse::<i64>() {
        Ok(n) => Value::Number(n),
        Err(_) => Value::Error(invalid_number(literal)),
    }
}

fn read_children(node: &AstNode) -> Vec<Value> {
    node.expressions().map(read).collect()
}
