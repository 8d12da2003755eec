//! Comparison builtins: `== != > >= < <=`.

use super::helpers::{require_args, require_number};
use crate::errors::EvalResult;
use crate::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Ordering {
    Gt,
    Ge,
    Lt,
    Le,
}

/// Structural (in)equality of any two values.
pub(super) fn equal(function: &'static str, args: &[Value], expect_equal: bool) -> EvalResult {
    require_args(function, 2, args.len())?;
    Ok(Value::truth((args[0] == args[1]) == expect_equal))
}

/// Numeric ordering of two numbers.
pub(super) fn order(function: &'static str, args: &[Value], ordering: Ordering) -> EvalResult {
    require_args(function, 2, args.len())?;
    let a = require_number(function, args, 0)?;
    let b = require_number(function, args, 1)?;
    let holds = match ordering {
        Ordering::Gt => a > b,
        Ordering::Ge => a >= b,
        Ordering::Lt => a < b,
        Ordering::Le => a <= b,
    };
    Ok(Value::truth(holds))
}
