//! Arithmetic builtins: `+ - * / %`.
//!
//! All arithmetic is checked; overflow is an error value, not a wrap.

use super::helpers::{require_min_args, require_number};
use crate::errors::{division_by_zero, integer_overflow, too_few_args, EvalError, EvalResult};
use crate::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

/// Left fold of `op` over one or more numbers. `-` with a single argument
/// negates it.
pub(super) fn fold(function: &'static str, op: ArithOp, args: &[Value]) -> EvalResult {
    require_min_args(function, 1, args.len())?;
    let numbers = (0..args.len())
        .map(|i| require_number(function, args, i))
        .collect::<Result<Vec<_>, _>>()?;

    let Some((&first, rest)) = numbers.split_first() else {
        return Err(too_few_args(function, 1, 0));
    };
    if rest.is_empty() && op == ArithOp::Sub {
        return first
            .checked_neg()
            .map(Value::Number)
            .ok_or_else(|| integer_overflow("negation"));
    }
    rest.iter()
        .try_fold(first, |acc, &n| apply(op, acc, n))
        .map(Value::Number)
}

fn apply(op: ArithOp, a: i64, b: i64) -> Result<i64, EvalError> {
    match op {
        ArithOp::Add => a.checked_add(b).ok_or_else(|| integer_overflow("addition")),
        ArithOp::Sub => a
            .checked_sub(b)
            .ok_or_else(|| integer_overflow("subtraction")),
        ArithOp::Mul => a
            .checked_mul(b)
            .ok_or_else(|| integer_overflow("multiplication")),
        ArithOp::Div if b == 0 => Err(division_by_zero()),
        ArithOp::Div => a.checked_div(b).ok_or_else(|| integer_overflow("division")),
        ArithOp::Rem if b == 0 => Err(division_by_zero()),
        ArithOp::Rem => a.checked_rem(b).ok_or_else(|| integer_overflow("remainder")),
    }
}
