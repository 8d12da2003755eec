//! Builtins that evaluate quoted code: `eval` and `if`.

use super::helpers::{as_number, into_qexpr, take_args};
use crate::errors::EvalResult;
use crate::interpreter;
use crate::{Environment, Value};

/// Evaluate a quoted list as code in the calling environment.
pub(super) fn eval(function: &'static str, env: &Environment, args: Vec<Value>) -> EvalResult {
    let [code] = take_args(function, args)?;
    let items = into_qexpr(function, code, 0)?;
    Ok(interpreter::eval(env, Value::SExpr(items)))
}

/// Evaluate the second or third argument depending on the first.
/// Any non-zero number is true.
pub(super) fn if_(function: &'static str, env: &Environment, args: Vec<Value>) -> EvalResult {
    let [condition, then_branch, else_branch] = take_args(function, args)?;
    let condition = as_number(function, &condition, 0)?;
    let then_items = into_qexpr(function, then_branch, 1)?;
    let else_items = into_qexpr(function, else_branch, 2)?;
    let chosen = if condition != 0 { then_items } else { else_items };
    Ok(interpreter::eval(env, Value::SExpr(chosen)))
}
