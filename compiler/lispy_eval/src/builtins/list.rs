//! List builtins: `list head tail join`.

use super::helpers::{check_qexpr, into_qexpr, require_min_args, require_non_empty, take_args};
use crate::errors::EvalResult;
use crate::Value;

/// Relabel the arguments as data.
pub(super) fn list(args: Vec<Value>) -> Value {
    Value::QExpr(args)
}

/// Quoted list holding only the first element.
pub(super) fn head(function: &'static str, args: Vec<Value>) -> EvalResult {
    let [arg] = take_args(function, args)?;
    let mut items = into_qexpr(function, arg, 0)?;
    require_non_empty(function, &items, 0)?;
    items.truncate(1);
    Ok(Value::QExpr(items))
}

/// Quoted list without its first element.
pub(super) fn tail(function: &'static str, args: Vec<Value>) -> EvalResult {
    let [arg] = take_args(function, args)?;
    let mut items = into_qexpr(function, arg, 0)?;
    require_non_empty(function, &items, 0)?;
    items.remove(0);
    Ok(Value::QExpr(items))
}

/// Concatenate one or more quoted lists.
pub(super) fn join(function: &'static str, args: Vec<Value>) -> EvalResult {
    require_min_args(function, 1, args.len())?;
    for (index, arg) in args.iter().enumerate() {
        check_qexpr(function, arg, index)?;
    }
    let mut joined = Vec::new();
    for (index, arg) in args.into_iter().enumerate() {
        joined.extend(into_qexpr(function, arg, index)?);
    }
    Ok(Value::QExpr(joined))
}
