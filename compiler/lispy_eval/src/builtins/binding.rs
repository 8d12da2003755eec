//! Binding builtins: `def`, `=` and `\`.

use super::helpers::{into_qexpr, require_min_args, take_args};
use crate::errors::{symbol_count_mismatch, wrong_arg_type, EvalResult};
use crate::{Closure, Environment, Value};

/// Bind each symbol of the first argument to the matching later argument.
///
/// `env` is the target scope: the root for `def`, the caller's own scope
/// for `=`.
pub(super) fn define(function: &'static str, env: &Environment, mut args: Vec<Value>) -> EvalResult {
    require_min_args(function, 1, args.len())?;
    let values = args.split_off(1);
    let Some(names) = args.pop() else {
        return Ok(Value::unit());
    };
    let names = into_qexpr(function, names, 0)?;

    let mut symbols = Vec::with_capacity(names.len());
    for name in names {
        match name.into_symbol_name() {
            Ok(s) => symbols.push(s),
            Err(other) => return Err(wrong_arg_type(function, 0, "Symbol", other.type_name())),
        }
    }
    if symbols.len() != values.len() {
        return Err(symbol_count_mismatch(function, symbols.len(), values.len()));
    }

    for (name, value) in symbols.into_iter().zip(values) {
        env.define_local(name, value);
    }
    Ok(Value::unit())
}

/// Build a closure over a fresh child of the calling environment.
pub(super) fn lambda(function: &'static str, env: &Environment, args: Vec<Value>) -> EvalResult {
    let [formals, body] = take_args(function, args)?;
    let formals = into_qexpr(function, formals, 0)?;
    let body = into_qexpr(function, body, 1)?;
    let closure = Closure::new(formals, body, Environment::child_of(env))?;
    Ok(Value::closure(closure))
}
