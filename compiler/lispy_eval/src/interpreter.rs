//! Tree-walking evaluation.
//!
//! Symbols resolve against the environment, S-expressions apply their head
//! to their tail, and every other value evaluates to itself. Evaluation
//! recurses along the nesting of the input, so each level goes through
//! `ensure_sufficient_stack`.

use lispy_stack::ensure_sufficient_stack;

use crate::errors::{invalid_lambda_format, not_a_function, too_many_args};
use crate::{Closure, Environment, Function, Value, VARIADIC};

/// Evaluate `value` in `env`.
pub fn eval(env: &Environment, mut value: Value) -> Value {
    ensure_sufficient_stack(|| match value {
        Value::Symbol(ref name) => env.lookup(name),
        Value::SExpr(ref mut items) => eval_sexpr(env, std::mem::take(items)),
        _ => value,
    })
}

fn eval_sexpr(env: &Environment, items: Vec<Value>) -> Value {
    if items.is_empty() {
        return Value::SExpr(items);
    }

    let mut evaluated = Vec::with_capacity(items.len());
    for item in items {
        let value = eval(env, item);
        if value.is_error() {
            return value;
        }
        evaluated.push(value);
    }

    let args = evaluated.split_off(1);
    let Some(head) = evaluated.pop() else {
        return Value::unit();
    };

    match head.into_function() {
        Ok(function) if args.is_empty() && !function.needs_no_args() => Value::Function(function),
        Ok(function) => apply(env, function, args),
        Err(other) if args.is_empty() => other,
        Err(other) => Value::Error(not_a_function(other.type_name())),
    }
}

/// Apply `function` to already-evaluated arguments.
///
/// `env` is the calling environment; builtins such as `=` and `eval` act on
/// it, closures ignore it in favour of their captured one.
#[tracing::instrument(level = "debug", skip_all, fields(function = label(&function), argc = args.len()))]
pub fn apply(env: &Environment, function: Function, args: Vec<Value>) -> Value {
    match function {
        Function::Builtin(builtin) => builtin.call(env, args).unwrap_or_else(Value::Error),
        Function::Closure(closure) => apply_closure(closure, args),
    }
}

fn label(function: &Function) -> &'static str {
    match function {
        Function::Builtin(builtin) => builtin.name(),
        Function::Closure(_) => "lambda",
    }
}

/// Bind arguments to formals in a fresh child of the captured environment.
///
/// Running out of arguments yields a closure over the remaining formals;
/// running out of formals is an error.
fn apply_closure(closure: Closure, args: Vec<Value>) -> Value {
    let given = args.len();
    let (params, body, captured) = closure.into_parts();
    let call_env = Environment::child_of(&captured);

    let mut next = 0;
    let mut remaining = args.into_iter();
    while let Some(arg) = remaining.next() {
        let Some(param) = params.get(next) else {
            return Value::Error(too_many_args(params.len(), given));
        };
        if param == VARIADIC {
            let Some(rest) = params.get(next + 1) else {
                return Value::Error(invalid_lambda_format());
            };
            let collected = std::iter::once(arg).chain(remaining.by_ref()).collect();
            call_env.define_local(rest.clone(), Value::QExpr(collected));
            next += 2;
            break;
        }
        call_env.define_local(param.clone(), arg);
        next += 1;
    }

    // A trailing `& name` with nothing left to collect binds the empty list.
    if let [marker, rest] = &params[next..] {
        if marker == VARIADIC {
            call_env.define_local(rest.clone(), Value::QExpr(Vec::new()));
            next += 2;
        }
    }

    if next < params.len() {
        let unbound = params[next..].to_vec();
        return Value::closure(Closure::partial(unbound, body, call_env));
    }
    eval(&call_env, Value::SExpr(body))
}

#[cfg(test)]
mod tests;
