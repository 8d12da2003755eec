use super::*;
use crate::errors::{division_by_zero, not_a_function, too_many_args, unbound_symbol};
use crate::Builtin;
use pretty_assertions::assert_eq;

fn n(value: i64) -> Value {
    Value::number(value)
}

fn sym(name: &str) -> Value {
    Value::symbol(name)
}

fn s(items: Vec<Value>) -> Value {
    Value::sexpr(items)
}

fn q(items: Vec<Value>) -> Value {
    Value::qexpr(items)
}

fn lambda(params: &[&str], body: Vec<Value>) -> Value {
    s(vec![
        sym("\\"),
        q(params.iter().map(|p| sym(p)).collect()),
        q(body),
    ])
}

#[test]
fn test_atoms_self_evaluate() {
    let env = Environment::with_builtins();
    assert_eq!(eval(&env, n(4)), n(4));
    assert_eq!(eval(&env, q(vec![sym("undefined")])), q(vec![sym("undefined")]));
    assert_eq!(eval(&env, Value::builtin(Builtin::Add)), Value::builtin(Builtin::Add));
}

#[test]
fn test_symbol_lookup() {
    let env = Environment::with_builtins();
    env.define_local("x", n(3));
    assert_eq!(eval(&env, sym("x")), n(3));
    assert_eq!(eval(&env, sym("y")), Value::Error(unbound_symbol("y")));
}

#[test]
fn test_empty_sexpr_is_itself() {
    let env = Environment::with_builtins();
    assert_eq!(eval(&env, Value::unit()), Value::unit());
}

#[test]
fn test_single_element_unwraps() {
    let env = Environment::with_builtins();
    assert_eq!(eval(&env, s(vec![n(5)])), n(5));
    assert_eq!(eval(&env, s(vec![s(vec![s(vec![n(5)])])])), n(5));
    assert_eq!(eval(&env, s(vec![sym("+")])), Value::builtin(Builtin::Add));
}

#[test]
fn test_head_must_be_function() {
    let env = Environment::with_builtins();
    assert_eq!(
        eval(&env, s(vec![n(1), n(2)])),
        Value::Error(not_a_function("Number"))
    );
}

#[test]
fn test_first_error_wins() {
    let env = Environment::with_builtins();
    let expr = s(vec![
        sym("+"),
        s(vec![sym("/"), n(1), n(0)]),
        sym("missing"),
    ]);
    assert_eq!(eval(&env, expr), Value::Error(division_by_zero()));
}

#[test]
fn test_error_stops_later_side_effects() {
    let env = Environment::with_builtins();
    let expr = s(vec![
        sym("list"),
        sym("missing"),
        s(vec![sym("def"), q(vec![sym("x")]), n(1)]),
    ]);
    assert_eq!(eval(&env, expr), Value::Error(unbound_symbol("missing")));
    assert!(!env.contains_local("x"));
}

#[test]
fn test_closure_application() {
    let env = Environment::with_builtins();
    let add = lambda(&["x", "y"], vec![sym("+"), sym("x"), sym("y")]);
    assert_eq!(eval(&env, s(vec![add, n(1), n(2)])), n(3));
}

#[test]
fn test_partial_application() {
    let env = Environment::with_builtins();
    let add = lambda(&["x", "y"], vec![sym("+"), sym("x"), sym("y")]);
    let partial = eval(&env, s(vec![add, n(1)]));
    assert_eq!(partial.to_string(), "(\\ {y} {+ x y})");
    assert_eq!(eval(&env, s(vec![partial, n(2)])), n(3));
}

#[test]
fn test_partial_bindings_do_not_leak() {
    let env = Environment::with_builtins();
    let add = lambda(&["x", "y"], vec![sym("+"), sym("x"), sym("y")]);
    let _partial = eval(&env, s(vec![add, n(1)]));
    assert!(!env.contains_local("x"));
    assert_eq!(eval(&env, sym("x")), Value::Error(unbound_symbol("x")));
}

#[test]
fn test_too_many_arguments() {
    let env = Environment::with_builtins();
    let id = lambda(&["x"], vec![sym("x")]);
    assert_eq!(
        eval(&env, s(vec![id, n(1), n(2)])),
        Value::Error(too_many_args(1, 2))
    );
}

#[test]
fn test_variadic_collects_rest() {
    let env = Environment::with_builtins();
    let rest = lambda(&["x", "&", "xs"], vec![sym("xs")]);
    assert_eq!(
        eval(&env, s(vec![rest.clone(), n(1), n(2), n(3)])),
        q(vec![n(2), n(3)])
    );
    assert_eq!(eval(&env, s(vec![rest, n(1)])), q(vec![]));
}

#[test]
fn test_zero_argument_closures_run_alone() {
    let env = Environment::with_builtins();
    let thunk = lambda(&[], vec![sym("+"), n(1), n(1)]);
    assert_eq!(eval(&env, s(vec![thunk])), n(2));
    let collect = lambda(&["&", "xs"], vec![sym("xs")]);
    assert_eq!(eval(&env, s(vec![collect])), q(vec![]));
}

#[test]
fn test_closure_with_params_alone_is_value() {
    let env = Environment::with_builtins();
    let id = lambda(&["x"], vec![sym("x")]);
    let value = eval(&env, s(vec![id]));
    assert_eq!(value.to_string(), "(\\ {x} {x})");
}

#[test]
fn test_put_inside_closure_is_local() {
    let env = Environment::with_builtins();
    let body = vec![sym("="), q(vec![sym("local")]), sym("x")];
    let set_local = lambda(&["x"], body);
    assert_eq!(eval(&env, s(vec![set_local, n(1)])), Value::unit());
    assert!(!env.contains_local("local"));
}

#[test]
fn test_def_inside_closure_is_global() {
    let env = Environment::with_builtins();
    let body = vec![sym("def"), q(vec![sym("shared")]), sym("x")];
    let set_global = lambda(&["x"], body);
    assert_eq!(eval(&env, s(vec![set_global, n(7)])), Value::unit());
    assert_eq!(env.lookup("shared"), n(7));
}

#[test]
fn test_apply_builtin_directly() {
    let env = Environment::with_builtins();
    assert_eq!(apply(&env, Function::Builtin(Builtin::Mul), vec![n(6), n(7)]), n(42));
    assert_eq!(
        apply(&env, Function::Builtin(Builtin::Div), vec![n(1), n(0)]),
        Value::Error(division_by_zero())
    );
}
