use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_define_lookup() {
    let env = Environment::new();
    env.define_local("x", Value::number(42));
    assert_eq!(env.lookup("x"), Value::number(42));
}

#[test]
fn test_unbound_symbol_is_error_value() {
    let env = Environment::new();
    assert_eq!(env.lookup("nope").to_string(), "Error: Unbound Symbol 'nope'");
}

#[test]
fn test_redefine_replaces() {
    let env = Environment::new();
    env.define_local("x", Value::number(1));
    env.define_local("x", Value::number(2));
    assert_eq!(env.lookup("x"), Value::number(2));
    assert_eq!(env.scope.borrow().len(), 1);
}

#[test]
fn test_child_shadows_parent() {
    let parent = Environment::new();
    parent.define_local("x", Value::number(1));
    let child = Environment::child_of(&parent);
    child.define_local("x", Value::number(2));

    assert_eq!(child.lookup("x"), Value::number(2));
    assert_eq!(parent.lookup("x"), Value::number(1));
}

#[test]
fn test_child_falls_back_to_parent() {
    let parent = Environment::new();
    parent.define_local("y", Value::number(7));
    let child = Environment::child_of(&Environment::child_of(&parent));
    assert_eq!(child.lookup("y"), Value::number(7));
}

#[test]
fn test_define_global_binds_in_root() {
    let root = Environment::new();
    let inner = Environment::child_of(&Environment::child_of(&root));
    inner.define_global("g", Value::number(5));

    assert!(root.contains_local("g"));
    assert!(!inner.contains_local("g"));
    assert_eq!(inner.lookup("g"), Value::number(5));
}

#[test]
fn test_lookup_returns_independent_copy() {
    let env = Environment::new();
    env.define_local("xs", Value::qexpr(vec![Value::number(1)]));
    let copy = env.lookup("xs");
    env.define_local("xs", Value::qexpr(vec![]));
    assert_eq!(copy, Value::qexpr(vec![Value::number(1)]));
}

#[test]
fn test_root_and_is_root() {
    let root = Environment::new();
    let child = Environment::child_of(&root);
    assert!(root.is_root());
    assert!(!child.is_root());
    root.define_local("r", Value::number(1));
    assert!(child.root().contains_local("r"));
}

#[test]
fn test_fork_copies_bindings_and_keeps_parent() {
    let parent = Environment::new();
    let env = Environment::child_of(&parent);
    env.define_local("a", Value::number(1));

    parent.define_local("p", Value::number(4));
    let forked = env.fork();
    forked.define_local("a", Value::number(2));
    forked.define_local("b", Value::number(3));

    assert_eq!(env.lookup("a"), Value::number(1));
    assert!(!env.contains_local("b"));
    assert_eq!(forked.lookup("a"), Value::number(2));
    assert!(forked
        .parent()
        .is_some_and(|p| p.contains_local("p")));
}

#[test]
fn test_clone_shares_scope() {
    let env = Environment::new();
    let handle = env.clone();
    handle.define_local("z", Value::number(9));
    assert_eq!(env.lookup("z"), Value::number(9));
}

#[test]
fn test_with_builtins_registers_every_builtin() {
    let env = Environment::with_builtins();
    for builtin in Builtin::ALL {
        assert_eq!(env.lookup(builtin.name()), Value::builtin(builtin));
    }
}

#[test]
fn test_debug_reports_depth() {
    let root = Environment::new();
    let child = Environment::child_of(&root);
    assert_eq!(
        format!("{child:?}"),
        "Environment { bindings: 0, depth: 1 }"
    );
}
