//! Lexical environments.
//!
//! An [`Environment`] is a handle to one [`Scope`] in a parent-linked chain.
//! Handles are cheap to clone and share the scope they point at, which is
//! how a closure keeps its defining scope alive after the defining call
//! returns.
//!
//! Parent links are strong. A closure stored in a scope it captured, such
//! as a lambda bound with `=` inside a function body, forms a cycle, and
//! that scope is never freed.

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::builtins::Builtin;
use crate::errors::unbound_symbol;
use crate::Value;

/// A single-threaded shared cell for scopes.
///
/// Wraps `Rc<RefCell<T>>` so every scope allocation goes through
/// `LocalScope::new()`. Not thread-safe; the evaluator runs on one thread.
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    #[inline]
    pub fn borrow(&self) -> std::cell::Ref<'_, T> {
        self.0.borrow()
    }

    #[inline]
    pub fn borrow_mut(&self) -> std::cell::RefMut<'_, T> {
        self.0.borrow_mut()
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

/// Bindings of one scope plus the link to its parent.
#[derive(Clone, Default)]
pub struct Scope {
    bindings: FxHashMap<String, Value>,
    parent: Option<Environment>,
}

impl Scope {
    /// Create a new empty scope with no parent.
    pub fn new() -> Self {
        Scope::default()
    }

    /// Create a new empty scope with a parent.
    pub fn with_parent(parent: Environment) -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent: Some(parent),
        }
    }

    /// Bind `name`, replacing any existing binding in this scope.
    #[inline]
    pub fn define(&mut self, name: String, value: Value) {
        self.bindings.insert(name, value);
    }

    /// Binding in this scope only.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    #[inline]
    pub fn parent(&self) -> Option<&Environment> {
        self.parent.as_ref()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Handle to a scope in the chain.
#[derive(Clone)]
pub struct Environment {
    scope: LocalScope<Scope>,
}

impl Environment {
    /// Create an empty root environment.
    pub fn new() -> Self {
        Environment {
            scope: LocalScope::new(Scope::new()),
        }
    }

    /// Create a root environment with every builtin bound by name.
    pub fn with_builtins() -> Self {
        let env = Environment::new();
        for builtin in Builtin::ALL {
            env.define_local(builtin.name(), Value::builtin(builtin));
        }
        env
    }

    /// Create an empty environment whose lookups fall back to `parent`.
    pub fn child_of(parent: &Environment) -> Self {
        Environment {
            scope: LocalScope::new(Scope::with_parent(parent.clone())),
        }
    }

    /// Look up `name`, innermost scope first.
    ///
    /// Returns a copy of the bound value, or an unbound-symbol error value.
    pub fn lookup(&self, name: &str) -> Value {
        let mut current = self.clone();
        loop {
            let parent = {
                let scope = current.scope.borrow();
                if let Some(value) = scope.get(name) {
                    return value.clone();
                }
                scope.parent.clone()
            };
            match parent {
                Some(parent) => current = parent,
                None => {
                    tracing::trace!(name, "unbound symbol");
                    return Value::Error(unbound_symbol(name));
                }
            }
        }
    }

    /// Bind `name` in this scope, shadowing outer bindings.
    pub fn define_local(&self, name: impl Into<String>, value: Value) {
        let name = name.into();
        tracing::trace!(name = %name, "define local");
        self.scope.borrow_mut().define(name, value);
    }

    /// Bind `name` in the root of the chain.
    pub fn define_global(&self, name: impl Into<String>, value: Value) {
        self.root().define_local(name, value);
    }

    /// The outermost environment of the chain.
    pub fn root(&self) -> Environment {
        let mut current = self.clone();
        loop {
            let parent = current.scope.borrow().parent.clone();
            match parent {
                Some(parent) => current = parent,
                None => return current,
            }
        }
    }

    pub fn parent(&self) -> Option<Environment> {
        self.scope.borrow().parent.clone()
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.scope.borrow().parent.is_none()
    }

    /// Whether `name` is bound in this scope, ignoring parents.
    pub fn contains_local(&self, name: &str) -> bool {
        self.scope.borrow().get(name).is_some()
    }

    /// Copy this scope's bindings into a new scope with the same parent.
    ///
    /// Later definitions in either environment do not affect the other.
    #[must_use]
    pub fn fork(&self) -> Environment {
        Environment {
            scope: LocalScope::new(self.scope.borrow().clone()),
        }
    }

    fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self.parent();
        while let Some(env) = current {
            depth += 1;
            current = env.parent();
        }
        depth
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

// Bindings are not printed: closures stored in a scope can point back to it.
impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("bindings", &self.scope.borrow().len())
            .field("depth", &self.depth())
            .finish()
    }
}

#[cfg(test)]
mod tests;
