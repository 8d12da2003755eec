//! Runtime values for the Lispy evaluator.
//!
//! `Value` is a closed sum type. Lists own their elements, so `Clone` is a
//! deep copy of the tree. The one shared piece is a closure's captured
//! [`Environment`], which is reference counted because a closure may outlive
//! the call that created it.
//!
//! Cloning, comparing and printing recurse through
//! [`ensure_sufficient_stack`]; dropping a list uses a work list instead.

use std::fmt;
use std::mem;

use lispy_stack::ensure_sufficient_stack;

use crate::builtins::Builtin;
use crate::errors::{invalid_lambda_format, wrong_arg_type, EvalError};
use crate::Environment;

/// Formal parameter that collects all remaining arguments into a list.
pub const VARIADIC: &str = "&";

/// Runtime value.
pub enum Value {
    /// Signed 64-bit integer.
    Number(i64),
    /// Failure that short-circuits evaluation of the enclosing list.
    Error(EvalError),
    /// Identifier, resolved against the environment when evaluated.
    Symbol(String),
    /// Evaluable list: applies its head to its tail when evaluated.
    SExpr(Vec<Value>),
    /// Quoted list: evaluates to itself.
    QExpr(Vec<Value>),
    /// Builtin operation or user closure.
    Function(Function),
}

impl Value {
    #[inline]
    pub fn number(n: i64) -> Self {
        Value::Number(n)
    }

    #[inline]
    pub fn symbol(name: impl Into<String>) -> Self {
        Value::Symbol(name.into())
    }

    #[inline]
    pub fn sexpr(items: Vec<Value>) -> Self {
        Value::SExpr(items)
    }

    #[inline]
    pub fn qexpr(items: Vec<Value>) -> Self {
        Value::QExpr(items)
    }

    #[inline]
    pub fn builtin(builtin: Builtin) -> Self {
        Value::Function(Function::Builtin(builtin))
    }

    #[inline]
    pub fn closure(closure: Closure) -> Self {
        Value::Function(Function::Closure(closure))
    }

    /// Empty evaluable list, the result of binding forms.
    #[inline]
    pub fn unit() -> Self {
        Value::SExpr(Vec::new())
    }

    /// Boolean result of comparisons: 1 or 0.
    #[inline]
    pub fn truth(b: bool) -> Self {
        Value::Number(i64::from(b))
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    /// Variant name used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "Number",
            Value::Error(_) => "Error",
            Value::Symbol(_) => "Symbol",
            Value::SExpr(_) => "S-Expression",
            Value::QExpr(_) => "Q-Expression",
            Value::Function(_) => "Function",
        }
    }

    /// The callable payload, or the value back unchanged.
    pub fn into_function(mut self) -> Result<Function, Value> {
        if let Value::Function(function) = &mut self {
            // The emptied shell is dropped on return.
            return Ok(mem::replace(function, Function::Builtin(Builtin::List)));
        }
        Err(self)
    }

    /// The elements of a Q-expression, or the value back unchanged.
    pub fn into_qexpr_items(mut self) -> Result<Vec<Value>, Value> {
        if let Value::QExpr(items) = &mut self {
            return Ok(mem::take(items));
        }
        Err(self)
    }

    /// The name of a symbol, or the value back unchanged.
    pub fn into_symbol_name(mut self) -> Result<String, Value> {
        if let Value::Symbol(name) = &mut self {
            return Ok(mem::take(name));
        }
        Err(self)
    }
}

impl Clone for Value {
    fn clone(&self) -> Self {
        ensure_sufficient_stack(|| match self {
            Value::Number(n) => Value::Number(*n),
            Value::Error(e) => Value::Error(e.clone()),
            Value::Symbol(s) => Value::Symbol(s.clone()),
            Value::SExpr(items) => Value::SExpr(items.clone()),
            Value::QExpr(items) => Value::QExpr(items.clone()),
            Value::Function(func) => Value::Function(func.clone()),
        })
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        ensure_sufficient_stack(|| match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Error(a), Value::Error(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::SExpr(a), Value::SExpr(b)) | (Value::QExpr(a), Value::QExpr(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => a == b,
            _ => false,
        })
    }
}

/// Nested lists are flattened onto a work list so that dropping a deep tree
/// never recurses.
impl Drop for Value {
    fn drop(&mut self) {
        let (Value::SExpr(items) | Value::QExpr(items)) = self else {
            return;
        };
        let mut pending = mem::take(items);
        while let Some(mut item) = pending.pop() {
            if let Value::SExpr(inner) | Value::QExpr(inner) = &mut item {
                pending.append(inner);
            }
        }
    }
}

/// Callable value.
#[derive(Clone, PartialEq)]
pub enum Function {
    Builtin(Builtin),
    Closure(Closure),
}

impl Function {
    /// Whether a bare `(f)` applies `f` rather than returning it.
    pub fn needs_no_args(&self) -> bool {
        match self {
            Function::Builtin(builtin) => builtin.needs_no_args(),
            Function::Closure(closure) => closure.needs_no_args(),
        }
    }
}

/// User-defined function.
///
/// `env` holds any arguments bound so far by partial application; its parent
/// chain leads back to the scope the lambda was created in.
#[derive(Clone)]
pub struct Closure {
    params: Vec<String>,
    body: Vec<Value>,
    env: Environment,
}

impl Closure {
    /// Build a closure from a formal-parameter list and a body.
    ///
    /// Every formal must be a symbol, and `&` may only appear second to last
    /// so that exactly one name follows it.
    pub fn new(formals: Vec<Value>, body: Vec<Value>, env: Environment) -> Result<Self, EvalError> {
        let mut params = Vec::with_capacity(formals.len());
        for formal in formals {
            match formal.into_symbol_name() {
                Ok(name) => params.push(name),
                Err(other) => return Err(wrong_arg_type("\\", 0, "Symbol", other.type_name())),
            }
        }
        if let Some(pos) = params.iter().position(|p| p == VARIADIC) {
            if pos + 2 != params.len() || params[pos + 1] == VARIADIC {
                return Err(invalid_lambda_format());
            }
        }
        Ok(Closure { params, body, env })
    }

    /// Closure over an already-validated parameter list.
    pub(crate) fn partial(params: Vec<String>, body: Vec<Value>, env: Environment) -> Self {
        Closure { params, body, env }
    }

    #[inline]
    pub fn params(&self) -> &[String] {
        &self.params
    }

    #[inline]
    pub fn body(&self) -> &[Value] {
        &self.body
    }

    #[inline]
    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Whether applying this closure to no arguments runs its body.
    pub fn needs_no_args(&self) -> bool {
        match self.params.as_slice() {
            [] => true,
            [marker, _] => marker == VARIADIC,
            _ => false,
        }
    }

    pub(crate) fn into_parts(self) -> (Vec<String>, Vec<Value>, Environment) {
        (self.params, self.body, self.env)
    }
}

/// Structural: the captured environment is not compared.
impl PartialEq for Closure {
    fn eq(&self, other: &Self) -> bool {
        self.params == other.params && self.body == other.body
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, open: char, items: &[Value], close: char) -> fmt::Result {
    ensure_sufficient_stack(|| {
        write!(f, "{open}")?;
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "{close}")
    })
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Error(e) => write!(f, "Error: {e}"),
            Value::Symbol(s) => write!(f, "{s}"),
            Value::SExpr(items) => write_list(f, '(', items, ')'),
            Value::QExpr(items) => write_list(f, '{', items, '}'),
            Value::Function(func) => write!(f, "{func}"),
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Function::Builtin(_) => write!(f, "<builtin>"),
            Function::Closure(c) => write!(f, "{c}"),
        }
    }
}

impl fmt::Display for Closure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(\\ {{{}}} ", self.params.join(" "))?;
        write_list(f, '{', &self.body, '}')?;
        write!(f, ")")
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "Number({n})"),
            Value::Error(e) => write!(f, "Error({:?})", e.message()),
            Value::Symbol(s) => write!(f, "Symbol({s:?})"),
            Value::SExpr(items) => f.debug_tuple("SExpr").field(items).finish(),
            Value::QExpr(items) => f.debug_tuple("QExpr").field(items).finish(),
            Value::Function(func) => write!(f, "{func:?}"),
        }
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Function::Builtin(b) => write!(f, "Builtin({:?})", b.name()),
            Function::Closure(c) => write!(f, "{c:?}"),
        }
    }
}

// The environment is left out: captured scopes can reach back to the closure.
impl fmt::Debug for Closure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Closure")
            .field("params", &self.params)
            .field("body", &self.body)
            .finish_non_exhaustive()
    }
}
