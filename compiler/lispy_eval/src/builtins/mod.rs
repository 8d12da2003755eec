//! Builtin library.
//!
//! The set of builtins is fixed, so dispatch is a closed enum matched
//! directly rather than a table of trait objects. Each builtin receives its
//! already-evaluated arguments and the calling environment, validates them
//! (arity, then per-position type, then emptiness) and either produces a
//! value or an `EvalError`. The first failed check wins.

mod binding;
mod compare;
mod control;
mod helpers;
mod list;
mod numeric;

use crate::errors::EvalResult;
use crate::{Environment, Value};

use compare::Ordering;
use numeric::ArithOp;

/// A native operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Builtin {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    // Lists
    List,
    Head,
    Tail,
    Join,
    Eval,
    // Binding
    Def,
    Put,
    Lambda,
    // Control
    If,
    // Comparison
    Eq,
    Ne,
    Gt,
    Ge,
    Lt,
    Le,
}

impl Builtin {
    /// Every builtin, in registration order.
    pub const ALL: [Builtin; 20] = [
        Builtin::Add,
        Builtin::Sub,
        Builtin::Mul,
        Builtin::Div,
        Builtin::Rem,
        Builtin::List,
        Builtin::Head,
        Builtin::Tail,
        Builtin::Join,
        Builtin::Eval,
        Builtin::Def,
        Builtin::Put,
        Builtin::Lambda,
        Builtin::If,
        Builtin::Eq,
        Builtin::Ne,
        Builtin::Gt,
        Builtin::Ge,
        Builtin::Lt,
        Builtin::Le,
    ];

    /// Whether the builtin accepts an empty argument list, so that a bare
    /// `(f)` calls it.
    #[inline]
    pub fn needs_no_args(self) -> bool {
        matches!(self, Builtin::List)
    }

    /// Symbol the builtin is registered under.
    pub fn name(self) -> &'static str {
        match self {
            Builtin::Add => "+",
            Builtin::Sub => "-",
            Builtin::Mul => "*",
            Builtin::Div => "/",
            Builtin::Rem => "%",
            Builtin::List => "list",
            Builtin::Head => "head",
            Builtin::Tail => "tail",
            Builtin::Join => "join",
            Builtin::Eval => "eval",
            Builtin::Def => "def",
            Builtin::Put => "=",
            Builtin::Lambda => "\\",
            Builtin::If => "if",
            Builtin::Eq => "==",
            Builtin::Ne => "!=",
            Builtin::Gt => ">",
            Builtin::Ge => ">=",
            Builtin::Lt => "<",
            Builtin::Le => "<=",
        }
    }

    /// Builtin registered under `name`, if any.
    pub fn from_name(name: &str) -> Option<Builtin> {
        Builtin::ALL.into_iter().find(|b| b.name() == name)
    }

    /// Apply the builtin to evaluated arguments.
    pub fn call(self, env: &Environment, args: Vec<Value>) -> EvalResult {
        let name = self.name();
        match self {
            Builtin::Add => numeric::fold(name, ArithOp::Add, &args),
            Builtin::Sub => numeric::fold(name, ArithOp::Sub, &args),
            Builtin::Mul => numeric::fold(name, ArithOp::Mul, &args),
            Builtin::Div => numeric::fold(name, ArithOp::Div, &args),
            Builtin::Rem => numeric::fold(name, ArithOp::Rem, &args),
            Builtin::List => Ok(list::list(args)),
            Builtin::Head => list::head(name, args),
            Builtin::Tail => list::tail(name, args),
            Builtin::Join => list::join(name, args),
            Builtin::Eval => control::eval(name, env, args),
            Builtin::Def => binding::define(name, &env.root(), args),
            Builtin::Put => binding::define(name, env, args),
            Builtin::Lambda => binding::lambda(name, env, args),
            Builtin::If => control::if_(name, env, args),
            Builtin::Eq => compare::equal(name, &args, true),
            Builtin::Ne => compare::equal(name, &args, false),
            Builtin::Gt => compare::order(name, &args, Ordering::Gt),
            Builtin::Ge => compare::order(name, &args, Ordering::Ge),
            Builtin::Lt => compare::order(name, &args, Ordering::Lt),
            Builtin::Le => compare::order(name, &args, Ordering::Le),
        }
    }
}
