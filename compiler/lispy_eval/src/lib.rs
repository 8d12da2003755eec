//! Lispy Eval - tree-walking evaluator for Lispy.
//!
//! # Architecture
//!
//! - [`read`] turns a syntax tree from `lispy_ir` into a [`Value`]
//! - [`eval`] evaluates a value in an [`Environment`], a chain of scopes
//!   shared through `Rc`
//! - [`Builtin`] is the closed set of native operations, dispatched by `match`
//! - Failures are values: [`Value::Error`] wraps an [`EvalError`] and stops
//!   evaluation of the enclosing list
//!
//! A minimal session:
//!
//! ```text
//! let env = Environment::with_builtins();
//! let value = eval(&env, read(&tree));
//! println!("{value}");
//! ```

mod builtins;
mod environment;
pub mod errors;
mod interpreter;
mod read;
mod value;

pub use builtins::Builtin;
pub use environment::{Environment, LocalScope, Scope};
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use interpreter::{apply, eval};
pub use read::read;
pub use value::{Closure, Function, Value, VARIADIC};

#[cfg(test)]
mod tests;
