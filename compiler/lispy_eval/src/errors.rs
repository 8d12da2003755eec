//! Evaluation errors.
//!
//! Errors are ordinary values: a failed operation returns
//! `Value::Error(EvalError)` and evaluation of the enclosing list stops
//! there. `EvalErrorKind` keeps the category machine-readable while the
//! rendered message is what users see and what equality compares.
//!
//! Factory functions are the public API for building errors; they keep the
//! message wording in one place.

use thiserror::Error;

use crate::Value;

/// Result type used inside builtins and argument validation.
///
/// `Err` is folded back into a `Value::Error` at the application boundary.
pub type EvalResult = Result<Value, EvalError>;

/// Category of an evaluation failure.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalErrorKind {
    #[error("Unbound Symbol '{name}'")]
    UnboundSymbol { name: String },

    #[error("Function '{function}' passed incorrect number of arguments. Got {got}, Expected {expected}.")]
    ArityMismatch {
        function: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("Function '{function}' passed too few arguments. Got {got}, Expected at least {min}.")]
    TooFewArguments {
        function: &'static str,
        min: usize,
        got: usize,
    },

    #[error("too many arguments: expected {expected}, got {got}")]
    TooManyArguments { expected: usize, got: usize },

    #[error("Function '{function}' passed incorrect type for argument {index}. Got {got}, Expected {expected}.")]
    TypeMismatch {
        function: &'static str,
        index: usize,
        expected: &'static str,
        got: &'static str,
    },

    #[error("Function '{function}' passed {{}} for argument {index}.")]
    EmptyList { function: &'static str, index: usize },

    #[error("Division by zero!")]
    DivisionByZero,

    #[error("integer overflow in {operation}")]
    IntegerOverflow { operation: &'static str },

    #[error("invalid number")]
    InvalidNumberLiteral { literal: String },

    #[error("S-Expression starts with incorrect type. Got {got}, Expected Function.")]
    NotAFunction { got: &'static str },

    #[error("Function format invalid. Symbol '&' not followed by single symbol.")]
    InvalidLambdaFormat,

    #[error("Function '{function}' passed {symbols} symbols for {values} values.")]
    SymbolCountMismatch {
        function: &'static str,
        symbols: usize,
        values: usize,
    },

    #[error("unrecognised syntax node '{tag}'")]
    MalformedSyntax { tag: String },
}

/// An evaluation failure: category plus rendered message.
///
/// Two errors are equal when their messages are equal.
#[derive(Clone, Debug, Error)]
#[error("{message}")]
pub struct EvalError {
    kind: EvalErrorKind,
    message: String,
}

impl EvalError {
    pub fn new(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        EvalError { kind, message }
    }

    #[inline]
    pub fn kind(&self) -> &EvalErrorKind {
        &self.kind
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl PartialEq for EvalError {
    fn eq(&self, other: &Self) -> bool {
        self.message == other.message
    }
}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        EvalError::new(kind)
    }
}

impl From<EvalError> for Value {
    fn from(error: EvalError) -> Self {
        Value::Error(error)
    }
}

// Lookup

pub fn unbound_symbol(name: &str) -> EvalError {
    EvalErrorKind::UnboundSymbol {
        name: name.to_string(),
    }
    .into()
}

// Argument validation

pub fn wrong_arg_count(function: &'static str, expected: usize, got: usize) -> EvalError {
    EvalErrorKind::ArityMismatch {
        function,
        expected,
        got,
    }
    .into()
}

pub fn too_few_args(function: &'static str, min: usize, got: usize) -> EvalError {
    EvalErrorKind::TooFewArguments { function, min, got }.into()
}

pub fn too_many_args(expected: usize, got: usize) -> EvalError {
    EvalErrorKind::TooManyArguments { expected, got }.into()
}

pub fn wrong_arg_type(
    function: &'static str,
    index: usize,
    expected: &'static str,
    got: &'static str,
) -> EvalError {
    EvalErrorKind::TypeMismatch {
        function,
        index,
        expected,
        got,
    }
    .into()
}

pub fn empty_list(function: &'static str, index: usize) -> EvalError {
    EvalErrorKind::EmptyList { function, index }.into()
}

pub fn symbol_count_mismatch(function: &'static str, symbols: usize, values: usize) -> EvalError {
    EvalErrorKind::SymbolCountMismatch {
        function,
        symbols,
        values,
    }
    .into()
}

// Arithmetic

pub fn division_by_zero() -> EvalError {
    EvalErrorKind::DivisionByZero.into()
}

pub fn integer_overflow(operation: &'static str) -> EvalError {
    EvalErrorKind::IntegerOverflow { operation }.into()
}

// Application

pub fn not_a_function(got: &'static str) -> EvalError {
    EvalErrorKind::NotAFunction { got }.into()
}

pub fn invalid_lambda_format() -> EvalError {
    EvalErrorKind::InvalidLambdaFormat.into()
}

// Reading

pub fn invalid_number(literal: &str) -> EvalError {
    EvalErrorKind::InvalidNumberLiteral {
        literal: literal.to_string(),
    }
    .into()
}

pub fn malformed_syntax(tag: &str) -> EvalError {
    EvalErrorKind::MalformedSyntax {
        tag: tag.to_string(),
    }
    .into()
}
