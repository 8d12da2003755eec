//! Argument validation shared by the builtins.

use crate::errors::{
    empty_list, too_few_args, wrong_arg_count, wrong_arg_type, EvalError,
};
use crate::Value;

/// Require exactly `expected` arguments.
#[inline]
pub(super) fn require_args(
    function: &'static str,
    expected: usize,
    got: usize,
) -> Result<(), EvalError> {
    if got == expected {
        Ok(())
    } else {
        Err(wrong_arg_count(function, expected, got))
    }
}

/// Require at least `min` arguments.
#[inline]
pub(super) fn require_min_args(
    function: &'static str,
    min: usize,
    got: usize,
) -> Result<(), EvalError> {
    if got >= min {
        Ok(())
    } else {
        Err(too_few_args(function, min, got))
    }
}

/// Require `args[index]` to be a number and return it.
pub(super) fn require_number(
    function: &'static str,
    args: &[Value],
    index: usize,
) -> Result<i64, EvalError> {
    match args.get(index) {
        Some(value) => as_number(function, value, index),
        None => Err(wrong_arg_count(function, index + 1, args.len())),
    }
}

/// Require `value` (argument `index`) to be a number and return it.
pub(super) fn as_number(
    function: &'static str,
    value: &Value,
    index: usize,
) -> Result<i64, EvalError> {
    match value {
        Value::Number(n) => Ok(*n),
        other => Err(wrong_arg_type(function, index, "Number", other.type_name())),
    }
}

/// Check that `value` (argument `index`) is a quoted list.
pub(super) fn check_qexpr(
    function: &'static str,
    value: &Value,
    index: usize,
) -> Result<(), EvalError> {
    match value {
        Value::QExpr(_) => Ok(()),
        other => Err(wrong_arg_type(
            function,
            index,
            "Q-Expression",
            other.type_name(),
        )),
    }
}

/// Take the elements out of a quoted-list argument.
pub(super) fn into_qexpr(
    function: &'static str,
    value: Value,
    index: usize,
) -> Result<Vec<Value>, EvalError> {
    value.into_qexpr_items().map_err(|other| {
        wrong_arg_type(function, index, "Q-Expression", other.type_name())
    })
}

/// Require a quoted-list argument to have at least one element.
#[inline]
pub(super) fn require_non_empty(
    function: &'static str,
    items: &[Value],
    index: usize,
) -> Result<(), EvalError> {
    if items.is_empty() {
        Err(empty_list(function, index))
    } else {
        Ok(())
    }
}

/// Unpack exactly `N` arguments after checking the count.
pub(super) fn take_args<const N: usize>(
    function: &'static str,
    args: Vec<Value>,
) -> Result<[Value; N], EvalError> {
    let got = args.len();
    args.try_into()
        .map_err(|_| wrong_arg_count(function, N, got))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::EvalErrorKind;

    #[test]
    fn test_require_args() {
        assert!(require_args("head", 1, 1).is_ok());
        assert!(require_args("head", 1, 2).is_err());
    }

    #[test]
    fn test_require_min_args() {
        assert!(require_min_args("+", 1, 3).is_ok());
        assert_eq!(
            require_min_args("+", 1, 0).map_err(|e| e.kind().clone()),
            Err(EvalErrorKind::TooFewArguments {
                function: "+",
                min: 1,
                got: 0
            })
        );
    }

    #[test]
    fn test_require_number_reports_position() {
        let args = vec![Value::number(1), Value::symbol("x")];
        assert_eq!(require_number("+", &args, 0), Ok(1));
        assert_eq!(
            require_number("+", &args, 1).map_err(|e| e.kind().clone()),
            Err(EvalErrorKind::TypeMismatch {
                function: "+",
                index: 1,
                expected: "Number",
                got: "Symbol"
            })
        );
    }

    #[test]
    fn test_take_args_checks_count() {
        let taken = take_args::<2>("==", vec![Value::number(1), Value::number(2)]);
        assert!(taken.is_ok());
        let err = take_args::<2>("==", vec![Value::number(1)]).map(|_| ());
        assert_eq!(err, Err(wrong_arg_count("==", 2, 1)));
    }

    #[test]
    fn test_require_non_empty() {
        assert!(require_non_empty("head", &[], 0).is_err());
        assert!(require_non_empty("head", &[Value::number(1)], 0).is_ok());
    }
}
