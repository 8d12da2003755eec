//! End-to-end tests: source text through `lispy_parse`, `read` and `eval`.


use crate::{eval, read, Environment, Value};

/// Parse `source` as one line and evaluate it in `env`.
pub(crate) fn run_in(env: &Environment, source: &str) -> Value {
    let tree = lispy_parse::parse(source).expect("test source parses");
    eval(env, read(&tree))
}

/// Evaluate `source` in a fresh environment and render the result.
pub(crate) fn run(source: &str) -> String {
    run_in(&Environment::with_builtins(), source).to_string()
}

/// Evaluate several lines in order in one environment, rendering the last.
pub(crate) fn run_lines(lines: &[&str]) -> String {
    let env = Environment::with_builtins();
    let mut last = Value::unit();
    for line in lines {
        last = run_in(&env, line);
    }
    last.to_string()
}
