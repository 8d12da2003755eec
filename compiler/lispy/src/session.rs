//! Evaluation session: one root environment shared by every input.

use std::io::BufRead;
use std::path::Path;

use lispy_eval::{eval, read, Environment, Value};
use lispy_ir::AstNode;

use crate::output::SharedOutput;
use crate::DriverError;

/// Prompt shown before each interactive line.
pub const PROMPT: &str = "lispy> ";

/// Origin reported for interactive and `-e` input.
const INPUT_ORIGIN: &str = "<input>";

/// A root environment plus the place results are written to.
///
/// Definitions made by one input are visible to every later one.
pub struct Session {
    env: Environment,
    output: SharedOutput,
}

impl Session {
    /// Start a session with every builtin bound.
    pub fn new(output: SharedOutput) -> Self {
        Session {
            env: Environment::with_builtins(),
            output,
        }
    }

    #[inline]
    pub fn environment(&self) -> &Environment {
        &self.env
    }

    #[inline]
    pub fn output(&self) -> &SharedOutput {
        &self.output
    }

    /// Evaluate one line as a single S-expression and print the result.
    ///
    /// `+ 1 2` on its own is therefore the application `(+ 1 2)`.
    pub fn eval_line(&self, line: &str) -> Result<Value, DriverError> {
        let tree = parse(INPUT_ORIGIN, line)?;
        let value = eval(&self.env, read(&tree));
        self.output.println(&value.to_string());
        Ok(value)
    }

    /// Evaluate each top-level expression of `source` separately, printing
    /// each result.
    pub fn eval_program(&self, origin: &str, source: &str) -> Result<Vec<Value>, DriverError> {
        let tree = parse(origin, source)?;
        tracing::debug!(origin, "evaluating program");
        let results = tree
            .expressions()
            .map(|expr| {
                let value = eval(&self.env, read(expr));
                self.output.println(&value.to_string());
                value
            })
            .collect();
        Ok(results)
    }

    /// Read `path` and evaluate it as a program.
    pub fn eval_file(&self, path: &Path) -> Result<Vec<Value>, DriverError> {
        let source = std::fs::read_to_string(path).map_err(|source| DriverError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        self.eval_program(&path.display().to_string(), &source)
    }

    /// Prompt loop over `input` until end of input.
    ///
    /// Parse errors are printed and the loop carries on; only I/O failures
    /// end it early.
    pub fn run_repl<R: BufRead>(&self, mut input: R, quiet: bool) -> Result<(), DriverError> {
        if !quiet {
            self.output
                .println(&format!("Lispy version {}", env!("CARGO_PKG_VERSION")));
            self.output.println("Press Ctrl+D to exit");
            self.output.println("");
        }

        let mut line = String::new();
        loop {
            self.output.print(PROMPT);
            self.output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                self.output.println("");
                return Ok(());
            }
            if let Err(err) = self.eval_line(line.trim_end_matches(['\n', '\r'])) {
                self.output.println(&err.to_string());
            }
        }
    }
}

fn parse(origin: &str, source: &str) -> Result<AstNode, DriverError> {
    lispy_parse::parse(source).map_err(|err| DriverError::parse(origin, source, err))
}

#[cfg(test)]
mod tests;
