//! Command-line configuration.

use std::path::PathBuf;

use crate::DriverError;

pub const USAGE: &str = "\
Usage: lispy [options] [file...]

With no files and no -e, starts an interactive prompt.

Options:
  -e, --eval <expr>   Evaluate one line and print the result
  -q, --quiet         Do not print the banner
  -h, --help          Show this message";

/// What the driver was asked to do.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DriverConfig {
    /// Lines given with `-e`, evaluated in order.
    pub eval: Vec<String>,
    /// Program files, evaluated in order.
    pub files: Vec<PathBuf>,
    pub quiet: bool,
    pub help: bool,
}

impl DriverConfig {
    /// Parse arguments, not including the program name.
    pub fn from_args<I>(args: I) -> Result<Self, DriverError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = DriverConfig::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-e" | "--eval" => {
                    let Some(expr) = args.next() else {
                        return Err(DriverError::MissingValue(arg));
                    };
                    config.eval.push(expr);
                }
                "-q" | "--quiet" => config.quiet = true,
                "-h" | "--help" => config.help = true,
                _ => {
                    if let Some(expr) = arg.strip_prefix("--eval=") {
                        config.eval.push(expr.to_string());
                    } else if arg.starts_with('-') {
                        return Err(DriverError::UnknownOption(arg));
                    } else {
                        config.files.push(PathBuf::from(arg));
                    }
                }
            }
        }
        Ok(config)
    }

    /// Whether the interactive prompt should run.
    pub fn is_interactive(&self) -> bool {
        !self.help && self.eval.is_empty() && self.files.is_empty()
    }
}
