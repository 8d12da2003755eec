//! Host-side failures of the driver.
//!
//! Evaluation errors are values and never show up here; these are the
//! failures around evaluation: bad input text, unreadable files and bad
//! command-line arguments.

use std::io;
use std::path::PathBuf;

use lispy_parse::{line_col, ParseError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("{origin}:{line}:{column}: {source}")]
    Parse {
        origin: String,
        line: usize,
        column: usize,
        #[source]
        source: ParseError,
    },

    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("missing value for `{0}`")]
    MissingValue(String),

    #[error("unknown option `{0}`")]
    UnknownOption(String),
}

impl DriverError {
    /// Parse failure in `text`, located by line and column.
    pub fn parse(origin: &str, text: &str, source: ParseError) -> Self {
        let offset = source.span().map_or(0, |span| span.start);
        let (line, column) = line_col(text, offset);
        DriverError::Parse {
            origin: origin.to_string(),
            line,
            column,
            source,
        }
    }
}
