//! Lispy driver.
//!
//! Ties the parser and evaluator together behind a [`Session`] and provides
//! what the `lispy` binary needs: argument parsing ([`DriverConfig`]),
//! output handlers and tracing setup.

mod config;
mod error;
mod output;
mod session;

use std::sync::Once;

pub use config::{DriverConfig, USAGE};
pub use error::DriverError;
pub use output::{buffer_output, stdout_output, BufferOutput, Output, SharedOutput, StdoutOutput};
pub use session::{Session, PROMPT};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set, e.g.
/// `RUST_LOG=lispy_eval=debug` to log every function application.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
                .with(filter)
                .init();
        }
    });
}
