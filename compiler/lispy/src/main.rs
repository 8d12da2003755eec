//! Lispy CLI
//!
//! `lispy` starts the prompt, `lispy FILE...` runs programs and
//! `lispy -e EXPR` evaluates a single line.

use std::process::ExitCode;

use lispy::{init_tracing, stdout_output, DriverConfig, DriverError, Session, USAGE};

fn main() -> ExitCode {
    init_tracing();

    let config = match DriverConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    if config.help {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &DriverConfig) -> Result<(), DriverError> {
    let session = Session::new(stdout_output());

    if config.is_interactive() {
        return session.run_repl(std::io::stdin().lock(), config.quiet);
    }
    for path in &config.files {
        session.eval_file(path)?;
    }
    for line in &config.eval {
        session.eval_line(line)?;
    }
    Ok(())
}
