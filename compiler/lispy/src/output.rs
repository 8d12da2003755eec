//! Output handlers for evaluation results.
//!
//! Results go either to stdout (the binary) or to an in-memory buffer
//! (tests and embedding). Dispatch is a plain enum match.

use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

/// Writes to stdout.
#[derive(Default)]
pub struct StdoutOutput;

impl StdoutOutput {
    /// Print a line (with newline).
    pub fn println(&self, msg: &str) {
        println!("{msg}");
    }

    /// Print without newline.
    pub fn print(&self, msg: &str) {
        print!("{msg}");
    }
}

/// Captures everything into a string.
pub struct BufferOutput {
    buffer: Mutex<String>,
}

impl BufferOutput {
    pub fn new() -> Self {
        BufferOutput {
            buffer: Mutex::new(String::new()),
        }
    }

    /// Print a line (with newline).
    pub fn println(&self, msg: &str) {
        let mut buf = self.buffer.lock();
        buf.push_str(msg);
        buf.push('\n');
    }

    /// Print without newline.
    pub fn print(&self, msg: &str) {
        self.buffer.lock().push_str(msg);
    }

    /// Everything captured so far.
    pub fn contents(&self) -> String {
        self.buffer.lock().clone()
    }
}

impl Default for BufferOutput {
    fn default() -> Self {
        Self::new()
    }
}

/// Destination for results and prompts.
pub enum Output {
    Stdout(StdoutOutput),
    Buffer(BufferOutput),
}

impl Output {
    /// Print a line (with newline).
    pub fn println(&self, msg: &str) {
        match self {
            Self::Stdout(h) => h.println(msg),
            Self::Buffer(h) => h.println(msg),
        }
    }

    /// Print without newline.
    pub fn print(&self, msg: &str) {
        match self {
            Self::Stdout(h) => h.print(msg),
            Self::Buffer(h) => h.print(msg),
        }
    }

    /// Captured output; empty for stdout.
    pub fn contents(&self) -> String {
        match self {
            Self::Stdout(_) => String::new(),
            Self::Buffer(h) => h.contents(),
        }
    }

    /// Push pending output to its destination.
    pub fn flush(&self) -> io::Result<()> {
        match self {
            Self::Stdout(_) => io::stdout().flush(),
            Self::Buffer(_) => Ok(()),
        }
    }
}

/// Output handle shared between a session and its owner.
pub type SharedOutput = Arc<Output>;

/// Output that writes to stdout.
pub fn stdout_output() -> SharedOutput {
    Arc::new(Output::Stdout(StdoutOutput))
}

/// Output that captures into a buffer.
pub fn buffer_output() -> SharedOutput {
    Arc::new(Output::Buffer(BufferOutput::new()))
}
