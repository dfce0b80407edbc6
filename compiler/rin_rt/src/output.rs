//! Destination for text written by the `print` builtin.
//!
//! Programs normally write to stdout. Embedders and tests capture output
//! into a buffer, and evaluation contexts that must stay side-effect free
//! discard it.

use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

/// Where printed lines go.
pub enum PrintHandler {
    Stdout,
    /// Accumulates every line for later inspection.
    Buffer(Mutex<String>),
    Silent,
}

impl PrintHandler {
    /// Write `line` followed by a newline.
    ///
    /// Stdout write failures (a closed pipe, say) are returned rather than
    /// panicking the way `println!` would.
    pub fn println(&self, line: &str) -> io::Result<()> {
        match self {
            Self::Stdout => {
                let mut out = io::stdout().lock();
                writeln!(out, "{line}")?;
                out.flush()
            }
            Self::Buffer(buf) => {
                let mut buf = buf.lock();
                buf.push_str(line);
                buf.push('\n');
                Ok(())
            }
            Self::Silent => Ok(()),
        }
    }

    /// Everything captured so far; empty unless this is a buffer.
    pub fn output(&self) -> String {
        match self {
            Self::Buffer(buf) => buf.lock().clone(),
            Self::Stdout | Self::Silent => String::new(),
        }
    }

    /// Drop captured output.
    pub fn clear(&self) {
        if let Self::Buffer(buf) = self {
            buf.lock().clear();
        }
    }
}

/// Print handler shared between the runtime and the builtins it hands out.
pub type SharedPrintHandler = Arc<PrintHandler>;

pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::Stdout)
}

/// Handler that captures output for tests and embedders.
pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::Buffer(Mutex::new(String::new())))
}

/// Handler that discards all output.
pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::Silent)
}
