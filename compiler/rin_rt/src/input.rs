//! Source of lines for the `input` builtin.

use std::collections::VecDeque;
use std::io::{self, BufRead};
use std::sync::Arc;

use parking_lot::Mutex;

/// Where `input` reads from.
pub enum InputSource {
    Stdin,
    /// Pre-scripted lines, consumed front to back.
    Buffer(Mutex<VecDeque<String>>),
}

impl InputSource {
    /// Read one line without its terminator.
    ///
    /// Returns `Ok(None)` at end of input.
    pub fn read_line(&self) -> io::Result<Option<String>> {
        match self {
            Self::Stdin => {
                let mut line = String::new();
                if io::stdin().lock().read_line(&mut line)? == 0 {
                    return Ok(None);
                }
                Ok(Some(strip_terminator(line)))
            }
            Self::Buffer(lines) => Ok(lines.lock().pop_front().map(strip_terminator)),
        }
    }

    /// Queue another line behind the ones already buffered.
    ///
    /// Stdin sources ignore the line.
    pub fn push_line(&self, line: impl Into<String>) {
        if let Self::Buffer(lines) = self {
            lines.lock().push_back(line.into());
        }
    }
}

fn strip_terminator(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

/// Input source shared between the runtime and the builtins it hands out.
pub type SharedInputSource = Arc<InputSource>;

pub fn stdin_source() -> SharedInputSource {
    Arc::new(InputSource::Stdin)
}

/// Source that yields `lines` in order, then end of input.
pub fn buffer_source<I, S>(lines: I) -> SharedInputSource
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Arc::new(InputSource::Buffer(Mutex::new(
        lines.into_iter().map(Into::into).collect(),
    )))
}
