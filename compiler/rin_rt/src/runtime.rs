//! The `print` and `input` builtins.
//!
//! Both are plain Function values so an evaluator reaches them through the
//! same call protocol as any other function: arity and argument types are
//! checked before the body runs.

use rin_ir::{names, Name, TypeId};
use rin_object::{to_display_string, EvalResult, FunctionValue, Value};
use rustc_hash::FxHashMap;

use crate::input::{stdin_source, SharedInputSource};
use crate::output::{stdout_handler, SharedPrintHandler};

/// Global name of the print builtin.
pub const PRINT: &str = "print";
/// Global name of the input builtin.
pub const INPUT: &str = "input";

/// I/O endpoints the builtins talk to.
#[derive(Clone)]
pub struct Runtime {
    print: SharedPrintHandler,
    input: SharedInputSource,
}

impl Runtime {
    pub fn new(print: SharedPrintHandler, input: SharedInputSource) -> Self {
        Runtime { print, input }
    }

    #[inline]
    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print
    }

    #[inline]
    pub fn input_source(&self) -> &SharedInputSource {
        &self.input
    }

    /// Write `value` through its `to_string` member, then a newline.
    ///
    /// Nothing is written when `to_string` is missing or returns a non-Str.
    pub fn print_value(&self, value: &Value) -> EvalResult {
        let text = to_display_string(value)?;
        self.print.println(&text)?;
        Ok(Value::none())
    }

    /// Read one line of input as a fresh Str. End of input reads as "".
    pub fn read_line(&self) -> EvalResult {
        let line = self.input.read_line()?.unwrap_or_default();
        Ok(Value::string(line))
    }

    /// `print` and `input` as Function values, keyed by global name.
    pub fn globals(&self) -> FxHashMap<Name, Value> {
        let mut globals = FxHashMap::default();

        let rt = self.clone();
        let print = FunctionValue::named(PRINT, &[TypeId::OBJECT], move |args| {
            rt.print_value(&args[0])
        });
        globals.insert(names().intern(PRINT), Value::function(print));

        let rt = self.clone();
        let input = FunctionValue::named(INPUT, &[], move |_| rt.read_line());
        globals.insert(names().intern(INPUT), Value::function(input));

        globals
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new(stdout_handler(), stdin_source())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
