//! Fail-fast reporting for errors the evaluator cannot recover from.

use rin_object::{EvalError, EvalResult};

/// Report `error` and abort the process.
#[cold]
pub fn fatal(error: &EvalError) -> ! {
    tracing::error!(kind = ?error.kind, "fatal runtime error");
    eprintln!("Fatal runtime error: {}", error.message);
    std::process::abort()
}

/// Abort on internal consistency failures; pass everything else through.
///
/// Language-level errors (bad arguments, failed casts, arithmetic faults)
/// come back unchanged for the evaluator to raise as exceptions.
pub fn abort_on_inconsistency(result: EvalResult) -> EvalResult {
    match result {
        Err(error) if !error.is_recoverable() => fatal(&error),
        other => other,
    }
}
