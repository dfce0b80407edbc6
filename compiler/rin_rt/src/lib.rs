//! Rin RT - host side of the rin object runtime.
//!
//! Wires the object system to the outside world:
//! - `print` and `input` builtins, exposed as Function values so the
//!   evaluator calls them through the ordinary call protocol
//! - Configurable output (stdout, capture buffer, silent) and input
//!   (stdin, scripted lines) so the builtins are testable
//! - The fail-fast policy for internal consistency errors
//! - Tracing initialization controlled by `RUST_LOG`

mod fatal;
mod input;
mod output;
mod runtime;

pub use fatal::{abort_on_inconsistency, fatal};
pub use input::{buffer_source, stdin_source, InputSource, SharedInputSource};
pub use output::{buffer_handler, silent_handler, stdout_handler, PrintHandler, SharedPrintHandler};
pub use runtime::{Runtime, INPUT, PRINT};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing subscriber for debug output.
///
/// Set `RUST_LOG=rin_object=trace` to see every dispatch, or
/// `RUST_LOG=rin_object=debug` for type registration only.
///
/// Safe to call multiple times; only the first call has an effect.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
                .with(filter)
                .init();
        }
    });
}
