//! Diagnostics for the ECL front end.
//!
//! Content errors found while lexing are not fatal: they are reported as
//! [`Message`] values through a [`DiagnosticSink`] and scanning goes on.
//! The sink is passed to the lexer explicitly; tests bind a
//! [`DiagnosticQueue`] to capture what was reported, tools bind a
//! [`TracingSink`] to log it.

mod error_code;
mod message;
mod queue;
mod sink;

pub use error_code::ErrorCode;
pub use message::{Message, Severity};
pub use queue::DiagnosticQueue;
pub use sink::{DiagnosticSink, TracingSink};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Does nothing when `RUST_LOG` is unset. Safe to call repeatedly; only
/// the first call has an effect.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}
