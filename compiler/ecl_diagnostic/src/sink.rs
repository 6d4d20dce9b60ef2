//! The sink contract and a `tracing`-backed implementation.

use tracing::{debug, error, info, trace, warn};

use crate::{Message, Severity};

/// Receiver of diagnostics.
///
/// Implementations keep running counts of warnings and errors that the
/// caller inspects after scanning. Messages with [`Severity::Off`] are
/// dropped without being counted.
pub trait DiagnosticSink {
    fn report(&mut self, message: Message);

    fn warning_count(&self) -> usize;

    /// Number of `Error` and `Fatal` messages reported.
    fn error_count(&self) -> usize;
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    #[inline]
    fn report(&mut self, message: Message) {
        (**self).report(message);
    }

    #[inline]
    fn warning_count(&self) -> usize {
        (**self).warning_count()
    }

    #[inline]
    fn error_count(&self) -> usize {
        (**self).error_count()
    }
}

/// Sink that forwards every message to `tracing` at the matching level.
#[derive(Debug, Default)]
pub struct TracingSink {
    warnings: usize,
    errors: usize,
}

impl TracingSink {
    pub fn new() -> Self {
        TracingSink::default()
    }
}

impl DiagnosticSink for TracingSink {
    fn report(&mut self, message: Message) {
        let code = message.code.as_str();
        let position = &message.position;
        match message.severity {
            Severity::Off => return,
            Severity::Fatal | Severity::Error => {
                error!(code, %position, fatal = message.severity == Severity::Fatal, "{}", message.text);
            }
            Severity::Warning => warn!(code, %position, "{}", message.text),
            Severity::Info => info!(code, %position, "{}", message.text),
            Severity::Debug => debug!(code, %position, "{}", message.text),
            Severity::Trace => trace!(code, %position, "{}", message.text),
        }
        if message.severity.is_error() {
            self.errors += 1;
        } else if message.severity == Severity::Warning {
            self.warnings += 1;
        }
    }

    fn warning_count(&self) -> usize {
        self.warnings
    }

    fn error_count(&self) -> usize {
        self.errors
    }
}
