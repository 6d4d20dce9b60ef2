//! The message record passed to sinks.

use ecl_ir::Position;
use std::fmt;

use crate::ErrorCode;

/// Message severity, most severe first.
///
/// `Off` marks a message that must not be emitted at all.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub enum Severity {
    Off,
    Fatal,
    Error,
    Warning,
    Info,
    Debug,
    Trace,
}

impl Severity {
    /// `Fatal` and `Error` count as errors.
    #[inline]
    pub fn is_error(self) -> bool {
        matches!(self, Severity::Fatal | Severity::Error)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Off => write!(f, "off"),
            Severity::Fatal => write!(f, "fatal"),
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
            Severity::Debug => write!(f, "debug"),
            Severity::Trace => write!(f, "trace"),
        }
    }
}

/// A single diagnostic.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Message {
    pub severity: Severity,
    pub code: ErrorCode,
    pub position: Position,
    pub text: String,
}

impl Message {
    pub fn new(
        severity: Severity,
        code: ErrorCode,
        position: Position,
        text: impl Into<String>,
    ) -> Self {
        Message {
            severity,
            code,
            position,
            text: text.into(),
        }
    }

    #[cold]
    pub fn error(code: ErrorCode, position: Position, text: impl Into<String>) -> Self {
        Message::new(Severity::Error, code, position, text)
    }

    #[cold]
    pub fn warning(code: ErrorCode, position: Position, text: impl Into<String>) -> Self {
        Message::new(Severity::Warning, code, position, text)
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}[{}]: {}",
            self.position, self.severity, self.code, self.text
        )
    }
}
