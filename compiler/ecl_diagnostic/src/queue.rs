//! Capturing sink.

use crate::{DiagnosticSink, ErrorCode, Message, Severity};

/// Sink that keeps every reported message in order.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticQueue {
    messages: Vec<Message>,
}

impl DiagnosticQueue {
    pub fn new() -> Self {
        DiagnosticQueue::default()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Codes of the captured messages, in report order.
    pub fn codes(&self) -> Vec<ErrorCode> {
        self.messages.iter().map(|m| m.code).collect()
    }

    /// Take all captured messages, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<Message> {
        std::mem::take(&mut self.messages)
    }

    fn count(&self, pred: impl Fn(Severity) -> bool) -> usize {
        self.messages.iter().filter(|m| pred(m.severity)).count()
    }
}

impl DiagnosticSink for DiagnosticQueue {
    fn report(&mut self, message: Message) {
        if message.severity != Severity::Off {
            self.messages.push(message);
        }
    }

    fn warning_count(&self) -> usize {
        self.count(|s| s == Severity::Warning)
    }

    fn error_count(&self) -> usize {
        self.count(Severity::is_error)
    }
}

#[cfg(test)]
mod tests;
