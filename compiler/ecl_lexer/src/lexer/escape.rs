//! Escape sequences and quoted strings.
//!
//! Escapes decode to raw `u32` values. A string body is collected as code
//! points and converted to a `String` once closed: an escaped surrogate pair
//! is joined there, and anything that is not a Unicode scalar value
//! (lone surrogate, out of range `\U`) is replaced by U+FFFD with a
//! diagnostic.

use ecl_diagnostic::{DiagnosticSink, ErrorCode};
use ecl_lexer_core::{
    classify, hex_digit_value, join_surrogates, octal_digit_value, CharClass,
};

use super::{long_escape, printable, Lexer, BACKSLASH};
use crate::{Input, LexerOption};

const BACKTICK: u32 = '`' as u32;
const ESCAPE: u32 = 0x1B;

/// Result of decoding one escape sequence.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Escape {
    Char(u32),
    /// Backslash followed by a line terminator; contributes nothing.
    Continuation,
    /// Malformed numeric escape (already reported); contributes nothing.
    Invalid,
    /// Unknown escape letter (already reported); a string keeps a `?`.
    Unknown,
}

impl<I: Input, S: DiagnosticSink> Lexer<I, S> {
    /// Decode the escape sequence following a backslash.
    pub(super) fn escape_sequence(&mut self, accept_continuation: bool) -> Escape {
        let c = self.getc();
        let Some(ch) = c.and_then(char::from_u32) else {
            // End of input; the caller reports what was left open.
            return Escape::Invalid;
        };
        let extended = self.has_option(LexerOption::ExtendedEscapeSequences);

        match ch {
            'u' => self.hex_escape(4),
            'U' if extended => self.hex_escape(8),
            'x' | 'X' => self.hex_escape(2),
            '\'' | '"' | '\\' => Escape::Char(u32::from(ch)),
            'b' => Escape::Char(0x08),
            'e' if extended => Escape::Char(ESCAPE),
            'f' => Escape::Char(0x0C),
            'n' => Escape::Char(0x0A),
            'r' => Escape::Char(0x0D),
            't' => Escape::Char(0x09),
            'v' => Escape::Char(0x0B),
            '\n' | '\u{2028}' | '\u{2029}' if accept_continuation => Escape::Continuation,
            #[allow(clippy::cast_possible_truncation, reason = "at most 3 octal digits")]
            '0'..='7' if extended => Escape::Char(self.read_octal(u32::from(ch), 3) as u32),
            '0' => Escape::Char(0),
            _ => {
                if classify(u32::from(ch)).contains(CharClass::LINE_TERMINATOR) {
                    // The terminator still ends the enclosing literal.
                    self.ungetc(c);
                }
                self.error(
                    ErrorCode::UnknownEscapeSequence,
                    format!("unknown escape letter '{}'", printable(u32::from(ch))),
                );
                Escape::Unknown
            }
        }
    }

    fn hex_escape(&mut self, max: usize) -> Escape {
        match self.read_hex(max) {
            #[allow(clippy::cast_possible_truncation, reason = "at most 8 hex digits")]
            Some(value) => Escape::Char(value as u32),
            None => Escape::Invalid,
        }
    }

    /// Read up to `max` hex digits.
    ///
    /// Zero digits is an "invalid number" error and yields `None`.
    pub(super) fn read_hex(&mut self, max: usize) -> Option<u64> {
        let mut value: u64 = 0;
        let mut count = 0;
        while count < max {
            let c = self.getc();
            match c.and_then(hex_digit_value) {
                Some(digit) => value = (value << 4) | u64::from(digit),
                None => {
                    self.ungetc(c);
                    break;
                }
            }
            count += 1;
        }

        if count == 0 {
            self.error(
                ErrorCode::InvalidNumber,
                "invalid hexadecimal number, at least one digit is required",
            );
            return None;
        }
        Some(value)
    }

    /// Read an octal number whose first digit `first` was already
    /// consumed, up to `max` digits in total.
    pub(super) fn read_octal(&mut self, first: u32, max: usize) -> u64 {
        let mut value = u64::from(first - u32::from('0'));
        for _ in 1..max {
            let c = self.getc();
            match c.and_then(octal_digit_value) {
                Some(digit) => value = value.wrapping_mul(8).wrapping_add(u64::from(digit)),
                None => {
                    self.ungetc(c);
                    break;
                }
            }
        }
        value
    }

    /// Read a quoted literal up to the closing `quote`.
    ///
    /// Back-tick literals do not accept line continuations.
    pub(super) fn read_string(&mut self, quote: u32) -> String {
        let mut body: Vec<u32> = Vec::new();
        loop {
            let Some(c) = self.getc() else {
                self.error(
                    ErrorCode::UnterminatedString,
                    "the last string was not closed before the end of the input was reached",
                );
                break;
            };
            if c == quote {
                break;
            }
            if classify(c).contains(CharClass::LINE_TERMINATOR) {
                self.error(
                    ErrorCode::UnterminatedString,
                    "a string cannot include a line terminator",
                );
                break;
            }
            if c == BACKSLASH {
                match self.escape_sequence(quote != BACKTICK) {
                    Escape::Char(decoded) => body.push(decoded),
                    Escape::Unknown => body.push(u32::from('?')),
                    Escape::Continuation | Escape::Invalid => {}
                }
            } else {
                body.push(c);
            }
        }
        self.collect_string(&body)
    }

    /// Convert collected code points to text.
    pub(super) fn collect_string(&mut self, body: &[u32]) -> String {
        let mut text = String::with_capacity(body.len());
        let mut i = 0;
        while i < body.len() {
            let c = body[i];
            if let Some(joined) = body.get(i + 1).and_then(|&low| join_surrogates(c, low)) {
                text.extend(char::from_u32(joined));
                i += 2;
                continue;
            }
            match char::from_u32(c) {
                Some(ch) => text.push(ch),
                None => {
                    self.error(
                        ErrorCode::InvalidUnicodeEscapeSequence,
                        format!(
                            "'{}' is not a valid Unicode character, replaced by U+FFFD",
                            long_escape(c)
                        ),
                    );
                    text.push(char::REPLACEMENT_CHARACTER);
                }
            }
            i += 1;
        }
        text
    }
}
