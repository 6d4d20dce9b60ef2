//! Numeric literals.
//!
//! `0x` hex, `0b` binary (with [`LexerOption::Binary`]), `0NNN` octal
//! (with [`LexerOption::Octal`]), and decimal integers and floats. A `.`
//! after the digits makes the literal a float (`1.` is 1.0) unless a
//! second `.` follows it, so `3..5` and `3...` keep the integer.
//!
//! A number immediately followed by an identifier letter is an error:
//! the value becomes -1 (or -1.0) and the letter starts the next token.

use ecl_diagnostic::{DiagnosticSink, ErrorCode};
use ecl_ir::Node;
use ecl_lexer_core::is_identifier_start;

use super::Lexer;
use crate::{Input, LexerOption};

#[inline]
fn is_digit(c: Option<u32>) -> bool {
    c.is_some_and(|c| (u32::from('0')..=u32::from('9')).contains(&c))
}

impl<I: Input, S: DiagnosticSink> Lexer<I, S> {
    /// Read a number starting with the digit or `.` in `first`.
    ///
    /// A leading `.` is only passed in when a digit follows it.
    pub(super) fn read_number(&mut self, first: u32) -> Node {
        if first == u32::from('0') {
            if let Some(node) = self.read_prefixed_integer() {
                return node;
            }
        }

        let mut text = String::new();
        if first == u32::from('.') {
            text.push_str("0.");
            self.read_digits(&mut text);
            self.read_exponent(&mut text);
            return self.finish_float(&text);
        }

        text.extend(char::from_u32(first));
        self.read_digits(&mut text);

        if self.accept('.') {
            if self.peek() == Some(u32::from('.')) {
                self.unget_char('.');
                return self.finish_integer(&text);
            }
            let mut fraction = String::new();
            self.read_digits(&mut fraction);
            if !fraction.is_empty() {
                text.push('.');
                text.push_str(&fraction);
            }
            self.read_exponent(&mut text);
            return self.finish_float(&text);
        }

        if self.read_exponent(&mut text) {
            return self.finish_float(&text);
        }
        self.finish_integer(&text)
    }

    /// Handle what follows a leading `0`: `0x`, `0b`, octal.
    ///
    /// Returns `None` to continue as a decimal literal with the `0`.
    fn read_prefixed_integer(&mut self) -> Option<Node> {
        let c = self.getc();
        match c.and_then(char::from_u32) {
            Some('x' | 'X') => Some(match self.read_hex(16) {
                #[allow(clippy::cast_possible_wrap, reason = "16 hex digits fill an i64")]
                Some(value) => self.finish_radix_integer(value as i64),
                None => Node::new_int64(-1),
            }),
            Some('b' | 'B') if self.has_option(LexerOption::Binary) => {
                Some(match self.read_binary(64) {
                    #[allow(clippy::cast_possible_wrap, reason = "64 binary digits fill an i64")]
                    Some(value) => self.finish_radix_integer(value as i64),
                    None => Node::new_int64(-1),
                })
            }
            Some('b' | 'B') => {
                // Without binary literals this is `0` followed by an
                // identifier, not a malformed number.
                self.ungetc(c);
                Some(Node::new_int64(0))
            }
            Some(d @ '0'..='7') if self.has_option(LexerOption::Octal) => {
                #[allow(clippy::cast_possible_wrap, reason = "22 octal digits wrap like hex")]
                let value = self.read_octal(u32::from(d), 22) as i64;
                Some(self.finish_radix_integer(value))
            }
            _ => {
                self.ungetc(c);
                None
            }
        }
    }

    /// Read up to `max` binary digits; zero digits is an error.
    fn read_binary(&mut self, max: usize) -> Option<u64> {
        let mut value: u64 = 0;
        let mut count = 0;
        while count < max {
            let c = self.getc();
            match c {
                Some(b) if b == u32::from('0') || b == u32::from('1') => {
                    value = (value << 1) | u64::from(b - u32::from('0'));
                }
                _ => {
                    self.ungetc(c);
                    break;
                }
            }
            count += 1;
        }

        if count == 0 {
            self.error(
                ErrorCode::InvalidNumber,
                "invalid binary number, at least one digit is required",
            );
            return None;
        }
        Some(value)
    }

    fn read_digits(&mut self, text: &mut String) {
        loop {
            let c = self.getc();
            if !is_digit(c) {
                self.ungetc(c);
                return;
            }
            text.extend(c.and_then(char::from_u32));
        }
    }

    /// Read `e`/`E`, an optional sign and at least one digit.
    ///
    /// When no digit follows, everything read is pushed back and nothing
    /// is appended.
    fn read_exponent(&mut self, text: &mut String) -> bool {
        let e = self.getc();
        if !matches!(e.and_then(char::from_u32), Some('e' | 'E')) {
            self.ungetc(e);
            return false;
        }

        let mut sign = self.getc();
        let mut digit = sign;
        if matches!(sign.and_then(char::from_u32), Some('+' | '-')) {
            digit = self.getc();
        } else {
            sign = None;
        }

        if !is_digit(digit) {
            self.ungetc(digit);
            self.ungetc(sign);
            self.ungetc(e);
            return false;
        }

        text.push('e');
        text.extend(sign.and_then(char::from_u32));
        text.extend(digit.and_then(char::from_u32));
        self.read_digits(text);
        true
    }

    fn followed_by_letter(&mut self) -> bool {
        self.peek().is_some_and(is_identifier_start)
    }

    fn finish_integer(&mut self, text: &str) -> Node {
        let value = match text.parse::<i64>() {
            Ok(value) => value,
            Err(_) => {
                self.error(
                    ErrorCode::InvalidNumber,
                    format!("integer literal {text} does not fit in 64 bits"),
                );
                return Node::new_int64(-1);
            }
        };
        self.finish_radix_integer(value)
    }

    fn finish_radix_integer(&mut self, value: i64) -> Node {
        if self.followed_by_letter() {
            self.error(ErrorCode::InvalidNumber, "unexpected letter after an integer");
            return Node::new_int64(-1);
        }
        Node::new_int64(value)
    }

    fn finish_float(&mut self, text: &str) -> Node {
        if self.followed_by_letter() {
            self.error(
                ErrorCode::InvalidNumber,
                "unexpected letter after a floating point number",
            );
            return Node::new_float64(-1.0);
        }
        Node::new_float64(text.parse().unwrap_or(f64::NAN))
    }
}
