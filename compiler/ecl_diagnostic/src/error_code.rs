//! Error codes for lexer diagnostics.
//!
//! Codes are stable identifiers (`E0001`...) so tools and tests can match
//! on them without depending on message wording.

use std::fmt;

/// What kind of problem a diagnostic reports.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// End of input inside a string, or a line terminator in one.
    UnterminatedString,
    /// End of input inside a `/* ... */` comment.
    UnterminatedComment,
    /// Malformed numeric literal or hex escape.
    InvalidNumber,
    /// Unrecognized letter after a backslash.
    UnknownEscapeSequence,
    /// Escaped code point that cannot be used where it appears.
    InvalidUnicodeEscapeSequence,
    /// ASCII punctuation that starts no token.
    UnexpectedPunctuation,
    /// NUL, surrogate half or noncharacter in the raw input.
    InvalidCharacter,
    /// Construct disabled by the active options.
    NotAllowed,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::UnterminatedString => "E0001",
            ErrorCode::UnterminatedComment => "E0002",
            ErrorCode::InvalidNumber => "E0003",
            ErrorCode::UnknownEscapeSequence => "E0004",
            ErrorCode::InvalidUnicodeEscapeSequence => "E0005",
            ErrorCode::UnexpectedPunctuation => "E0006",
            ErrorCode::InvalidCharacter => "E0007",
            ErrorCode::NotAllowed => "E0008",
        }
    }

    /// One-line summary used when no specific message is available.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::UnterminatedString => "unterminated string",
            ErrorCode::UnterminatedComment => "unterminated comment",
            ErrorCode::InvalidNumber => "invalid number",
            ErrorCode::UnknownEscapeSequence => "unknown escape sequence",
            ErrorCode::InvalidUnicodeEscapeSequence => "invalid unicode escape sequence",
            ErrorCode::UnexpectedPunctuation => "unexpected punctuation",
            ErrorCode::InvalidCharacter => "invalid character",
            ErrorCode::NotAllowed => "not allowed",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
