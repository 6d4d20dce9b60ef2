//! Lexer for the ECL language.
//!
//! Turns a stream of Unicode code points into [`Node`](ecl_ir::Node)
//! tokens, one per call to [`Lexer::next_token`].
//!
//! # Architecture
//!
//! - [`Input`]: pull source of raw code points with a live position
//! - [`Options`]: feature switches that change which spellings are accepted
//! - [`Lexer`]: the scanner; reports content errors to a
//!   [`DiagnosticSink`](ecl_diagnostic::DiagnosticSink) and keeps going
//!
//! Only construction can fail ([`LexerError`]); every other problem is a
//! diagnostic and the lexer still returns a well-typed token.

mod input;
mod keywords;
mod lex_error;
mod lexer;
mod options;

pub use input::{Input, StringInput, Utf16Input};
pub use lex_error::LexerError;
pub use lexer::Lexer;
pub use options::{LexerOption, Options, UnknownOption};
