//! Lexer construction errors.

use thiserror::Error;

/// The lexer could not be created.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Error)]
pub enum LexerError {
    #[error("invalid argument: the lexer requires an input source")]
    MissingInput,
    #[error("invalid argument: the lexer requires a set of options")]
    MissingOptions,
}
