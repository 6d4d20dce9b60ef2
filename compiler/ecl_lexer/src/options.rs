//! Lexer feature switches.
//!
//! Every switch holds an `i64` and defaults to 0 (off). Most are used as
//! booleans; `ExtendedOperators` also reads bit `2`, which forbids the
//! bare `=` assignment operator.

use std::fmt;
use std::str::FromStr;

use rustc_hash::FxHashMap;
use thiserror::Error;

/// A named switch.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum LexerOption {
    AllowWith,
    /// Accept `0b`/`0B` binary literals.
    Binary,
    Coverage,
    Debug,
    /// Accept `\e`, `\U` and octal escapes.
    ExtendedEscapeSequences,
    /// Accept `<>`, `:=` and back-tick regular expressions.
    ExtendedOperators,
    ExtendedStatements,
    Json,
    /// Read `0NNN` as octal.
    Octal,
    Strict,
    Trace,
    UnsafeMath,
}

impl LexerOption {
    pub const ALL: [LexerOption; 12] = [
        LexerOption::AllowWith,
        LexerOption::Binary,
        LexerOption::Coverage,
        LexerOption::Debug,
        LexerOption::ExtendedEscapeSequences,
        LexerOption::ExtendedOperators,
        LexerOption::ExtendedStatements,
        LexerOption::Json,
        LexerOption::Octal,
        LexerOption::Strict,
        LexerOption::Trace,
        LexerOption::UnsafeMath,
    ];

    pub fn name(self) -> &'static str {
        match self {
            LexerOption::AllowWith => "ALLOW_WITH",
            LexerOption::Binary => "BINARY",
            LexerOption::Coverage => "COVERAGE",
            LexerOption::Debug => "DEBUG",
            LexerOption::ExtendedEscapeSequences => "EXTENDED_ESCAPE_SEQUENCES",
            LexerOption::ExtendedOperators => "EXTENDED_OPERATORS",
            LexerOption::ExtendedStatements => "EXTENDED_STATEMENTS",
            LexerOption::Json => "JSON",
            LexerOption::Octal => "OCTAL",
            LexerOption::Strict => "STRICT",
            LexerOption::Trace => "TRACE",
            LexerOption::UnsafeMath => "UNSAFE_MATH",
        }
    }
}

impl fmt::Display for LexerOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A name that matches no [`LexerOption`].
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
#[error("unknown lexer option `{0}`")]
pub struct UnknownOption(pub String);

impl FromStr for LexerOption {
    type Err = UnknownOption;

    /// Case-insensitive match on the upper snake case name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LexerOption::ALL
            .into_iter()
            .find(|opt| opt.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownOption(s.to_owned()))
    }
}

/// Switch values; unset switches read as 0.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Options {
    values: FxHashMap<LexerOption, i64>,
}

impl Options {
    pub fn new() -> Self {
        Options::default()
    }

    /// Builder form of [`Options::set_option`].
    #[must_use]
    pub fn with(mut self, option: LexerOption, value: i64) -> Self {
        self.set_option(option, value);
        self
    }

    pub fn set_option(&mut self, option: LexerOption, value: i64) {
        if value == 0 {
            self.values.remove(&option);
        } else {
            self.values.insert(option, value);
        }
    }

    /// Set a switch by name, e.g. `"extended_operators"`.
    pub fn set_option_by_name(&mut self, name: &str, value: i64) -> Result<(), UnknownOption> {
        let option = name.parse()?;
        self.set_option(option, value);
        Ok(())
    }

    #[inline]
    pub fn get_option(&self, option: LexerOption) -> i64 {
        self.values.get(&option).copied().unwrap_or(0)
    }

    /// Whether the switch is non-zero.
    #[inline]
    pub fn is_set(&self, option: LexerOption) -> bool {
        self.get_option(option) != 0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "tests unwrap known-good names")]
mod tests;
