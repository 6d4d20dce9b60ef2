//! Source positions.
//!
//! A [`Position`] is mutated in place by the input source as characters
//! are consumed, and cloned into every produced node.

use std::fmt;

/// Location in a source file.
///
/// All counters start at 1. `line` counts every line of the input and
/// never resets; `page_line` restarts at every page and paragraph.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    filename: String,
    function: String,
    page: u32,
    page_line: u32,
    paragraph: u32,
    line: u32,
}

impl Default for Position {
    fn default() -> Self {
        Position {
            filename: String::new(),
            function: String::new(),
            page: 1,
            page_line: 1,
            paragraph: 1,
            line: 1,
        }
    }
}

impl Position {
    /// Create a position at the start of `filename`.
    pub fn new(filename: impl Into<String>) -> Self {
        Position {
            filename: filename.into(),
            ..Position::default()
        }
    }

    pub fn set_filename(&mut self, filename: impl Into<String>) {
        self.filename = filename.into();
    }

    pub fn set_function(&mut self, function: impl Into<String>) {
        self.function = function.into();
    }

    /// Restart all counters, placing the cursor on `line`.
    ///
    /// # Panics
    ///
    /// Panics if `line` is zero.
    pub fn reset_counters(&mut self, line: u32) {
        assert!(line >= 1, "line numbers start at 1");
        self.page = 1;
        self.page_line = 1;
        self.paragraph = 1;
        self.line = line;
    }

    /// Form feed.
    pub fn new_page(&mut self) {
        self.page += 1;
        self.page_line = 1;
        self.paragraph = 1;
    }

    /// PARAGRAPH SEPARATOR. Does not count as a line.
    pub fn new_paragraph(&mut self) {
        self.paragraph += 1;
        self.page_line = 1;
    }

    pub fn new_line(&mut self) {
        self.page_line += 1;
        self.line += 1;
    }

    #[inline]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    #[inline]
    pub fn function(&self) -> &str {
        &self.function
    }

    #[inline]
    pub fn page(&self) -> u32 {
        self.page
    }

    #[inline]
    pub fn page_line(&self) -> u32 {
        self.page_line
    }

    #[inline]
    pub fn paragraph(&self) -> u32 {
        self.paragraph
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.filename.is_empty() {
            write!(f, "line {}:", self.line)
        } else {
            write!(f, "{}:{}:", self.filename, self.line)
        }
    }
}
