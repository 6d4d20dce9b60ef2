//! The token scanner.
//!
//! # Character reading
//!
//! All reads go through [`Lexer::getc`], which applies position effects
//! (line, paragraph, page), folds CR and CRLF into a single LF, and serves
//! look-ahead that was pushed back with [`Lexer::ungetc`]. Pushing back a
//! terminator restores the position saved when it was read, so a failed
//! look-ahead across a line leaves the position where it started.
//!
//! # Dispatch
//!
//! [`Lexer::next_token`] skips whitespace, terminators, comments and
//! invalid characters, snapshots the position at the first code point of
//! the token, then hands off to the identifier, number, string or
//! operator reader.

mod escape;
mod identifier;
mod number;
mod operator;

use ecl_diagnostic::{DiagnosticSink, ErrorCode, Message};
use ecl_ir::{Node, NodeType, Position};
use ecl_lexer_core::{classify, CharClass};
use smallvec::SmallVec;
use tracing::trace;

use crate::{Input, LexerError, LexerOption, Options};

const LF: u32 = 0x0A;
const CR: u32 = 0x0D;
const FF: u32 = 0x0C;
const LINE_SEPARATOR: u32 = 0x2028;
const PARAGRAPH_SEPARATOR: u32 = 0x2029;
const BACKSLASH: u32 = '\\' as u32;

/// Scanner over an [`Input`], reporting to a [`DiagnosticSink`].
pub struct Lexer<I, S> {
    input: I,
    options: Options,
    sink: S,
    /// Pushed back code points, last in first out.
    unget: SmallVec<[u32; 8]>,
    /// Code point read past a CR that was not an LF. Its position
    /// effects have not been applied yet.
    pending: Option<u32>,
    /// Position before each terminator read since the token started,
    /// innermost last. Popped when the terminator is pushed back.
    marks: Vec<Position>,
    /// Position of the first code point of the last token.
    position: Position,
    /// Tag of the last token returned.
    previous: NodeType,
}

impl<I: Input, S: DiagnosticSink> Lexer<I, S> {
    /// Create a lexer.
    ///
    /// Fails with [`LexerError::MissingInput`] or
    /// [`LexerError::MissingOptions`] when a collaborator is absent.
    pub fn new(input: Option<I>, options: Option<Options>, sink: S) -> Result<Self, LexerError> {
        let input = input.ok_or(LexerError::MissingInput)?;
        let options = options.ok_or(LexerError::MissingOptions)?;
        Ok(Lexer::with_input(input, options, sink))
    }

    pub fn with_input(input: I, options: Options, sink: S) -> Self {
        let position = input.position().clone();
        Lexer {
            input,
            options,
            sink,
            unget: SmallVec::new(),
            pending: None,
            marks: Vec::new(),
            position,
            previous: NodeType::Eof,
        }
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_parts(self) -> (I, Options, S) {
        (self.input, self.options, self.sink)
    }

    /// Position of the last token returned by [`Lexer::next_token`].
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Create a node of type `node_type` stamped with the position of the
    /// last token.
    pub fn new_node(&self, node_type: NodeType) -> Node {
        let mut node = Node::new(node_type);
        node.set_position(self.position.clone());
        node
    }

    /// Read the next token; `EOF` once the input is exhausted.
    pub fn next_token(&mut self) -> Node {
        let mut node = self.read_token();
        node.set_position(self.position.clone());
        self.previous = node.node_type();
        trace!(
            kind = %node.node_type(),
            line = self.position.line(),
            "token"
        );
        node
    }

    fn read_token(&mut self) -> Node {
        loop {
            self.marks.clear();
            let Some(c) = self.getc() else {
                self.position = self.input.position().clone();
                return Node::new(NodeType::Eof);
            };
            self.position = self.input.position().clone();

            let class = classify(c);
            if class.intersects(CharClass::WHITE_SPACE | CharClass::LINE_TERMINATOR) {
                continue;
            }
            if class.contains(CharClass::INVALID) {
                self.error(
                    ErrorCode::InvalidCharacter,
                    format!("invalid character '{}' found as is in the input stream", long_escape(c)),
                );
                continue;
            }
            if class.is_identifier_start() || c == BACKSLASH {
                match self.read_identifier(c) {
                    Some(node) => return node,
                    None => continue,
                }
            }
            if class.contains(CharClass::DIGIT) {
                return self.read_number(c);
            }
            if let Some(node) = self.read_operator(c) {
                return node;
            }
        }
    }

    // --- options ---

    #[inline]
    fn has_option(&self, option: LexerOption) -> bool {
        self.options.is_set(option)
    }

    // --- character reading ---

    /// Next code point, from the push-back buffer first.
    fn getc(&mut self) -> Option<u32> {
        let c = match self.unget.pop() {
            Some(c) => c,
            None => match self.read_raw()? {
                CR => {
                    match self.read_raw() {
                        Some(LF) | None => {}
                        other => self.pending = other,
                    }
                    LF
                }
                c => c,
            },
        };

        let effect: fn(&mut Position) = match c {
            LF | LINE_SEPARATOR => Position::new_line,
            FF => Position::new_page,
            PARAGRAPH_SEPARATOR => Position::new_paragraph,
            _ => return Some(c),
        };
        self.marks.push(self.input.position().clone());
        effect(self.input.position_mut());
        Some(c)
    }

    fn read_raw(&mut self) -> Option<u32> {
        self.pending.take().or_else(|| self.input.getc())
    }

    /// Push back a code point; `None` (end of input) is not recorded since
    /// the input keeps returning it.
    ///
    /// Code points must be pushed back in the reverse order they were read.
    fn ungetc(&mut self, c: Option<u32>) {
        let Some(c) = c else {
            return;
        };
        if matches!(c, LF | LINE_SEPARATOR | FF | PARAGRAPH_SEPARATOR) {
            if let Some(saved) = self.marks.pop() {
                *self.input.position_mut() = saved;
            }
        }
        self.unget.push(c);
    }

    fn unget_char(&mut self, ch: char) {
        self.ungetc(Some(u32::from(ch)));
    }

    /// Consume the next code point if it is `expected`.
    fn accept(&mut self, expected: char) -> bool {
        let c = self.getc();
        if c == Some(u32::from(expected)) {
            true
        } else {
            self.ungetc(c);
            false
        }
    }

    fn peek(&mut self) -> Option<u32> {
        let c = self.getc();
        self.ungetc(c);
        c
    }

    // --- diagnostics ---

    #[cold]
    fn error(&mut self, code: ErrorCode, text: impl Into<String>) {
        let message = Message::error(code, self.input.position().clone(), text);
        self.sink.report(message);
    }
}

/// `\UXXXXXXXX` rendering used in messages about unprintable code points.
fn long_escape(c: u32) -> String {
    format!("\\U{c:08x}")
}

/// Quote a code point for a message: printable ASCII as is, anything
/// else in `\U` form.
fn printable(c: u32) -> String {
    match char::from_u32(c) {
        Some(ch) if ch.is_ascii_graphic() => ch.to_string(),
        _ => long_escape(c),
    }
}
