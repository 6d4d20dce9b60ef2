//! Identifiers and keywords.

use ecl_diagnostic::{DiagnosticSink, ErrorCode};
use ecl_ir::{Node, NodeType};
use ecl_lexer_core::is_identifier_continue;

use super::escape::Escape;
use super::{long_escape, Lexer, BACKSLASH};
use crate::keywords::{self, LiteralKeyword};
use crate::{Input, LexerOption};

impl<I: Input, S: DiagnosticSink> Lexer<I, S> {
    /// Read an identifier starting with `first` (a letter or a backslash)
    /// and classify it as a keyword if it is one.
    ///
    /// Escapes spell out a code point that must itself be an identifier
    /// character; a digit is allowed even in first place. Returns `None`
    /// when nothing usable was read.
    pub(super) fn read_identifier(&mut self, first: u32) -> Option<Node> {
        let mut name = String::new();
        let mut c = Some(first);
        loop {
            match c {
                Some(BACKSLASH) => match self.escape_sequence(false) {
                    Escape::Char(decoded) if is_identifier_continue(decoded) => {
                        name.extend(char::from_u32(decoded));
                    }
                    Escape::Char(decoded) => {
                        self.error(
                            ErrorCode::InvalidUnicodeEscapeSequence,
                            format!(
                                "escaped character '{}' is not valid in an identifier",
                                long_escape(decoded)
                            ),
                        );
                        break;
                    }
                    Escape::Continuation | Escape::Invalid | Escape::Unknown => break,
                },
                Some(ch) if is_identifier_continue(ch) => name.extend(char::from_u32(ch)),
                other => {
                    self.ungetc(other);
                    break;
                }
            }
            c = self.getc();
        }

        if name.is_empty() {
            return None;
        }
        Some(self.identifier_node(name))
    }

    fn identifier_node(&self, name: String) -> Node {
        if let Some(literal) = keywords::lookup_literal(&name) {
            let position = self.input.position();
            return match literal {
                LiteralKeyword::NaN => Node::new_float64(f64::NAN),
                LiteralKeyword::Infinity => Node::new_float64(f64::INFINITY),
                LiteralKeyword::File => Node::new_string(NodeType::String, position.filename()),
                LiteralKeyword::Line => Node::new_int64(i64::from(position.line())),
            };
        }

        match keywords::lookup(&name) {
            // `goto` is only reserved with extended statements.
            Some(NodeType::Goto) if !self.has_option(LexerOption::ExtendedStatements) => {
                Node::new_string(NodeType::Identifier, name)
            }
            Some(tag) if tag.has_string_payload() => Node::new_string(tag, name),
            Some(tag) => Node::new(tag),
            None => Node::new_string(NodeType::Identifier, name),
        }
    }
}
