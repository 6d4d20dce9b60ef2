//! Operators, punctuation, comments and regular expressions.
//!
//! Operators are matched longest prefix first by nested look-ahead on the
//! first code point. `<>` and `:=` only exist under
//! [`LexerOption::ExtendedOperators`]; without it they fall back to the
//! shorter operator and the second code point starts the next token.
//!
//! A `/` starts a regular expression literal only under the same switch,
//! and only where an operand is expected: after an identifier, literal or
//! closing bracket it is always a division.

use ecl_diagnostic::{DiagnosticSink, ErrorCode};
use ecl_ir::{Node, NodeType};
use ecl_lexer_core::{classify, CharClass, INFINITY_GLYPH, NAN_GLYPH};

use super::{printable, Lexer};
use crate::{Input, LexerOption};

/// Value bit of [`LexerOption::ExtendedOperators`] that forbids a bare `=`.
const FORBID_BARE_ASSIGNMENT: i64 = 2;

impl<I: Input, S: DiagnosticSink> Lexer<I, S> {
    /// Read the operator, string, regular expression or glyph literal
    /// starting with `c`.
    ///
    /// Returns `None` for comments and unexpected punctuation; the caller
    /// moves on to the next token.
    pub(super) fn read_operator(&mut self, c: u32) -> Option<Node> {
        let Some(ch) = char::from_u32(c) else {
            self.unexpected_punctuation(c);
            return None;
        };

        let node_type = match ch {
            '"' | '\'' => {
                let text = self.read_string(c);
                return Some(Node::new_string(NodeType::String, text));
            }
            '`' if self.has_option(LexerOption::ExtendedOperators) => {
                let text = self.read_string(c);
                return Some(Node::new_string(NodeType::RegularExpression, text));
            }
            '/' => return self.read_slash(),
            '.' => {
                if self.peek().is_some_and(|d| classify(d).contains(CharClass::DIGIT)) {
                    return Some(self.read_number(c));
                }
                if self.accept('.') {
                    self.pick('.', NodeType::Rest, NodeType::Range)
                } else {
                    NodeType::Member
                }
            }
            '<' => self.read_less(),
            '>' => self.read_greater(),
            '!' => {
                if self.accept('~') {
                    NodeType::NotMatch
                } else if self.accept('=') {
                    self.pick('=', NodeType::StrictlyNotEqual, NodeType::NotEqual)
                } else {
                    NodeType::LogicalNot
                }
            }
            '=' => {
                if self.accept('=') {
                    self.pick('=', NodeType::StrictlyEqual, NodeType::Equal)
                } else {
                    if self.options.get_option(LexerOption::ExtendedOperators)
                        & FORBID_BARE_ASSIGNMENT
                        != 0
                    {
                        self.error(
                            ErrorCode::NotAllowed,
                            "the '=' operator is not available when extended operators value bit 1 is set, use ':=' instead",
                        );
                    }
                    NodeType::Assignment
                }
            }
            ':' => {
                if self.accept(':') {
                    NodeType::Scope
                } else if self.has_option(LexerOption::ExtendedOperators) && self.accept('=') {
                    NodeType::Assignment
                } else {
                    NodeType::Colon
                }
            }
            '~' => {
                if self.accept('=') {
                    NodeType::Match
                } else {
                    self.pick('~', NodeType::SmartMatch, NodeType::BitwiseNot)
                }
            }
            '+' => {
                if self.accept('=') {
                    NodeType::AssignmentAdd
                } else {
                    self.pick('+', NodeType::Increment, NodeType::Add)
                }
            }
            '-' => {
                if self.accept('=') {
                    NodeType::AssignmentSubtract
                } else {
                    self.pick('-', NodeType::Decrement, NodeType::Subtract)
                }
            }
            '*' => {
                if self.accept('=') {
                    NodeType::AssignmentMultiply
                } else if self.accept('*') {
                    self.pick('=', NodeType::AssignmentPower, NodeType::Power)
                } else {
                    NodeType::Multiply
                }
            }
            '%' => self.pick('=', NodeType::AssignmentModulo, NodeType::Modulo),
            '&' => self.doubled(
                '&',
                [
                    NodeType::BitwiseAnd,
                    NodeType::AssignmentBitwiseAnd,
                    NodeType::LogicalAnd,
                    NodeType::AssignmentLogicalAnd,
                ],
            ),
            '|' => self.doubled(
                '|',
                [
                    NodeType::BitwiseOr,
                    NodeType::AssignmentBitwiseOr,
                    NodeType::LogicalOr,
                    NodeType::AssignmentLogicalOr,
                ],
            ),
            '^' => self.doubled(
                '^',
                [
                    NodeType::BitwiseXor,
                    NodeType::AssignmentBitwiseXor,
                    NodeType::LogicalXor,
                    NodeType::AssignmentLogicalXor,
                ],
            ),
            '?' => NodeType::Conditional,
            '[' => NodeType::OpenSquareBracket,
            ']' => NodeType::CloseSquareBracket,
            '{' => NodeType::OpenCurvlyBracket,
            '}' => NodeType::CloseCurvlyBracket,
            '(' => NodeType::OpenParenthesis,
            ')' => NodeType::CloseParenthesis,
            ';' => NodeType::Semicolon,
            ',' => NodeType::Comma,
            _ if c == INFINITY_GLYPH => return Some(Node::new_float64(f64::INFINITY)),
            _ if c == NAN_GLYPH => return Some(Node::new_float64(f64::NAN)),
            _ => {
                self.unexpected_punctuation(c);
                return None;
            }
        };
        Some(Node::new(node_type))
    }

    /// `yes` if the next code point is `expected` (consumed), else `no`.
    fn pick(&mut self, expected: char, yes: NodeType, no: NodeType) -> NodeType {
        if self.accept(expected) {
            yes
        } else {
            no
        }
    }

    /// `&`, `&=`, `&&`, `&&=` and the same shapes for `|` and `^`.
    fn doubled(
        &mut self,
        ch: char,
        [single, single_assign, double, double_assign]: [NodeType; 4],
    ) -> NodeType {
        if self.accept('=') {
            single_assign
        } else if self.accept(ch) {
            self.pick('=', double_assign, double)
        } else {
            single
        }
    }

    fn read_less(&mut self) -> NodeType {
        if self.accept('<') {
            self.pick('=', NodeType::AssignmentShiftLeft, NodeType::ShiftLeft)
        } else if self.accept('=') {
            self.pick('>', NodeType::Compare, NodeType::LessEqual)
        } else if self.accept('%') {
            self.pick('=', NodeType::AssignmentRotateLeft, NodeType::RotateLeft)
        } else if self.accept('?') {
            self.pick('=', NodeType::AssignmentMinimum, NodeType::Minimum)
        } else if self.has_option(LexerOption::ExtendedOperators) && self.accept('>') {
            NodeType::NotEqual
        } else {
            NodeType::Less
        }
    }

    fn read_greater(&mut self) -> NodeType {
        if self.accept('>') {
            if self.accept('>') {
                self.pick(
                    '=',
                    NodeType::AssignmentShiftRightUnsigned,
                    NodeType::ShiftRightUnsigned,
                )
            } else {
                self.pick('=', NodeType::AssignmentShiftRight, NodeType::ShiftRight)
            }
        } else if self.accept('=') {
            NodeType::GreaterEqual
        } else if self.accept('%') {
            self.pick('=', NodeType::AssignmentRotateRight, NodeType::RotateRight)
        } else if self.accept('?') {
            self.pick('=', NodeType::AssignmentMaximum, NodeType::Maximum)
        } else {
            NodeType::Greater
        }
    }

    /// After a `/`: comment, regular expression, `/=` or `/`.
    fn read_slash(&mut self) -> Option<Node> {
        if self.accept('/') {
            self.skip_line_comment();
            return None;
        }
        if self.accept('*') {
            self.skip_block_comment();
            return None;
        }
        if self.has_option(LexerOption::ExtendedOperators) && !ends_operand(self.previous) {
            if let Some(node) = self.read_regular_expression() {
                return Some(node);
            }
        }
        let node_type = self.pick('=', NodeType::AssignmentDivide, NodeType::Divide);
        Some(Node::new(node_type))
    }

    /// Skip to the end of the line; the terminator is left in the input.
    fn skip_line_comment(&mut self) {
        loop {
            let c = self.getc();
            match c {
                None => return,
                Some(t) if classify(t).contains(CharClass::LINE_TERMINATOR) => {
                    self.ungetc(c);
                    return;
                }
                Some(_) => {}
            }
        }
    }

    fn skip_block_comment(&mut self) {
        let mut star = false;
        loop {
            match self.getc() {
                None => {
                    self.error(
                        ErrorCode::UnterminatedComment,
                        "unterminated multi-line comment",
                    );
                    return;
                }
                Some(c) if star && c == u32::from('/') => return,
                Some(c) => star = c == u32::from('*'),
            }
        }
    }

    /// Try `/body/flags` on the current line.
    ///
    /// The body excludes invalid characters; flags are letters and digits.
    /// On failure every code point read is pushed back.
    fn read_regular_expression(&mut self) -> Option<Node> {
        let mut consumed: Vec<u32> = Vec::new();
        let mut text = String::from("/");
        loop {
            let Some(c) = self.getc() else {
                break;
            };
            consumed.push(c);
            let class = classify(c);
            if class.contains(CharClass::LINE_TERMINATOR) {
                break;
            }
            if c == u32::from('/') {
                text.push('/');
                self.read_regular_expression_flags(&mut text);
                return Some(Node::new_string(NodeType::RegularExpression, text));
            }
            if !class.contains(CharClass::INVALID) {
                text.extend(char::from_u32(c));
            }
        }

        while let Some(c) = consumed.pop() {
            self.ungetc(Some(c));
        }
        None
    }

    fn read_regular_expression_flags(&mut self, text: &mut String) {
        loop {
            let c = self.getc();
            match c {
                Some(f) if classify(f).intersects(CharClass::LETTER | CharClass::DIGIT) => {
                    text.extend(char::from_u32(f));
                }
                _ => {
                    self.ungetc(c);
                    return;
                }
            }
        }
    }

    #[cold]
    fn unexpected_punctuation(&mut self, c: u32) {
        self.error(
            ErrorCode::UnexpectedPunctuation,
            format!("unexpected punctuation '{}'", printable(c)),
        );
    }
}

/// Whether a token of this type completes an operand, so that a following
/// `/` divides it.
fn ends_operand(node_type: NodeType) -> bool {
    matches!(
        node_type,
        NodeType::Identifier
            | NodeType::Int64
            | NodeType::Float64
            | NodeType::String
            | NodeType::RegularExpression
            | NodeType::CloseParenthesis
            | NodeType::CloseSquareBracket
            | NodeType::This
            | NodeType::Super
            | NodeType::True
            | NodeType::False
            | NodeType::Null
            | NodeType::Undefined
    )
}

#[cfg(test)]
mod tests;
