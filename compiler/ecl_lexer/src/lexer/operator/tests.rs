use ecl_diagnostic::{DiagnosticQueue, ErrorCode};
use ecl_ir::NodeType;
use pretty_assertions::assert_eq;

use crate::lexer::tests::{lex, lex_with, single, types};
use crate::{LexerOption, Options, Utf16Input};

use super::Lexer;

fn extended_operators(value: i64) -> Options {
    Options::new().with(LexerOption::ExtendedOperators, value)
}

#[test]
fn single_character_operators() {
    let table = [
        ("+", NodeType::Add),
        ("-", NodeType::Subtract),
        ("*", NodeType::Multiply),
        ("/", NodeType::Divide),
        ("%", NodeType::Modulo),
        ("<", NodeType::Less),
        (">", NodeType::Greater),
        ("=", NodeType::Assignment),
        ("!", NodeType::LogicalNot),
        ("~", NodeType::BitwiseNot),
        ("&", NodeType::BitwiseAnd),
        ("|", NodeType::BitwiseOr),
        ("^", NodeType::BitwiseXor),
        ("?", NodeType::Conditional),
        (":", NodeType::Colon),
        (".", NodeType::Member),
        ("[", NodeType::OpenSquareBracket),
        ("]", NodeType::CloseSquareBracket),
        ("{", NodeType::OpenCurvlyBracket),
        ("}", NodeType::CloseCurvlyBracket),
        ("(", NodeType::OpenParenthesis),
        (")", NodeType::CloseParenthesis),
        (";", NodeType::Semicolon),
        (",", NodeType::Comma),
    ];
    for (source, expected) in table {
        assert_eq!(single(source, Options::new()).node_type(), expected, "{source}");
    }
}

#[test]
fn multi_character_operators() {
    let table = [
        ("+=", NodeType::AssignmentAdd),
        ("++", NodeType::Increment),
        ("-=", NodeType::AssignmentSubtract),
        ("--", NodeType::Decrement),
        ("*=", NodeType::AssignmentMultiply),
        ("**", NodeType::Power),
        ("**=", NodeType::AssignmentPower),
        ("/=", NodeType::AssignmentDivide),
        ("%=", NodeType::AssignmentModulo),
        ("<=", NodeType::LessEqual),
        ("<<", NodeType::ShiftLeft),
        ("<<=", NodeType::AssignmentShiftLeft),
        ("<%", NodeType::RotateLeft),
        ("<%=", NodeType::AssignmentRotateLeft),
        ("<?", NodeType::Minimum),
        ("<?=", NodeType::AssignmentMinimum),
        ("<=>", NodeType::Compare),
        (">=", NodeType::GreaterEqual),
        (">>", NodeType::ShiftRight),
        (">>=", NodeType::AssignmentShiftRight),
        (">>>", NodeType::ShiftRightUnsigned),
        (">>>=", NodeType::AssignmentShiftRightUnsigned),
        (">%", NodeType::RotateRight),
        (">%=", NodeType::AssignmentRotateRight),
        (">?", NodeType::Maximum),
        (">?=", NodeType::AssignmentMaximum),
        ("==", NodeType::Equal),
        ("===", NodeType::StrictlyEqual),
        ("!=", NodeType::NotEqual),
        ("!==", NodeType::StrictlyNotEqual),
        ("!~", NodeType::NotMatch),
        ("~=", NodeType::Match),
        ("~~", NodeType::SmartMatch),
        ("&=", NodeType::AssignmentBitwiseAnd),
        ("&&", NodeType::LogicalAnd),
        ("&&=", NodeType::AssignmentLogicalAnd),
        ("|=", NodeType::AssignmentBitwiseOr),
        ("||", NodeType::LogicalOr),
        ("||=", NodeType::AssignmentLogicalOr),
        ("^=", NodeType::AssignmentBitwiseXor),
        ("^^", NodeType::LogicalXor),
        ("^^=", NodeType::AssignmentLogicalXor),
        ("::", NodeType::Scope),
        ("..", NodeType::Range),
        ("...", NodeType::Rest),
    ];
    for (source, expected) in table {
        assert_eq!(single(source, Options::new()).node_type(), expected, "{source}");
    }
}

#[test]
fn longest_prefix_wins() {
    let (tokens, _) = lex("a+++b");
    assert_eq!(
        types(&tokens),
        vec![NodeType::Identifier, NodeType::Increment, NodeType::Add, NodeType::Identifier]
    );

    let (tokens, _) = lex(">>>>=");
    assert_eq!(
        types(&tokens),
        vec![NodeType::ShiftRightUnsigned, NodeType::GreaterEqual]
    );

    let (tokens, _) = lex("....");
    assert_eq!(types(&tokens), vec![NodeType::Rest, NodeType::Member]);
}

#[test]
fn not_equal_spelling_needs_extended_operators() {
    let (tokens, queue) = lex("<>");
    assert_eq!(types(&tokens), vec![NodeType::Less, NodeType::Greater]);
    assert!(queue.is_empty());

    let token = single("<>", extended_operators(1));
    assert_eq!(token.node_type(), NodeType::NotEqual);
}

#[test]
fn colon_assignment_needs_extended_operators() {
    let (tokens, queue) = lex("a:=b");
    assert_eq!(
        types(&tokens),
        vec![
            NodeType::Identifier,
            NodeType::Colon,
            NodeType::Assignment,
            NodeType::Identifier,
        ]
    );
    assert!(queue.is_empty());

    let token = single(":=", extended_operators(1));
    assert_eq!(token.node_type(), NodeType::Assignment);
}

#[test]
fn bare_assignment_can_be_forbidden() {
    let (tokens, queue) = lex_with("a = b", extended_operators(2));
    assert_eq!(tokens[1].node_type(), NodeType::Assignment);
    assert_eq!(queue.codes(), vec![ErrorCode::NotAllowed]);

    let (_, queue) = lex_with("a = b", extended_operators(1));
    assert!(queue.is_empty());

    let (_, queue) = lex_with("a == b := c", extended_operators(3));
    assert!(queue.is_empty());
}

#[test]
fn backtick_regular_expression() {
    let token = single("`^a+b$`", extended_operators(1));
    assert_eq!(token.node_type(), NodeType::RegularExpression);
    assert_eq!(token.string(), "^a+b$");
}

#[test]
fn backtick_without_extended_operators() {
    let (tokens, queue) = lex("`abc`");
    assert_eq!(types(&tokens), vec![NodeType::Identifier]);
    assert_eq!(
        queue.codes(),
        vec![ErrorCode::UnexpectedPunctuation, ErrorCode::UnexpectedPunctuation]
    );
    assert_eq!(queue.messages()[0].text, "unexpected punctuation '`'");
}

#[test]
fn slash_regular_expression() {
    let (tokens, queue) = lex_with("x = /ab+c/gi;", extended_operators(1));
    assert!(queue.is_empty());
    assert_eq!(
        types(&tokens),
        vec![
            NodeType::Identifier,
            NodeType::Assignment,
            NodeType::RegularExpression,
            NodeType::Semicolon,
        ]
    );
    assert_eq!(tokens[2].string(), "/ab+c/gi");
}

#[test]
fn slash_regular_expression_without_flags() {
    let token = single("/[0-9]+/", extended_operators(1));
    assert_eq!(token.string(), "/[0-9]+/");
}

#[test]
fn slash_is_division_without_extended_operators() {
    let (tokens, queue) = lex("x = /ab+c/gi;");
    assert!(queue.is_empty());
    assert_eq!(
        types(&tokens),
        vec![
            NodeType::Identifier,
            NodeType::Assignment,
            NodeType::Divide,
            NodeType::Identifier,
            NodeType::Add,
            NodeType::Identifier,
            NodeType::Divide,
            NodeType::Identifier,
            NodeType::Semicolon,
        ]
    );
}

#[test]
fn chained_division_is_never_a_regular_expression() {
    for options in [Options::new(), extended_operators(1)] {
        let (tokens, queue) = lex_with("x = a / b / c;", options);
        assert!(queue.is_empty());
        assert_eq!(
            types(&tokens),
            vec![
                NodeType::Identifier,
                NodeType::Assignment,
                NodeType::Identifier,
                NodeType::Divide,
                NodeType::Identifier,
                NodeType::Divide,
                NodeType::Identifier,
                NodeType::Semicolon,
            ]
        );
    }
}

#[test]
fn division_between_statements() {
    for options in [Options::new(), extended_operators(1)] {
        let (tokens, queue) = lex_with("x = 6 / 2; y = 8 / 4;", options);
        assert!(queue.is_empty());
        let divides = tokens
            .iter()
            .filter(|t| t.node_type() == NodeType::Divide)
            .count();
        assert_eq!(divides, 2);
        assert!(tokens
            .iter()
            .all(|t| t.node_type() != NodeType::RegularExpression));
        assert_eq!(tokens.len(), 12);
    }
}

#[test]
fn division_after_closing_bracket() {
    let (tokens, _) = lex_with("(a) / 2 / (b)", extended_operators(1));
    assert_eq!(
        types(&tokens)
            .iter()
            .filter(|&&t| t == NodeType::Divide)
            .count(),
        2
    );
}

#[test]
fn failed_regular_expression_keeps_the_line() {
    let (tokens, queue) = lex_with("x = / b;\nc", extended_operators(1));
    assert!(queue.is_empty());
    assert_eq!(
        types(&tokens),
        vec![
            NodeType::Identifier,
            NodeType::Assignment,
            NodeType::Divide,
            NodeType::Identifier,
            NodeType::Semicolon,
            NodeType::Identifier,
        ]
    );
    let lines: Vec<u32> = tokens.iter().map(|t| t.position().line()).collect();
    assert_eq!(lines, vec![1, 1, 1, 1, 1, 2]);
}

#[test]
fn division_when_no_closing_slash() {
    let (tokens, queue) = lex_with("a / b\nc /= 2", extended_operators(1));
    assert!(queue.is_empty());
    assert_eq!(
        types(&tokens),
        vec![
            NodeType::Identifier,
            NodeType::Divide,
            NodeType::Identifier,
            NodeType::Identifier,
            NodeType::AssignmentDivide,
            NodeType::Int64,
        ]
    );
    let lines: Vec<u32> = tokens.iter().map(|t| t.position().line()).collect();
    assert_eq!(lines, vec![1, 1, 1, 2, 2, 2]);
}

#[test]
fn regular_expression_skips_invalid_characters() {
    let mut units: Vec<u16> = "/a".encode_utf16().collect();
    units.push(0xFFFF);
    units.extend("b/m".encode_utf16());
    let input = Utf16Input::new(units);
    let mut lexer = Lexer::with_input(input, extended_operators(1), DiagnosticQueue::new());
    let token = lexer.next_token();
    assert_eq!(token.node_type(), NodeType::RegularExpression);
    assert_eq!(token.string(), "/ab/m");
}

#[test]
fn glyph_literals() {
    let token = single("\u{221E}", Options::new());
    assert_eq!(token.node_type(), NodeType::Float64);
    assert!(token.float64().is_positive_infinity());

    let token = single("\u{FFFD}", Options::new());
    assert_eq!(token.node_type(), NodeType::Float64);
    assert!(token.float64().is_nan());
}

#[test]
fn unexpected_punctuation() {
    let (tokens, queue) = lex("# @ \u{A7} \u{1} x");
    assert_eq!(types(&tokens), vec![NodeType::Identifier]);
    let texts: Vec<&str> = queue.messages().iter().map(|m| m.text.as_str()).collect();
    assert_eq!(
        texts,
        vec![
            "unexpected punctuation '#'",
            "unexpected punctuation '@'",
            "unexpected punctuation '\\U000000a7'",
            "unexpected punctuation '\\U00000001'",
        ]
    );
    assert!(queue
        .codes()
        .iter()
        .all(|&code| code == ErrorCode::UnexpectedPunctuation));
}
