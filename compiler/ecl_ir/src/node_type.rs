//! The closed node tag enumeration.

use std::fmt;

macro_rules! node_types {
    ($($variant:ident => $name:literal,)*) => {
        /// Discriminant selecting what a [`Node`](crate::Node) represents.
        ///
        /// Covers literal kinds, every keyword, every operator and
        /// punctuation token, and the structural kinds the parser builds.
        #[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum NodeType {
            $($variant,)*
        }

        impl NodeType {
            /// Every tag, in declaration order.
            pub const ALL: &'static [NodeType] = &[$(NodeType::$variant,)*];

            /// Upper snake case name, e.g. `"ASSIGNMENT_ADD"`.
            pub const fn name(self) -> &'static str {
                match self {
                    $(NodeType::$variant => $name,)*
                }
            }
        }
    };
}

node_types! {
    Eof => "EOF",
    Unknown => "UNKNOWN",
    Add => "ADD",
    Assignment => "ASSIGNMENT",
    BitwiseAnd => "BITWISE_AND",
    BitwiseNot => "BITWISE_NOT",
    BitwiseOr => "BITWISE_OR",
    BitwiseXor => "BITWISE_XOR",
    CloseCurvlyBracket => "CLOSE_CURVLY_BRACKET",
    CloseParenthesis => "CLOSE_PARENTHESIS",
    CloseSquareBracket => "CLOSE_SQUARE_BRACKET",
    Colon => "COLON",
    Comma => "COMMA",
    Conditional => "CONDITIONAL",
    Divide => "DIVIDE",
    Greater => "GREATER",
    Less => "LESS",
    LogicalNot => "LOGICAL_NOT",
    Modulo => "MODULO",
    Multiply => "MULTIPLY",
    OpenCurvlyBracket => "OPEN_CURVLY_BRACKET",
    OpenParenthesis => "OPEN_PARENTHESIS",
    OpenSquareBracket => "OPEN_SQUARE_BRACKET",
    Member => "MEMBER",
    Semicolon => "SEMICOLON",
    Subtract => "SUBTRACT",
    Abstract => "ABSTRACT",
    Array => "ARRAY",
    ArrayLiteral => "ARRAY_LITERAL",
    As => "AS",
    AssignmentAdd => "ASSIGNMENT_ADD",
    AssignmentBitwiseAnd => "ASSIGNMENT_BITWISE_AND",
    AssignmentBitwiseOr => "ASSIGNMENT_BITWISE_OR",
    AssignmentBitwiseXor => "ASSIGNMENT_BITWISE_XOR",
    AssignmentDivide => "ASSIGNMENT_DIVIDE",
    AssignmentLogicalAnd => "ASSIGNMENT_LOGICAL_AND",
    AssignmentLogicalOr => "ASSIGNMENT_LOGICAL_OR",
    AssignmentLogicalXor => "ASSIGNMENT_LOGICAL_XOR",
    AssignmentMaximum => "ASSIGNMENT_MAXIMUM",
    AssignmentMinimum => "ASSIGNMENT_MINIMUM",
    AssignmentModulo => "ASSIGNMENT_MODULO",
    AssignmentMultiply => "ASSIGNMENT_MULTIPLY",
    AssignmentPower => "ASSIGNMENT_POWER",
    AssignmentRotateLeft => "ASSIGNMENT_ROTATE_LEFT",
    AssignmentRotateRight => "ASSIGNMENT_ROTATE_RIGHT",
    AssignmentShiftLeft => "ASSIGNMENT_SHIFT_LEFT",
    AssignmentShiftRight => "ASSIGNMENT_SHIFT_RIGHT",
    AssignmentShiftRightUnsigned => "ASSIGNMENT_SHIFT_RIGHT_UNSIGNED",
    AssignmentSubtract => "ASSIGNMENT_SUBTRACT",
    Attributes => "ATTRIBUTES",
    Auto => "AUTO",
    Boolean => "BOOLEAN",
    Break => "BREAK",
    Byte => "BYTE",
    Call => "CALL",
    Case => "CASE",
    Catch => "CATCH",
    Char => "CHAR",
    Class => "CLASS",
    Compare => "COMPARE",
    Const => "CONST",
    Continue => "CONTINUE",
    Debugger => "DEBUGGER",
    Decrement => "DECREMENT",
    Default => "DEFAULT",
    Delete => "DELETE",
    DirectiveList => "DIRECTIVE_LIST",
    Do => "DO",
    Double => "DOUBLE",
    Else => "ELSE",
    Empty => "EMPTY",
    Ensure => "ENSURE",
    Enum => "ENUM",
    Equal => "EQUAL",
    Exclude => "EXCLUDE",
    Extends => "EXTENDS",
    Export => "EXPORT",
    False => "FALSE",
    Final => "FINAL",
    Finally => "FINALLY",
    Float => "FLOAT",
    Float64 => "FLOAT64",
    For => "FOR",
    Function => "FUNCTION",
    Goto => "GOTO",
    GreaterEqual => "GREATER_EQUAL",
    Identifier => "IDENTIFIER",
    If => "IF",
    Implements => "IMPLEMENTS",
    Import => "IMPORT",
    In => "IN",
    Include => "INCLUDE",
    Increment => "INCREMENT",
    Inline => "INLINE",
    Instanceof => "INSTANCEOF",
    Int64 => "INT64",
    Interface => "INTERFACE",
    Invariant => "INVARIANT",
    Is => "IS",
    Label => "LABEL",
    LessEqual => "LESS_EQUAL",
    List => "LIST",
    LogicalAnd => "LOGICAL_AND",
    LogicalOr => "LOGICAL_OR",
    LogicalXor => "LOGICAL_XOR",
    Long => "LONG",
    Match => "MATCH",
    Maximum => "MAXIMUM",
    Minimum => "MINIMUM",
    Name => "NAME",
    Namespace => "NAMESPACE",
    Native => "NATIVE",
    New => "NEW",
    NotEqual => "NOT_EQUAL",
    NotMatch => "NOT_MATCH",
    Null => "NULL",
    ObjectLiteral => "OBJECT_LITERAL",
    Package => "PACKAGE",
    Param => "PARAM",
    Parameters => "PARAMETERS",
    ParamMatch => "PARAM_MATCH",
    PostDecrement => "POST_DECREMENT",
    PostIncrement => "POST_INCREMENT",
    Power => "POWER",
    Private => "PRIVATE",
    Program => "PROGRAM",
    Protected => "PROTECTED",
    Public => "PUBLIC",
    Range => "RANGE",
    RegularExpression => "REGULAR_EXPRESSION",
    Require => "REQUIRE",
    Rest => "REST",
    Return => "RETURN",
    Root => "ROOT",
    RotateLeft => "ROTATE_LEFT",
    RotateRight => "ROTATE_RIGHT",
    Scope => "SCOPE",
    Set => "SET",
    ShiftLeft => "SHIFT_LEFT",
    ShiftRight => "SHIFT_RIGHT",
    ShiftRightUnsigned => "SHIFT_RIGHT_UNSIGNED",
    Short => "SHORT",
    SmartMatch => "SMART_MATCH",
    Static => "STATIC",
    StrictlyEqual => "STRICTLY_EQUAL",
    StrictlyNotEqual => "STRICTLY_NOT_EQUAL",
    String => "STRING",
    Super => "SUPER",
    Switch => "SWITCH",
    Synchronized => "SYNCHRONIZED",
    Then => "THEN",
    This => "THIS",
    Throw => "THROW",
    Throws => "THROWS",
    Transient => "TRANSIENT",
    True => "TRUE",
    Try => "TRY",
    Type => "TYPE",
    Typeof => "TYPEOF",
    Undefined => "UNDEFINED",
    Use => "USE",
    Var => "VAR",
    Variable => "VARIABLE",
    VarAttributes => "VAR_ATTRIBUTES",
    Videntifier => "VIDENTIFIER",
    Void => "VOID",
    Volatile => "VOLATILE",
    While => "WHILE",
    With => "WITH",
    Yield => "YIELD",
}

impl NodeType {
    /// Whether nodes of this tag carry a string payload.
    ///
    /// Besides literals and names this includes the keyword tags whose
    /// nodes are later given a label or a declared name.
    pub const fn has_string_payload(self) -> bool {
        matches!(
            self,
            NodeType::Break
                | NodeType::Class
                | NodeType::Continue
                | NodeType::Enum
                | NodeType::Function
                | NodeType::Goto
                | NodeType::Identifier
                | NodeType::Import
                | NodeType::Interface
                | NodeType::Label
                | NodeType::Name
                | NodeType::Namespace
                | NodeType::Package
                | NodeType::Param
                | NodeType::RegularExpression
                | NodeType::String
                | NodeType::Variable
                | NodeType::VarAttributes
                | NodeType::Videntifier
        )
    }

    /// `TRUE` or `FALSE`.
    #[inline]
    pub const fn is_boolean(self) -> bool {
        matches!(self, NodeType::True | NodeType::False)
    }

    /// `INT64` or `FLOAT64`.
    #[inline]
    pub const fn is_number(self) -> bool {
        matches!(self, NodeType::Int64 | NodeType::Float64)
    }

    /// The tag for a boolean value.
    #[inline]
    pub const fn from_bool(value: bool) -> Self {
        if value {
            NodeType::True
        } else {
            NodeType::False
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
