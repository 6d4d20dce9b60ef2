//! Reserved word lookup.
//!
//! Keywords are bucketed by length (2 to 12 characters) and matched
//! exactly; there are no context-sensitive keywords. The literal words
//! `NaN`, `Infinity`, `__FILE__` and `__LINE__` produce values rather
//! than plain tags and are handled by [`lookup_literal`].

use ecl_ir::NodeType;

/// Keyword whose token carries a computed value.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum LiteralKeyword {
    NaN,
    Infinity,
    File,
    Line,
}

pub(crate) fn lookup_literal(text: &str) -> Option<LiteralKeyword> {
    match text {
        "NaN" => Some(LiteralKeyword::NaN),
        "Infinity" => Some(LiteralKeyword::Infinity),
        "__FILE__" => Some(LiteralKeyword::File),
        "__LINE__" => Some(LiteralKeyword::Line),
        _ => None,
    }
}

/// Look up a reserved word.
///
/// Returns `None` for ordinary identifiers.
pub(crate) fn lookup(text: &str) -> Option<NodeType> {
    let len = text.len();
    if !(2..=12).contains(&len) || !text.as_bytes()[0].is_ascii_lowercase() {
        return None;
    }

    match len {
        2 => match text {
            "as" => Some(NodeType::As),
            "do" => Some(NodeType::Do),
            "if" => Some(NodeType::If),
            "in" => Some(NodeType::In),
            "is" => Some(NodeType::Is),
            _ => None,
        },
        3 => match text {
            "for" => Some(NodeType::For),
            "new" => Some(NodeType::New),
            "try" => Some(NodeType::Try),
            "use" => Some(NodeType::Use),
            "var" => Some(NodeType::Var),
            _ => None,
        },
        4 => match text {
            "byte" => Some(NodeType::Byte),
            "case" => Some(NodeType::Case),
            "char" => Some(NodeType::Char),
            "else" => Some(NodeType::Else),
            "enum" => Some(NodeType::Enum),
            "goto" => Some(NodeType::Goto),
            "long" => Some(NodeType::Long),
            "null" => Some(NodeType::Null),
            "then" => Some(NodeType::Then),
            "this" => Some(NodeType::This),
            "true" => Some(NodeType::True),
            "void" => Some(NodeType::Void),
            "with" => Some(NodeType::With),
            _ => None,
        },
        5 => match text {
            "break" => Some(NodeType::Break),
            "catch" => Some(NodeType::Catch),
            "class" => Some(NodeType::Class),
            "const" => Some(NodeType::Const),
            "false" => Some(NodeType::False),
            "final" => Some(NodeType::Final),
            "float" => Some(NodeType::Float),
            "short" => Some(NodeType::Short),
            "super" => Some(NodeType::Super),
            "throw" => Some(NodeType::Throw),
            "while" => Some(NodeType::While),
            "yield" => Some(NodeType::Yield),
            _ => None,
        },
        6 => match text {
            "delete" => Some(NodeType::Delete),
            "double" => Some(NodeType::Double),
            "ensure" => Some(NodeType::Ensure),
            "export" => Some(NodeType::Export),
            "import" => Some(NodeType::Import),
            "inline" => Some(NodeType::Inline),
            "native" => Some(NodeType::Native),
            "public" => Some(NodeType::Public),
            "return" => Some(NodeType::Return),
            "static" => Some(NodeType::Static),
            "switch" => Some(NodeType::Switch),
            "throws" => Some(NodeType::Throws),
            "typeof" => Some(NodeType::Typeof),
            _ => None,
        },
        7 => match text {
            "boolean" => Some(NodeType::Boolean),
            "default" => Some(NodeType::Default),
            "extends" => Some(NodeType::Extends),
            "finally" => Some(NodeType::Finally),
            "package" => Some(NodeType::Package),
            "private" => Some(NodeType::Private),
            "require" => Some(NodeType::Require),
            _ => None,
        },
        8 => match text {
            "abstract" => Some(NodeType::Abstract),
            "continue" => Some(NodeType::Continue),
            "debugger" => Some(NodeType::Debugger),
            "function" => Some(NodeType::Function),
            "volatile" => Some(NodeType::Volatile),
            _ => None,
        },
        9 => match text {
            "interface" => Some(NodeType::Interface),
            "invariant" => Some(NodeType::Invariant),
            "namespace" => Some(NodeType::Namespace),
            "protected" => Some(NodeType::Protected),
            "transient" => Some(NodeType::Transient),
            "undefined" => Some(NodeType::Undefined),
            _ => None,
        },
        10 => match text {
            "implements" => Some(NodeType::Implements),
            "instanceof" => Some(NodeType::Instanceof),
            _ => None,
        },
        12 => match text {
            "synchronized" => Some(NodeType::Synchronized),
            _ => None,
        },
        _ => None,
    }
}
