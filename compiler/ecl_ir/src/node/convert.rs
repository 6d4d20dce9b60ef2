//! Reclassification of nodes.
//!
//! Every `to_*` operation first asserts the node is unlocked. Soft
//! conversions return `false` and leave the node untouched when the
//! source tag is not in their domain. `to_videntifier` and
//! `to_var_attributes` are only ever called after the caller checked
//! the tag, so a mismatch there panics.

use super::{Node, NodeValue};
use crate::{parse_float64, Float64, Int64, NodeType};

impl Node {
    /// Retag to `UNKNOWN`, dropping the payload.
    pub fn to_unknown(&mut self) {
        self.modifying();
        self.retag(NodeType::Unknown);
    }

    /// `CALL` → `AS`.
    pub fn to_as(&mut self) -> bool {
        self.modifying();
        if self.node_type != NodeType::Call {
            return false;
        }
        self.retag(NodeType::As);
        true
    }

    /// Truthiness of the node as a tag, without modifying it.
    ///
    /// Returns `TRUE` or `FALSE`, or `UNDEFINED` when the tag has no
    /// boolean interpretation.
    pub fn to_boolean_type_only(&self) -> NodeType {
        match self.node_type {
            NodeType::True | NodeType::False => self.node_type,
            NodeType::Null | NodeType::Undefined => NodeType::False,
            NodeType::Int64 => NodeType::from_bool(self.int64().get() != 0),
            NodeType::Float64 => {
                let value = self.float64().get();
                NodeType::from_bool(value != 0.0 && !value.is_nan())
            }
            NodeType::String => NodeType::from_bool(!self.string().is_empty()),
            _ => NodeType::Undefined,
        }
    }

    /// Replace the node with its truthiness (`TRUE` or `FALSE`).
    pub fn to_boolean(&mut self) -> bool {
        self.modifying();
        match self.to_boolean_type_only() {
            NodeType::Undefined => false,
            truth => {
                self.retag(truth);
                true
            }
        }
    }

    /// `MEMBER` or `ASSIGNMENT` → `CALL`.
    pub fn to_call(&mut self) -> bool {
        self.modifying();
        match self.node_type {
            NodeType::Member | NodeType::Assignment => {
                self.retag(NodeType::Call);
                true
            }
            _ => false,
        }
    }

    /// Convert to `INT64`.
    ///
    /// `UNDEFINED` becomes 0 since an integer has no NaN. A NaN or
    /// infinite `FLOAT64` also becomes 0; other floats are truncated.
    /// Strings are not accepted; use [`Node::to_number`] first.
    pub fn to_int64(&mut self) -> bool {
        self.modifying();
        let value = match self.node_type {
            NodeType::Int64 => return true,
            NodeType::True => 1,
            NodeType::Null | NodeType::False | NodeType::Undefined => 0,
            NodeType::Float64 => {
                let float = self.float64();
                if float.is_nan() || float.is_infinity() {
                    0
                } else {
                    #[allow(clippy::cast_possible_truncation, reason = "truncation toward zero")]
                    let truncated = float.get() as i64;
                    truncated
                }
            }
            _ => return false,
        };
        self.node_type = NodeType::Int64;
        self.value = NodeValue::Int64(Int64::new(value));
        true
    }

    /// Convert to `FLOAT64`.
    pub fn to_float64(&mut self) -> bool {
        self.modifying();
        let value = match self.node_type {
            NodeType::Float64 => return true,
            #[allow(clippy::cast_precision_loss, reason = "integer widening to float")]
            NodeType::Int64 => self.int64().get() as f64,
            NodeType::True => 1.0,
            NodeType::Null | NodeType::False => 0.0,
            NodeType::Undefined => f64::NAN,
            _ => return false,
        };
        self.set_float_payload(value);
        true
    }

    /// Convert to a number, `INT64` where possible.
    ///
    /// This is the only conversion that parses a `STRING`; the result is
    /// always a `FLOAT64` (NaN when the text is not a number).
    pub fn to_number(&mut self) -> bool {
        self.modifying();
        match self.node_type {
            NodeType::Int64 | NodeType::Float64 => {}
            NodeType::True => self.set_int_payload(1),
            NodeType::Null | NodeType::False => self.set_int_payload(0),
            NodeType::Undefined => self.set_float_payload(f64::NAN),
            NodeType::String => {
                let value = parse_float64(self.string());
                self.set_float_payload(value);
            }
            _ => return false,
        }
        true
    }

    /// Convert to `STRING`.
    pub fn to_string(&mut self) -> bool {
        self.modifying();
        let text = match self.node_type {
            NodeType::String => return true,
            NodeType::Identifier => {
                self.rename(NodeType::String);
                return true;
            }
            NodeType::Undefined => "undefined".to_owned(),
            NodeType::Null => "null".to_owned(),
            NodeType::True => "true".to_owned(),
            NodeType::False => "false".to_owned(),
            NodeType::Int64 => self.int64().get().to_string(),
            NodeType::Float64 => float64_to_string(self.float64()),
            _ => return false,
        };
        self.node_type = NodeType::String;
        self.value = NodeValue::String(text);
        true
    }

    /// `IDENTIFIER` → `LABEL`, keeping the name.
    pub fn to_label(&mut self) -> bool {
        self.modifying();
        if self.node_type != NodeType::Identifier {
            return false;
        }
        self.rename(NodeType::Label);
        true
    }

    /// `IDENTIFIER` → `VIDENTIFIER`, keeping the name.
    ///
    /// # Panics
    ///
    /// Panics if the node is not an `IDENTIFIER`.
    #[track_caller]
    pub fn to_videntifier(&mut self) {
        self.modifying();
        assert!(
            self.node_type == NodeType::Identifier,
            "to_videntifier() called on a {} node",
            self.node_type
        );
        self.rename(NodeType::Videntifier);
    }

    /// `VARIABLE` → `VAR_ATTRIBUTES`, keeping the name.
    ///
    /// # Panics
    ///
    /// Panics if the node is not a `VARIABLE`.
    #[track_caller]
    pub fn to_var_attributes(&mut self) {
        self.modifying();
        assert!(
            self.node_type == NodeType::Variable,
            "to_var_attributes() called on a {} node",
            self.node_type
        );
        self.rename(NodeType::VarAttributes);
    }

    fn set_int_payload(&mut self, value: i64) {
        self.node_type = NodeType::Int64;
        self.value = NodeValue::Int64(Int64::new(value));
    }

    fn set_float_payload(&mut self, value: f64) {
        self.node_type = NodeType::Float64;
        self.value = NodeValue::Float64(Float64::new(value));
    }
}

/// Number-to-string conversion.
///
/// Shortest round-tripping digits. Plain decimal notation between 1e-6
/// and 1e21, exponent notation (`1e+21`, `1.5e-7`) outside.
fn float64_to_string(value: Float64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    match value.classify_infinity() {
        1 => return "Infinity".to_owned(),
        -1 => return "-Infinity".to_owned(),
        _ => {}
    }

    let v = value.get();
    if v == 0.0 {
        return "0".to_owned();
    }
    if (1e-6..1e21).contains(&v.abs()) {
        return v.to_string();
    }

    let exponential = format!("{v:e}");
    match exponential.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => exponential,
    }
}
