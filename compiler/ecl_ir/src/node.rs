//! Tagged node values.
//!
//! A [`Node`] pairs a [`NodeType`] with at most one payload. The payload
//! shape is fully determined by the tag: `INT64` nodes always hold an
//! [`Int64`], `FLOAT64` nodes a [`Float64`], string-capable tags a
//! `String`, and every other tag nothing at all. `TRUE`/`FALSE` encode
//! their value in the tag.
//!
//! Payload accessors used on a tag that cannot carry that payload are
//! caller bugs and panic. Mutation of a locked node panics as well.

mod convert;

use std::ops::Deref;

use crate::{Float64, Int64, NodeType, Position};

/// Payload slot of a [`Node`].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeValue {
    #[default]
    None,
    Int64(Int64),
    Float64(Float64),
    String(String),
}

impl NodeValue {
    /// The empty payload matching `node_type`.
    fn default_for(node_type: NodeType) -> Self {
        match node_type {
            NodeType::Int64 => NodeValue::Int64(Int64::default()),
            NodeType::Float64 => NodeValue::Float64(Float64::default()),
            t if t.has_string_payload() => NodeValue::String(String::new()),
            _ => NodeValue::None,
        }
    }
}

/// A token or tree node: a tag, its payload, and where it came from.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    node_type: NodeType,
    value: NodeValue,
    position: Position,
    #[cfg_attr(feature = "serde", serde(skip))]
    lock: u32,
}

impl Node {
    /// Create an unlocked node with the empty payload for `node_type`.
    pub fn new(node_type: NodeType) -> Self {
        Node {
            node_type,
            value: NodeValue::default_for(node_type),
            position: Position::default(),
            lock: 0,
        }
    }

    /// Create an `INT64` node.
    pub fn new_int64(value: i64) -> Self {
        Node::new(NodeType::Int64).with_value(NodeValue::Int64(Int64::new(value)))
    }

    /// Create a `FLOAT64` node.
    pub fn new_float64(value: f64) -> Self {
        Node::new(NodeType::Float64).with_value(NodeValue::Float64(Float64::new(value)))
    }

    /// Create a node of a string-capable tag holding `text`.
    ///
    /// # Panics
    ///
    /// Panics if `node_type` cannot carry a string.
    #[track_caller]
    pub fn new_string(node_type: NodeType, text: impl Into<String>) -> Self {
        let mut node = Node::new(node_type);
        node.set_string(text);
        node
    }

    fn with_value(mut self, value: NodeValue) -> Self {
        self.value = value;
        self
    }

    #[inline]
    pub fn node_type(&self) -> NodeType {
        self.node_type
    }

    #[inline]
    pub fn value(&self) -> &NodeValue {
        &self.value
    }

    #[inline]
    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    // --- payload accessors ---

    /// # Panics
    ///
    /// Panics unless this is an `INT64` node.
    #[track_caller]
    pub fn int64(&self) -> Int64 {
        match self.value {
            NodeValue::Int64(v) => v,
            _ => panic!("int64() called on a {} node", self.node_type),
        }
    }

    /// # Panics
    ///
    /// Panics unless this is a `FLOAT64` node.
    #[track_caller]
    pub fn float64(&self) -> Float64 {
        match self.value {
            NodeValue::Float64(v) => v,
            _ => panic!("float64() called on a {} node", self.node_type),
        }
    }

    /// # Panics
    ///
    /// Panics unless the tag carries a string.
    #[track_caller]
    pub fn string(&self) -> &str {
        match &self.value {
            NodeValue::String(s) => s,
            _ => panic!("string() called on a {} node", self.node_type),
        }
    }

    /// # Panics
    ///
    /// Panics unless this is a `TRUE` or `FALSE` node.
    #[track_caller]
    pub fn boolean(&self) -> bool {
        match self.node_type {
            NodeType::True => true,
            NodeType::False => false,
            other => panic!("boolean() called on a {other} node"),
        }
    }

    #[track_caller]
    pub fn set_int64(&mut self, value: Int64) {
        self.modifying();
        match &mut self.value {
            NodeValue::Int64(v) => *v = value,
            _ => panic!("set_int64() called on a {} node", self.node_type),
        }
    }

    #[track_caller]
    pub fn set_float64(&mut self, value: Float64) {
        self.modifying();
        match &mut self.value {
            NodeValue::Float64(v) => *v = value,
            _ => panic!("set_float64() called on a {} node", self.node_type),
        }
    }

    #[track_caller]
    pub fn set_string(&mut self, text: impl Into<String>) {
        self.modifying();
        match &mut self.value {
            NodeValue::String(s) => *s = text.into(),
            _ => panic!("set_string() called on a {} node", self.node_type),
        }
    }

    /// Flip a boolean node between `TRUE` and `FALSE`.
    #[track_caller]
    pub fn set_boolean(&mut self, value: bool) {
        self.modifying();
        assert!(
            self.node_type.is_boolean(),
            "set_boolean() called on a {} node",
            self.node_type
        );
        self.node_type = NodeType::from_bool(value);
    }

    // --- locking ---

    #[inline]
    pub fn is_locked(&self) -> bool {
        self.lock > 0
    }

    /// Forbid modifications until the matching [`Node::unlock`].
    ///
    /// Locks nest.
    pub fn lock(&mut self) {
        self.lock += 1;
    }

    /// # Panics
    ///
    /// Panics if the node is not locked.
    #[track_caller]
    pub fn unlock(&mut self) {
        assert!(self.lock > 0, "unlock() called on an unlocked {} node", self.node_type);
        self.lock -= 1;
    }

    /// Lock the node for the lifetime of the returned guard.
    pub fn lock_guard(&mut self) -> NodeLock<'_> {
        self.lock();
        NodeLock { node: self }
    }

    /// Assert that the node may be modified.
    #[track_caller]
    fn modifying(&self) {
        assert!(
            !self.is_locked(),
            "trying to modify a locked {} node",
            self.node_type
        );
    }

    /// Change the tag, resetting the payload to the new tag's empty value.
    fn retag(&mut self, node_type: NodeType) {
        self.node_type = node_type;
        self.value = NodeValue::default_for(node_type);
    }

    /// Change the tag while keeping the payload.
    ///
    /// Only valid between tags with the same payload shape.
    fn rename(&mut self, node_type: NodeType) {
        debug_assert_eq!(
            std::mem::discriminant(&NodeValue::default_for(node_type)),
            std::mem::discriminant(&self.value)
        );
        self.node_type = node_type;
    }
}

/// Keeps a [`Node`] locked while alive; read access only.
pub struct NodeLock<'a> {
    node: &'a mut Node,
}

impl Deref for NodeLock<'_> {
    type Target = Node;

    fn deref(&self) -> &Node {
        self.node
    }
}

impl Drop for NodeLock<'_> {
    fn drop(&mut self) {
        self.node.lock -= 1;
    }
}
