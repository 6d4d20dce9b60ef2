//! Intermediate values shared by the ECL lexer and parser.
//!
//! # Contents
//!
//! - [`Position`]: page/paragraph/line tracking for diagnostics
//! - [`Int64`], [`Float64`], [`Compare`]: numeric payload wrappers
//! - [`NodeType`]: the closed tag enumeration
//! - [`Node`]: a tagged value with coercion operations

mod node;
mod node_type;
mod position;
mod value;

pub use node::{Node, NodeLock, NodeValue};
pub use node_type::NodeType;
pub use position::Position;
pub use value::{parse_float64, Compare, Float64, Int64};
