use serde::Serialize;
use serde_json::{Number, Value};
use std::fmt;

use crate::domain::utils::id::NodeId;

/// A literal configuration value, the only kind of input that is copied into
/// the generation record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Literal {
    Bool(bool),
    Number(Number),
    Text(String),
}

impl Literal {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Literal::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Literal::Number(number) => Some(number),
            _ => None,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Bool(value) => write!(f, "{}", value),
            Literal::Number(value) => write!(f, "{}", value),
            Literal::Text(value) => write!(f, "{}", value),
        }
    }
}

/// Reference to another node's output: `[source_node_id, output_slot]` on the wire.
/// Only the source matters for role resolution; the slot is validated but not kept.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EdgeRef {
    pub source: NodeId,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputValue {
    Literal(Literal),
    Edge(EdgeRef),
    /// `null`, objects, and arrays that are not edge references.
    Opaque(Value),
}

impl InputValue {
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            InputValue::Literal(literal) => Some(literal),
            _ => None,
        }
    }

    pub fn as_edge(&self) -> Option<&EdgeRef> {
        match self {
            InputValue::Edge(edge) => Some(edge),
            _ => None,
        }
    }
}

impl From<Value> for InputValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Bool(b) => InputValue::Literal(Literal::Bool(b)),
            Value::Number(n) => InputValue::Literal(Literal::Number(n)),
            Value::String(s) => InputValue::Literal(Literal::Text(s)),
            Value::Array(items) => match edge_ref(&items) {
                Some(edge) => InputValue::Edge(edge),
                None => InputValue::Opaque(Value::Array(items)),
            },
            other => InputValue::Opaque(other),
        }
    }
}

fn edge_ref(items: &[Value]) -> Option<EdgeRef> {
    let [source, slot] = items else {
        return None;
    };

    let source = match source {
        Value::String(id) => NodeId::new(id.as_str()),
        Value::Number(id) if id.is_u64() || id.is_i64() => NodeId::new(id.to_string()),
        _ => return None,
    };
    slot.as_u64()?;

    Some(EdgeRef { source })
}
