use indexmap::IndexMap;

use crate::domain::utils::id::NodeId;
use crate::domain::workflow::input_value::{EdgeRef, InputValue, Literal};
use crate::domain::workflow::node_kind::NodeKind;

/// Represents a node in the workflow graph (one pipeline step).
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowNode {
    pub id: NodeId,
    pub kind: NodeKind,
    pub inputs: IndexMap<String, InputValue>,
}

impl WorkflowNode {
    /// Returns the input only if it is a literal; edge references and opaque
    /// values yield `None`.
    pub fn literal(&self, name: &str) -> Option<&Literal> {
        self.inputs.get(name).and_then(InputValue::as_literal)
    }

    pub fn edge(&self, name: &str) -> Option<&EdgeRef> {
        self.inputs.get(name).and_then(InputValue::as_edge)
    }
}
