use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A workflow graph as emitted by the node editor: node id -> node.
///
/// `IndexMap` keeps the document order, which is the traversal order used
/// during extraction.
pub type WorkflowGraphDto = IndexMap<String, NodeDto>;

/// Opaque snapshot passed through into the image metadata, one text entry per key.
pub type ExtraPngInfoDto = IndexMap<String, Value>;

/// One node of the graph. Deserialization never rejects a node: a non-string
/// `class_type` or non-object `inputs` reads as absent, and a node that is not
/// an object reads as empty.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(from = "Value")]
pub struct NodeDto {
    pub class_type: Option<String>,

    /// Input name -> literal value or `[source_node_id, output_slot]`.
    pub inputs: Option<IndexMap<String, Value>>,
}

impl From<Value> for NodeDto {
    fn from(value: Value) -> Self {
        let Value::Object(mut node) = value else {
            return NodeDto::default();
        };

        let class_type = match node.remove("class_type") {
            Some(Value::String(class_type)) => Some(class_type),
            _ => None,
        };
        let inputs = match node.remove("inputs") {
            Some(Value::Object(inputs)) => Some(inputs.into_iter().collect()),
            _ => None,
        };

        NodeDto { class_type, inputs }
    }
}
