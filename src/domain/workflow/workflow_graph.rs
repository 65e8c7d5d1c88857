use indexmap::IndexMap;

use crate::api::workflow_dto::{NodeDto, WorkflowGraphDto};
use crate::domain::utils::id::NodeId;
use crate::domain::workflow::input_value::InputValue;
use crate::domain::workflow::node_kind::NodeKind;
use crate::domain::workflow::workflow_node::WorkflowNode;

/// The typed workflow graph. Iteration follows document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkflowGraph {
    pub nodes: IndexMap<NodeId, WorkflowNode>,
}

/// Builds the typed graph from the wire form. Conversion never fails: a missing
/// `class_type` maps to `NodeKind::Unrecognized` and missing `inputs` to an
/// empty map. Edge targets are not checked for existence.
impl From<WorkflowGraphDto> for WorkflowGraph {
    fn from(dto: WorkflowGraphDto) -> Self {
        let nodes = dto
            .into_iter()
            .map(|(id, node_dto)| {
                let node = build_workflow_node(NodeId::new(id), node_dto);
                (node.id.clone(), node)
            })
            .collect();

        WorkflowGraph { nodes }
    }
}

impl WorkflowGraph {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &WorkflowNode> {
        self.nodes.values()
    }

    pub fn samplers(&self) -> impl Iterator<Item = &WorkflowNode> {
        self.iter().filter(|node| node.kind.is_sampler())
    }
}

fn build_workflow_node(id: NodeId, dto: NodeDto) -> WorkflowNode {
    let kind = dto.class_type.as_deref().map_or(NodeKind::Unrecognized, NodeKind::from);
    let inputs = dto
        .inputs
        .unwrap_or_default()
        .into_iter()
        .map(|(name, value)| (name, InputValue::from(value)))
        .collect();

    WorkflowNode { id, kind, inputs }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn graph_from(value: serde_json::Value) -> WorkflowGraph {
        let dto: WorkflowGraphDto = serde_json::from_value(value).unwrap();
        WorkflowGraph::from(dto)
    }

    #[test]
    fn keeps_document_order() {
        let graph = graph_from(json!({
            "9": {"class_type": "SaveImage", "inputs": {}},
            "3": {"class_type": "KSampler", "inputs": {}},
            "10": {"class_type": "CLIPTextEncode", "inputs": {}},
        }));

        let ids: Vec<&str> = graph.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["9", "3", "10"]);
    }

    #[test]
    fn tolerates_missing_class_type_and_inputs() {
        let graph = graph_from(json!({
            "1": {},
            "2": {"class_type": null, "inputs": null},
        }));

        assert_eq!(graph.len(), 2);
        for node in graph.iter() {
            assert_eq!(node.kind, NodeKind::Unrecognized);
            assert!(node.inputs.is_empty());
        }
    }

    #[test]
    fn samplers_filters_ksampler_kinds() {
        let graph = graph_from(json!({
            "1": {"class_type": "KSampler", "inputs": {}},
            "2": {"class_type": "CLIPTextEncode", "inputs": {}},
            "3": {"class_type": "KSamplerAdvanced", "inputs": {}},
        }));

        let ids: Vec<&str> = graph.samplers().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }
}
