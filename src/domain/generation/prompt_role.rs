use crate::domain::utils::id::NodeId;
use crate::domain::workflow::workflow_graph::WorkflowGraph;

/// Which conditioning slot of a sampler a text encoder feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PromptRole {
    #[default]
    Positive,
    Negative,
}

/// Finds the role of the text node `target` by scanning sampler nodes in graph
/// order. The first sampler whose `positive` or `negative` input references
/// `target` decides, `positive` being checked before `negative` on each
/// sampler. Unreferenced nodes are `Positive`.
pub fn resolve_role(target: &NodeId, graph: &WorkflowGraph) -> PromptRole {
    for sampler in graph.samplers() {
        if sampler.edge("positive").is_some_and(|edge| &edge.source == target) {
            return PromptRole::Positive;
        }
        if sampler.edge("negative").is_some_and(|edge| &edge.source == target) {
            return PromptRole::Negative;
        }
    }

    PromptRole::default()
}
