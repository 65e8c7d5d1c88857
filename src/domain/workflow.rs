pub mod input_value;
pub mod node_kind;
pub mod workflow_graph;
pub mod workflow_node;
