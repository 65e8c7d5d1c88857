use std::path::Path;

use crate::api::workflow_dto::WorkflowGraphDto;
use crate::domain::generation::extractor::extract;
use crate::domain::generation::generation_record::GenerationRecord;
use crate::domain::workflow::workflow_graph::WorkflowGraph;
use crate::error::Result;
use crate::loader::parser::load_workflow_graph;

pub mod api;
pub mod domain;
pub mod error;
pub mod loader;
pub mod logger;

/// Extracts the generation record from an already parsed workflow graph.
/// `None` (a `null` document or no graph supplied) yields an empty record.
pub fn extract_generation_info(prompt: Option<WorkflowGraphDto>) -> GenerationRecord {
    let graph = prompt.map(WorkflowGraph::from);
    extract(graph.as_ref())
}

pub fn extract_generation_info_from_file(file_path: impl AsRef<Path>) -> Result<GenerationRecord> {
    let file_path = file_path.as_ref();
    let prompt = load_workflow_graph(file_path)?;
    log::info!("Workflow graph '{}' parsed successfully.", file_path.display());

    Ok(extract_generation_info(prompt))
}
