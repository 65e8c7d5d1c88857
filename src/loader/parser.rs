use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

use crate::api::workflow_dto::WorkflowGraphDto;
use crate::error::Result;

/// Parses a JSON file into a given type `T`.
///
/// Errors are converted into `crate::error::Error` variants:
/// - `Error::IoError` if the file cannot be read.
/// - `Error::DeserializationError` if the JSON is malformed.
pub fn parse_json_file<T: DeserializeOwned>(file_path: impl AsRef<Path>) -> Result<T> {
    let data = fs::read_to_string(file_path)?;
    let parsed_data: T = serde_json::from_str(&data)?;

    Ok(parsed_data)
}

/// Parses a workflow graph document. A literal `null` document is accepted and
/// yields `None`, which extracts to an empty record. Only syntactically invalid
/// JSON or a top level that is not an object is an error; malformed nodes are not.
pub fn parse_workflow_graph(json: &str) -> Result<Option<WorkflowGraphDto>> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_workflow_graph(file_path: impl AsRef<Path>) -> Result<Option<WorkflowGraphDto>> {
    parse_workflow_graph(&fs::read_to_string(file_path)?)
}
