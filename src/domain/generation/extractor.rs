use serde_json::Number;

use crate::domain::generation::generation_record::{GenerationRecord, SamplerField};
use crate::domain::generation::prompt_role::{PromptRole, resolve_role};
use crate::domain::workflow::node_kind::NodeKind;
use crate::domain::workflow::workflow_graph::WorkflowGraph;
use crate::domain::workflow::workflow_node::WorkflowNode;

/// Input name -> record field for `KSampler`.
pub const KSAMPLER_INPUTS: [(&str, SamplerField); 6] = [
    ("seed", SamplerField::Seed),
    ("steps", SamplerField::Steps),
    ("cfg", SamplerField::Cfg),
    ("sampler_name", SamplerField::SamplerName),
    ("scheduler", SamplerField::Scheduler),
    ("denoise", SamplerField::Denoise),
];

/// Input name -> record field for `KSamplerAdvanced`. `noise_seed` lands in `seed`.
pub const KSAMPLER_ADVANCED_INPUTS: [(&str, SamplerField); 8] = [
    ("noise_seed", SamplerField::Seed),
    ("steps", SamplerField::Steps),
    ("cfg", SamplerField::Cfg),
    ("sampler_name", SamplerField::SamplerName),
    ("scheduler", SamplerField::Scheduler),
    ("start_at_step", SamplerField::StartAtStep),
    ("end_at_step", SamplerField::EndAtStep),
    ("add_noise", SamplerField::AddNoise),
];

/// Extracts the generation parameters from a workflow graph.
///
/// Nodes are visited once in graph order. Sampler, size, model and clip-skip
/// fields are overwritten by later nodes; `prompt` keeps the first positive
/// text, `negative_prompt` the last negative one. Only literal inputs are
/// copied. `None` or an empty graph yields an empty record.
pub fn extract(graph: Option<&WorkflowGraph>) -> GenerationRecord {
    let mut record = GenerationRecord::default();

    let Some(graph) = graph else {
        return record;
    };

    for node in graph.iter() {
        match node.kind {
            NodeKind::KSampler => copy_sampler_inputs(node, &KSAMPLER_INPUTS, &mut record),
            NodeKind::KSamplerAdvanced => copy_sampler_inputs(node, &KSAMPLER_ADVANCED_INPUTS, &mut record),
            NodeKind::CheckpointLoaderSimple => {
                if let Some(ckpt_name) = node.literal("ckpt_name") {
                    record.model = Some(ckpt_name.clone());
                }
            }
            NodeKind::ClipTextEncode => apply_text_encoder(node, graph, &mut record),
            NodeKind::EmptyLatentImage => {
                if let Some(width) = node.literal("width") {
                    record.width = Some(width.clone());
                }
                if let Some(height) = node.literal("height") {
                    record.height = Some(height.clone());
                }
            }
            NodeKind::ClipSetLastLayer => {
                if let Some(clip_skip) = node.literal("stop_at_clip_layer").and_then(|l| l.as_number()).and_then(absolute) {
                    record.clip_skip = Some(clip_skip);
                }
            }
            NodeKind::Unrecognized => {}
        }
    }

    record.derive_composites();
    log::debug!("Extracted generation info from {} nodes: {:?}", graph.len(), record);

    record
}

fn copy_sampler_inputs(node: &WorkflowNode, inputs: &[(&str, SamplerField)], record: &mut GenerationRecord) {
    for &(input_name, field) in inputs {
        if let Some(value) = node.literal(input_name) {
            *record.sampler_field_mut(field) = Some(value.clone());
        }
    }
}

fn apply_text_encoder(node: &WorkflowNode, graph: &WorkflowGraph, record: &mut GenerationRecord) {
    let Some(text) = node.literal("text").and_then(|l| l.as_str()) else {
        return;
    };
    if text.is_empty() {
        return;
    }

    match resolve_role(&node.id, graph) {
        PromptRole::Negative => record.negative_prompt = Some(text.to_string()),
        PromptRole::Positive => {
            if record.prompt.is_none() {
                record.prompt = Some(text.to_string());
            } else {
                log::debug!("Ignoring additional positive prompt from node {}", node.id);
            }
        }
    }
}

fn absolute(number: &Number) -> Option<Number> {
    if let Some(value) = number.as_u64() {
        return Some(value.into());
    }
    if let Some(value) = number.as_i64() {
        return Some(value.unsigned_abs().into());
    }
    number.as_f64().and_then(|value| Number::from_f64(value.abs()))
}
