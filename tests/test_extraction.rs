use genstash::{
    api::workflow_dto::WorkflowGraphDto,
    domain::{
        generation::{extractor::extract, generation_record::GenerationRecord},
        workflow::{input_value::Literal, workflow_graph::WorkflowGraph},
    },
    error::Error,
    extract_generation_info, extract_generation_info_from_file,
    loader::parser::parse_workflow_graph,
};
use serde_json::{Value, json};

fn data_file(name: &str) -> String {
    format!("{}/tests/data/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn graph(value: Value) -> WorkflowGraph {
    let dto: WorkflowGraphDto = serde_json::from_value(value).unwrap();
    WorkflowGraph::from(dto)
}

fn record_json(record: &GenerationRecord) -> Value {
    serde_json::to_value(record).unwrap()
}

#[test]
fn test_default_txt2img_workflow() {
    let record = extract_generation_info_from_file(data_file("txt2img_basic.json")).unwrap();

    assert_eq!(
        record_json(&record),
        json!({
            "seed": 156680208700286u64,
            "steps": 20,
            "cfg": 8.0,
            "sampler_name": "euler",
            "scheduler": "normal",
            "denoise": 1,
            "model": "v1-5-pruned-emaonly.safetensors",
            "prompt": "beautiful scenery nature glass bottle landscape, purple galaxy bottle,",
            "negative_prompt": "text, watermark",
            "width": 512,
            "height": 768,
            "clip_skip": 2,
            "sampler": "euler normal",
            "size": "512x768",
        })
    );
}

#[test]
fn test_advanced_sampler_workflow() {
    let record = extract_generation_info_from_file(data_file("advanced_sampler.json")).unwrap();

    // noise_seed is renamed; the negative text node comes first in document order.
    assert_eq!(record.seed, Some(Literal::Number(721897303308196u64.into())));
    assert_eq!(record.add_noise, Some(Literal::Text("enable".into())));
    assert_eq!(record.start_at_step, Some(Literal::Number(0.into())));
    assert_eq!(record.end_at_step, Some(Literal::Number(10000.into())));
    assert_eq!(record.denoise, None);
    assert_eq!(record.sampler.as_deref(), Some("dpmpp_2m karras"));
    assert_eq!(record.prompt.as_deref(), Some("a portrait of an astronaut, 35mm"));
    assert_eq!(record.negative_prompt.as_deref(), Some("lowres, bad anatomy"));
    assert_eq!(record.model, Some(Literal::Text("sd_xl_base_1.0.safetensors".into())));

    // height is wired from another node, so there is no size.
    assert_eq!(record.width, Some(Literal::Number(1024.into())));
    assert_eq!(record.height, None);
    assert_eq!(record.size, None);

    let json = record_json(&record);
    assert!(json.get("noise_seed").is_none());
    assert!(json.get("return_with_leftover_noise").is_none());
}

#[test]
fn test_absent_and_empty_graphs_yield_empty_record() {
    assert!(extract(None).is_empty());
    assert!(extract(Some(&WorkflowGraph::default())).is_empty());
    assert!(extract_generation_info(None).is_empty());

    let null_document = parse_workflow_graph("null").unwrap();
    assert!(null_document.is_none());
    assert_eq!(extract_generation_info(null_document).to_json().unwrap(), "{}");

    let empty_document = parse_workflow_graph("{}").unwrap();
    assert_eq!(extract_generation_info(empty_document).to_json().unwrap(), "{}");
}

#[test]
fn test_mistyped_nodes_do_not_reject_document() {
    let document = parse_workflow_graph(
        r#"{
            "1": {"class_type": 5, "inputs": {}},
            "2": {"class_type": "KSampler", "inputs": []},
            "3": {"class_type": "KSampler", "inputs": {"seed": 7}},
            "4": "junk",
            "5": {"class_type": ["CLIPTextEncode"], "inputs": {"text": "ignored"}}
        }"#,
    )
    .unwrap();

    let record = extract_generation_info(document);
    assert_eq!(record.to_json().unwrap(), r#"{"seed": 7}"#);
}

#[test]
fn test_extraction_is_idempotent() {
    let g = graph(serde_json::from_str(&std::fs::read_to_string(data_file("txt2img_basic.json")).unwrap()).unwrap());
    assert_eq!(extract(Some(&g)), extract(Some(&g)));
}

#[test]
fn test_literals_are_copied_unchanged() {
    let g = graph(json!({
        "1": {"class_type": "KSampler", "inputs": {
            "seed": 18446744073709551615u64, "steps": 30, "cfg": 6.5,
            "sampler_name": "dpmpp_sde", "scheduler": "exponential", "denoise": 0.55
        }}
    }));
    let json = record_json(&extract(Some(&g)));

    assert_eq!(json["seed"], json!(18446744073709551615u64));
    assert_eq!(json["steps"], json!(30));
    assert_eq!(json["cfg"], json!(6.5));
    assert_eq!(json["denoise"], json!(0.55));
    assert_eq!(json["sampler_name"], json!("dpmpp_sde"));
    assert_eq!(json["sampler"], json!("dpmpp_sde exponential"));
}

#[test]
fn test_edge_valued_inputs_are_not_copied() {
    let g = graph(json!({
        "1": {"class_type": "KSampler", "inputs": {"seed": ["20", 0], "steps": 20}},
        "2": {"class_type": "EmptyLatentImage", "inputs": {"width": ["21", 0], "height": 640}},
        "3": {"class_type": "CLIPSetLastLayer", "inputs": {"stop_at_clip_layer": ["22", 0]}},
        "4": {"class_type": "CLIPTextEncode", "inputs": {"text": ["23", 0]}},
        "5": {"class_type": "CheckpointLoaderSimple", "inputs": {"ckpt_name": ["24", 0]}},
    }));
    let record = extract(Some(&g));

    assert_eq!(record.seed, None);
    assert_eq!(record.steps, Some(Literal::Number(20.into())));
    assert_eq!(record.width, None);
    assert_eq!(record.height, Some(Literal::Number(640.into())));
    assert_eq!(record.clip_skip, None);
    assert_eq!(record.prompt, None);
    assert_eq!(record.model, None);
}

#[test]
fn test_edge_valued_seed_keeps_earlier_literal() {
    let g = graph(json!({
        "1": {"class_type": "KSampler", "inputs": {"seed": 7}},
        "2": {"class_type": "KSampler", "inputs": {"seed": ["9", 0]}},
    }));

    assert_eq!(extract(Some(&g)).seed, Some(Literal::Number(7.into())));
}

#[test]
fn test_later_sampler_overwrites_shared_fields() {
    let g = graph(json!({
        "1": {"class_type": "KSampler", "inputs": {"seed": 1, "steps": 10, "denoise": 1.0}},
        "2": {"class_type": "KSampler", "inputs": {"seed": 2, "steps": 30}},
    }));
    let record = extract(Some(&g));

    assert_eq!(record.seed, Some(Literal::Number(2.into())));
    assert_eq!(record.steps, Some(Literal::Number(30.into())));
    // Fields the second sampler does not supply survive from the first.
    assert_eq!(record_json(&record)["denoise"], json!(1.0));
}

#[test]
fn test_first_positive_prompt_wins() {
    let g = graph(json!({
        "1": {"class_type": "CLIPTextEncode", "inputs": {"text": "A"}},
        "2": {"class_type": "CLIPTextEncode", "inputs": {"text": "B"}},
    }));

    assert_eq!(extract(Some(&g)).prompt.as_deref(), Some("A"));
}

#[test]
fn test_last_negative_prompt_wins() {
    let g = graph(json!({
        "1": {"class_type": "CLIPTextEncode", "inputs": {"text": "neg one"}},
        "2": {"class_type": "CLIPTextEncode", "inputs": {"text": "neg two"}},
        "3": {"class_type": "KSampler", "inputs": {"negative": ["1", 0]}},
        "4": {"class_type": "KSampler", "inputs": {"negative": ["2", 0]}},
    }));
    let record = extract(Some(&g));

    assert_eq!(record.negative_prompt.as_deref(), Some("neg two"));
    assert_eq!(record.prompt, None);
}

#[test]
fn test_empty_or_non_string_text_is_skipped() {
    let g = graph(json!({
        "1": {"class_type": "CLIPTextEncode", "inputs": {"text": ""}},
        "2": {"class_type": "CLIPTextEncode", "inputs": {"text": 42}},
        "3": {"class_type": "CLIPTextEncode", "inputs": {}},
        "4": {"class_type": "CLIPTextEncode", "inputs": {"text": "actual prompt"}},
    }));

    assert_eq!(extract(Some(&g)).prompt.as_deref(), Some("actual prompt"));
}

#[test]
fn test_clip_skip_is_absolute_value() {
    let negative = graph(json!({"1": {"class_type": "CLIPSetLastLayer", "inputs": {"stop_at_clip_layer": -2}}}));
    assert_eq!(record_json(&extract(Some(&negative)))["clip_skip"], json!(2));

    let positive = graph(json!({"1": {"class_type": "CLIPSetLastLayer", "inputs": {"stop_at_clip_layer": 1}}}));
    assert_eq!(record_json(&extract(Some(&positive)))["clip_skip"], json!(1));

    let text = graph(json!({"1": {"class_type": "CLIPSetLastLayer", "inputs": {"stop_at_clip_layer": "-2"}}}));
    assert_eq!(extract(Some(&text)).clip_skip, None);
}

#[test]
fn test_unrecognized_nodes_are_ignored() {
    let g = graph(json!({
        "1": {"class_type": "KSamplerSelect", "inputs": {"sampler_name": "euler"}},
        "2": {"class_type": "SamplerCustom", "inputs": {"noise_seed": 5, "cfg": 3.0}},
        "3": {"class_type": "LoraLoader", "inputs": {"lora_name": "detail.safetensors"}},
        "4": {"inputs": {"seed": 1}},
    }));

    assert!(extract(Some(&g)).is_empty());
}

#[test]
fn test_advanced_sampler_ignores_basic_only_keys() {
    let g = graph(json!({
        "1": {"class_type": "KSamplerAdvanced", "inputs": {"seed": 3, "denoise": 0.5, "noise_seed": 9}},
    }));
    let record = extract(Some(&g));

    assert_eq!(record.seed, Some(Literal::Number(9.into())));
    assert_eq!(record.denoise, None);
}

#[test]
fn test_size_keeps_native_number_formatting() {
    let g = graph(json!({"1": {"class_type": "EmptyLatentImage", "inputs": {"width": 832, "height": 1216.0}}}));
    assert_eq!(extract(Some(&g)).size.as_deref(), Some("832x1216.0"));
}

#[test]
fn test_error_file_not_found() {
    let result = extract_generation_info_from_file("non_existent_file.json");
    assert!(matches!(result, Err(Error::IoError(_))), "Expected IoError, got {:?}", result);
}

#[test]
fn test_error_malformed_json() {
    let result = parse_workflow_graph("{\"1\": ");
    assert!(matches!(result, Err(Error::DeserializationError(_))));
}
