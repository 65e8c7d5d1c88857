use serde::Serialize;
use serde_json::Number;

use crate::domain::utils::json_text::to_json_text;
use crate::domain::workflow::input_value::Literal;
use crate::error::Result;

/// Sampler settings copied verbatim from `KSampler`/`KSamplerAdvanced` inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamplerField {
    Seed,
    Steps,
    Cfg,
    SamplerName,
    Scheduler,
    Denoise,
    StartAtStep,
    EndAtStep,
    AddNoise,
}

/// Flat generation parameters in the `generation_info` metadata layout.
///
/// Absent fields are omitted when serialized. Literal-valued fields keep their
/// JSON type (`seed: 42` stays a number, `add_noise: "enable"` a string).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GenerationRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<Literal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<Literal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cfg: Option<Literal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sampler_name: Option<Literal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduler: Option<Literal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub denoise: Option<Literal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_at_step: Option<Literal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_at_step: Option<Literal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_noise: Option<Literal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<Literal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative_prompt: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<Literal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<Literal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clip_skip: Option<Number>,

    /// `"{sampler_name} {scheduler}"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sampler: Option<String>,
    /// `"{width}x{height}"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

impl GenerationRecord {
    pub fn sampler_field_mut(&mut self, field: SamplerField) -> &mut Option<Literal> {
        match field {
            SamplerField::Seed => &mut self.seed,
            SamplerField::Steps => &mut self.steps,
            SamplerField::Cfg => &mut self.cfg,
            SamplerField::SamplerName => &mut self.sampler_name,
            SamplerField::Scheduler => &mut self.scheduler,
            SamplerField::Denoise => &mut self.denoise,
            SamplerField::StartAtStep => &mut self.start_at_step,
            SamplerField::EndAtStep => &mut self.end_at_step,
            SamplerField::AddNoise => &mut self.add_noise,
        }
    }

    /// Fills `sampler` and `size` from their parts. Called once after traversal.
    pub fn derive_composites(&mut self) {
        if let (Some(sampler_name), Some(scheduler)) = (&self.sampler_name, &self.scheduler) {
            self.sampler = Some(format!("{} {}", sampler_name, scheduler));
        }
        if let (Some(width), Some(height)) = (&self.width, &self.height) {
            self.size = Some(format!("{}x{}", width, height));
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == GenerationRecord::default()
    }

    /// Single-line JSON with spaced separators; non-ASCII text is written unescaped.
    pub fn to_json(&self) -> Result<String> {
        to_json_text(self, false)
    }
}
