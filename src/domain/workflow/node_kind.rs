/// The node types the extractor understands. Everything else is `Unrecognized`
/// and skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    KSampler,
    KSamplerAdvanced,
    CheckpointLoaderSimple,
    ClipTextEncode,
    EmptyLatentImage,
    ClipSetLastLayer,
    Unrecognized,
}

impl NodeKind {
    pub fn is_sampler(self) -> bool {
        matches!(self, NodeKind::KSampler | NodeKind::KSamplerAdvanced)
    }
}

impl From<&str> for NodeKind {
    fn from(class_type: &str) -> Self {
        match class_type {
            "KSampler" => NodeKind::KSampler,
            "KSamplerAdvanced" => NodeKind::KSamplerAdvanced,
            "CheckpointLoaderSimple" => NodeKind::CheckpointLoaderSimple,
            "CLIPTextEncode" => NodeKind::ClipTextEncode,
            "EmptyLatentImage" => NodeKind::EmptyLatentImage,
            "CLIPSetLastLayer" => NodeKind::ClipSetLastLayer,
            _ => NodeKind::Unrecognized,
        }
    }
}
