pub mod id;
pub mod json_text;
