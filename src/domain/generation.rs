pub mod extractor;
pub mod generation_record;
pub mod prompt_role;
