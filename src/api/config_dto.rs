use serde::{Deserialize, Serialize};

pub const DEFAULT_FILENAME_PREFIX: &str = "GenStash";
pub const DEFAULT_OUTPUT_DIR: &str = "output";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SaveConfigDto {
    pub output_dir: String,
    pub filename_prefix: String,
    /// Optional subfolder below `output_dir`. Empty means `output_dir` itself.
    pub foldername: String,
    pub save_metadata: bool,
}

impl Default for SaveConfigDto {
    fn default() -> Self {
        SaveConfigDto {
            output_dir: DEFAULT_OUTPUT_DIR.to_string(),
            filename_prefix: DEFAULT_FILENAME_PREFIX.to_string(),
            foldername: String::new(),
            save_metadata: true,
        }
    }
}
