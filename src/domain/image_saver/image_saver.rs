use std::fs;

use image::DynamicImage;
use serde::Serialize;

use crate::api::config_dto::SaveConfigDto;
use crate::api::workflow_dto::ExtraPngInfoDto;
use crate::domain::generation::extractor::extract;
use crate::domain::image_saver::output_path::{image_filename, next_counter, resolve_output_folder};
use crate::domain::image_saver::png_writer::{TextEntry, write_png};
use crate::domain::utils::json_text::to_json_text;
use crate::domain::workflow::workflow_graph::WorkflowGraph;
use crate::error::{Error, Result};

/// Text chunk keyword holding the serialized generation record.
pub const GENERATION_INFO_KEY: &str = "generation_info";

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SavedImage {
    pub filename: String,
    pub subfolder: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SaveOutcome {
    pub generation_info_json: String,
    pub images: Vec<SavedImage>,
}

/// Saves a batch of images with the generation info of `prompt` embedded.
///
/// Files are numbered consecutively from the first free counter in the target
/// folder. With `save_metadata` off the images carry no text chunks, but the
/// record is still extracted and returned.
pub fn save_images(
    images: &[DynamicImage],
    prompt: Option<&WorkflowGraph>,
    extra_pnginfo: Option<&ExtraPngInfoDto>,
    config: &SaveConfigDto,
) -> Result<SaveOutcome> {
    if images.is_empty() {
        return Err(Error::EmptyBatch);
    }

    let record = extract(prompt);
    let generation_info_json = record.to_json()?;

    let entries = if config.save_metadata {
        metadata_entries(&generation_info_json, extra_pnginfo)?
    } else {
        Vec::new()
    };

    let (folder, subfolder) = resolve_output_folder(config);
    fs::create_dir_all(&folder)?;
    let counter = next_counter(&folder, &config.filename_prefix)?;

    let filenames = (0..images.len())
        .map(|batch_index| {
            u32::try_from(batch_index)
                .ok()
                .and_then(|offset| counter.checked_add(offset))
                .map(|file_counter| image_filename(&config.filename_prefix, file_counter))
                .ok_or_else(|| Error::CounterOverflow(config.filename_prefix.clone()))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut saved = Vec::with_capacity(images.len());
    for (image, filename) in images.iter().zip(filenames) {
        let path = folder.join(&filename);

        write_png(&path, image, &entries)?;
        log::info!("Saved '{}' with {} metadata entries.", path.display(), entries.len());

        saved.push(SavedImage { filename, subfolder: subfolder.clone(), kind: "output".to_string() });
    }

    Ok(SaveOutcome { generation_info_json, images: saved })
}

/// The record entry first, then one entry per pass-through key with its value as
/// ASCII-only JSON, so pass-through entries always fit a plain text chunk.
pub fn metadata_entries(generation_info_json: &str, extra_pnginfo: Option<&ExtraPngInfoDto>) -> Result<Vec<TextEntry>> {
    let mut entries = vec![TextEntry::new(GENERATION_INFO_KEY, generation_info_json)];

    for (key, value) in extra_pnginfo.into_iter().flatten() {
        entries.push(TextEntry::new(key.as_str(), to_json_text(value, true)?));
    }

    Ok(entries)
}
