use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::api::config_dto::SaveConfigDto;
use crate::error::{Error, Result};

/// Target folder and the subfolder name reported back to the caller.
pub fn resolve_output_folder(config: &SaveConfigDto) -> (PathBuf, String) {
    let base = PathBuf::from(&config.output_dir);
    if config.foldername.is_empty() {
        (base, String::new())
    } else {
        (base.join(&config.foldername), config.foldername.clone())
    }
}

/// First unused counter for `prefix` in `folder`: one past the highest
/// `{prefix}_NNNNN` already present, or 1.
pub fn next_counter(folder: &Path, prefix: &str) -> Result<u32> {
    let entries = match fs::read_dir(folder) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(1),
        Err(e) => return Err(e.into()),
    };

    let mut highest: u32 = 0;
    for entry in entries {
        let entry = entry?;
        let name = entry.file_name();
        if let Some(counter) = name.to_str().and_then(|name| parse_counter(name, prefix)) {
            highest = highest.max(counter);
        }
    }

    highest.checked_add(1).ok_or_else(|| Error::CounterOverflow(prefix.to_string()))
}

pub fn image_filename(prefix: &str, counter: u32) -> String {
    format!("{}_{:05}.png", prefix, counter)
}

fn parse_counter(file_name: &str, prefix: &str) -> Option<u32> {
    let rest = file_name.strip_prefix(prefix)?.strip_prefix('_')?;
    let digits_end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    let (digits, tail) = rest.split_at(digits_end);
    if digits.is_empty() || !(tail.starts_with('.') || tail.starts_with('_')) {
        return None;
    }
    digits.parse().ok()
}
