use std::borrow::Cow;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::{DynamicImage, GenericImageView};
use png::{BitDepth, ColorType, Encoder};

use crate::error::Result;

/// A `keyword -> text` entry written as a PNG text chunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEntry {
    pub keyword: String,
    pub text: String,
}

impl TextEntry {
    pub fn new(keyword: impl Into<String>, text: impl Into<String>) -> Self {
        TextEntry { keyword: keyword.into(), text: text.into() }
    }
}

/// Writes `image` as an 8-bit PNG with the given text entries ahead of the
/// image data. Text that fits Latin-1 goes into `tEXt`, anything else into
/// an uncompressed `iTXt` chunk.
pub fn write_png(path: &Path, image: &DynamicImage, entries: &[TextEntry]) -> Result<()> {
    let (color_type, pixels): (ColorType, Cow<'_, [u8]>) = match image {
        DynamicImage::ImageLuma8(buffer) => (ColorType::Grayscale, Cow::Borrowed(buffer.as_raw().as_slice())),
        DynamicImage::ImageLumaA8(buffer) => (ColorType::GrayscaleAlpha, Cow::Borrowed(buffer.as_raw().as_slice())),
        DynamicImage::ImageRgb8(buffer) => (ColorType::Rgb, Cow::Borrowed(buffer.as_raw().as_slice())),
        DynamicImage::ImageRgba8(buffer) => (ColorType::Rgba, Cow::Borrowed(buffer.as_raw().as_slice())),
        other => (ColorType::Rgba, Cow::Owned(other.to_rgba8().into_raw())),
    };

    let (width, height) = image.dimensions();
    let file = File::create(path)?;
    let mut encoder = Encoder::new(BufWriter::new(file), width, height);
    encoder.set_color(color_type);
    encoder.set_depth(BitDepth::Eight);

    for entry in entries {
        if is_latin1(&entry.text) {
            encoder.add_text_chunk(entry.keyword.clone(), entry.text.clone())?;
        } else {
            encoder.add_itxt_chunk(entry.keyword.clone(), entry.text.clone())?;
        }
    }

    let mut writer = encoder.write_header()?;
    writer.write_image_data(&pixels)?;
    writer.finish()?;

    Ok(())
}

fn is_latin1(text: &str) -> bool {
    text.chars().all(|c| (c as u32) <= 0xFF)
}
