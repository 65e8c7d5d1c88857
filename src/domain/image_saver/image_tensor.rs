use image::{DynamicImage, GrayImage, RgbImage, RgbaImage};

use crate::error::{Error, Result};

/// One image of a batch as produced by the sampler: row-major `height x width x channels`
/// samples, nominally in `0.0..=1.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageTensor {
    pub height: u32,
    pub width: u32,
    pub channels: u32,
    pub data: Vec<f32>,
}

impl ImageTensor {
    /// Scales to 8 bit (`255 * v`, clamped, truncated).
    pub fn to_image(&self) -> Result<DynamicImage> {
        let expected = self.height as usize * self.width as usize * self.channels as usize;
        if self.data.len() != expected {
            return Err(Error::ImageConstructionError(format!(
                "expected {} samples for {}x{}x{}, got {}",
                expected,
                self.height,
                self.width,
                self.channels,
                self.data.len()
            )));
        }

        let pixels: Vec<u8> = self.data.iter().map(|&v| to_u8(v)).collect();
        let (width, height) = (self.width, self.height);

        let image = match self.channels {
            1 => GrayImage::from_raw(width, height, pixels).map(DynamicImage::ImageLuma8),
            3 => RgbImage::from_raw(width, height, pixels).map(DynamicImage::ImageRgb8),
            4 => RgbaImage::from_raw(width, height, pixels).map(DynamicImage::ImageRgba8),
            n => {
                return Err(Error::ImageConstructionError(format!("unsupported channel count {}", n)));
            }
        };

        image.ok_or_else(|| Error::ImageConstructionError("pixel buffer does not match dimensions".to_string()))
    }
}

fn to_u8(value: f32) -> u8 {
    (255.0 * value).clamp(0.0, 255.0) as u8
}
