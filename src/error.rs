use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("File not found or could not be read: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse workflow JSON: {0}")]
    DeserializationError(#[from] serde_json::Error),

    #[error("Failed to encode PNG: {0}")]
    PngEncodingError(#[from] png::EncodingError),

    #[error("Failed to decode input image: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Failed to build image from tensor: {0}")]
    ImageConstructionError(String),

    #[error("Image batch is empty, nothing to save")]
    EmptyBatch,

    #[error("No free file counter left for prefix '{0}'")]
    CounterOverflow(String),
}

pub type Result<T> = std::result::Result<T, Error>;
