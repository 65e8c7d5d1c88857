pub mod generation;
pub mod image_saver;
pub mod utils;
pub mod workflow;
