pub mod image_saver;
pub mod image_tensor;
pub mod output_path;
pub mod png_writer;
