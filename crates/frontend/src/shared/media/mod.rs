//! Browser implementations of the image slot capabilities.

pub mod file_picker;
pub mod image_decoder;

pub use file_picker::{revoke_reference, BrowserFilePicker};
pub use image_decoder::BrowserImageDecoder;
