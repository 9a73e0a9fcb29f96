pub mod aggregate;
pub mod ports;

pub use aggregate::{
    capitalize_first, BodyView, ImageReference, ImageSelection, PickOutcome, SlotState,
    IMAGE_MIME_FILTER,
};
pub use ports::{resolve_for_display, ContentPicker, DecodeError, DecodedImage, ImageDecoder};
