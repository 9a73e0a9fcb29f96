//! Platform capabilities used by an image slot.
//!
//! Реализации живут в коде интеграции с платформой (в браузере это
//! `frontend::shared::media`); здесь только контракты и правило
//! подстановки заглушки при ошибке декодирования.

use super::aggregate::ImageReference;
use async_trait::async_trait;
use thiserror::Error;

/// 1×1 прозрачный GIF
const PLACEHOLDER_SRC: &str =
    "data:image/gif;base64,R0lGODlhAQABAIAAAAAAAP///yH5BAEAAAAALAAAAAABAAEAAAIBRAA7";

/// Ошибки декодирования изображения
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Reference is empty")]
    Empty,

    #[error("Unsupported reference: {0}")]
    UnsupportedReference(String),

    #[error("Decode failed: {0}")]
    Failed(String),
}

/// Renderable image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    /// Value for `<img src>`
    pub src: String,
    /// Pixel size, when the decoder knows it up front
    pub size: Option<(u32, u32)>,
}

impl DecodedImage {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            size: None,
        }
    }

    /// Minimal image shown instead of anything that could not be decoded.
    pub fn placeholder() -> Self {
        Self {
            src: PLACEHOLDER_SRC.to_string(),
            size: Some((1, 1)),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.src == PLACEHOLDER_SRC
    }

    fn is_blank(&self) -> bool {
        self.src.trim().is_empty() || matches!(self.size, Some((0, _)) | Some((_, 0)))
    }
}

/// Однократный выбор внешнего контента по MIME-фильтру.
///
/// `None` означает, что пользователь закрыл диалог без выбора.
#[async_trait(?Send)]
pub trait ContentPicker {
    async fn request(&self, mime_filter: &str) -> Option<ImageReference>;
}

pub trait ImageDecoder {
    fn decode(&self, reference: &ImageReference) -> Result<DecodedImage, DecodeError>;
}

/// Decodes `reference` for display. Failures and empty results
/// become [`DecodedImage::placeholder`].
pub fn resolve_for_display<D>(decoder: &D, reference: &ImageReference) -> DecodedImage
where
    D: ImageDecoder + ?Sized,
{
    match decoder.decode(reference) {
        Ok(image) if !image.is_blank() => image,
        _ => DecodedImage::placeholder(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_body_photo::aggregate::{
        ImageSelection, PickOutcome, IMAGE_MIME_FILTER,
    };
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Returns queued answers one by one and records the filters it was asked for.
    struct ScriptedPicker {
        answers: RefCell<VecDeque<Option<ImageReference>>>,
        filters: RefCell<Vec<String>>,
    }

    impl ScriptedPicker {
        fn new(answers: Vec<Option<&str>>) -> Self {
            Self {
                answers: RefCell::new(
                    answers
                        .into_iter()
                        .map(|a| a.map(ImageReference::new))
                        .collect(),
                ),
                filters: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl ContentPicker for ScriptedPicker {
        async fn request(&self, mime_filter: &str) -> Option<ImageReference> {
            self.filters.borrow_mut().push(mime_filter.to_string());
            self.answers.borrow_mut().pop_front().flatten()
        }
    }

    struct FailingDecoder;

    impl ImageDecoder for FailingDecoder {
        fn decode(&self, reference: &ImageReference) -> Result<DecodedImage, DecodeError> {
            Err(DecodeError::Failed(reference.to_string()))
        }
    }

    struct PassThroughDecoder;

    impl ImageDecoder for PassThroughDecoder {
        fn decode(&self, reference: &ImageReference) -> Result<DecodedImage, DecodeError> {
            Ok(DecodedImage::new(reference.as_str()))
        }
    }

    #[test]
    fn test_decode_failure_yields_placeholder() {
        let image = resolve_for_display(&FailingDecoder, &ImageReference::new("blob:broken"));
        assert!(image.is_placeholder());
        assert_eq!(image.size, Some((1, 1)));
    }

    #[test]
    fn test_empty_decode_result_yields_placeholder() {
        let image = resolve_for_display(&PassThroughDecoder, &ImageReference::new("  "));
        assert!(image.is_placeholder());
    }

    #[test]
    fn test_zero_sized_decode_result_yields_placeholder() {
        struct ZeroSized;
        impl ImageDecoder for ZeroSized {
            fn decode(&self, _: &ImageReference) -> Result<DecodedImage, DecodeError> {
                Ok(DecodedImage {
                    src: "blob:zero".to_string(),
                    size: Some((0, 0)),
                })
            }
        }
        let image = resolve_for_display(&ZeroSized, &ImageReference::new("blob:zero"));
        assert!(image.is_placeholder());
    }

    #[test]
    fn test_successful_decode_is_passed_through() {
        let image = resolve_for_display(&PassThroughDecoder, &ImageReference::new("blob:ok"));
        assert_eq!(image, DecodedImage::new("blob:ok"));
        assert!(!image.is_placeholder());
    }

    #[test]
    fn test_resolve_through_trait_object() {
        let decoder: &dyn ImageDecoder = &FailingDecoder;
        assert!(resolve_for_display(decoder, &ImageReference::new("x")).is_placeholder());
    }

    #[tokio::test]
    async fn test_picker_flow_pick_cancel_pick() {
        let picker = ScriptedPicker::new(vec![Some("blob:r1"), None, Some("blob:r2")]);
        let mut slot = ImageSelection::new("front");

        let outcome = slot.on_pick_result(picker.request(IMAGE_MIME_FILTER).await);
        assert!(outcome.is_selected());
        assert_eq!(slot.reference(), Some(&ImageReference::new("blob:r1")));

        let outcome = slot.on_pick_result(picker.request(IMAGE_MIME_FILTER).await);
        assert_eq!(outcome, PickOutcome::Unchanged);
        assert_eq!(slot.reference(), Some(&ImageReference::new("blob:r1")));

        slot.on_pick_result(picker.request(IMAGE_MIME_FILTER).await);
        assert_eq!(slot.reference(), Some(&ImageReference::new("blob:r2")));

        assert_eq!(*picker.filters.borrow(), vec!["image/*"; 3]);
    }

    #[tokio::test]
    async fn test_pick_on_one_slot_leaves_other_untouched() {
        let picker = ScriptedPicker::new(vec![Some("blob:front")]);
        let mut front = ImageSelection::new("front");
        let side = ImageSelection::new("side");

        front.on_pick_result(picker.request(IMAGE_MIME_FILTER).await);

        assert!(!front.is_empty());
        assert!(side.is_empty());
    }
}
