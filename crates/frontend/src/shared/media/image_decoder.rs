use contracts::domain::a002_body_photo::{DecodeError, DecodedImage, ImageDecoder, ImageReference};

/// Декодирование средствами браузера.
///
/// Сами пиксели разбирает `<img>`; здесь отсекаются ссылки, которые браузер
/// заведомо не покажет. Ошибка загрузки уже в `<img>` обрабатывается во view
/// через событие `error`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserImageDecoder;

impl ImageDecoder for BrowserImageDecoder {
    fn decode(&self, reference: &ImageReference) -> Result<DecodedImage, DecodeError> {
        let src = reference.as_str().trim();
        if src.is_empty() {
            return Err(DecodeError::Empty);
        }
        if src.starts_with("blob:") || src.starts_with("data:image/") {
            return Ok(DecodedImage::new(src));
        }
        Err(DecodeError::UnsupportedReference(src.to_string()))
    }
}
