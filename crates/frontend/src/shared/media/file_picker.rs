//! File chooser backed by a detached `<input type="file">`.

use async_trait::async_trait;
use contracts::domain::a002_body_photo::{ContentPicker, ImageReference};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlInputElement, Url};

/// Открывает системный диалог выбора файла.
///
/// Выбранный файл превращается в object URL (`blob:...`), который и служит
/// ссылкой на контент. Future завершается по событию `change` или `cancel`,
/// то есть не более одного раза на запрос.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserFilePicker;

fn create_file_input(mime_filter: &str) -> Result<HtmlInputElement, String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let input = document
        .create_element("input")
        .map_err(|e| format!("Failed to create input: {:?}", e))?
        .dyn_into::<HtmlInputElement>()
        .map_err(|e| format!("Failed to cast to input: {:?}", e))?;

    input.set_type("file");
    input.set_accept(mime_filter);
    input.set_multiple(false);
    Ok(input)
}

#[async_trait(?Send)]
impl ContentPicker for BrowserFilePicker {
    async fn request(&self, mime_filter: &str) -> Option<ImageReference> {
        let input = match create_file_input(mime_filter) {
            Ok(input) => input,
            Err(e) => {
                log::warn!("File picker unavailable: {}", e);
                return None;
            }
        };

        let settled = js_sys::Promise::new(&mut |resolve, _reject| {
            input.set_onchange(Some(&resolve));
            input.set_oncancel(Some(&resolve));
        });
        input.click();
        let _ = JsFuture::from(settled).await;
        input.set_onchange(None);
        input.set_oncancel(None);

        let file = input.files().and_then(|files| files.get(0))?;
        match Url::create_object_url_with_blob(&file) {
            Ok(url) => Some(ImageReference::new(url)),
            Err(e) => {
                log::warn!("Failed to create object URL for {}: {:?}", file.name(), e);
                None
            }
        }
    }
}

/// Release an object URL created by [`BrowserFilePicker`]. Other references are left alone.
pub fn revoke_reference(reference: &ImageReference) {
    if reference.as_str().starts_with("blob:") {
        let _ = Url::revoke_object_url(reference.as_str());
    }
}
