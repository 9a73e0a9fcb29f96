use contracts::domain::a003_body_snapshot::BodySnapshotLayout;
use contracts::shared::config::load_layout;

/// Element with an optional layout override in `index.html`
const LAYOUT_ELEMENT_ID: &str = "snapshot-layout";

fn read_layout_override() -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(LAYOUT_ELEMENT_ID)?
        .text_content()
}

/// Макет экрана: переопределение из `<script id="snapshot-layout" type="application/toml">`,
/// иначе встроенный по умолчанию. Ошибка в переопределении не ломает экран.
pub fn load_page_layout() -> BodySnapshotLayout {
    let override_toml = read_layout_override();
    if override_toml.is_some() {
        log::info!("Loading snapshot layout from #{}", LAYOUT_ELEMENT_ID);
    }

    match load_layout(override_toml.as_deref()) {
        Ok(layout) => layout,
        Err(e) => {
            log::warn!("Invalid snapshot layout, using default: {}", e);
            BodySnapshotLayout::default()
        }
    }
}
