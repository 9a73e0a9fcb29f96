use crate::domain::a003_body_snapshot::ui::form::BodySnapshotForm;
use crate::shared::config::load_page_layout;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    let layout = load_page_layout();

    view! {
        <ConfigProvider>
            <main class="app">
                <BodySnapshotForm layout=layout />
            </main>
        </ConfigProvider>
    }
}
