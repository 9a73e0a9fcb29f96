use super::view_model::ImageSlotViewModel;
use crate::shared::media::{BrowserFilePicker, BrowserImageDecoder};
use contracts::domain::a002_body_photo::ImageSelection;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ImageSlot(
    /// Initial state of the slot
    selection: ImageSelection,
    /// Called after every successful pick
    #[prop(optional)]
    on_selected: Option<Callback<ImageSelection>>,
) -> impl IntoView {
    let vm = ImageSlotViewModel::new(selection);
    let label = vm.button_label();

    view! {
        <div class="image-slot">
            <Button
                appearance=ButtonAppearance::Primary
                on_click=move |_| vm.pick_command(BrowserFilePicker, on_selected)
                disabled=Signal::derive(move || vm.picking.get())
            >
                {label}
            </Button>

            {move || vm.displayed_image(&BrowserImageDecoder).map(|image| view! {
                <div class="image-slot__frame">
                    <img
                        class="image-slot__image"
                        src=image.src
                        alt="Selected Image"
                        on:error=move |_| vm.mark_display_failed()
                    />
                </div>
            })}
        </div>
    }
}
