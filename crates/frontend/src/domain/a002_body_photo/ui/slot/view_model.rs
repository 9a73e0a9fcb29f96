use crate::shared::media::revoke_reference;
use contracts::domain::a002_body_photo::{
    resolve_for_display, ContentPicker, DecodedImage, ImageDecoder, ImageReference,
    ImageSelection, PickOutcome, IMAGE_MIME_FILTER,
};
use leptos::prelude::*;

/// ViewModel for one photo slot
#[derive(Clone, Copy)]
pub struct ImageSlotViewModel {
    pub selection: RwSignal<ImageSelection>,
    /// `<img>` reported a load error for the current reference
    pub display_failed: RwSignal<bool>,
    /// A picker request is pending for this slot
    pub picking: RwSignal<bool>,
}

impl ImageSlotViewModel {
    pub fn new(selection: ImageSelection) -> Self {
        Self {
            selection: RwSignal::new(selection),
            display_failed: RwSignal::new(false),
            picking: RwSignal::new(false),
        }
    }

    pub fn button_label(&self) -> String {
        self.selection.with_untracked(ImageSelection::button_label)
    }

    /// Что показать под кнопкой: ничего, фото или заглушку
    pub fn displayed_image<D: ImageDecoder>(&self, decoder: &D) -> Option<DecodedImage> {
        let failed = self.display_failed.get();
        self.selection.with(|s| {
            s.reference().map(|reference| {
                if failed {
                    DecodedImage::placeholder()
                } else {
                    resolve_for_display(decoder, reference)
                }
            })
        })
    }

    /// Apply a picker result. Returns `true` when the slot changed.
    pub fn apply_pick(&self, result: Option<ImageReference>) -> bool {
        let mut outcome = PickOutcome::Unchanged;
        self.selection.maybe_update(|s| {
            outcome = s.on_pick_result(result);
            outcome.is_selected()
        });

        match outcome {
            PickOutcome::Unchanged => false,
            PickOutcome::Selected { replaced } => {
                self.display_failed.set(false);
                if let Some(previous) = replaced {
                    revoke_reference(&previous);
                }
                true
            }
        }
    }

    /// Занять слот под новый запрос. `false`, если запрос уже идёт.
    pub fn begin_pick(&self) -> bool {
        if self.picking.get_untracked() {
            return false;
        }
        self.picking.set(true);
        true
    }

    /// Завершить запрос и применить его результат
    pub fn finish_pick(&self, result: Option<ImageReference>) -> bool {
        self.picking.set(false);
        self.apply_pick(result)
    }

    /// Open the picker; the result arrives asynchronously.
    /// At most one request per slot is pending at a time.
    pub fn pick_command<P>(&self, picker: P, on_selected: Option<Callback<ImageSelection>>)
    where
        P: ContentPicker + 'static,
    {
        if !self.begin_pick() {
            return;
        }
        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            let result = picker.request(IMAGE_MIME_FILTER).await;
            if vm.finish_pick(result) {
                if let Some(handler) = on_selected {
                    handler.run(vm.selection.get_untracked());
                }
            }
        });
    }

    pub fn mark_display_failed(&self) {
        self.display_failed.set(true);
    }
}
