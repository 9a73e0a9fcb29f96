use serde::{Deserialize, Serialize};
use std::fmt;

/// MIME-фильтр для выбора фото
pub const IMAGE_MIME_FILTER: &str = "image/*";

// ============================================================================
// Body views
// ============================================================================

/// Ракурс фото
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyView {
    Front,
    Side,
    Back,
}

impl BodyView {
    /// Slot name as used in layout configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            BodyView::Front => "front",
            BodyView::Side => "side",
            BodyView::Back => "back",
        }
    }

    pub fn all() -> [BodyView; 3] {
        [BodyView::Front, BodyView::Side, BodyView::Back]
    }
}

/// Upper-cases the first character: "front" -> "Front".
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ============================================================================
// Image reference
// ============================================================================

/// Непрозрачная ссылка на выбранный пользователем контент.
/// Это не изображение, а то, что вернул выбор файла платформы.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageReference(String);

impl ImageReference {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Image selection
// ============================================================================

/// Итог применения результата выбора файла
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    /// Picker was dismissed; nothing changed.
    Unchanged,
    /// A new reference was stored. `replaced` holds the overwritten one, if any.
    Selected { replaced: Option<ImageReference> },
}

impl PickOutcome {
    pub fn is_selected(&self) -> bool {
        matches!(self, PickOutcome::Selected { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SlotState {
    #[default]
    Empty,
    Selected(ImageReference),
}

/// Выбор фото для одного ракурса.
///
/// Переходы: `Empty -> Selected(r) -> Selected(r')`. Отмена выбора ничего не меняет,
/// возврата в `Empty` нет.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSelection {
    slot_name: String,
    state: SlotState,
}

impl ImageSelection {
    pub fn new(slot_name: impl Into<String>) -> Self {
        Self {
            slot_name: slot_name.into(),
            state: SlotState::Empty,
        }
    }

    pub fn for_view(view: BodyView) -> Self {
        Self::new(view.as_str())
    }

    pub fn slot_name(&self) -> &str {
        &self.slot_name
    }

    /// Label for the trigger button
    pub fn button_label(&self) -> String {
        capitalize_first(&self.slot_name)
    }

    pub fn state(&self) -> &SlotState {
        &self.state
    }

    pub fn reference(&self) -> Option<&ImageReference> {
        match &self.state {
            SlotState::Empty => None,
            SlotState::Selected(reference) => Some(reference),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.state, SlotState::Empty)
    }

    /// Применить результат выбора файла.
    ///
    /// `None` (пользователь закрыл диалог) оставляет состояние как есть.
    pub fn on_pick_result(&mut self, result: Option<ImageReference>) -> PickOutcome {
        let Some(reference) = result else {
            return PickOutcome::Unchanged;
        };
        let replaced = match std::mem::replace(&mut self.state, SlotState::Selected(reference)) {
            SlotState::Empty => None,
            SlotState::Selected(previous) => Some(previous),
        };
        PickOutcome::Selected { replaced }
    }
}
