use contracts::domain::a001_measurement::{InputOutcome, MeasurementValue, Trailing};
use leptos::prelude::*;

/// ViewModel for a single measurement field
#[derive(Clone, Copy)]
pub struct MeasurementFieldViewModel {
    pub value: RwSignal<MeasurementValue>,
}

impl MeasurementFieldViewModel {
    pub fn new(value: MeasurementValue) -> Self {
        Self {
            value: RwSignal::new(value),
        }
    }

    pub fn label(&self) -> String {
        self.value.with_untracked(|v| v.label().to_string())
    }

    pub fn unit(&self) -> String {
        self.value.with(|v| v.unit().to_string())
    }

    pub fn text(&self) -> String {
        self.value.with(|v| v.raw_text().to_string())
    }

    pub fn is_error(&self) -> bool {
        self.value.with(MeasurementValue::is_error)
    }

    pub fn show_clear(&self) -> bool {
        self.value
            .with(|v| matches!(v.trailing(), Trailing::ClearButton))
    }

    /// Отклонённый ввод не трогает сигнал, подписчики не уведомляются
    pub fn input_command(&self, proposed: String) -> InputOutcome {
        let mut outcome = InputOutcome::Rejected;
        self.value.maybe_update(|v| {
            outcome = v.try_input(&proposed);
            outcome.is_accepted()
        });
        outcome
    }

    pub fn clear_command(&self) {
        self.value.update(MeasurementValue::clear);
    }
}
