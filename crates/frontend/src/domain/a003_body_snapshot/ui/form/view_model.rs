use contracts::domain::a001_measurement::MeasurementValue;
use contracts::domain::a002_body_photo::ImageSelection;
use contracts::domain::a003_body_snapshot::{BodySnapshot, BodySnapshotLayout};

/// Initial state for every slot and field on the form
pub struct BodySnapshotFormViewModel {
    pub photos: Vec<ImageSelection>,
    pub measurements: Vec<MeasurementValue>,
}

impl BodySnapshotFormViewModel {
    pub fn new(layout: &BodySnapshotLayout) -> Self {
        let BodySnapshot {
            photos,
            measurements,
        } = BodySnapshot::from_layout(layout);
        Self {
            photos,
            measurements,
        }
    }
}

// Наблюдатели событий компонентов. Компоненты сами не логируют.

pub fn log_measurement_change(value: &MeasurementValue) {
    match value.as_number() {
        Some(number) => log::debug!("{}: {} {}", value.label(), number, value.unit()),
        None => log::debug!("{}: {:?}", value.label(), value.raw_text()),
    }
}

pub fn log_photo_selected(selection: &ImageSelection) {
    if let Some(reference) = selection.reference() {
        log::debug!("Photo '{}' selected: {}", selection.slot_name(), reference);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a003_body_snapshot::{MeasurementFieldLayout, PhotoSlotLayout};

    #[test]
    fn test_default_layout_builds_three_slots_and_four_fields() {
        let vm = BodySnapshotFormViewModel::new(&BodySnapshotLayout::default());
        assert_eq!(vm.photos.len(), 3);
        assert_eq!(vm.measurements.len(), 4);
    }

    #[test]
    fn test_custom_layout_is_followed() {
        let layout = BodySnapshotLayout {
            photos: vec![PhotoSlotLayout {
                name: "front".to_string(),
            }],
            measurements: vec![MeasurementFieldLayout {
                label: "Hips".to_string(),
                unit: "cm".to_string(),
            }],
        };
        let vm = BodySnapshotFormViewModel::new(&layout);
        assert_eq!(vm.photos[0].button_label(), "Front");
        assert_eq!(vm.measurements[0].label(), "Hips");
        assert_eq!(vm.measurements[0].raw_text(), "");
    }
}
