use crate::domain::a001_measurement::{MeasurementKind, MeasurementValue};
use crate::domain::a002_body_photo::{BodyView, ImageSelection};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// ============================================================================
// Layout
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoSlotLayout {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasurementFieldLayout {
    pub label: String,
    pub unit: String,
}

/// Состав экрана снимка: какие ракурсы фото и какие замеры показывать
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodySnapshotLayout {
    #[serde(default)]
    pub photos: Vec<PhotoSlotLayout>,
    #[serde(default)]
    pub measurements: Vec<MeasurementFieldLayout>,
}

impl Default for BodySnapshotLayout {
    /// Front / side / back and weight / waist / thighs / arms.
    fn default() -> Self {
        Self {
            photos: BodyView::all()
                .into_iter()
                .map(|view| PhotoSlotLayout {
                    name: view.as_str().to_string(),
                })
                .collect(),
            measurements: MeasurementKind::all()
                .into_iter()
                .map(|kind| MeasurementFieldLayout {
                    label: kind.label().to_string(),
                    unit: kind.unit().to_string(),
                })
                .collect(),
        }
    }
}

impl BodySnapshotLayout {
    /// Проверка корректности макета
    pub fn validate(&self) -> Result<(), String> {
        if self.photos.is_empty() && self.measurements.is_empty() {
            return Err("Layout has neither photo slots nor measurements".to_string());
        }

        let mut seen = HashSet::new();
        for photo in &self.photos {
            if photo.name.trim().is_empty() {
                return Err("Photo slot name must not be empty".to_string());
            }
            if !seen.insert(photo.name.as_str()) {
                return Err(format!("Duplicate photo slot: {}", photo.name));
            }
        }

        let mut labels = HashSet::new();
        for field in &self.measurements {
            if field.label.trim().is_empty() {
                return Err("Measurement label must not be empty".to_string());
            }
            if !labels.insert(field.label.as_str()) {
                return Err(format!("Duplicate measurement: {}", field.label));
            }
            if field.unit.trim().is_empty() {
                return Err(format!("Measurement '{}' has no unit", field.label));
            }
        }

        Ok(())
    }
}

// ============================================================================
// Snapshot state
// ============================================================================

/// Начальное состояние экрана: по одному владеемому объекту на каждый слот и поле.
/// Объекты независимы; форма ничего не агрегирует и не отправляет.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodySnapshot {
    pub photos: Vec<ImageSelection>,
    pub measurements: Vec<MeasurementValue>,
}

impl BodySnapshot {
    pub fn from_layout(layout: &BodySnapshotLayout) -> Self {
        Self {
            photos: layout
                .photos
                .iter()
                .map(|p| ImageSelection::new(p.name.clone()))
                .collect(),
            measurements: layout
                .measurements
                .iter()
                .map(|m| MeasurementValue::new(m.label.clone(), m.unit.clone()))
                .collect(),
        }
    }

    pub fn photo(&self, slot_name: &str) -> Option<&ImageSelection> {
        self.photos.iter().find(|p| p.slot_name() == slot_name)
    }

    pub fn photo_mut(&mut self, slot_name: &str) -> Option<&mut ImageSelection> {
        self.photos.iter_mut().find(|p| p.slot_name() == slot_name)
    }

    pub fn measurement(&self, label: &str) -> Option<&MeasurementValue> {
        self.measurements.iter().find(|m| m.label() == label)
    }

    pub fn measurement_mut(&mut self, label: &str) -> Option<&mut MeasurementValue> {
        self.measurements.iter_mut().find(|m| m.label() == label)
    }
}

impl Default for BodySnapshot {
    fn default() -> Self {
        Self::from_layout(&BodySnapshotLayout::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_body_photo::ImageReference;

    #[test]
    fn test_default_snapshot_composition() {
        let snapshot = BodySnapshot::default();

        let slots: Vec<_> = snapshot.photos.iter().map(|p| p.slot_name()).collect();
        assert_eq!(slots, vec!["front", "side", "back"]);

        let fields: Vec<_> = snapshot
            .measurements
            .iter()
            .map(|m| (m.label(), m.unit()))
            .collect();
        assert_eq!(
            fields,
            vec![("Weight", "kg"), ("Waist", "cm"), ("Thighs", "cm"), ("Arms", "cm")]
        );

        assert!(snapshot.photos.iter().all(ImageSelection::is_empty));
        assert!(snapshot.measurements.iter().all(MeasurementValue::is_error));
    }

    #[test]
    fn test_pick_on_front_does_not_touch_side() {
        let mut snapshot = BodySnapshot::default();

        if let Some(front) = snapshot.photo_mut("front") {
            front.on_pick_result(Some(ImageReference::new("blob:front")));
        }

        assert!(!snapshot.photo("front").map_or(true, ImageSelection::is_empty));
        assert!(snapshot.photo("side").map_or(false, ImageSelection::is_empty));
        assert!(snapshot.photo("back").map_or(false, ImageSelection::is_empty));
    }

    #[test]
    fn test_fields_are_independent() {
        let mut snapshot = BodySnapshot::default();

        if let Some(weight) = snapshot.measurement_mut("Weight") {
            weight.try_input("72.5");
        }

        assert_eq!(snapshot.measurement("Weight").map(|m| m.raw_text()), Some("72.5"));
        assert_eq!(snapshot.measurement("Waist").map(|m| m.raw_text()), Some(""));
    }

    #[test]
    fn test_default_layout_is_valid() {
        assert!(BodySnapshotLayout::default().validate().is_ok());
    }

    #[test]
    fn test_duplicate_slot_is_rejected() {
        let mut layout = BodySnapshotLayout::default();
        layout.photos.push(PhotoSlotLayout {
            name: "front".to_string(),
        });
        let err = layout.validate().unwrap_err();
        assert!(err.contains("front"));
    }

    #[test]
    fn test_duplicate_measurement_label_is_rejected() {
        let mut layout = BodySnapshotLayout::default();
        layout.measurements.push(MeasurementFieldLayout {
            label: "Weight".to_string(),
            unit: "lb".to_string(),
        });
        let err = layout.validate().unwrap_err();
        assert!(err.contains("Weight"));
    }

    #[test]
    fn test_missing_unit_is_rejected() {
        let mut layout = BodySnapshotLayout::default();
        layout.measurements[0].unit = " ".to_string();
        assert!(layout.validate().is_err());
    }

    #[test]
    fn test_empty_layout_is_rejected() {
        let layout = BodySnapshotLayout {
            photos: Vec::new(),
            measurements: Vec::new(),
        };
        assert!(layout.validate().is_err());
    }
}
