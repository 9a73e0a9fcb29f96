pub mod aggregate;

pub use aggregate::{BodySnapshot, BodySnapshotLayout, MeasurementFieldLayout, PhotoSlotLayout};
