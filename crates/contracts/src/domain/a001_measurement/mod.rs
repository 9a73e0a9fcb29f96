pub mod aggregate;

pub use aggregate::{is_valid_entry, InputOutcome, MeasurementKind, MeasurementValue, Trailing};
