//! Measurement field: labeled numeric input with unit suffix.
//!
//! - view_model.rs: state (`MeasurementValue`) and commands
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::MeasurementField;
pub use view_model::MeasurementFieldViewModel;
