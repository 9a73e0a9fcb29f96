//! Body snapshot form: photo slots in a row, measurement fields in a column.
//! Pure composition, no aggregation or submission.

mod view;
mod view_model;

pub use view::BodySnapshotForm;
pub use view_model::BodySnapshotFormViewModel;
