//! Image slot: trigger button plus the picked photo for one body view.

mod view;
mod view_model;

pub use view::ImageSlot;
pub use view_model::ImageSlotViewModel;
