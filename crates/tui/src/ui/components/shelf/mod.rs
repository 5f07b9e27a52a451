//! The books table: one row per book with availability, due-date countdown,
//! and the rating affordance.

mod shelf_component;
mod state;

pub use shelf_component::ShelfComponent;
pub use state::{DueUrgency, ShelfState};
