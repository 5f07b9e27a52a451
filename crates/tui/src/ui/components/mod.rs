//! UI components: site menu, books table, rating popups.

pub mod component;
pub mod menu;
pub mod rating;
pub mod shelf;

pub(crate) use component::{Component, find_target_index_by_mouse_position};
pub use menu::{MenuComponent, MenuState};
pub use rating::{RatingPopupComponent, RatingRegistry, RatingWidgetState, STAR_COUNT};
pub use shelf::{ShelfComponent, ShelfState};
