//! Star-rating widgets: per-book popup state machines, the registry that
//! coordinates popup exclusivity across them, and the popup component.

mod rating_component;
mod registry;
mod state;

pub use rating_component::RatingPopupComponent;
pub use registry::{RatingRegistry, STAR_COUNT};
pub use state::{RatingAreas, RatingWidgetState};
