//! Collapsible site menu: shelf filters behind a burger-style trigger with
//! the same outside-click and Escape dismissal pattern as the rating popups.

mod menu_component;
mod state;

pub use menu_component::MenuComponent;
pub use state::MenuState;
