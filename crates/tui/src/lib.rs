//! # Maktaba TUI Library
//!
//! Terminal user interface for the maktaba lending-library client. It
//! renders the books page from a server-exported shelf document: a filter
//! menu, due-date countdowns refreshed each minute, and one star-rating
//! popup per unrated book.
//!
//! ## Architecture
//!
//! The UI follows a component-based architecture: the menu, shelf table,
//! and rating popup are separate components that handle their own events
//! and render themselves, coordinated by a main view. Cross-component
//! invariants (at most one rating popup open, outside-click and Escape
//! dismissal) are owned by the rating registry and the main view rather
//! than by any single component.

mod app;
mod cmd;
mod ui;

use anyhow::Result;
use maktaba_types::Shelf;

/// Runs the main TUI application loop.
///
/// Sets up the terminal, builds the widget registry from the shelf, and
/// drives the event loop until the user quits.
///
/// # Errors
///
/// Returns an error for terminal setup failures or event-loop runtime
/// issues.
pub async fn run(shelf: Shelf) -> Result<()> {
    ui::runtime::run_app(shelf).await
}
