//! UI rendering module for the TUI application.
//!
//! Provides the main layout, components, theming, and the runtime event
//! loop.

pub mod components;
pub mod main_component;
pub mod runtime;
pub mod theme;
pub mod utils;
