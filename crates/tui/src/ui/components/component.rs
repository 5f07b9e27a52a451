//! Component system for the maktaba TUI.
//!
//! Components are self-contained UI elements that handle their own events
//! and rendering while integrating with the main view through a consistent
//! interface. They report side effects back to the runtime as `Effect`s
//! instead of performing them inline.

use crossterm::event::{KeyEvent, MouseEvent};
use maktaba_types::{Effect, Msg};
use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::text::Span;

use crate::app::App;

/// A UI element with its own event handling and rendering.
///
/// Event handlers run to completion before the next event is dispatched;
/// state lives on [`App`], components stay mostly stateless and record any
/// per-frame geometry (hit areas) into the state they manage.
pub(crate) trait Component {
    /// Handle an application-level message (ticks, resizes).
    fn handle_message(&mut self, _app: &mut App, _msg: Msg) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle a key event routed to this component.
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle a mouse event. Components hit-test against the areas they
    /// recorded during the previous render.
    fn handle_mouse_events(&mut self, _app: &mut App, _mouse: MouseEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Render the component into the given area. Side-effect free except
    /// for frame drawing and hit-area bookkeeping.
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App);

    /// Key hints shown in the hint bar while this component is active.
    fn get_hint_spans(&self, _app: &App) -> Vec<Span<'_>> {
        Vec::new()
    }
}

/// Index of the area under the mouse, provided the position is inside the
/// container. Used by components that track per-item areas.
pub(crate) fn find_target_index_by_mouse_position(container: &Rect, areas: &[Rect], x: u16, y: u16) -> Option<usize> {
    let position = Position::new(x, y);
    if !container.contains(position) {
        return None;
    }
    areas.iter().position(|area| area.contains(position))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_test_requires_container_membership() {
        let container = Rect::new(0, 0, 10, 4);
        let areas = vec![Rect::new(0, 0, 10, 1), Rect::new(0, 1, 10, 1)];
        assert_eq!(find_target_index_by_mouse_position(&container, &areas, 3, 1), Some(1));
        assert_eq!(find_target_index_by_mouse_position(&container, &areas, 3, 3), None);
        assert_eq!(find_target_index_by_mouse_position(&container, &areas, 30, 1), None);
    }
}
