use maktaba_types::ShelfFilter;
use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::{Position, Rect};

/// State for the collapsible site menu.
///
/// Structurally the same open/closed pattern as a rating widget: a trigger
/// with a mirrored expanded marker, a panel that is only hit-testable while
/// open, and dismissal on outside click or Escape.
#[derive(Debug, Clone)]
pub struct MenuState {
    open: bool,
    /// Expanded marker mirrored onto the trigger; always equals `open`.
    expanded: bool,
    /// Filter entries in display order.
    pub items: Vec<ShelfFilter>,
    /// Index of the highlighted entry while the panel is open.
    pub selected_index: usize,
    pub container_focus: FocusFlag,
    /// Last rendered trigger area, for hit testing. Persists across frames.
    pub trigger_area: Rect,
    /// Last rendered panel area; reset on close.
    pub panel_area: Rect,
    /// Per-entry areas within the panel; reset on close.
    pub item_areas: Vec<Rect>,
}

impl Default for MenuState {
    fn default() -> Self {
        Self {
            open: false,
            expanded: false,
            items: vec![ShelfFilter::All, ShelfFilter::Available, ShelfFilter::Borrowed],
            selected_index: 0,
            container_focus: FocusFlag::named("menu"),
            trigger_area: Rect::default(),
            panel_area: Rect::default(),
            item_areas: Vec::new(),
        }
    }
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn open(&mut self) {
        self.open = true;
        self.expanded = true;
    }

    /// Idempotent; clears the expanded marker and the panel hit areas.
    pub fn close(&mut self) {
        self.open = false;
        self.expanded = false;
        self.panel_area = Rect::default();
        self.item_areas.clear();
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    pub fn cycle(&mut self, forward: bool) {
        let len = self.items.len();
        if len == 0 {
            return;
        }
        self.selected_index = if forward {
            (self.selected_index + 1) % len
        } else {
            (self.selected_index + len - 1) % len
        };
    }

    /// Whether the position falls inside the menu subtree (trigger or open
    /// panel); clicks inside it are never treated as outside clicks.
    pub fn contains(&self, position: Position) -> bool {
        self.trigger_area.contains(position) || self.panel_area.contains(position)
    }
}

impl HasFocus for MenuState {
    fn build(&self, builder: &mut FocusBuilder) {
        builder.leaf_widget(self);
    }

    fn focus(&self) -> FocusFlag {
        self.container_focus.clone()
    }

    fn area(&self) -> Rect {
        self.trigger_area
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_mirrors_expanded_marker() {
        let mut menu = MenuState::default();
        assert!(!menu.is_open());
        menu.toggle();
        assert!(menu.is_open());
        assert!(menu.is_expanded());
        menu.toggle();
        assert!(!menu.is_open());
        assert!(!menu.is_expanded());
    }

    #[test]
    fn close_is_idempotent_and_clears_panel_areas() {
        let mut menu = MenuState::default();
        menu.open();
        menu.panel_area = Rect::new(20, 1, 18, 5);
        menu.item_areas = vec![Rect::new(21, 2, 16, 1)];
        menu.close();
        menu.close();
        assert_eq!(menu.panel_area, Rect::default());
        assert!(menu.item_areas.is_empty());
    }

    #[test]
    fn containment_includes_trigger_and_open_panel() {
        let mut menu = MenuState::default();
        menu.trigger_area = Rect::new(50, 0, 12, 1);
        assert!(menu.contains(Position::new(55, 0)));
        assert!(!menu.contains(Position::new(30, 3)));

        menu.open();
        menu.panel_area = Rect::new(44, 1, 18, 5);
        assert!(menu.contains(Position::new(50, 3)));
        menu.close();
        assert!(!menu.contains(Position::new(50, 3)));
    }

    #[test]
    fn cycle_wraps_both_directions() {
        let mut menu = MenuState::default();
        assert_eq!(menu.selected_index, 0);
        menu.cycle(false);
        assert_eq!(menu.selected_index, menu.items.len() - 1);
        menu.cycle(true);
        assert_eq!(menu.selected_index, 0);
    }
}
