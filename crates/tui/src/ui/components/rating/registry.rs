use indexmap::IndexMap;
use maktaba_types::Book;
use ratatui::layout::{Position, Rect};

use super::RatingWidgetState;

/// Stars per rating control, fixed at discovery time.
pub const STAR_COUNT: u8 = 5;

/// Registry of rating widgets plus the popup coordinator.
///
/// Built once from the shelf at startup and stable for the life of the
/// session: widgets are never added, destroyed, or re-created afterwards.
/// Rows without an interactive rating affordance (the reader already rated
/// the book) never enter the registry and participate in no state machine.
///
/// The coordinator half enforces the page-wide invariant that at most one
/// popup is visible at a time, by funnelling every closed-to-open
/// transition through [`RatingRegistry::open`].
#[derive(Debug, Default)]
pub struct RatingRegistry {
    widgets: IndexMap<i64, RatingWidgetState>,
}

impl RatingRegistry {
    /// Walks the shelf once and constructs a widget per ratable book,
    /// preserving shelf order. Defective rows are skipped silently rather
    /// than failing discovery for the whole page.
    pub fn discover(books: &[Book]) -> Self {
        Self::discover_with_stars(books, STAR_COUNT)
    }

    /// Discovery with an explicit star count. A non-positive count leaves
    /// every row without an interactive affordance, so nothing is
    /// registered.
    pub fn discover_with_stars(books: &[Book], star_count: u8) -> Self {
        if star_count == 0 {
            return Self::default();
        }
        let widgets = books
            .iter()
            .filter(|book| book.can_rate())
            .map(|book| (book.id, RatingWidgetState::new(book.id, star_count)))
            .collect();
        Self { widgets }
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    pub fn get(&self, book_id: i64) -> Option<&RatingWidgetState> {
        self.widgets.get(&book_id)
    }

    pub fn get_mut(&mut self, book_id: i64) -> Option<&mut RatingWidgetState> {
        self.widgets.get_mut(&book_id)
    }

    /// Closes every widget except the given one (or all, when `None`).
    /// Safe to call on already-closed instances.
    pub fn close_all_except(&mut self, keep: Option<i64>) {
        for (id, widget) in self.widgets.iter_mut() {
            if Some(*id) != keep {
                widget.close();
            }
        }
    }

    /// Opens a widget's popup, closing every sibling first. Idempotent when
    /// the widget is already open, but still closes the others: exclusivity
    /// is re-enforced on every open, not just on toggle.
    pub fn open(&mut self, book_id: i64) {
        if !self.widgets.contains_key(&book_id) {
            return;
        }
        self.close_all_except(Some(book_id));
        if let Some(widget) = self.widgets.get_mut(&book_id) {
            widget.set_open();
        }
    }

    /// Trigger activation: closed goes through [`Self::open`] (the only
    /// entry point that can transition closed to open), open closes.
    pub fn toggle(&mut self, book_id: i64) {
        match self.widgets.get(&book_id).map(RatingWidgetState::is_open) {
            Some(false) => self.open(book_id),
            Some(true) => {
                if let Some(widget) = self.widgets.get_mut(&book_id) {
                    widget.close();
                }
            }
            None => {}
        }
    }

    pub fn select_star(&mut self, book_id: i64, rank: u8) {
        if let Some(widget) = self.widgets.get_mut(&book_id) {
            widget.select_star(rank);
        }
    }

    pub fn cancel(&mut self, book_id: i64) {
        if let Some(widget) = self.widgets.get_mut(&book_id) {
            widget.cancel();
        }
    }

    pub fn any_open(&self) -> bool {
        self.widgets.values().any(RatingWidgetState::is_open)
    }

    pub fn open_widget(&self) -> Option<&RatingWidgetState> {
        self.widgets.values().find(|widget| widget.is_open())
    }

    pub fn open_widget_mut(&mut self) -> Option<&mut RatingWidgetState> {
        self.widgets.values_mut().find(|widget| widget.is_open())
    }

    /// Whether the position falls inside any widget subtree (trigger cell
    /// or open popup). The outside-click pass dismisses only when this is
    /// false, so a widget's own click handling is never undone.
    pub fn contains(&self, position: Position) -> bool {
        self.widgets.values().any(|widget| widget.areas.contains(position))
    }

    /// Forgets every recorded trigger cell. The shelf calls this at the
    /// start of each render pass, so rows hidden by a filter or scrolled
    /// out of the viewport cannot keep hit areas from an earlier frame.
    pub fn reset_triggers(&mut self) {
        for widget in self.widgets.values_mut() {
            widget.areas.trigger = Rect::default();
        }
    }

    /// The widget whose trigger cell contains the position, if any.
    pub fn widget_at_trigger(&self, position: Position) -> Option<i64> {
        self.widgets
            .values()
            .find(|widget| widget.areas.trigger.contains(position))
            .map(RatingWidgetState::book_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(id: i64, my_rating: Option<u8>) -> Book {
        Book {
            id,
            title: format!("Book {id}"),
            author: "Author".into(),
            code: None,
            available_copies: 1,
            created_at: "2026-01-01T00:00:00Z".into(),
            my_rating,
            my_borrowed: false,
            my_due_date: None,
        }
    }

    fn registry_of_two() -> RatingRegistry {
        RatingRegistry::discover(&[book(1, None), book(2, None)])
    }

    #[test]
    fn discovery_excludes_already_rated_books() {
        let registry = RatingRegistry::discover(&[book(1, None), book(2, Some(4)), book(3, None)]);
        assert_eq!(registry.len(), 2);
        assert!(registry.get(1).is_some());
        assert!(registry.get(2).is_none());
        assert!(registry.get(3).is_some());
    }

    #[test]
    fn zero_star_count_discovers_nothing() {
        let registry = RatingRegistry::discover_with_stars(&[book(1, None)], 0);
        assert!(registry.is_empty());
    }

    #[test]
    fn opening_one_widget_closes_the_other() {
        let mut registry = registry_of_two();
        registry.open(2);
        assert!(registry.get(2).unwrap().is_open());

        registry.open(1);
        assert!(registry.get(1).unwrap().is_open());
        assert!(!registry.get(2).unwrap().is_open());
        assert_eq!(registry.widgets.values().filter(|w| w.is_open()).count(), 1);
    }

    #[test]
    fn closing_a_widget_does_not_touch_its_selection() {
        let mut registry = registry_of_two();
        registry.open(1);
        registry.select_star(1, 3);
        // Opening widget 2 closes widget 1; its selection must survive.
        registry.open(2);
        let first = registry.get(1).unwrap();
        assert!(!first.is_open());
        assert_eq!(first.selected_value(), 3);
    }

    #[test]
    fn toggle_round_trips_through_open_and_close() {
        let mut registry = registry_of_two();
        registry.toggle(1);
        assert!(registry.get(1).unwrap().is_open());
        registry.toggle(1);
        assert!(!registry.get(1).unwrap().is_open());
        // Unknown ids are ignored.
        registry.toggle(99);
        assert!(!registry.any_open());
    }

    #[test]
    fn close_all_with_no_open_popups_is_a_no_op() {
        let mut registry = registry_of_two();
        registry.select_star(1, 2);
        registry.close_all_except(None);
        assert!(!registry.any_open());
        assert_eq!(registry.get(1).unwrap().selected_value(), 2);
    }

    #[test]
    fn full_two_widget_scenario() {
        let mut registry = registry_of_two();

        registry.open(1);
        assert!(registry.get(1).unwrap().is_open());
        assert!(!registry.get(2).unwrap().is_open());

        registry.select_star(1, 3);
        assert_eq!(registry.get(1).unwrap().selected_value(), 3);
        assert_eq!(
            registry.get(1).unwrap().painted_stars(),
            vec![true, true, true, false, false]
        );

        registry.open(2);
        assert!(!registry.get(1).unwrap().is_open());
        assert!(registry.get(2).unwrap().is_open());
        assert_eq!(registry.get(1).unwrap().selected_value(), 3);

        // Escape closes everything.
        registry.close_all_except(None);
        assert!(!registry.get(1).unwrap().is_open());
        assert!(!registry.get(2).unwrap().is_open());
    }

    #[test]
    fn containment_tracks_triggers_and_open_popups_only() {
        let mut registry = registry_of_two();
        registry.get_mut(1).unwrap().areas.trigger = Rect::new(0, 0, 6, 1);
        registry.get_mut(2).unwrap().areas.trigger = Rect::new(0, 1, 6, 1);

        assert!(registry.contains(Position::new(2, 0)));
        assert!(registry.contains(Position::new(2, 1)));
        assert!(!registry.contains(Position::new(30, 5)));

        registry.open(1);
        registry.get_mut(1).unwrap().areas.popup = Rect::new(8, 2, 20, 6);
        assert!(registry.contains(Position::new(10, 4)));

        // A click inside an open widget's popup, away from its trigger,
        // is still inside the subtree.
        assert_eq!(registry.widget_at_trigger(Position::new(10, 4)), None);
        assert_eq!(registry.widget_at_trigger(Position::new(2, 1)), Some(2));

        registry.close_all_except(None);
        assert!(!registry.contains(Position::new(10, 4)));
    }

    #[test]
    fn reset_triggers_drops_stale_hit_areas() {
        let mut registry = registry_of_two();
        registry.get_mut(1).unwrap().areas.trigger = Rect::new(68, 2, 12, 1);
        registry.get_mut(2).unwrap().areas.trigger = Rect::new(68, 3, 12, 1);

        registry.reset_triggers();
        assert_eq!(registry.widget_at_trigger(Position::new(70, 2)), None);
        assert!(!registry.contains(Position::new(70, 3)));
    }

    #[test]
    fn open_on_unknown_id_changes_nothing() {
        let mut registry = registry_of_two();
        registry.open(1);
        registry.open(42);
        // An unknown id must not sneak past exclusivity by closing others.
        assert!(registry.get(1).unwrap().is_open());
    }
}
