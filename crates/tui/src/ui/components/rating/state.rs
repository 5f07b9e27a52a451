use ratatui::layout::{Position, Rect};

/// Screen areas tracked for one rating widget.
///
/// Recorded during render and used for mouse hit testing on the next event,
/// the same way the nav and row components track their item areas. The
/// trigger cell persists across frames; popup areas only exist while the
/// popup is visible and are reset on close so stale rectangles can never
/// swallow a click.
#[derive(Debug, Default, Clone)]
pub struct RatingAreas {
    /// The row's "Rate" trigger cell.
    pub trigger: Rect,
    /// The popup panel, when open.
    pub popup: Rect,
    /// One cell per star, index 0 = rank 1.
    pub stars: Vec<Rect>,
    pub cancel: Rect,
    pub confirm: Rect,
}

impl RatingAreas {
    /// True when the position falls anywhere inside this widget's subtree:
    /// the trigger cell or the popup panel. Containment is checked against
    /// the whole subtree so a click on the widget's own controls is never
    /// treated as an outside click.
    pub fn contains(&self, position: Position) -> bool {
        self.trigger.contains(position) || self.popup.contains(position)
    }

    pub(crate) fn reset_popup(&mut self) {
        self.popup = Rect::default();
        self.stars.clear();
        self.cancel = Rect::default();
        self.confirm = Rect::default();
    }
}

/// One self-contained star-rating control.
///
/// Owns the open/closed visibility and the reader's in-progress selection
/// for a single book row. Opening is registry-mediated (see
/// [`super::RatingRegistry::open`]) so popup exclusivity is enforced inside
/// the open path itself, not only at toggle time.
#[derive(Debug, Clone)]
pub struct RatingWidgetState {
    book_id: i64,
    star_count: u8,
    is_open: bool,
    /// Expanded marker mirrored onto the trigger, the TUI analog of the
    /// trigger's aria-expanded attribute. Always equals `is_open`.
    expanded: bool,
    /// 0 means no selection yet; otherwise the 1-indexed star rank.
    selected_value: u8,
    /// Tracked screen areas; render-owned, safe to mutate every frame.
    pub areas: RatingAreas,
}

impl RatingWidgetState {
    pub fn new(book_id: i64, star_count: u8) -> Self {
        Self {
            book_id,
            star_count,
            is_open: false,
            expanded: false,
            selected_value: 0,
            areas: RatingAreas::default(),
        }
    }

    pub fn book_id(&self) -> i64 {
        self.book_id
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn selected_value(&self) -> u8 {
        self.selected_value
    }

    /// Derived, never stored: the confirm control is enabled exactly when a
    /// star has been selected.
    pub fn confirm_enabled(&self) -> bool {
        self.selected_value > 0
    }

    /// Marks the popup visible and the trigger expanded. Only the registry
    /// calls this, after closing every sibling.
    pub(super) fn set_open(&mut self) {
        self.is_open = true;
        self.expanded = true;
    }

    /// Closes the popup. Idempotent; leaves the selection untouched.
    pub fn close(&mut self) {
        self.is_open = false;
        self.expanded = false;
        self.areas.reset_popup();
    }

    /// Records a star selection. `rank` is 1-indexed; out-of-range ranks
    /// are ignored. Each selection overwrites the previous one, so the
    /// painted set is always exactly `1..=rank`.
    pub fn select_star(&mut self, rank: u8) {
        if rank == 0 || rank > self.star_count {
            return;
        }
        self.selected_value = rank;
    }

    /// Dismisses the popup without resetting the in-progress selection.
    pub fn cancel(&mut self) {
        self.close();
    }

    /// On/off paint state per star, index 0 = rank 1. Stars at rank less
    /// than or equal to the selection are on, the rest off.
    pub fn painted_stars(&self) -> Vec<bool> {
        (1..=self.star_count).map(|rank| rank <= self.selected_value).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_widget_starts_closed_and_unselected() {
        let widget = RatingWidgetState::new(1, 5);
        assert!(!widget.is_open());
        assert!(!widget.is_expanded());
        assert_eq!(widget.selected_value(), 0);
        assert!(!widget.confirm_enabled());
        assert_eq!(widget.painted_stars(), vec![false; 5]);
    }

    #[test]
    fn select_star_paints_inclusive_threshold() {
        let mut widget = RatingWidgetState::new(1, 5);
        widget.select_star(3);
        assert_eq!(widget.selected_value(), 3);
        assert_eq!(widget.painted_stars(), vec![true, true, true, false, false]);
        assert!(widget.confirm_enabled());
    }

    #[test]
    fn select_star_overwrites_rather_than_accumulates() {
        let mut widget = RatingWidgetState::new(1, 5);
        widget.select_star(5);
        widget.select_star(3);
        // Selecting 3 after 5 turns stars 4 and 5 back off.
        assert_eq!(widget.painted_stars(), vec![true, true, true, false, false]);
    }

    #[test]
    fn select_star_ignores_out_of_range_ranks() {
        let mut widget = RatingWidgetState::new(1, 5);
        widget.select_star(0);
        assert_eq!(widget.selected_value(), 0);
        widget.select_star(6);
        assert_eq!(widget.selected_value(), 0);
        widget.select_star(2);
        widget.select_star(9);
        assert_eq!(widget.selected_value(), 2);
    }

    #[test]
    fn confirm_enabled_tracks_selection_exactly() {
        let mut widget = RatingWidgetState::new(1, 5);
        assert_eq!(widget.confirm_enabled(), widget.selected_value() > 0);
        widget.select_star(1);
        assert_eq!(widget.confirm_enabled(), widget.selected_value() > 0);
        assert!(widget.confirm_enabled());
    }

    #[test]
    fn cancel_closes_but_keeps_selection() {
        let mut widget = RatingWidgetState::new(1, 5);
        widget.set_open();
        widget.select_star(4);
        widget.cancel();
        assert!(!widget.is_open());
        assert_eq!(widget.selected_value(), 4);
    }

    #[test]
    fn close_is_idempotent_and_mirrors_expanded() {
        let mut widget = RatingWidgetState::new(1, 5);
        widget.set_open();
        assert!(widget.is_expanded());
        widget.close();
        widget.close();
        assert!(!widget.is_open());
        assert!(!widget.is_expanded());
    }

    #[test]
    fn close_resets_popup_areas_but_not_trigger() {
        let mut widget = RatingWidgetState::new(1, 5);
        widget.areas.trigger = Rect::new(10, 2, 8, 1);
        widget.set_open();
        widget.areas.popup = Rect::new(10, 3, 28, 7);
        widget.areas.stars = vec![Rect::new(12, 4, 3, 1); 5];
        widget.close();
        assert_eq!(widget.areas.popup, Rect::default());
        assert!(widget.areas.stars.is_empty());
        assert_eq!(widget.areas.trigger, Rect::new(10, 2, 8, 1));
    }

    #[test]
    fn containment_covers_trigger_and_open_popup() {
        let mut widget = RatingWidgetState::new(1, 5);
        widget.areas.trigger = Rect::new(10, 2, 8, 1);
        assert!(widget.areas.contains(Position::new(11, 2)));
        assert!(!widget.areas.contains(Position::new(11, 5)));

        widget.set_open();
        widget.areas.popup = Rect::new(10, 3, 28, 7);
        assert!(widget.areas.contains(Position::new(11, 5)));
        widget.close();
        assert!(!widget.areas.contains(Position::new(11, 5)));
    }
}
