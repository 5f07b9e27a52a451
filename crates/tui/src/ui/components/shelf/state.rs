use chrono::{DateTime, Utc};
use maktaba_types::{Book, Countdown, Shelf, ShelfFilter, format_date_time};
use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;

/// How pressing a borrow's due date is, for due-column styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueUrgency {
    /// Less than a full day left on the borrow.
    Soon,
    Overdue,
}

/// State for the books table.
///
/// Owns the shelf rows, the active filter, row selection, and the wall
/// clock snapshot used for countdown text. Filtering only restricts the
/// visible rows; it never rebuilds the rating registry, which is fixed at
/// startup.
#[derive(Debug)]
pub struct ShelfState {
    books: Vec<Book>,
    pub filter: ShelfFilter,
    /// Index into the visible rows, not into `books`.
    pub selected: usize,
    /// First visible row when the table is taller than the viewport.
    pub offset: usize,
    /// Clock snapshot, refreshed on the minute tick.
    now: DateTime<Utc>,
    /// Indices into `books` for rows matching the filter.
    visible: Vec<usize>,
    pub container_focus: FocusFlag,
    pub last_area: Rect,
    /// Per visible row, for click-to-select. Rebuilt every render.
    pub row_areas: Vec<Rect>,
}

impl ShelfState {
    pub fn new(shelf: Shelf) -> Self {
        let mut state = Self {
            books: shelf.books,
            filter: ShelfFilter::default(),
            selected: 0,
            offset: 0,
            now: Utc::now(),
            visible: Vec::new(),
            container_focus: FocusFlag::named("shelf"),
            last_area: Rect::default(),
            row_areas: Vec::new(),
        };
        state.recompute_visible();
        state
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    pub fn refresh_now(&mut self, now: DateTime<Utc>) {
        self.now = now;
    }

    pub fn set_filter(&mut self, filter: ShelfFilter) {
        self.filter = filter;
        self.recompute_visible();
    }

    fn recompute_visible(&mut self) {
        self.visible = self
            .books
            .iter()
            .enumerate()
            .filter(|(_, book)| self.filter.matches(book))
            .map(|(index, _)| index)
            .collect();
        if self.selected >= self.visible.len() {
            self.selected = self.visible.len().saturating_sub(1);
        }
        self.offset = self.offset.min(self.selected);
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    pub fn visible_books(&self) -> impl Iterator<Item = &Book> {
        self.visible.iter().map(|&index| &self.books[index])
    }

    pub fn selected_book(&self) -> Option<&Book> {
        self.visible.get(self.selected).map(|&index| &self.books[index])
    }

    pub fn book_by_id(&self, id: i64) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    pub fn move_selection(&mut self, delta: isize) {
        if self.visible.is_empty() {
            return;
        }
        let last = self.visible.len() - 1;
        let next = self.selected.saturating_add_signed(delta).min(last);
        self.selected = next;
    }

    pub fn select_row(&mut self, row: usize) {
        if row < self.visible.len() {
            self.selected = row;
        }
    }

    /// Keeps the selected row inside a viewport of the given height.
    pub fn scroll_to_selected(&mut self, viewport_rows: usize) {
        if viewport_rows == 0 {
            return;
        }
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + viewport_rows {
            self.offset = self.selected + 1 - viewport_rows;
        }
    }

    /// Text for the due column: formatted due date plus countdown for the
    /// reader's active borrow, empty otherwise. Malformed dates degrade to
    /// empty text rather than an error.
    pub fn due_cell(&self, book: &Book) -> String {
        let Some(due) = book.my_due_date.as_deref().filter(|_| book.my_borrowed) else {
            return String::new();
        };
        let stamp = format_date_time(due);
        if stamp.is_empty() {
            return String::new();
        }
        match Countdown::until(due, self.now) {
            Some(countdown) => format!("{stamp} · {}", countdown.label()),
            None => stamp,
        }
    }

    /// Urgency of the reader's active borrow, `None` for rows without a
    /// live countdown or with more than a day of slack.
    pub fn due_urgency(&self, book: &Book) -> Option<DueUrgency> {
        let due = book.my_due_date.as_deref().filter(|_| book.my_borrowed)?;
        let countdown = Countdown::until(due, self.now)?;
        if countdown.overdue {
            Some(DueUrgency::Overdue)
        } else if countdown.days == 0 {
            Some(DueUrgency::Soon)
        } else {
            None
        }
    }
}

impl HasFocus for ShelfState {
    fn build(&self, builder: &mut FocusBuilder) {
        builder.leaf_widget(self);
    }

    fn focus(&self) -> FocusFlag {
        self.container_focus.clone()
    }

    fn area(&self) -> Rect {
        self.last_area
    }
}
