//! Central application state for the shelf client.

use std::rc::Rc;

use maktaba_types::{Effect, Msg, Shelf};
use rat_focus::{Focus, FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;

use crate::cmd::RatingSubmission;
use crate::ui::components::{MenuState, RatingRegistry, ShelfState};
use crate::ui::theme::{self, Theme};

/// Cross-cutting shared context owned by the App.
///
/// Keeps runtime-wide objects out of the individual component states so a
/// component can borrow its own state and the context at the same time.
pub struct SharedCtx {
    pub theme: Box<dyn Theme>,
}

impl std::fmt::Debug for SharedCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedCtx").finish_non_exhaustive()
    }
}

/// The main application state.
///
/// Owns the per-component states, the rating widget registry, and the focus
/// ring. The registry is built once here and never rebuilt: filtering and
/// re-renders change what is visible, not which widgets exist.
#[derive(Debug)]
pub struct App {
    pub ctx: SharedCtx,
    pub shelf: ShelfState,
    pub menu: MenuState,
    pub ratings: RatingRegistry,
    /// Ratings confirmed this session, in submission order.
    pub submissions: Vec<RatingSubmission>,
    /// One-line status shown in the hint bar after a submission.
    pub status: Option<String>,
    pub focus: Rc<Focus>,
    container_focus: FocusFlag,
}

impl App {
    pub fn new(shelf: Shelf) -> Self {
        let shelf = ShelfState::new(shelf);
        let ratings = RatingRegistry::discover(shelf.books());
        let mut app = Self {
            ctx: SharedCtx {
                theme: theme::load(),
            },
            shelf,
            menu: MenuState::default(),
            ratings,
            submissions: Vec::new(),
            status: None,
            focus: Rc::new(Focus::default()),
            container_focus: FocusFlag::named("app"),
        };
        app.focus = Rc::new(FocusBuilder::build_for(&app));
        app.focus.first();
        app
    }

    /// Applies an application-level message. Components get the same message
    /// afterwards through the main view.
    pub fn update(&mut self, msg: &Msg) -> Vec<Effect> {
        match msg {
            Msg::Tick => {
                self.shelf.refresh_now(chrono::Utc::now());
            }
            Msg::Resize(_, _) => {}
        }
        Vec::new()
    }
}

impl HasFocus for App {
    fn build(&self, builder: &mut FocusBuilder) {
        let tag = builder.start(self);
        builder.widget(&self.shelf);
        builder.widget(&self.menu);
        builder.end(tag);
    }

    fn focus(&self) -> FocusFlag {
        self.container_focus.clone()
    }

    fn area(&self) -> Rect {
        Rect::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maktaba_types::Book;

    fn shelf() -> Shelf {
        Shelf::new(vec![
            Book {
                id: 1,
                title: "Palace Walk".into(),
                author: "Naguib Mahfouz".into(),
                code: Some("LIT-001".into()),
                available_copies: 2,
                created_at: "2026-01-01T00:00:00Z".into(),
                my_rating: None,
                my_borrowed: false,
                my_due_date: None,
            },
            Book {
                id: 2,
                title: "Season of Migration".into(),
                author: "Tayeb Salih".into(),
                code: None,
                available_copies: 0,
                created_at: "2026-01-02T00:00:00Z".into(),
                my_rating: Some(5),
                my_borrowed: true,
                my_due_date: Some("2026-09-05T18:00:00Z".into()),
            },
        ])
    }

    #[test]
    fn startup_discovers_widgets_for_unrated_books_only() {
        let app = App::new(shelf());
        assert_eq!(app.ratings.len(), 1);
        assert!(app.ratings.get(1).is_some());
        assert!(app.ratings.get(2).is_none());
        assert!(!app.ratings.any_open());
    }

    #[test]
    fn tick_refreshes_the_clock_snapshot() {
        let mut app = App::new(shelf());
        let before = app.shelf.now();
        app.update(&Msg::Tick);
        assert!(app.shelf.now() >= before);
    }
}
