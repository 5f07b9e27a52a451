//! Effect processing: turns component-emitted [`Effect`]s into state
//! changes and log entries.

use chrono::{DateTime, Utc};
use maktaba_types::Effect;
use tracing::info;

use crate::app::App;
use crate::ui::components::STAR_COUNT;

/// A rating the reader confirmed this session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingSubmission {
    pub book_id: i64,
    pub rating: u8,
    pub submitted_at: DateTime<Utc>,
}

/// Runs every queued effect against the app. Returns `true` when a quit was
/// requested.
pub fn process_effects(app: &mut App, effects: Vec<Effect>) -> bool {
    let mut quit = false;
    for effect in effects {
        match effect {
            Effect::SubmitRating { book_id, rating } => submit_rating(app, book_id, rating),
            Effect::Quit => quit = true,
        }
    }
    quit
}

/// Records a confirmed rating in the outbox and closes the popup. The value
/// is not validated here; the widget only emits enabled confirms.
fn submit_rating(app: &mut App, book_id: i64, rating: u8) {
    let title = app
        .shelf
        .book_by_id(book_id)
        .map(|book| book.title.clone())
        .unwrap_or_default();
    info!(book_id, rating, %title, "rating submitted");

    app.submissions.push(RatingSubmission {
        book_id,
        rating,
        submitted_at: Utc::now(),
    });
    app.status = Some(format!("Rated \"{title}\" {rating}/{STAR_COUNT}"));
    if let Some(widget) = app.ratings.get_mut(book_id) {
        widget.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maktaba_types::{Book, Shelf};

    fn app() -> App {
        App::new(Shelf::new(vec![Book {
            id: 7,
            title: "The Cairo Trilogy".into(),
            author: "Naguib Mahfouz".into(),
            code: None,
            available_copies: 1,
            created_at: "2026-01-01T00:00:00Z".into(),
            my_rating: None,
            my_borrowed: false,
            my_due_date: None,
        }]))
    }

    #[test]
    fn submit_records_outbox_entry_and_closes_popup() {
        let mut app = app();
        app.ratings.open(7);
        app.ratings.select_star(7, 4);

        let quit = process_effects(&mut app, vec![Effect::SubmitRating { book_id: 7, rating: 4 }]);
        assert!(!quit);
        assert_eq!(app.submissions.len(), 1);
        assert_eq!(app.submissions[0].book_id, 7);
        assert_eq!(app.submissions[0].rating, 4);
        assert!(!app.ratings.any_open());
        // Selection survives the close, like every other dismissal.
        assert_eq!(app.ratings.get(7).unwrap().selected_value(), 4);
        assert_eq!(app.status.as_deref(), Some("Rated \"The Cairo Trilogy\" 4/5"));
    }

    #[test]
    fn quit_effect_stops_the_loop() {
        let mut app = app();
        assert!(process_effects(&mut app, vec![Effect::Quit]));
    }
}
