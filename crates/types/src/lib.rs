//! Shared type definitions for the maktaba terminal client.
//!
//! This crate holds the domain types exchanged between the CLI and the TUI:
//! the shelf document exported by the lending-library server, the messages
//! and effects that drive the UI, and the date/countdown helpers used when
//! rendering due dates.

pub mod book;
pub mod datetime;

pub use book::{Book, Shelf, ShelfError, ShelfFilter};
pub use datetime::{Countdown, format_date_time};

/// Messages that can be sent to update the application state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Periodic tick; countdown text is recomputed on this cadence
    Tick,
    /// Terminal resized
    Resize(u16, u16),
}

/// Side effects that can be triggered by state changes.
///
/// Components report effects rather than performing them; the runtime
/// processes the batch after event dispatch completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// A rating was confirmed for a book; the value travels with the
    /// submission the way the hidden form field does on the web page.
    SubmitRating { book_id: i64, rating: u8 },
    /// Exit the application
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_rating_effect_carries_value() {
        let effect = Effect::SubmitRating { book_id: 7, rating: 4 };
        match effect {
            Effect::SubmitRating { book_id, rating } => {
                assert_eq!(book_id, 7);
                assert_eq!(rating, 4);
            }
            other => panic!("unexpected effect: {other:?}"),
        }
    }
}
