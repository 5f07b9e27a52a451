use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::theme_helpers::{self as th, build_hint_spans, render_button};
use crate::ui::utils::anchor_below;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use maktaba_types::Effect;
use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Borders, Clear, Paragraph};

const POPUP_WIDTH: u16 = 30;
const POPUP_HEIGHT: u16 = 7;
const BUTTON_WIDTH: u16 = 12;
const BUTTON_SPACER: u16 = 2;
const STAR_CELL_WIDTH: u16 = 3;

/// The rating popup for whichever widget is currently open.
///
/// Renders as an overlay anchored to the open widget's trigger cell and
/// records the popup, star, and button areas back into that widget's state
/// for mouse hit testing. At most one widget is ever open (registry
/// invariant), so a single component instance serves the whole page.
#[derive(Debug, Default)]
pub struct RatingPopupComponent;

impl Component for RatingPopupComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let Some(widget) = app.ratings.open_widget_mut() else {
            return Vec::new();
        };
        match key.code {
            KeyCode::Char(c @ '1'..='9') => {
                widget.select_star(c as u8 - b'0');
            }
            KeyCode::Char('c') => {
                widget.cancel();
            }
            KeyCode::Enter => {
                if widget.confirm_enabled() {
                    return vec![Effect::SubmitRating {
                        book_id: widget.book_id(),
                        rating: widget.selected_value(),
                    }];
                }
            }
            _ => {}
        }
        Vec::new()
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        let position = Position::new(mouse.column, mouse.row);
        let Some(widget) = app.ratings.open_widget_mut() else {
            return Vec::new();
        };

        if let Some(index) = widget.areas.stars.iter().position(|cell| cell.contains(position)) {
            widget.select_star(index as u8 + 1);
            return Vec::new();
        }
        if widget.areas.cancel.contains(position) {
            widget.cancel();
            return Vec::new();
        }
        if widget.areas.confirm.contains(position) && widget.confirm_enabled() {
            return vec![Effect::SubmitRating {
                book_id: widget.book_id(),
                rating: widget.selected_value(),
            }];
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let Some(widget) = app.ratings.open_widget() else {
            return;
        };
        let book_id = widget.book_id();
        let trigger = widget.areas.trigger;
        let painted = widget.painted_stars();
        let confirm_enabled = widget.confirm_enabled();

        let popup_area = anchor_below(trigger, POPUP_WIDTH, POPUP_HEIGHT, area);
        let title = app
            .shelf
            .book_by_id(book_id)
            .map(|book| book.title.as_str())
            .unwrap_or_default();

        let mut star_cells = Vec::with_capacity(painted.len());
        let (cancel_area, confirm_area);
        {
            let theme = &*app.ctx.theme;
            frame.render_widget(Clear, popup_area);
            let block = th::block(theme, Some("Rate"), true);
            let inner = block.inner(popup_area);
            frame.render_widget(block, popup_area);

            // Inner rows: book title, stars, buttons.
            let title_row = Rect::new(inner.x, inner.y, inner.width, 1);
            let stars_row = Rect::new(inner.x, inner.y + 1, inner.width, 1);
            let buttons_row = Rect::new(inner.x, inner.y + 2, inner.width, inner.height.saturating_sub(2));

            let title_text = crate::ui::utils::fit_width(title, inner.width as usize);
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(title_text, theme.text_secondary_style()))).centered(),
                title_row,
            );

            let stars_width = STAR_CELL_WIDTH * painted.len() as u16;
            let stars_x = stars_row.x + stars_row.width.saturating_sub(stars_width) / 2;
            for (index, on) in painted.iter().enumerate() {
                let cell = Rect::new(stars_x + index as u16 * STAR_CELL_WIDTH, stars_row.y, STAR_CELL_WIDTH, 1);
                let glyph = if *on { " ★ " } else { " ☆ " };
                frame.render_widget(Paragraph::new(Span::styled(glyph, th::star_style(theme, *on))), cell);
                star_cells.push(cell);
            }

            let buttons_width = BUTTON_WIDTH * 2 + BUTTON_SPACER;
            let buttons_x = buttons_row.x + buttons_row.width.saturating_sub(buttons_width) / 2;
            cancel_area = Rect::new(buttons_x, buttons_row.y, BUTTON_WIDTH, buttons_row.height);
            confirm_area = Rect::new(
                buttons_x + BUTTON_WIDTH + BUTTON_SPACER,
                buttons_row.y,
                BUTTON_WIDTH,
                buttons_row.height,
            );
            render_button(frame, cancel_area, "Cancel", true, false, false, theme, Borders::ALL);
            render_button(frame, confirm_area, "Submit", confirm_enabled, false, false, theme, Borders::ALL);
        }

        if let Some(widget) = app.ratings.open_widget_mut() {
            widget.areas.popup = popup_area;
            widget.areas.stars = star_cells;
            widget.areas.cancel = cancel_area;
            widget.areas.confirm = confirm_area;
        }
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        build_hint_spans(
            &*app.ctx.theme,
            &[("1-5", " Select "), ("Enter", " Submit "), ("c", " Cancel "), ("Esc", " Close")],
        )
    }
}
