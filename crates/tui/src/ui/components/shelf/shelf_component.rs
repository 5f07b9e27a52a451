use super::DueUrgency;
use crate::app::App;
use crate::ui::components::{Component, find_target_index_by_mouse_position};
use crate::ui::theme::theme_helpers::{self as th, build_hint_spans};
use crate::ui::utils::fit_width;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use maktaba_types::Effect;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

/// The books table.
///
/// Each visible row renders title, author, code, availability, the due
/// date/countdown for the reader's active borrow, and the rating cell:
/// a trigger for widgets in the registry, a static star badge for books
/// the reader already rated. Trigger cells are recorded into the registry
/// for mouse hit testing.
#[derive(Debug, Default)]
pub struct ShelfComponent;

fn column_layout(area: Rect) -> [Rect; 6] {
    let chunks = Layout::horizontal([
        Constraint::Min(16),    // Title
        Constraint::Length(16), // Author
        Constraint::Length(9),  // Code
        Constraint::Length(6),  // Copies
        Constraint::Length(41), // Due
        Constraint::Length(12), // Rating
    ])
    .split(area);
    [chunks[0], chunks[1], chunks[2], chunks[3], chunks[4], chunks[5]]
}

impl Component for ShelfComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Down => app.shelf.move_selection(1),
            KeyCode::Up => app.shelf.move_selection(-1),
            KeyCode::Enter | KeyCode::Char('r') => {
                if let Some(book_id) = app.shelf.selected_book().map(|book| book.id) {
                    app.ratings.toggle(book_id);
                }
            }
            KeyCode::Char('f') | KeyCode::Char('m') => app.menu.toggle(),
            KeyCode::Tab => {
                app.focus.next();
            }
            KeyCode::BackTab => {
                app.focus.prev();
            }
            KeyCode::Char('q') => return vec![Effect::Quit],
            _ => {}
        }
        Vec::new()
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        match mouse.kind {
            MouseEventKind::ScrollDown => {
                app.shelf.move_selection(1);
                return Vec::new();
            }
            MouseEventKind::ScrollUp => {
                app.shelf.move_selection(-1);
                return Vec::new();
            }
            MouseEventKind::Down(MouseButton::Left) => {}
            _ => return Vec::new(),
        }

        // Overlay clicks never reach this component; the main view routes
        // them to the menu and popup handlers only.
        let position = Position::new(mouse.column, mouse.row);
        if let Some(book_id) = app.ratings.widget_at_trigger(position) {
            app.ratings.toggle(book_id);
            return Vec::new();
        }

        let container = app.shelf.last_area;
        let rows = app.shelf.row_areas.clone();
        if let Some(row) = find_target_index_by_mouse_position(&container, &rows, mouse.column, mouse.row) {
            app.shelf.select_row(app.shelf.offset + row);
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        // Only rows drawn this frame may own a live trigger; anything a
        // filter or scroll hid must stop answering hit tests.
        app.ratings.reset_triggers();

        let focused = app.shelf.container_focus.get();
        let title = format!("Books · {}", app.shelf.filter.label());

        let block = th::block(&*app.ctx.theme, Some(title.as_str()), focused);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.height < 2 {
            app.shelf.last_area = area;
            app.shelf.row_areas.clear();
            return;
        }

        let viewport_rows = inner.height as usize - 1;
        app.shelf.scroll_to_selected(viewport_rows);

        let header_area = Rect::new(inner.x, inner.y, inner.width, 1);
        let header_cells = column_layout(header_area);
        {
            let theme = &*app.ctx.theme;
            frame.render_widget(Paragraph::new("").style(th::table_header_row_style(theme)), header_area);
            for (cell, label) in header_cells
                .iter()
                .zip(["Title", "Author", "Code", "Qty", "Due", "Rating"])
            {
                frame.render_widget(
                    Paragraph::new(Span::styled(label, th::table_header_style(theme))),
                    *cell,
                );
            }
        }

        if app.shelf.visible_len() == 0 {
            let empty_area = Rect::new(inner.x, inner.y + 1, inner.width, 1);
            frame.render_widget(
                Paragraph::new(Span::styled("No books match this filter.", app.ctx.theme.text_muted_style())).centered(),
                empty_area,
            );
            app.shelf.last_area = inner;
            app.shelf.row_areas.clear();
            return;
        }

        let mut row_areas = Vec::with_capacity(viewport_rows);
        let offset = app.shelf.offset;
        let selected = app.shelf.selected;
        for (visible_index, book) in app
            .shelf
            .visible_books()
            .enumerate()
            .skip(offset)
            .take(viewport_rows)
        {
            let theme = &*app.ctx.theme;
            let y = inner.y + 1 + (visible_index - offset) as u16;
            let row_area = Rect::new(inner.x, y, inner.width, 1);
            let row_style = if visible_index == selected {
                th::table_selected_style(theme)
            } else {
                th::table_row_style(theme, visible_index)
            };
            frame.render_widget(Paragraph::new("").style(row_style), row_area);

            let cells = column_layout(row_area);
            let due = app.shelf.due_cell(book);
            let copies = book.available_copies.to_string();
            let texts = [
                fit_width(&book.title, cells[0].width as usize),
                fit_width(&book.author, cells[1].width as usize),
                fit_width(book.code.as_deref().unwrap_or(""), cells[2].width as usize),
                fit_width(&copies, cells[3].width as usize),
                fit_width(&due, cells[4].width as usize),
            ];
            // Due column carries urgency coloring on top of the row style.
            let due_style = match app.shelf.due_urgency(book) {
                Some(DueUrgency::Overdue) => row_style.patch(theme.status_error()),
                Some(DueUrgency::Soon) => row_style.patch(theme.status_warning()),
                None => row_style,
            };
            let styles = [row_style, row_style, row_style, row_style, due_style];
            for ((cell, text), style) in cells.iter().zip(texts.iter()).zip(styles) {
                frame.render_widget(Paragraph::new(Line::from(Span::raw(text.clone()))).style(style), *cell);
            }

            // Rating cell: live trigger for registry members, badge otherwise.
            let rate_cell = cells[5];
            match app.ratings.get_mut(book.id) {
                Some(widget) => {
                    let label = if widget.is_expanded() { "[ Rate ▾ ]" } else { "[ Rate ▸ ]" };
                    let style = if widget.is_open() {
                        theme.accent_emphasis_style()
                    } else {
                        theme.accent_primary_style()
                    };
                    frame.render_widget(Paragraph::new(Span::styled(label, style)), rate_cell);
                    widget.areas.trigger = rate_cell;
                }
                None => {
                    let badge = book
                        .my_rating
                        .map(|rating| format!("★ {rating}"))
                        .unwrap_or_default();
                    frame.render_widget(
                        Paragraph::new(Span::styled(badge, th::star_style(theme, true))),
                        rate_cell,
                    );
                }
            }

            row_areas.push(row_area);
        }

        app.shelf.last_area = inner;
        app.shelf.row_areas = row_areas;
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        build_hint_spans(
            &*app.ctx.theme,
            &[("↑/↓", " Select "), ("Enter", " Rate "), ("f", " Filters "), ("q", " Quit")],
        )
    }
}
