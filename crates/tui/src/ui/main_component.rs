use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use maktaba_types::{Effect, Msg};
use ratatui::{
    prelude::*,
    widgets::Paragraph,
};

use super::components::{Component, MenuComponent, RatingPopupComponent, ShelfComponent};
use crate::app::App;

/// Root view: composes the header, the books table, the hint bar, and the
/// overlays (menu panel, rating popup).
///
/// Mouse routing follows a strict order: the per-component handlers run
/// first, and only afterwards does the dismiss-on-outside-click pass run.
/// A click that opens a popup lands inside that widget's trigger area and is
/// therefore excluded from the dismissal pass; opening is never undone in
/// the same event.
#[derive(Debug, Default)]
pub struct MainView {
    shelf_view: ShelfComponent,
    menu_view: MenuComponent,
    rating_view: RatingPopupComponent,
}

impl MainView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn restore_focus(&mut self, app: &mut App) {
        app.focus.first();
    }

    fn layout(area: Rect) -> [Rect; 3] {
        let rows = Layout::vertical([
            Constraint::Length(1), // Header
            Constraint::Min(1),    // Books table
            Constraint::Length(1), // Hint bar
        ])
        .split(area);
        [rows[0], rows[1], rows[2]]
    }

    /// Closes every open overlay. Safe with none open.
    fn dismiss_all(app: &mut App) {
        app.ratings.close_all_except(None);
        app.menu.close();
    }
}

impl Component for MainView {
    fn handle_message(&mut self, app: &mut App, msg: Msg) -> Vec<Effect> {
        let mut effects = app.update(&msg);
        effects.extend(self.shelf_view.handle_message(app, msg));
        effects
    }

    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        // Escape dismisses everything regardless of focus location.
        if key.code == KeyCode::Esc {
            Self::dismiss_all(app);
            return Vec::new();
        }

        if app.ratings.any_open() {
            return self.rating_view.handle_key_events(app, key);
        }
        if app.menu.is_open() {
            return self.menu_view.handle_key_events(app, key);
        }
        self.shelf_view.handle_key_events(app, key)
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        let position = Position::new(mouse.column, mouse.row);
        // Snapshot overlay containment before dispatch: a press that lands
        // on an overlay must not also reach the table underneath it, even
        // when handling the press closes that overlay.
        let press = mouse.kind == MouseEventKind::Down(MouseButton::Left);
        let on_overlay = press
            && (app.menu.contains(position)
                || app.ratings.open_widget().is_some_and(|widget| widget.areas.popup.contains(position)));

        let mut effects = Vec::new();
        effects.extend(self.rating_view.handle_mouse_events(app, mouse));
        effects.extend(self.menu_view.handle_mouse_events(app, mouse));
        if !on_overlay {
            effects.extend(self.shelf_view.handle_mouse_events(app, mouse));
        }

        // Outside-click passes, after every widget's own handling. The two
        // run independently, like two document-level listeners: a press on
        // the menu trigger still closes an open popup, and a press on a
        // rating trigger still closes the menu.
        if press {
            if !app.ratings.contains(position) {
                app.ratings.close_all_except(None);
            }
            if !app.menu.contains(position) {
                app.menu.close();
            }
        }
        effects
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let bg_fill = Paragraph::new("").style(Style::default().bg(app.ctx.theme.roles().background));
        frame.render_widget(bg_fill, area);

        let [header_area, shelf_area, hints_area] = Self::layout(area);

        frame.render_widget(
            Paragraph::new(Span::styled("Maktaba · My Shelf", app.ctx.theme.accent_emphasis_style())),
            header_area,
        );

        self.shelf_view.render(frame, shelf_area, app);

        let hint_spans: Vec<Span> = self.get_hint_spans(app);
        let hints_widget = Paragraph::new(Line::from(hint_spans)).style(app.ctx.theme.text_muted_style());
        frame.render_widget(hints_widget, hints_area);

        // Overlays render last so they sit above the table.
        self.menu_view.render(frame, header_area, app);
        if app.ratings.any_open() {
            self.rating_view.render(frame, shelf_area, app);
        }
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        let mut hint_spans: Vec<Span> = vec![Span::styled("Hints: ", app.ctx.theme.text_muted_style())];

        if app.ratings.any_open() {
            hint_spans.extend(self.rating_view.get_hint_spans(app));
        } else if app.menu.is_open() {
            hint_spans.extend(self.menu_view.get_hint_spans(app));
        } else {
            hint_spans.extend(self.shelf_view.get_hint_spans(app));
        }

        if let Some(status) = app.status.as_deref() {
            hint_spans.push(Span::styled("  ", app.ctx.theme.text_muted_style()));
            hint_spans.push(Span::styled(status.to_owned(), app.ctx.theme.accent_primary_style()));
        }
        hint_spans
    }
}
