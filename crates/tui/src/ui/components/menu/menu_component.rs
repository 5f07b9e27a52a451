use crate::app::App;
use crate::ui::components::{Component, find_target_index_by_mouse_position};
use crate::ui::theme::theme_helpers::{self as th, build_hint_spans};
use crate::ui::utils::anchor_below;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use maktaba_types::Effect;
use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};

const PANEL_WIDTH: u16 = 18;

/// The site menu: a trigger button in the header and a collapsible panel of
/// shelf filters. Selecting an entry applies the filter and closes the
/// panel, as following a menu link does on the web page.
#[derive(Debug, Default)]
pub struct MenuComponent;

impl MenuComponent {
    fn apply_selection(app: &mut App, index: usize) {
        if let Some(filter) = app.menu.items.get(index).copied() {
            app.menu.selected_index = index;
            app.shelf.set_filter(filter);
        }
        app.menu.close();
    }
}

impl Component for MenuComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if !app.menu.is_open() {
            return Vec::new();
        }
        match key.code {
            KeyCode::Down => app.menu.cycle(true),
            KeyCode::Up => app.menu.cycle(false),
            KeyCode::Enter => Self::apply_selection(app, app.menu.selected_index),
            _ => {}
        }
        Vec::new()
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        let position = Position::new(mouse.column, mouse.row);

        if app.menu.trigger_area.contains(position) {
            app.menu.toggle();
            return Vec::new();
        }
        if app.menu.is_open() {
            let panel = app.menu.panel_area;
            let areas = app.menu.item_areas.clone();
            if let Some(index) = find_target_index_by_mouse_position(&panel, &areas, mouse.column, mouse.row) {
                Self::apply_selection(app, index);
            }
        }
        Vec::new()
    }

    /// Renders the trigger into the right edge of the header area; the
    /// panel, when open, overlays whatever sits beneath it.
    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let label = if app.menu.is_expanded() { "☰ Filters ▴" } else { "☰ Filters ▾" };
        let trigger_width = (label.chars().count() as u16 + 2).min(area.width);
        let trigger_area = Rect::new(
            area.right().saturating_sub(trigger_width),
            area.y,
            trigger_width,
            1,
        );

        let mut item_areas = Vec::with_capacity(app.menu.items.len());
        let panel_area;
        {
            let theme = &*app.ctx.theme;
            let focused = app.menu.container_focus.get();
            let trigger_style = if focused {
                theme.selection_style()
            } else {
                theme.accent_primary_style()
            };
            frame.render_widget(Paragraph::new(Span::styled(label, trigger_style)).centered(), trigger_area);

            if app.menu.is_open() {
                let height = app.menu.items.len() as u16 + 2;
                let panel = anchor_below(trigger_area, PANEL_WIDTH, height, frame.area());
                frame.render_widget(Clear, panel);
                let block = th::block(theme, None, focused);
                let inner = block.inner(panel);
                frame.render_widget(block, panel);

                for (index, filter) in app.menu.items.iter().enumerate() {
                    let row = Rect::new(inner.x, inner.y + index as u16, inner.width, 1);
                    let is_current = *filter == app.shelf.filter;
                    let is_highlighted = index == app.menu.selected_index;
                    let marker = if is_current { "• " } else { "  " };
                    let style = if is_highlighted {
                        theme.selection_style()
                    } else {
                        theme.text_primary_style()
                    };
                    frame.render_widget(
                        Paragraph::new(Line::from(Span::styled(format!("{marker}{}", filter.label()), style))),
                        row,
                    );
                    item_areas.push(row);
                }
                panel_area = panel;
            } else {
                panel_area = Rect::default();
            }
        }

        app.menu.trigger_area = trigger_area;
        if app.menu.is_open() {
            app.menu.panel_area = panel_area;
            app.menu.item_areas = item_areas;
        }
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        build_hint_spans(&*app.ctx.theme, &[("↑/↓", " Navigate "), ("Enter", " Apply "), ("Esc", " Close")])
    }
}
