//! Layout and string helpers shared across UI components.

use ratatui::prelude::*;
use unicode_width::UnicodeWidthChar;

/// Anchors a popup of the given size below a trigger area, clamped to the
/// screen. When there is no room below, the popup flips above the trigger;
/// horizontal overflow slides it left.
pub fn anchor_below(trigger: Rect, width: u16, height: u16, screen: Rect) -> Rect {
    let width = width.min(screen.width);
    let height = height.min(screen.height);

    let mut x = trigger.x;
    if x + width > screen.right() {
        x = screen.right().saturating_sub(width);
    }

    let below = trigger.bottom();
    let y = if below + height <= screen.bottom() {
        below
    } else {
        trigger.y.saturating_sub(height).max(screen.y)
    };

    Rect::new(x.max(screen.x), y, width, height)
}

/// Truncates a string to a display width, appending `…` when cut. Width is
/// measured in terminal columns, not chars.
pub fn fit_width(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return text.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width.saturating_sub(1) {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
