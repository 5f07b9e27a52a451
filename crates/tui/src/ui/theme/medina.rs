use ratatui::style::Color;

use super::roles::{Theme, ThemeRoles};

// Warm library palette for dark terminals.
pub const BG: Color = Color::Rgb(0x1E, 0x1B, 0x18); // deep coffee
pub const SURFACE: Color = Color::Rgb(0x28, 0x24, 0x1F); // panel
pub const SURFACE_MUTED: Color = Color::Rgb(0x3A, 0x34, 0x2C); // header rows
pub const BORDER: Color = Color::Rgb(0x4A, 0x42, 0x38);

pub const TEXT_PRIMARY: Color = Color::Rgb(0xEF, 0xE6, 0xD8); // parchment
pub const TEXT_SECONDARY: Color = Color::Rgb(0xB8, 0xA9, 0x90);
pub const TEXT_MUTED: Color = Color::Rgb(0x7D, 0x72, 0x62);

pub const ACCENT_PRIMARY: Color = Color::Rgb(0xE0, 0xA4, 0x58); // brass
pub const ACCENT_SECONDARY: Color = Color::Rgb(0x8F, 0xBF, 0xA8); // jade

pub const STATUS_WARN: Color = Color::Rgb(0xE8, 0xC2, 0x6A);
pub const STATUS_ERROR: Color = Color::Rgb(0xD9, 0x6A, 0x5B);

pub const SELECTION_BG: Color = Color::Rgb(0x45, 0x3B, 0x2E);

/// Default theme tuned for truecolor terminals.
#[derive(Debug, Clone)]
pub struct MedinaTheme {
    roles: ThemeRoles,
}

impl MedinaTheme {
    pub fn new() -> Self {
        Self {
            roles: ThemeRoles {
                background: BG,
                surface: SURFACE,
                surface_muted: SURFACE_MUTED,
                border: BORDER,

                text: TEXT_PRIMARY,
                text_secondary: TEXT_SECONDARY,
                text_muted: TEXT_MUTED,

                accent_primary: ACCENT_PRIMARY,
                accent_secondary: ACCENT_SECONDARY,

                warning: STATUS_WARN,
                error: STATUS_ERROR,

                selection_bg: SELECTION_BG,
                selection_fg: TEXT_PRIMARY,
                focus: ACCENT_SECONDARY,
            },
        }
    }
}

impl Default for MedinaTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for MedinaTheme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}
