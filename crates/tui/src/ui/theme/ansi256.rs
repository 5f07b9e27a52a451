//! ANSI 256-color fallback theme for terminals without truecolor support.

use ratatui::style::Color;

use super::roles::{Theme, ThemeRoles};

/// Indexed-color approximation of the default palette.
#[derive(Debug, Clone)]
pub struct Ansi256Theme {
    roles: ThemeRoles,
}

impl Ansi256Theme {
    pub fn new() -> Self {
        Self {
            roles: ThemeRoles {
                background: Color::Indexed(234),
                surface: Color::Indexed(235),
                surface_muted: Color::Indexed(238),
                border: Color::Indexed(240),

                text: Color::Indexed(255),
                text_secondary: Color::Indexed(250),
                text_muted: Color::Indexed(245),

                accent_primary: Color::Indexed(179),
                accent_secondary: Color::Indexed(115),

                warning: Color::Indexed(221),
                error: Color::Indexed(174),

                selection_bg: Color::Indexed(238),
                selection_fg: Color::Indexed(255),
                focus: Color::Indexed(115),
            },
        }
    }
}

impl Default for Ansi256Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for Ansi256Theme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}
