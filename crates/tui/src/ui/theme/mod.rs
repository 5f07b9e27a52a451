//! Theme styling module for the TUI UI layer.
//!
//! Defines the semantic theme roles, a truecolor palette, an ANSI 256-color
//! fallback, and helper builders for Ratatui widgets and styles. Prefer these
//! helpers over hard-coding colors.

use std::env;

use tracing::debug;

pub mod ansi256;
pub mod medina;
pub mod roles;
pub mod theme_helpers;

pub use ansi256::Ansi256Theme;
pub use medina::MedinaTheme;
pub use roles::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColorCapability {
    Truecolor,
    Ansi256,
}

/// Selects a theme based on terminal capabilities.
pub fn load() -> Box<dyn Theme> {
    match detect_color_capability() {
        ColorCapability::Truecolor => Box::new(MedinaTheme::new()),
        ColorCapability::Ansi256 => {
            debug!("ANSI-only terminal detected; using the indexed fallback palette.");
            Box::new(Ansi256Theme::new())
        }
    }
}

fn detect_color_capability() -> ColorCapability {
    if env::var("MAKTABA_FORCE_TRUECOLOR")
        .ok()
        .map(|value| is_truthy(value.trim()))
        .unwrap_or(false)
    {
        return ColorCapability::Truecolor;
    }

    let color_term = env::var("COLORTERM").unwrap_or_default().to_ascii_lowercase();
    if color_term.contains("truecolor") || color_term.contains("24bit") {
        return ColorCapability::Truecolor;
    }

    let term = env::var("TERM").unwrap_or_default().to_ascii_lowercase();
    if term.contains("truecolor") {
        return ColorCapability::Truecolor;
    }

    ColorCapability::Ansi256
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on" | "enable" | "enabled"
    )
}
