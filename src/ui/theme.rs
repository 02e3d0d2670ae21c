//! Theme definitions for mmconv
//!
//! Provides paired light and dark palettes and the appearance probe that
//! decides between them. The probe reads the terminal's reported color
//! scheme (the COLORFGBG convention); an explicit mode in the config
//! overrides it.

use crate::config::ThemeMode;
use ratatui::style::{Color, Modifier, Style};

/// Complete theme with all required colors
#[derive(Debug, Clone)]
pub struct Theme {
    /// True when this is the dark palette
    pub is_dark: bool,

    // Base colors
    pub bg: Color,
    pub fg: Color,
    pub fg_dim: Color,

    // Accent
    pub accent: Color,

    // Status colors
    pub success: Color,
    pub error: Color,

    // UI element colors
    pub border: Color,
    pub border_focused: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,
}

impl Theme {
    /// Resolve the active theme from the configured mode and the probed
    /// terminal scheme.
    pub fn resolve(mode: ThemeMode, dark_mode_active: bool) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Auto => {
                if dark_mode_active {
                    Self::dark()
                } else {
                    Self::light()
                }
            }
        }
    }

    /// Dark palette (default when the terminal reports nothing)
    pub fn dark() -> Self {
        Self {
            is_dark: true,

            bg: Color::Rgb(30, 30, 30),            // #1e1e1e
            fg: Color::Rgb(230, 230, 230),         // #e6e6e6
            fg_dim: Color::Rgb(150, 150, 150),     // #969696

            accent: Color::Rgb(10, 132, 255),      // #0a84ff

            success: Color::Rgb(48, 209, 88),      // #30d158
            error: Color::Rgb(255, 59, 48),        // #ff3b30

            border: Color::Rgb(80, 80, 80),        // #505050
            border_focused: Color::Rgb(10, 132, 255),
            selection_bg: Color::Rgb(60, 60, 60),  // #3c3c3c
            selection_fg: Color::Rgb(230, 230, 230),
        }
    }

    /// Light palette
    pub fn light() -> Self {
        Self {
            is_dark: false,

            bg: Color::Rgb(245, 245, 247),         // #f5f5f7
            fg: Color::Rgb(29, 29, 31),            // #1d1d1f
            fg_dim: Color::Rgb(134, 134, 139),     // #86868b

            accent: Color::Rgb(0, 122, 255),       // #007aff

            success: Color::Rgb(52, 199, 89),      // #34c759
            error: Color::Rgb(255, 59, 48),        // #ff3b30

            border: Color::Rgb(199, 199, 204),     // #c7c7cc
            border_focused: Color::Rgb(0, 122, 255),
            selection_bg: Color::Rgb(209, 209, 214), // #d1d1d6
            selection_fg: Color::Rgb(29, 29, 31),
        }
    }

    /// Label for the active palette ("Dark" or "Light")
    pub fn label(&self) -> &'static str {
        if self.is_dark { "Dark" } else { "Light" }
    }

    // Style helpers for common UI patterns

    /// Background fill for blocks
    pub fn block_style(&self) -> Style {
        Style::default().bg(self.bg)
    }

    /// Default text style
    pub fn text(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    /// Dimmed text style
    pub fn text_dim(&self) -> Style {
        Style::default().fg(self.fg_dim).bg(self.bg)
    }

    /// Title/header style
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .bg(self.bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Prominent value style (the converted result)
    pub fn value(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .bg(self.bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Selected item style
    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.selection_fg)
            .bg(self.selection_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Border style (unfocused)
    pub fn border(&self) -> Style {
        Style::default().fg(self.border).bg(self.bg)
    }

    /// Border style (focused)
    pub fn border_focused(&self) -> Style {
        Style::default().fg(self.border_focused).bg(self.bg)
    }

    /// Tab style (inactive)
    pub fn tab_inactive(&self) -> Style {
        Style::default().fg(self.fg_dim).bg(self.bg)
    }

    /// Tab style (active)
    pub fn tab_active(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .bg(self.bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Success message style
    pub fn success(&self) -> Style {
        Style::default().fg(self.success).bg(self.bg)
    }

    /// Error message style
    pub fn error(&self) -> Style {
        Style::default().fg(self.error).bg(self.bg)
    }
}

/// Probe the terminal's reported color scheme.
///
/// Sampled every event-loop tick; cheap enough that no caching is needed,
/// and a scheme change while running is picked up on the next tick.
pub fn dark_mode_active() -> bool {
    std::env::var("COLORFGBG")
        .ok()
        .and_then(|value| parse_colorfgbg(&value))
        // no report from the terminal: assume dark
        .unwrap_or(true)
}

/// Parse the COLORFGBG convention ("fg;bg" or "fg;default;bg") into a
/// dark-background boolean. Returns None when the value is malformed.
pub fn parse_colorfgbg(value: &str) -> Option<bool> {
    let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    // ANSI 0-6 and 8 are dark backgrounds; 7 and 15 are the light ones
    Some(matches!(bg, 0..=6 | 8))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_explicit_mode_wins_over_probe() {
        assert!(Theme::resolve(ThemeMode::Dark, false).is_dark);
        assert!(!Theme::resolve(ThemeMode::Light, true).is_dark);
    }

    #[test]
    fn test_resolve_auto_follows_probe() {
        assert!(Theme::resolve(ThemeMode::Auto, true).is_dark);
        assert!(!Theme::resolve(ThemeMode::Auto, false).is_dark);
    }

    #[test]
    fn test_palette_labels() {
        assert_eq!(Theme::dark().label(), "Dark");
        assert_eq!(Theme::light().label(), "Light");
    }

    #[test]
    fn test_parse_colorfgbg() {
        assert_eq!(parse_colorfgbg("15;0"), Some(true));
        assert_eq!(parse_colorfgbg("0;15"), Some(false));
        assert_eq!(parse_colorfgbg("12;default;0"), Some(true));
        assert_eq!(parse_colorfgbg("15;8"), Some(true));
        assert_eq!(parse_colorfgbg("0;7"), Some(false));
        assert_eq!(parse_colorfgbg(""), None);
        assert_eq!(parse_colorfgbg("garbage"), None);
    }
}
