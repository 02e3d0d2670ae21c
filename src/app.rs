//! Application state and event handling
//!
//! This is the glue of mmconv, managing:
//! - The active tab and the conversion session
//! - Event handling (keyboard input)
//! - Theme resolution and the persisted theme override

use crate::config::Config;
use crate::session::Session;
use crate::types::Tab;
use crate::ui::Theme;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

/// How long a flash message stays visible
const FLASH_SECS: u64 = 3;

/// Main application state
pub struct App {
    pub should_quit: bool,
    pub active_tab: Tab,
    pub config: Config,
    pub theme: Theme,
    pub session: Session,

    // Flash message (temporary feedback)
    pub flash_message: Option<(String, bool, Instant)>, // (message, is_error, timestamp)

    // Last probed terminal scheme, kept so a change re-resolves the theme
    dark_mode_active: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: Config, dark_mode_active: bool) -> Self {
        let theme = Theme::resolve(config.theme, dark_mode_active);

        Self {
            should_quit: false,
            active_tab: Tab::Converter,
            config,
            theme,
            session: Session::new(),
            flash_message: None,
            dark_mode_active,
        }
    }

    /// Feed in the freshly probed terminal scheme; re-resolves the theme
    /// when the report changed.
    pub fn sync_appearance(&mut self, dark_mode_active: bool) {
        if self.dark_mode_active != dark_mode_active {
            self.dark_mode_active = dark_mode_active;
            self.theme = Theme::resolve(self.config.theme, dark_mode_active);
        }
    }

    /// Per-frame housekeeping: expire old flash messages.
    pub fn tick(&mut self) {
        if let Some((_, _, instant)) = &self.flash_message {
            if instant.elapsed().as_secs() >= FLASH_SECS {
                self.flash_message = None;
            }
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Global keys (work in all tabs)
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.active_tab = self.active_tab.next();
                return;
            }
            _ => {}
        }

        match self.active_tab {
            Tab::Converter => self.handle_converter_key(key),
            Tab::Info => self.handle_info_key(key),
        }
    }

    /// Handle keys in the Converter tab
    fn handle_converter_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                // Guarded save; invalid input is a silent no-op
                if let Some(entry) = self.session.save() {
                    self.show_flash(&format!("Saved {}", entry.display()), false);
                }
            }
            KeyCode::Esc => {
                self.session.clear();
            }
            KeyCode::Backspace => {
                self.session.pop_char();
            }
            KeyCode::Char(c)
                if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
            {
                self.session.push_char(c);
            }
            _ => {}
        }
    }

    /// Handle keys in the Info tab
    fn handle_info_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
            }
            KeyCode::Char('t') | KeyCode::Enter => {
                self.cycle_theme_mode();
            }
            _ => {}
        }
    }

    /// Cycle the theme override (auto → light → dark) and persist it.
    fn cycle_theme_mode(&mut self) {
        self.config.theme = self.config.theme.next();
        self.theme = Theme::resolve(self.config.theme, self.dark_mode_active);

        match self.config.save() {
            Ok(()) => self.show_flash(&format!("Theme: {}", self.config.theme.as_str()), false),
            Err(e) => self.show_flash(&format!("Save failed: {}", e), true),
        }
    }

    /// Show a flash message
    fn show_flash(&mut self, message: &str, is_error: bool) {
        self.flash_message = Some((message.into(), is_error, Instant::now()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ThemeMode;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn test_app() -> App {
        App::new(Config::default(), true)
    }

    #[test]
    fn test_typing_feeds_the_session() {
        let mut app = test_app();
        app.handle_key(key(KeyCode::Char('2')));
        app.handle_key(key(KeyCode::Char('5')));
        app.handle_key(key(KeyCode::Char('.')));
        app.handle_key(key(KeyCode::Char('4')));

        assert_eq!(app.session.input(), "25.4");
        assert_eq!(app.session.output(), "1.00000");

        app.handle_key(key(KeyCode::Backspace));
        assert_eq!(app.session.input(), "25.");
    }

    #[test]
    fn test_enter_saves_and_flashes() {
        let mut app = test_app();
        app.handle_key(key(KeyCode::Char('5')));
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.session.history().len(), 1);
        assert_eq!(app.session.input(), "");
        let (msg, is_error, _) = app.flash_message.clone().expect("save flashes");
        assert_eq!(msg, "Saved 5 mm → 0.19685 in");
        assert!(!is_error);
    }

    #[test]
    fn test_enter_with_invalid_input_is_silent() {
        let mut app = test_app();
        app.handle_key(key(KeyCode::Char('x')));
        app.handle_key(key(KeyCode::Enter));

        assert!(app.session.history().is_empty());
        assert_eq!(app.session.input(), "x");
        assert!(app.flash_message.is_none());
    }

    #[test]
    fn test_esc_clears_input_not_history() {
        let mut app = test_app();
        app.handle_key(key(KeyCode::Char('5')));
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Char('7')));

        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.session.input(), "");
        assert_eq!(app.session.output(), "0.00000");
        assert_eq!(app.session.history().len(), 1);
    }

    #[test]
    fn test_tab_switches_tabs() {
        let mut app = test_app();
        assert_eq!(app.active_tab, Tab::Converter);
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.active_tab, Tab::Info);
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.active_tab, Tab::Converter);
    }

    #[test]
    fn test_q_quits_only_on_info_tab() {
        let mut app = test_app();
        app.handle_key(key(KeyCode::Char('q')));
        assert!(!app.should_quit);
        assert_eq!(app.session.input(), "q");

        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let mut app = test_app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn test_sync_appearance_reresolves_in_auto_mode() {
        let mut app = test_app();
        assert_eq!(app.config.theme, ThemeMode::Auto);
        assert!(app.theme.is_dark);

        app.sync_appearance(false);
        assert!(!app.theme.is_dark);

        app.sync_appearance(true);
        assert!(app.theme.is_dark);
    }

    #[test]
    fn test_explicit_mode_ignores_probe_changes() {
        let mut app = App::new(Config { theme: ThemeMode::Light }, true);
        assert!(!app.theme.is_dark);

        app.sync_appearance(false);
        app.sync_appearance(true);
        assert!(!app.theme.is_dark);
    }
}
