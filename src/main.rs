//! mmconv - Millimeters to Inches Converter
//!
//! A TUI for converting millimeters to inches.
//!
//! Features:
//! - Live conversion as you type (5 decimal places)
//! - Save conversions to a bounded history (last 10)
//! - Light/dark theme following the terminal's color scheme
//!
//! Usage: mmconv

mod app;
mod config;
mod convert;
mod session;
mod types;
mod ui;

use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io::stdout;
use std::time::Duration;

fn main() -> Result<()> {
    // Parse arguments
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }

    if args.iter().any(|a| a == "--version" || a == "-v") {
        println!("mmconv {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Run the application
    let result = run_app();

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn print_help() {
    println!(
        r#"mmconv - Millimeters to Inches Converter

USAGE:
    mmconv [OPTIONS]

OPTIONS:
    -h, --help       Print help information
    -v, --version    Print version information

KEYBINDINGS:
    0-9 . -          Edit the millimeter value
    Enter            Save the conversion to the history
    Esc              Clear the input
    Tab              Switch tab
    t                Change theme (Info tab)
    q                Quit (Info tab)
    Ctrl+C           Quit

TABS:
    Converter        Convert millimeters to inches, view history
    Info             About, appearance, and usage information

CONFIG:
    ~/.config/mmconv/config.toml
"#
    );
}

fn run_app() -> Result<()> {
    // Load configuration
    let config = config::Config::load()
        .context("Failed to load configuration")?;
    if let Ok(path) = config::Config::path() {
        eprintln!("Config: {}", path.display());
    }

    // Probe the terminal's color scheme
    let dark_mode_active = ui::theme::dark_mode_active();
    eprintln!(
        "Terminal color scheme: {}",
        if dark_mode_active { "dark" } else { "light" }
    );

    // Create application state
    let mut app = App::new(config, dark_mode_active);

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .context("Failed to create terminal")?;

    // Run main loop
    let result = main_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

fn main_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        // Render UI
        terminal.draw(|frame| {
            ui::render(frame, app);
        })?;

        // Expire flash messages
        app.tick();

        // Re-sample the terminal scheme so a change is picked up while running
        app.sync_appearance(ui::theme::dark_mode_active());

        // Poll for events with timeout (for flash expiry)
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (not release)
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        // Check if should quit
        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_does_not_panic() {
        print_help();
    }
}
