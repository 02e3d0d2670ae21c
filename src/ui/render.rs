//! Main rendering module
//!
//! Handles rendering the complete UI including:
//! - Header with tab bar
//! - Converter and Info tab content
//! - Status bar and flash messages

use crate::app::App;
use crate::convert::{DISPLAY_PRECISION, MM_TO_IN};
use crate::session::HISTORY_CAP;
use crate::types::Tab;
use crate::ui::widgets;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

/// Main render function - entry point for all UI rendering
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Main layout: header, content, status bar
    let layout = Layout::vertical([
        Constraint::Length(3),  // Header + tabs
        Constraint::Min(10),    // Content
        Constraint::Length(1),  // Status bar
    ])
    .split(area);

    render_header(frame, app, layout[0]);
    render_tab_content(frame, app, layout[1]);
    render_status_bar(frame, app, layout[2]);

    // Flash message (success/error feedback)
    if let Some((msg, is_error, _)) = &app.flash_message {
        widgets::render_flash_message(frame, msg, *is_error, &app.theme, area);
    }
}

/// Render header with app name and tab bar
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let header_block = Block::default()
        .style(theme.block_style())
        .title(" mmconv · millimeters → inches ")
        .title_style(theme.title())
        .borders(Borders::BOTTOM)
        .border_style(theme.border());

    frame.render_widget(header_block, area);

    let tab_titles: Vec<Line> = Tab::all()
        .iter()
        .map(|tab| {
            let style = if app.active_tab == *tab {
                theme.tab_active()
            } else {
                theme.tab_inactive()
            };
            Line::styled(tab.label(), style)
        })
        .collect();

    let tabs = Tabs::new(tab_titles)
        .select(app.active_tab.index())
        .divider(" │ ")
        .style(theme.text());

    let tabs_area = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: 1,
    };
    frame.render_widget(tabs, tabs_area);
}

/// Render the active tab's content
fn render_tab_content(frame: &mut Frame, app: &App, area: Rect) {
    match app.active_tab {
        Tab::Converter => render_converter_tab(frame, app, area),
        Tab::Info => render_info_tab(frame, app, area),
    }
}

/// Render status bar with keybindings
fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let hints = match app.active_tab {
        Tab::Converter => "[Enter] Save  [Esc] Clear  [Backspace] Edit  [Tab] Info  [Ctrl+C] Quit",
        Tab::Info => "[t] Change Theme  [Tab] Converter  [q] Quit",
    };

    widgets::render_status_bar(frame, hints, theme.label(), theme, area);
}

// === TAB RENDERERS ===

/// Converter tab: input field, converted output, save/clear actions, history
fn render_converter_tab(frame: &mut Frame, app: &App, area: Rect) {
    let panels = Layout::vertical([
        Constraint::Length(10), // Conversion card
        Constraint::Min(4),     // History card
    ])
    .split(area);

    render_conversion_card(frame, app, panels[0]);
    render_history_card(frame, app, panels[1]);
}

/// The conversion card: labeled input, labeled output, action hints
fn render_conversion_card(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let block = Block::default()
        .style(theme.block_style())
        .title(" Convert ")
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_style(theme.border_focused());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let save_style = if app.session.can_save() {
        theme.text()
    } else {
        // mirrors the save guard: disabled until the input parses
        theme.text_dim()
    };

    let lines = vec![
        Line::styled("Millimeters (mm)", theme.text_dim()),
        Line::styled(format!("{}_", app.session.input()), theme.text()),
        Line::raw(""),
        Line::styled("Inches (in)", theme.text_dim()),
        Line::styled(app.session.output().to_string(), theme.value()),
        Line::raw(""),
        Line::from(vec![
            Span::styled("[Enter] Save", save_style),
            Span::styled("    ", theme.text()),
            Span::styled("[Esc] Clear", theme.text()),
        ]),
    ];

    let card = Paragraph::new(lines).style(theme.text());
    frame.render_widget(card, inner);
}

/// The history card: saved conversions, most recent first
fn render_history_card(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let history = app.session.history();

    let block = Block::default()
        .style(theme.block_style())
        .title(format!(" Conversion History ({}/{}) ", history.len(), HISTORY_CAP))
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_style(theme.border());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if history.is_empty() {
        let empty_msg = Paragraph::new("No saved conversions yet")
            .style(theme.text_dim())
            .alignment(Alignment::Center);
        frame.render_widget(empty_msg, inner);
        return;
    }

    let lines: Vec<Line> = history
        .iter()
        .map(|entry| {
            Line::from(vec![
                Span::styled(format!("{} mm", entry.millimeters), theme.text()),
                Span::styled(" → ", theme.text_dim()),
                Span::styled(format!("{} in", entry.inches), theme.text()),
            ])
        })
        .collect();

    let list = Paragraph::new(lines).style(theme.text());
    frame.render_widget(list, inner);
}

/// Info tab: about, appearance, precision, and usage sections
fn render_info_tab(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let block = Block::default()
        .style(theme.block_style())
        .title(" Info ")
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_style(theme.border_focused());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let row = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("{:<24}", label), theme.text()),
            Span::styled(value, theme.value()),
        ])
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("ℹ ", theme.value()),
            Span::styled(
                format!(
                    "This app converts millimeters to inches with precision to {} decimal places.",
                    DISPLAY_PRECISION
                ),
                theme.text(),
            ),
        ]),
        Line::raw(""),
        Line::styled("About", theme.title()),
        row("Version", env!("CARGO_PKG_VERSION").to_string()),
        row("Conversion Formula", format!("1 mm = {} in", MM_TO_IN)),
        row("Theme", theme.label().to_string()),
        Line::raw(""),
        Line::styled("Appearance", theme.title()),
        Line::styled(
            "The app adjusts to your terminal's reported color scheme.",
            theme.text(),
        ),
        row("Theme Mode", format!("[{}]", app.config.theme.as_str())),
        Line::raw(""),
        Line::styled("Precision", theme.title()),
        Line::styled(
            format!(
                "All conversions are displayed with {} decimal places.",
                DISPLAY_PRECISION
            ),
            theme.text(),
        ),
        Line::raw(""),
        Line::styled("How to Use", theme.title()),
        Line::styled("1. Enter a value in millimeters", theme.text()),
        Line::styled("2. See the converted value in inches", theme.text()),
        Line::styled("3. Press Enter to save conversions to the history", theme.text()),
    ];

    let content = Paragraph::new(lines).style(theme.text());
    frame.render_widget(content, inner);

    // Config path at bottom
    let config_path = crate::config::Config::path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| "Unknown".into());

    let path_area = Rect {
        x: inner.x,
        y: inner.y + inner.height.saturating_sub(1),
        width: inner.width,
        height: 1,
    };
    let path_widget = Paragraph::new(format!("Config: {}", config_path)).style(theme.text_dim());
    frame.render_widget(path_widget, path_area);
}
