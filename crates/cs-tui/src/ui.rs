//! Main UI layout and rendering orchestration.
//!
//! This module provides the main [`render`] function that orchestrates
//! rendering of all UI components based on the current application state.
//!
//! # Layout Structure
//!
//! ```text
//! +------------------------------------------------------------------+
//! | Header: climascope | 2024 Season | 40 records | ? for help       |
//! +------------------------------------------------------------------+
//! | Records: 40 | Landfalls: 26 (65%) | Casualties: ... | Damage: ...|
//! +------------------------------------------------------------------+
//! |  Menu                              |  Details                     |
//! |  ----------------------------------|  --------------------------- |
//! |  > 1. May                          |  Aghon [STS]                 |
//! |    2. July                         |  Category: Severe Tropical.. |
//! |    ...                             |  ...                         |
//! +------------------------------------------------------------------+
//! | NORMAL | Invalid choice. | 1-9 choose | Esc back | m home | q ...|
//! +------------------------------------------------------------------+
//! ```

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::app::{App, AppMode};
use crate::components::{DetailPane, HeaderBar, HelpPanel, MenuList, StatsPanel, StatusBar};

/// Renders the entire UI based on the current application state.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();
    let theme = &app.theme;

    // Main vertical layout:
    // - Header (2 lines)
    // - Stats strip (3 lines)
    // - Main Content (flexible)
    // - Status bar (1 line)
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(1),
        ])
        .split(area);

    // Render header
    let header = HeaderBar::new(app.screen.title(), app.stats.records);
    frame.render_widget(&header, main_chunks[0]);

    // Render stats strip
    let stats_panel = StatsPanel::new(&app.stats, theme);
    frame.render_widget(&stats_panel, main_chunks[1]);

    // Render main content (menu + details)
    render_main_content(app, frame, main_chunks[2]);

    // Render status bar
    let status_bar = StatusBar::new(app, theme);
    frame.render_widget(&status_bar, main_chunks[3]);

    // Render help panel overlay if in help mode
    if app.mode == AppMode::Help {
        let help_panel = HelpPanel::new(theme);
        let help_area = centered_rect(60, 70, area);
        frame.render_widget(&help_panel, help_area);
    }
}

/// Renders the main content area (menu list and detail pane).
fn render_main_content(app: &App, frame: &mut Frame, area: Rect) {
    let theme = &app.theme;
    let entries = app.entries();

    // Screens without a menu give the whole area to the detail pane.
    if entries.is_empty() {
        let detail_pane = DetailPane::new(app, theme);
        frame.render_widget(&detail_pane, area);
        return;
    }

    // Split horizontally: menu (40%) | details (60%)
    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let menu = MenuList::new(&entries, &app.menu, app.screen.title(), theme);
    frame.render_widget(&menu, content_chunks[0]);

    let detail_pane = DetailPane::new(app, theme);
    frame.render_widget(&detail_pane, content_chunks[1]);
}

/// Creates a centered rectangle with the given percentage width and height.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 100);
        let centered = centered_rect(50, 50, area);

        // Should be roughly centered
        assert!(centered.x > 0);
        assert!(centered.y > 0);
        assert!(centered.width < area.width);
        assert!(centered.height < area.height);
    }
}
