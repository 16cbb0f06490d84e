//! Header bar component.
//!
//! Displays the application title, the current screen, and the archive size.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

/// The header bar component.
///
/// Displays:
/// - Application title
/// - Current screen title
/// - Total record count
/// - Help indicator
pub struct HeaderBar {
    /// Title of the current screen.
    screen_title: String,
    /// Total number of archived records.
    record_count: u64,
}

impl HeaderBar {
    /// Creates a new header bar.
    #[must_use]
    pub const fn new(screen_title: String, record_count: u64) -> Self {
        Self {
            screen_title,
            record_count,
        }
    }
}

impl Widget for &HeaderBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let screen_style = Style::default().fg(Color::White);
        let count_style = Style::default().fg(Color::Green);
        let help_style = Style::default().fg(Color::Yellow);

        let line = Line::from(vec![
            Span::styled("climascope", title_style),
            Span::raw(" │ "),
            Span::styled(self.screen_title.clone(), screen_style),
            Span::raw(" │ "),
            Span::styled(format!("{} records", self.record_count), count_style),
            Span::raw(" │ "),
            Span::styled("? for help", help_style),
        ]);

        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray));

        let paragraph = Paragraph::new(line).block(block);
        paragraph.render(area, buf);
    }
}
