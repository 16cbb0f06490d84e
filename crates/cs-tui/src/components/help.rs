//! Help panel component.
//!
//! Displays a modal overlay with key bindings.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Cell, Clear, Row, Table, Widget};

use crate::theme::Theme;

/// Key binding definition for the help panel.
struct KeyBinding {
    /// The key(s) to press.
    key: &'static str,
    /// Description of what the key does.
    description: &'static str,
}

/// Static list of key bindings to display.
const KEY_BINDINGS: &[KeyBinding] = &[
    KeyBinding {
        key: "1-9",
        description: "Choose a menu entry directly",
    },
    KeyBinding {
        key: "j / ↓",
        description: "Next entry",
    },
    KeyBinding {
        key: "k / ↑",
        description: "Previous entry",
    },
    KeyBinding {
        key: "g / Home",
        description: "First entry",
    },
    KeyBinding {
        key: "G / End",
        description: "Last entry",
    },
    KeyBinding {
        key: "Enter",
        description: "Open the selected entry",
    },
    KeyBinding {
        key: "Esc / Backspace",
        description: "Back to the previous screen",
    },
    KeyBinding {
        key: "m",
        description: "Back to the home screen",
    },
    KeyBinding {
        key: "?",
        description: "Toggle this help panel",
    },
    KeyBinding {
        key: "q / Ctrl+c",
        description: "Quit",
    },
];

/// A help panel overlay widget.
///
/// Displays key bindings in a table format as a modal overlay.
pub struct HelpPanel<'a> {
    /// Theme for styling.
    theme: &'a Theme,
}

impl<'a> HelpPanel<'a> {
    /// Creates a new help panel.
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    /// Builds the table rows from key bindings.
    fn build_rows(&self) -> Vec<Row<'static>> {
        KEY_BINDINGS
            .iter()
            .map(|binding| {
                Row::new(vec![
                    Cell::from(Span::styled(
                        binding.key,
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    )),
                    Cell::from(Span::styled(binding.description, self.theme.base_style())),
                ])
            })
            .collect()
    }
}

impl Widget for &HelpPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Clear the area first for overlay effect
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.focused_border_style)
            .title(Span::styled(
                " Help - Key Bindings ",
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
            ))
            .style(Style::default().bg(Color::Rgb(25, 25, 35)));

        let header = Row::new(vec![
            Cell::from(Span::styled(
                "Key",
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )),
            Cell::from(Span::styled(
                "Action",
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )),
        ])
        .height(1)
        .bottom_margin(1);

        let rows = self.build_rows();

        let widths = [Constraint::Length(18), Constraint::Min(25)];

        let table = Table::new(rows, widths)
            .block(block)
            .header(header)
            .row_highlight_style(Style::default());

        table.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_panel_new() {
        let theme = Theme::dark();
        let _panel = HelpPanel::new(&theme);
    }

    #[test]
    fn test_key_bindings_not_empty() {
        assert!(!KEY_BINDINGS.is_empty());
    }
}
