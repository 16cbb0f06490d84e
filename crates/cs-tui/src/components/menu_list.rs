//! Menu list component.
//!
//! Displays the current screen's menu entries, numbered so the digit keys
//! line up with what is on screen.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, HighlightSpacing, List, ListItem, ListState, StatefulWidget, Widget};

use crate::app::MenuState;
use crate::theme::Theme;

/// The menu list for the current screen.
pub struct MenuList<'a> {
    /// The menu entries to display.
    entries: &'a [String],
    /// Selection state.
    state: &'a MenuState,
    /// Title of the surrounding block.
    title: String,
    /// Theme for styling.
    theme: &'a Theme,
}

impl<'a> MenuList<'a> {
    /// Creates a new menu list.
    #[must_use]
    pub const fn new(
        entries: &'a [String],
        state: &'a MenuState,
        title: String,
        theme: &'a Theme,
    ) -> Self {
        Self {
            entries,
            state,
            title,
            theme,
        }
    }

    /// Builds the list items, numbering the first nine entries.
    fn build_items(&self) -> Vec<ListItem<'a>> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let number = if i < 9 {
                    format!("{}. ", i + 1)
                } else {
                    "   ".to_owned()
                };
                ListItem::new(Line::from(vec![
                    Span::styled(number, self.theme.accent_style()),
                    Span::styled(entry.clone(), self.theme.base_style()),
                ]))
            })
            .collect()
    }
}

impl Widget for &MenuList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.focused_border_style)
            .title(Span::styled(
                format!(" {} ", self.title),
                self.theme.header_style,
            ));

        let list = List::new(self.build_items())
            .block(block)
            .highlight_style(self.theme.highlight_style)
            .highlight_spacing(HighlightSpacing::Always)
            .highlight_symbol("▸ ");

        let mut list_state = ListState::default();
        list_state.select(self.state.selected);

        StatefulWidget::render(list, area, buf, &mut list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbering_stops_after_nine() {
        let entries: Vec<String> = (0..12).map(|i| format!("entry {i}")).collect();
        let state = MenuState::default();
        let theme = Theme::dark();
        let list = MenuList::new(&entries, &state, "Test".to_owned(), &theme);

        let items = list.build_items();
        assert_eq!(items.len(), 12);
    }
}
