//! Archive stats strip.
//!
//! Displays the archive totals and the per-level breakdown.

use cs_archive::ArchiveStats;
use cs_core::StormLevel;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::theme::Theme;

/// The archive stats strip.
pub struct StatsPanel<'a> {
    /// Archive totals.
    stats: &'a ArchiveStats,
    /// Theme for styling.
    theme: &'a Theme,
}

impl<'a> StatsPanel<'a> {
    /// Creates a new stats panel.
    #[must_use]
    pub const fn new(stats: &'a ArchiveStats, theme: &'a Theme) -> Self {
        Self { stats, theme }
    }

    /// Builds the totals line.
    fn totals_line(&self) -> Line<'a> {
        Line::from(vec![
            Span::styled("Records: ", self.theme.dimmed_style()),
            Span::styled(self.stats.records.to_string(), self.theme.base_style()),
            Span::raw(" │ "),
            Span::styled("Landfalls: ", self.theme.dimmed_style()),
            Span::styled(
                format!(
                    "{} ({:.0}%)",
                    self.stats.landfalls,
                    self.stats.landfall_percent()
                ),
                self.theme.base_style(),
            ),
            Span::raw(" │ "),
            Span::styled("Casualties: ", self.theme.dimmed_style()),
            Span::styled(self.stats.casualties.to_string(), self.theme.base_style()),
            Span::raw(" │ "),
            Span::styled("Damage: ", self.theme.dimmed_style()),
            Span::styled(format_peso(self.stats.damage_php), self.theme.base_style()),
        ])
    }

    /// Builds the per-level breakdown line.
    fn levels_line(&self) -> Line<'a> {
        let counts = [
            (StormLevel::TropicalDepression, self.stats.depressions),
            (StormLevel::TropicalStorm, self.stats.storms),
            (StormLevel::SevereTropicalStorm, self.stats.severe_storms),
            (StormLevel::Typhoon, self.stats.typhoons),
            (StormLevel::SuperTyphoon, self.stats.super_typhoons),
        ];

        let mut spans = Vec::new();
        for (i, (level, count)) in counts.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(
                format!("{} {count}", Theme::level_indicator(level)),
                self.theme.level_style(level),
            ));
        }
        if self.stats.unclassified > 0 {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                format!(
                    "{} {}",
                    Theme::level_indicator(StormLevel::Unclassified),
                    self.stats.unclassified
                ),
                self.theme.level_style(StormLevel::Unclassified),
            ));
        }

        Line::from(spans)
    }
}

impl Widget for &StatsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(ratatui::style::Color::DarkGray));

        let paragraph =
            Paragraph::new(vec![self.totals_line(), self.levels_line()]).block(block);
        paragraph.render(area, buf);
    }
}

/// Formats a peso amount with thousands separators.
#[must_use]
pub fn format_peso(amount: f64) -> String {
    // Amounts in the archive are whole pesos well within u64 range.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let whole = amount.max(0.0) as u64;
    format!("PHP {}", group_thousands(whole))
}

/// Inserts comma separators into a whole number.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(196_700_000_000), "196,700,000,000");
    }

    #[test]
    fn test_format_peso() {
        assert_eq!(format_peso(6_300_000.0), "PHP 6,300,000");
        assert_eq!(format_peso(0.0), "PHP 0");
        assert_eq!(format_peso(-5.0), "PHP 0");
    }
}
