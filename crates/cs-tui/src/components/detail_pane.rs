//! Detail pane component.
//!
//! Renders the right-hand side of the screen: record details, advisory
//! bullets, search reports, and the static site pages.

use cs_core::TyphoonRecord;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};

use crate::app::App;
use crate::components::stats_panel::format_peso;
use crate::screen::Screen;
use crate::theme::Theme;

/// Tagline shown on the home and about screens.
const TAGLINE: &str =
    "ClimaScope: Tracking, Impact, and Climate Solutions for Philippine Typhoons.";

/// Description paragraph shown on the home and about screens.
const DESCRIPTION: &str = "ClimaScope is a comprehensive platform that tracks typhoons in the \
    Philippines, analyzes their impact, and provides climate-smart solutions to support \
    preparedness and resilience.";

/// Contact page entries (label, value).
const CONTACT: &[(&str, &str)] = &[
    (
        "Location",
        "629 J. Nepomuceno Street, Quiapo, Manila, Philippines 1001",
    ),
    ("Email", "info@climascopo.ph"),
    ("Telephone", "+63 2 123 4567"),
    (
        "Facebook",
        "www.Facebook.com/clima-scope/jfdihiefuh483nUT7GAYUYgubed/source=?/k",
    ),
    ("X", "www.twitter.com/climascopo"),
    ("Instagram", "www.instagram.com/climascopo"),
];

/// Shown when a month screen has no records to display.
const NO_MONTH_RECORDS: &str = "No typhoons recorded for this month.";

/// The detail pane for the current screen and selection.
pub struct DetailPane<'a> {
    /// The application state.
    app: &'a App,
    /// Theme for styling.
    theme: &'a Theme,
}

impl<'a> DetailPane<'a> {
    /// Creates a new detail pane.
    #[must_use]
    pub const fn new(app: &'a App, theme: &'a Theme) -> Self {
        Self { app, theme }
    }

    /// Builds the pane content for the current screen.
    fn build_lines(&self) -> Vec<Line<'static>> {
        match self.app.screen {
            Screen::Home => self.home_lines(),
            Screen::Years => self.years_lines(),
            Screen::Months { season } => self.months_lines(season),
            Screen::Records { season, month } => self.records_lines(season, month),
            Screen::Advisories { season } => self.advisories_lines(season),
            Screen::Search => self.search_lines(),
            Screen::SearchResult { kind } => self.search_result_lines(kind),
            Screen::SiteMenu => vec![
                self.dimmed("Home returns to the start screen."),
                self.dimmed("Contact, Settings, and About open site pages."),
            ],
            Screen::Contact => self.contact_lines(),
            Screen::Settings => self.settings_lines(),
            Screen::About => self.about_lines(),
        }
    }

    fn home_lines(&self) -> Vec<Line<'static>> {
        vec![
            self.titled(TAGLINE),
            Line::default(),
            self.plain(DESCRIPTION),
            Line::default(),
            self.dimmed("Choose an entry with 1-9, or j/k and Enter."),
        ]
    }

    fn years_lines(&self) -> Vec<Line<'static>> {
        let Some(&season) = self
            .app
            .menu
            .selected
            .and_then(|i| self.app.archive().seasons().get(i))
        else {
            return Vec::new();
        };

        let records = self.app.archive().season(season).map_or(0, <[_]>::len);
        let months = self.app.months(season).len();
        vec![
            self.titled(&format!("{season} Typhoon Season")),
            Line::default(),
            self.field("Records", &records.to_string()),
            self.field("Active months", &months.to_string()),
        ]
    }

    fn months_lines(&self, season: u16) -> Vec<Line<'static>> {
        let months = self.app.months(season);
        match self.app.menu.selected {
            Some(i) if i < months.len() => {
                let count = self.app.month_records(season, months[i]).len();
                vec![
                    self.titled(&format!("{} {season}", months[i].label())),
                    Line::default(),
                    self.field("Typhoons", &count.to_string()),
                ]
            }
            Some(_) => vec![self.dimmed(
                "Resolutions and recommendations drawn up after the season.",
            )],
            None => Vec::new(),
        }
    }

    fn records_lines(&self, season: u16, month: cs_core::Month) -> Vec<Line<'static>> {
        if self.app.month_records(season, month).is_empty() {
            return vec![self.plain(NO_MONTH_RECORDS)];
        }

        self.app
            .selected_record()
            .map(|record| self.record_lines(record))
            .unwrap_or_default()
    }

    /// Builds the full field listing for one record.
    fn record_lines(&self, record: &TyphoonRecord) -> Vec<Line<'static>> {
        let level = record.level();
        let mut lines = vec![
            Line::from(vec![
                Span::styled(
                    record.name.clone(),
                    self.theme.accent_style().add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                Span::styled(
                    Theme::level_indicator(level).to_owned(),
                    self.theme.level_style(level),
                ),
            ]),
            Line::default(),
            self.field("Category", &record.category),
            self.field("Arrival", &record.arrival),
            self.field("Departure", &record.departure),
            self.field("Stay", &format!("{} days", record.interval)),
            self.field("Crossing", record.crossing.label()),
        ];

        if let Some(time) = record.landfall_time() {
            lines.push(self.field("Landfall", time));
        } else {
            lines.push(self.field("Landfall", "None"));
        }

        lines.push(self.field("Developed", record.developed.label()));
        lines.push(self.field("Path", &record.path));
        lines.push(self.field("Wind speed", &format!("{} km/h", record.wind_speed_kph)));
        lines.push(self.field("Casualties", &record.casualties.to_string()));
        lines.push(self.field("Damage", &format_peso(record.damage_php)));

        lines.push(Line::default());
        lines.push(self.dimmed("Affected places:"));
        for place in record.places() {
            lines.push(self.plain(&format!("  • {place}")));
        }

        lines
    }

    fn advisories_lines(&self, season: u16) -> Vec<Line<'static>> {
        let Some(sections) = cs_archive::advisories::for_season(season) else {
            return Vec::new();
        };
        let Some(section) = self.app.menu.selected.and_then(|i| sections.get(i)) else {
            return Vec::new();
        };

        let mut lines = vec![self.titled(section.title), Line::default()];
        for bullet in &section.bullets {
            lines.push(self.plain(&format!("• {bullet}")));
            lines.push(Line::default());
        }
        lines
    }

    fn search_lines(&self) -> Vec<Line<'static>> {
        let Some(&kind) = self
            .app
            .menu
            .selected
            .and_then(|i| cs_query::SearchKind::ALL.get(i))
        else {
            return Vec::new();
        };

        vec![
            self.titled(kind.title()),
            Line::default(),
            self.plain(kind.commentary()),
        ]
    }

    fn search_result_lines(&self, kind: cs_query::SearchKind) -> Vec<Line<'static>> {
        let report = self.app.search_report(kind);

        let mut lines = vec![self.titled(report.title), Line::default()];
        for line in &report.lines {
            lines.push(self.plain(line));
        }
        lines.push(Line::default());
        lines.push(self.dimmed(report.commentary));
        lines
    }

    fn contact_lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![self.titled("Get in touch"), Line::default()];
        for (label, value) in CONTACT {
            lines.push(self.field(label, value));
        }
        lines
    }

    fn settings_lines(&self) -> Vec<Line<'static>> {
        vec![
            self.field("Color scheme", self.app.config.tui.color_scheme.label()),
            Line::default(),
            self.dimmed("Pick a mode to apply it immediately."),
        ]
    }

    fn about_lines(&self) -> Vec<Line<'static>> {
        vec![
            self.titled(TAGLINE),
            Line::default(),
            self.plain(DESCRIPTION),
        ]
    }

    // Line helpers

    fn titled(&self, text: &str) -> Line<'static> {
        Line::from(Span::styled(
            text.to_owned(),
            self.theme.accent_style().add_modifier(Modifier::BOLD),
        ))
    }

    fn plain(&self, text: &str) -> Line<'static> {
        Line::from(Span::styled(text.to_owned(), self.theme.base_style()))
    }

    fn dimmed(&self, text: &str) -> Line<'static> {
        Line::from(Span::styled(text.to_owned(), self.theme.dimmed_style()))
    }

    fn field(&self, label: &str, value: &str) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("{label}: "), self.theme.dimmed_style()),
            Span::styled(value.to_owned(), self.theme.base_style()),
        ])
    }
}

impl Widget for &DetailPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style)
            .title(Span::styled(" Details ", self.theme.header_style));

        let paragraph = Paragraph::new(self.build_lines())
            .block(block)
            .wrap(Wrap { trim: true });
        paragraph.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;
    use cs_core::Config;

    #[test]
    fn test_record_detail_includes_places() {
        let mut app = App::new(Config::default());
        app.update(Action::Choose(0)); // Years
        app.update(Action::Choose(0)); // 2024
        app.update(Action::Choose(0)); // May

        let theme = Theme::dark();
        let pane = DetailPane::new(&app, &theme);
        let lines = pane.build_lines();

        let text: Vec<String> = lines.iter().map(ToString::to_string).collect();
        assert!(text[0].contains("Aghon"));
        assert!(text.iter().any(|l| l.contains("km/h")));
        assert!(text.iter().any(|l| l.starts_with("  • ")));
    }

    #[test]
    fn test_contact_lines_have_all_channels() {
        let mut app = App::new(Config::default());
        app.update(Action::Choose(2)); // Site menu
        app.update(Action::Choose(1)); // Contact

        let theme = Theme::dark();
        let pane = DetailPane::new(&app, &theme);
        let lines = pane.build_lines();

        let text: Vec<String> = lines.iter().map(ToString::to_string).collect();
        assert!(text.iter().any(|l| l.contains("info@climascopo.ph")));
        assert!(text.iter().any(|l| l.contains("Instagram")));
    }

    #[test]
    fn test_search_result_report_rendered() {
        let mut app = App::new(Config::default());
        app.update(Action::Choose(1)); // Search
        app.update(Action::Choose(0)); // Strongest

        let theme = Theme::dark();
        let pane = DetailPane::new(&app, &theme);
        let lines = pane.build_lines();

        let text: Vec<String> = lines.iter().map(ToString::to_string).collect();
        assert_eq!(text[0], "Top 3 Strongest Typhoons from 2024 - 2025");
        assert!(text.iter().any(|l| l.contains("Nando")));
    }
}
