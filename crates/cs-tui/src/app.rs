//! Application state and lifecycle management.
//!
//! This module provides the core [`App`] struct which manages the entire
//! application state: the archive, the screen stack, menu selection, and
//! the status bar.
//!
//! # Architecture
//!
//! ```text
//! App
//!  ├── archive: Archive           # Compiled-in typhoon records
//!  ├── screen: Screen             # Current screen
//!  ├── stack: Vec<Screen>         # Screens to return to (Esc)
//!  ├── menu: MenuState            # Selection within the current menu
//!  ├── mode: AppMode              # Normal or help overlay
//!  └── status: Option<StatusMessage>
//! ```

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use cs_archive::{Archive, ArchiveStats};
use cs_core::{ColorScheme, Config, Month, TyphoonRecord};
use cs_query::{SearchEngine, SearchKind, SearchReport};
use tracing::debug;

use crate::action::Action;
use crate::screen::Screen;
use crate::theme::Theme;

/// Menu entry appended after the months of a season.
pub const ADVISORIES_ENTRY: &str = "Season advisories";

/// Status text shown for an out-of-range or unknown choice.
pub const INVALID_CHOICE: &str = "Invalid choice.";

/// The current mode of the application UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    /// Normal menu navigation.
    #[default]
    Normal,

    /// Help overlay is displayed.
    Help,
}

/// Selection state for the current menu.
#[derive(Debug, Clone, Default)]
pub struct MenuState {
    /// Currently selected index (if the menu has entries).
    pub selected: Option<usize>,
}

impl MenuState {
    /// Resets the selection for a menu with `len` entries.
    pub fn reset(&mut self, len: usize) {
        self.selected = if len == 0 { None } else { Some(0) };
    }

    /// Moves selection to the next entry, wrapping at the end.
    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            self.selected = None;
            return;
        }

        self.selected = Some(match self.selected {
            Some(i) if i + 1 < len => i + 1,
            Some(_) | None => 0, // Wrap to start
        });
    }

    /// Moves selection to the previous entry, wrapping at the start.
    pub fn select_previous(&mut self, len: usize) {
        if len == 0 {
            self.selected = None;
            return;
        }

        self.selected = Some(match self.selected {
            Some(0) | None => len.saturating_sub(1), // Wrap to end
            Some(i) => i - 1,
        });
    }

    /// Moves selection to the first entry.
    pub fn select_first(&mut self, len: usize) {
        self.selected = if len == 0 { None } else { Some(0) };
    }

    /// Moves selection to the last entry.
    pub fn select_last(&mut self, len: usize) {
        self.selected = if len == 0 { None } else { Some(len - 1) };
    }

    /// Selects a specific entry by index.
    pub fn select(&mut self, index: usize, len: usize) {
        if index < len {
            self.selected = Some(index);
        }
    }
}

/// Status message to display in the status bar.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// The message text.
    pub text: String,

    /// When the message was created.
    pub timestamp: Instant,

    /// Whether this is an error message.
    pub is_error: bool,
}

impl StatusMessage {
    /// Creates a new info message.
    #[must_use]
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            timestamp: Instant::now(),
            is_error: false,
        }
    }

    /// Creates a new error message.
    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            timestamp: Instant::now(),
            is_error: true,
        }
    }

    /// Returns `true` if the message should be auto-hidden.
    ///
    /// Messages are hidden after 5 seconds.
    #[must_use]
    pub fn should_hide(&self) -> bool {
        self.timestamp.elapsed().as_secs() > 5
    }
}

/// The main application state.
pub struct App {
    /// The configuration.
    pub config: Config,

    /// The compiled-in archive.
    archive: Archive,

    /// Archive totals for the stats strip.
    pub stats: ArchiveStats,

    /// The active theme (changed from the settings screen).
    pub theme: Theme,

    /// The current screen.
    pub screen: Screen,

    /// Screens to return to.
    stack: Vec<Screen>,

    /// Menu selection state for the current screen.
    pub menu: MenuState,

    /// Current UI mode.
    pub mode: AppMode,

    /// Status message to display.
    pub status: Option<StatusMessage>,

    /// Whether the application should quit.
    pub should_quit: bool,
}

impl App {
    /// Creates a new application with the given configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let archive = Archive::new();
        let stats = archive.stats();
        let theme = Theme::from_scheme(config.tui.color_scheme);

        let mut app = Self {
            config,
            archive,
            stats,
            theme,
            screen: Screen::Home,
            stack: Vec::new(),
            menu: MenuState::default(),
            mode: AppMode::Normal,
            status: None,
            should_quit: false,
        };
        app.menu.reset(app.entries().len());
        app
    }

    /// Returns the archive.
    #[must_use]
    pub const fn archive(&self) -> &Archive {
        &self.archive
    }

    /// Returns the menu entries for the current screen.
    ///
    /// Screens without a menu (Contact, About, search results) return an
    /// empty list; their content lives in the detail pane.
    #[must_use]
    pub fn entries(&self) -> Vec<String> {
        match self.screen {
            Screen::Home => vec![
                "Browse seasons".to_owned(),
                "Search".to_owned(),
                "Menu".to_owned(),
                "Exit".to_owned(),
            ],
            Screen::Years => self
                .archive
                .seasons()
                .iter()
                .map(|season| format!("{season} Typhoon Season"))
                .collect(),
            Screen::Months { season } => {
                let mut entries: Vec<String> = self
                    .months(season)
                    .iter()
                    .map(|month| month.label().to_owned())
                    .collect();
                entries.push(ADVISORIES_ENTRY.to_owned());
                entries
            }
            Screen::Records { season, month } => self
                .month_records(season, month)
                .iter()
                .map(|record| record.name.clone())
                .collect(),
            Screen::Advisories { season } => cs_archive::advisories::for_season(season)
                .map(|sections| {
                    sections
                        .iter()
                        .map(|section| section.title.to_owned())
                        .collect()
                })
                .unwrap_or_default(),
            Screen::Search => SearchKind::ALL
                .iter()
                .map(|kind| kind.menu_label().to_owned())
                .collect(),
            Screen::SiteMenu => vec![
                "Home".to_owned(),
                "Contact".to_owned(),
                "Settings".to_owned(),
                "About".to_owned(),
            ],
            Screen::Settings => vec![
                "Dark mode".to_owned(),
                "Light mode".to_owned(),
                "Default mode".to_owned(),
            ],
            Screen::SearchResult { .. } | Screen::Contact | Screen::About => Vec::new(),
        }
    }

    /// Returns the months with records for a season, in calendar order.
    #[must_use]
    pub fn months(&self, season: u16) -> Vec<Month> {
        self.archive.months_with_records(season).unwrap_or_default()
    }

    /// Returns the records for one month of a season, in archive order.
    #[must_use]
    pub fn month_records(&self, season: u16, month: Month) -> Vec<&TyphoonRecord> {
        self.archive.month_records(season, month).unwrap_or_default()
    }

    /// Returns the record selected on a records screen, if any.
    #[must_use]
    pub fn selected_record(&self) -> Option<&TyphoonRecord> {
        if let Screen::Records { season, month } = self.screen {
            let records = self.month_records(season, month);
            self.menu.selected.and_then(|i| records.get(i).copied())
        } else {
            None
        }
    }

    /// Runs a canned search and returns its rendered report.
    #[must_use]
    pub fn search_report(&self, kind: SearchKind) -> SearchReport {
        SearchEngine::new(&self.archive, self.config.search).run(kind)
    }

    /// Handles a key event and returns the resulting action.
    #[must_use]
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        // Global quit handling
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        match self.mode {
            AppMode::Normal => Self::handle_normal_key(key),
            AppMode::Help => Self::handle_help_key(key),
        }
    }

    /// Handles a key event in normal mode.
    fn handle_normal_key(key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('?') => Action::ToggleHelp,
            KeyCode::Char('m') => Action::GoHome,
            KeyCode::Char('j') | KeyCode::Down => Action::NextItem,
            KeyCode::Char('k') | KeyCode::Up => Action::PreviousItem,
            KeyCode::Char('g') | KeyCode::Home => Action::FirstItem,
            KeyCode::Char('G') | KeyCode::End => Action::LastItem,
            KeyCode::Enter => Action::Activate,
            KeyCode::Esc | KeyCode::Backspace => Action::Back,
            KeyCode::Char(c @ '1'..='9') => c
                .to_digit(10)
                .map_or(Action::None, |d| Action::Choose(d as usize - 1)),
            KeyCode::Char(_) => Action::InvalidChoice,
            _ => Action::None,
        }
    }

    /// Handles a key event while the help overlay is shown.
    fn handle_help_key(key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q' | '?') => Action::HideHelp,
            _ => Action::None,
        }
    }

    /// Updates the application state based on an action.
    pub fn update(&mut self, action: Action) {
        let len = self.entries().len();

        match action {
            Action::Quit => self.should_quit = true,

            Action::NextItem => self.menu.select_next(len),
            Action::PreviousItem => self.menu.select_previous(len),
            Action::FirstItem => self.menu.select_first(len),
            Action::LastItem => self.menu.select_last(len),

            Action::Choose(index) => {
                if index < len {
                    self.menu.select(index, len);
                    self.activate(index);
                } else {
                    self.status = Some(StatusMessage::error(INVALID_CHOICE));
                }
            }
            Action::Activate => {
                if let Some(index) = self.menu.selected {
                    self.activate(index);
                }
            }

            Action::Back => self.pop_screen(),
            Action::GoHome => self.go_home(),

            Action::ToggleHelp => {
                self.mode = if self.mode == AppMode::Help {
                    AppMode::Normal
                } else {
                    AppMode::Help
                };
            }
            Action::HideHelp => self.mode = AppMode::Normal,

            Action::ShowStatus(text) => self.status = Some(StatusMessage::info(text)),
            Action::InvalidChoice => {
                self.status = Some(StatusMessage::error(INVALID_CHOICE));
            }
            Action::ClearStatus => self.status = None,

            Action::None => {}
        }
    }

    /// Handles a tick event (periodic update).
    pub fn tick(&mut self) {
        // Clear stale status messages
        if let Some(ref status) = self.status {
            if status.should_hide() {
                self.status = None;
            }
        }
    }

    /// Activates menu entry `index` on the current screen.
    fn activate(&mut self, index: usize) {
        match self.screen {
            Screen::Home => match index {
                0 => self.push_screen(Screen::Years),
                1 => self.push_screen(Screen::Search),
                2 => self.push_screen(Screen::SiteMenu),
                3 => self.should_quit = true,
                _ => self.status = Some(StatusMessage::error(INVALID_CHOICE)),
            },
            Screen::Years => {
                if let Some(&season) = self.archive.seasons().get(index) {
                    self.push_screen(Screen::Months { season });
                }
            }
            Screen::Months { season } => {
                let months = self.months(season);
                if let Some(&month) = months.get(index) {
                    self.push_screen(Screen::Records { season, month });
                } else if index == months.len() {
                    self.push_screen(Screen::Advisories { season });
                }
            }
            Screen::Search => {
                if let Some(&kind) = SearchKind::ALL.get(index) {
                    self.push_screen(Screen::SearchResult { kind });
                }
            }
            Screen::SiteMenu => match index {
                0 => self.go_home(),
                1 => self.push_screen(Screen::Contact),
                2 => self.push_screen(Screen::Settings),
                3 => self.push_screen(Screen::About),
                _ => self.status = Some(StatusMessage::error(INVALID_CHOICE)),
            },
            Screen::Settings => match index {
                0 => self.apply_scheme(ColorScheme::Dark, "Dark mode has been applied."),
                1 => self.apply_scheme(ColorScheme::Light, "Light mode has been applied."),
                2 => self.apply_scheme(ColorScheme::Auto, "Default mode has been applied."),
                _ => self.status = Some(StatusMessage::error(INVALID_CHOICE)),
            },

            // Selection-only screens: Enter keeps the detail pane in sync.
            Screen::Records { .. }
            | Screen::Advisories { .. }
            | Screen::SearchResult { .. }
            | Screen::Contact
            | Screen::About => {}
        }
    }

    /// Applies a color scheme and reports it in the status bar.
    fn apply_scheme(&mut self, scheme: ColorScheme, message: &str) {
        debug!(?scheme, "Applying color scheme");
        self.config.tui.color_scheme = scheme;
        self.theme = Theme::from_scheme(scheme);
        self.status = Some(StatusMessage::info(message));
    }

    /// Pushes a new screen onto the stack.
    fn push_screen(&mut self, screen: Screen) {
        debug!(?screen, "Entering screen");
        self.stack.push(self.screen);
        self.screen = screen;
        self.menu.reset(self.entries().len());
    }

    /// Pops back to the previous screen, if there is one.
    fn pop_screen(&mut self) {
        if let Some(previous) = self.stack.pop() {
            self.screen = previous;
            self.menu.reset(self.entries().len());
        }
    }

    /// Returns all the way to the home screen.
    fn go_home(&mut self) {
        self.stack.clear();
        self.screen = Screen::Home;
        self.menu.reset(self.entries().len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(Config::default())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_app_starts_at_home() {
        let app = app();
        assert_eq!(app.screen, Screen::Home);
        assert_eq!(app.menu.selected, Some(0));
        assert_eq!(app.entries().len(), 4);
    }

    #[test]
    fn test_key_bindings() {
        let mut app = app();
        assert_eq!(app.handle_key(key(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(app.handle_key(key(KeyCode::Char('3'))), Action::Choose(2));
        assert_eq!(app.handle_key(key(KeyCode::Char('j'))), Action::NextItem);
        assert_eq!(app.handle_key(key(KeyCode::Esc)), Action::Back);
        assert_eq!(app.handle_key(key(KeyCode::Char('x'))), Action::InvalidChoice);

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(app.handle_key(ctrl_c), Action::Quit);
    }

    #[test]
    fn test_browse_flow() {
        let mut app = app();

        app.update(Action::Choose(0));
        assert_eq!(app.screen, Screen::Years);

        app.update(Action::Choose(0));
        assert_eq!(app.screen, Screen::Months { season: 2024 });

        // May is the first month with records in 2024.
        let entries = app.entries();
        assert_eq!(entries[0], "May");
        assert_eq!(entries.last().map(String::as_str), Some(ADVISORIES_ENTRY));

        app.update(Action::Choose(0));
        assert_eq!(
            app.screen,
            Screen::Records {
                season: 2024,
                month: Month::May
            }
        );
        assert_eq!(app.selected_record().map(|r| r.name.as_str()), Some("Aghon"));

        app.update(Action::Back);
        assert_eq!(app.screen, Screen::Months { season: 2024 });
    }

    #[test]
    fn test_advisories_entry_is_last() {
        let mut app = app();
        app.update(Action::Choose(0));
        app.update(Action::Choose(1));
        assert_eq!(app.screen, Screen::Months { season: 2025 });

        let last = app.entries().len() - 1;
        app.update(Action::Choose(last));
        assert_eq!(app.screen, Screen::Advisories { season: 2025 });
        assert_eq!(app.entries().len(), 4);
    }

    #[test]
    fn test_search_flow() {
        let mut app = app();
        app.update(Action::Choose(1));
        assert_eq!(app.screen, Screen::Search);
        assert_eq!(app.entries().len(), 5);

        app.update(Action::Choose(3));
        assert_eq!(
            app.screen,
            Screen::SearchResult {
                kind: SearchKind::LongestStay
            }
        );
    }

    #[test]
    fn test_invalid_choice_sets_status() {
        let mut app = app();
        app.update(Action::Choose(8));

        let status = app.status.as_ref().unwrap();
        assert!(status.is_error);
        assert_eq!(status.text, INVALID_CHOICE);
        assert_eq!(app.screen, Screen::Home);
    }

    #[test]
    fn test_go_home_clears_stack() {
        let mut app = app();
        app.update(Action::Choose(0));
        app.update(Action::Choose(0));
        app.update(Action::GoHome);

        assert_eq!(app.screen, Screen::Home);
        app.update(Action::Back);
        assert_eq!(app.screen, Screen::Home); // Nothing to pop
    }

    #[test]
    fn test_settings_apply_theme() {
        let mut app = app();
        app.update(Action::Choose(2));
        assert_eq!(app.screen, Screen::SiteMenu);

        app.update(Action::Choose(2));
        assert_eq!(app.screen, Screen::Settings);

        app.update(Action::Choose(1));
        assert_eq!(app.config.tui.color_scheme, ColorScheme::Light);
        assert_eq!(app.theme, Theme::light());
        assert_eq!(
            app.status.as_ref().map(|s| s.text.as_str()),
            Some("Light mode has been applied.")
        );
    }

    #[test]
    fn test_menu_state_navigation() {
        let mut state = MenuState::default();

        // With 0 entries
        state.select_next(0);
        assert!(state.selected.is_none());

        // With 4 entries
        state.select_next(4);
        assert_eq!(state.selected, Some(0));

        state.select_last(4);
        assert_eq!(state.selected, Some(3));

        state.select_next(4);
        assert_eq!(state.selected, Some(0)); // Wrap

        state.select_previous(4);
        assert_eq!(state.selected, Some(3)); // Wrap back
    }

    #[test]
    fn test_help_mode_keys() {
        let mut app = app();
        app.update(Action::ToggleHelp);
        assert_eq!(app.mode, AppMode::Help);

        let action = app.handle_key(key(KeyCode::Esc));
        assert_eq!(action, Action::HideHelp);
        app.update(action);
        assert_eq!(app.mode, AppMode::Normal);
    }

    #[test]
    fn test_status_message() {
        let msg = StatusMessage::info("Test message");
        assert!(!msg.is_error);
        assert!(!msg.should_hide()); // Just created, shouldn't hide yet

        let err = StatusMessage::error("Error!");
        assert!(err.is_error);
    }
}
