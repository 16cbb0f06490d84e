//! Screen identifiers for the menu tree.
//!
//! The interface is a stack of screens. Every screen shows a menu on the
//! left and a detail pane on the right; activating a menu entry pushes the
//! next screen, `Esc` pops back, `m` returns all the way home.

use cs_core::Month;
use cs_query::SearchKind;

/// A screen in the menu tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// The home screen: browse, search, site menu, exit.
    Home,

    /// Season picker.
    Years,

    /// Month picker for a season, plus the season's advisories.
    Months {
        /// The season year.
        season: u16,
    },

    /// Records for one month of a season.
    Records {
        /// The season year.
        season: u16,
        /// The month within the season.
        month: Month,
    },

    /// A season's advisories, one section per menu entry.
    Advisories {
        /// The season year.
        season: u16,
    },

    /// Search picker, one entry per canned search.
    Search,

    /// Result of one canned search.
    SearchResult {
        /// The search that produced the result.
        kind: SearchKind,
    },

    /// The site menu: home, contact, settings, about.
    SiteMenu,

    /// Contact details.
    Contact,

    /// Settings (color scheme preference).
    Settings,

    /// About text.
    About,
}

impl Screen {
    /// Returns the title shown in the header for this screen.
    #[must_use]
    pub fn title(&self) -> String {
        match self {
            Self::Home => "Home".to_owned(),
            Self::Years => "Seasons".to_owned(),
            Self::Months { season } => format!("{season} Season"),
            Self::Records { season, month } => format!("{} {season}", month.label()),
            Self::Advisories { season } => format!("{season} Advisories"),
            Self::Search => "Search".to_owned(),
            Self::SearchResult { kind } => kind.title().to_owned(),
            Self::SiteMenu => "Menu".to_owned(),
            Self::Contact => "Contact".to_owned(),
            Self::Settings => "Settings".to_owned(),
            Self::About => "About".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_titles() {
        assert_eq!(Screen::Home.title(), "Home");
        assert_eq!(Screen::Months { season: 2024 }.title(), "2024 Season");
        assert_eq!(
            Screen::Records {
                season: 2025,
                month: Month::November
            }
            .title(),
            "November 2025"
        );
        assert_eq!(
            Screen::SearchResult {
                kind: SearchKind::Landfall
            }
            .title(),
            "Typhoons that made Landfall"
        );
    }
}
