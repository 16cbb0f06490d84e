//! The canned search kinds.

use serde::{Deserialize, Serialize};

/// One of the five canned searches over the combined seasons.
///
/// Each kind carries its menu entry, its report title, and the commentary
/// paragraph attached to its results.
///
/// # Examples
///
/// ```
/// use cs_query::SearchKind;
///
/// assert_eq!(SearchKind::Landfall.title(), "Typhoons that made Landfall");
/// assert_eq!(SearchKind::ALL.len(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchKind {
    /// Top-N records by peak wind speed.
    Strongest,
    /// The single record with the highest damage cost.
    MostDamaging,
    /// All record names, A-Z.
    Alphabetical,
    /// The single record with the longest PAR stay.
    LongestStay,
    /// All records whose track crossed land.
    Landfall,
}

impl SearchKind {
    /// Every kind, in menu order.
    pub const ALL: [Self; 5] = [
        Self::Strongest,
        Self::MostDamaging,
        Self::Alphabetical,
        Self::LongestStay,
        Self::Landfall,
    ];

    /// Returns the search menu entry for this kind.
    #[inline]
    #[must_use]
    pub const fn menu_label(self) -> &'static str {
        match self {
            Self::Strongest => {
                "Top 3 Strongest Typhoons from 2024 - 2025 (Based on their Wind Speed)"
            }
            Self::MostDamaging => "Most Damaging Typhoon (Based on the cost in Peso)",
            Self::Alphabetical => {
                "List all names of Typhoons from 2024 - 2025 by Alphabetical Order (A-Z)"
            }
            Self::LongestStay => "Longest Stay in Land (Arrival to Departure)",
            Self::Landfall => "Sort all typhoons that made Landfall (Based on Storm Crossing)",
        }
    }

    /// Returns the report title for this kind.
    #[inline]
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Strongest => "Top 3 Strongest Typhoons from 2024 - 2025",
            Self::MostDamaging => "Most Damaging Typhoon",
            Self::Alphabetical => "List of Typhoons from 2024 - 2025 (A-Z)",
            Self::LongestStay => "Longest Stay",
            Self::Landfall => "Typhoons that made Landfall",
        }
    }

    /// Returns the commentary paragraph attached to this kind's results.
    #[inline]
    #[must_use]
    pub const fn commentary(self) -> &'static str {
        match self {
            Self::Strongest => {
                "These top typhoons highlight the need for advanced wind-resistant \
                 infrastructure and early warning systems."
            }
            Self::MostDamaging => {
                "This typhoon caused significant economic losses, highlighting the need \
                 for better infrastructure and financial preparedness."
            }
            Self::Alphabetical => {
                "Listing typhoons alphabetically aids in systematic tracking and \
                 historical analysis."
            }
            Self::LongestStay => {
                "Extended stays increase exposure time, necessitating prolonged \
                 preparedness measures."
            }
            Self::Landfall => {
                "Landfall typhoons pose direct threats, requiring focused coastal \
                 defense strategies."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_in_menu_order() {
        assert_eq!(SearchKind::ALL[0], SearchKind::Strongest);
        assert_eq!(SearchKind::ALL[4], SearchKind::Landfall);
    }

    #[test]
    fn test_every_kind_has_text() {
        for kind in SearchKind::ALL {
            assert!(!kind.menu_label().is_empty());
            assert!(!kind.title().is_empty());
            assert!(!kind.commentary().is_empty());
        }
    }

    #[test]
    fn test_serialization() {
        assert_eq!(
            serde_json::to_string(&SearchKind::MostDamaging).unwrap(),
            r#""most_damaging""#
        );
        let kind: SearchKind = serde_json::from_str(r#""longest_stay""#).unwrap();
        assert_eq!(kind, SearchKind::LongestStay);
    }
}
