//! Storm intensity classification.
//!
//! The archive's category labels are free text and carry a few typos from
//! the source bulletins. [`StormLevel`] gives them a lenient, normalized
//! classification without rewriting the labels themselves.

use serde::{Deserialize, Serialize};

/// Normalized storm intensity, classified leniently from a category label.
///
/// # Examples
///
/// ```
/// use cs_core::StormLevel;
///
/// assert_eq!(
///     StormLevel::from_label("Tropical Depression"),
///     StormLevel::TropicalDepression
/// );
/// // Tolerates the typos present in the source data.
/// assert_eq!(
///     StormLevel::from_label("Super Typoon"),
///     StormLevel::SuperTyphoon
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum StormLevel {
    /// Tropical depression.
    TropicalDepression,
    /// Tropical storm.
    TropicalStorm,
    /// Severe tropical storm.
    SevereTropicalStorm,
    /// Typhoon.
    Typhoon,
    /// Super typhoon.
    SuperTyphoon,
    /// The label did not match any known intensity.
    #[default]
    Unclassified,
}

impl StormLevel {
    /// Classifies a free-text category label.
    ///
    /// Matching is case-insensitive and keyword-based so that misspelled
    /// labels ("Tropical Depresion", "Super Typoon", "Severe Typhoon
    /// Storm") still land on the intended intensity.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        let lower = label.to_ascii_lowercase();
        if lower.contains("super") {
            Self::SuperTyphoon
        } else if lower.contains("severe") {
            Self::SevereTropicalStorm
        } else if lower.contains("depre") {
            Self::TropicalDepression
        } else if lower.contains("storm") {
            Self::TropicalStorm
        } else if lower.contains("typhoon") || lower.contains("typoon") {
            Self::Typhoon
        } else {
            Self::Unclassified
        }
    }

    /// Returns a human-readable label for this intensity.
    ///
    /// # Examples
    ///
    /// ```
    /// use cs_core::StormLevel;
    ///
    /// assert_eq!(StormLevel::SuperTyphoon.label(), "Super Typhoon");
    /// ```
    #[inline]
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::TropicalDepression => "Tropical Depression",
            Self::TropicalStorm => "Tropical Storm",
            Self::SevereTropicalStorm => "Severe Tropical Storm",
            Self::Typhoon => "Typhoon",
            Self::SuperTyphoon => "Super Typhoon",
            Self::Unclassified => "Unclassified",
        }
    }

    /// Returns `true` if this intensity is typhoon strength or above.
    ///
    /// # Examples
    ///
    /// ```
    /// use cs_core::StormLevel;
    ///
    /// assert!(StormLevel::SuperTyphoon.is_typhoon_strength());
    /// assert!(!StormLevel::TropicalStorm.is_typhoon_strength());
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_typhoon_strength(self) -> bool {
        matches!(self, Self::Typhoon | Self::SuperTyphoon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_of_clean_labels() {
        assert_eq!(
            StormLevel::from_label("Tropical Depression"),
            StormLevel::TropicalDepression
        );
        assert_eq!(
            StormLevel::from_label("Tropical Storm"),
            StormLevel::TropicalStorm
        );
        assert_eq!(StormLevel::from_label("Typhoon"), StormLevel::Typhoon);
        assert_eq!(
            StormLevel::from_label("Super Typhoon"),
            StormLevel::SuperTyphoon
        );
    }

    #[test]
    fn test_classification_tolerates_source_typos() {
        assert_eq!(
            StormLevel::from_label("Tropical Depresion"),
            StormLevel::TropicalDepression
        );
        assert_eq!(
            StormLevel::from_label("Super Typoon"),
            StormLevel::SuperTyphoon
        );
        assert_eq!(
            StormLevel::from_label("Severe Typhoon Storm"),
            StormLevel::SevereTropicalStorm
        );
    }

    #[test]
    fn test_unknown_labels_are_unclassified() {
        assert_eq!(StormLevel::from_label(""), StormLevel::Unclassified);
        assert_eq!(StormLevel::from_label("Monsoon"), StormLevel::Unclassified);
    }

    #[test]
    fn test_typhoon_strength() {
        assert!(StormLevel::Typhoon.is_typhoon_strength());
        assert!(StormLevel::SuperTyphoon.is_typhoon_strength());
        assert!(!StormLevel::SevereTropicalStorm.is_typhoon_strength());
        assert!(!StormLevel::Unclassified.is_typhoon_strength());
    }

    #[test]
    fn test_serialization() {
        assert_eq!(
            serde_json::to_string(&StormLevel::SuperTyphoon).unwrap(),
            r#""super_typhoon""#
        );
        assert_eq!(
            serde_json::to_string(&StormLevel::Unclassified).unwrap(),
            r#""unclassified""#
        );
    }
}
