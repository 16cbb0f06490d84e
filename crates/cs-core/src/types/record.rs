//! The typhoon record and its two-valued fields.
//!
//! This module provides [`TyphoonRecord`], the unit of the archive, plus the
//! [`Crossing`] and [`ParStatus`] enums for the fields that are two-valued in
//! the source data.

use serde::{Deserialize, Serialize};

use super::{Month, StormLevel, interval_days};

/// Whether a storm's track crossed land or stayed over water.
///
/// # Examples
///
/// ```
/// use cs_core::Crossing;
///
/// assert_eq!(Crossing::from_label("Land"), Some(Crossing::Land));
/// assert_eq!(Crossing::from_label("water"), Some(Crossing::Water));
/// assert_eq!(Crossing::from_label("air"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Crossing {
    /// The storm crossed land.
    Land,
    /// The storm stayed over water.
    Water,
}

impl Crossing {
    /// Parses a crossing from its label, case-insensitively.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        if label.eq_ignore_ascii_case("land") {
            Some(Self::Land)
        } else if label.eq_ignore_ascii_case("water") {
            Some(Self::Water)
        } else {
            None
        }
    }

    /// Returns a human-readable label for this crossing.
    #[inline]
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Land => "Land",
            Self::Water => "Water",
        }
    }
}

/// Where a storm developed relative to the Philippine Area of
/// Responsibility (PAR).
///
/// The source bulletins write this with inconsistent casing ("WITHIN THE
/// PAR", "Within the PAR"); [`ParStatus::from_label`] accepts either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParStatus {
    /// The storm developed inside the PAR.
    Within,
    /// The storm developed outside the PAR and entered later.
    Outside,
}

impl ParStatus {
    /// Parses a PAR development status from its label, case-insensitively.
    ///
    /// # Examples
    ///
    /// ```
    /// use cs_core::ParStatus;
    ///
    /// assert_eq!(ParStatus::from_label("WITHIN THE PAR"), Some(ParStatus::Within));
    /// assert_eq!(ParStatus::from_label("Outside the PAR"), Some(ParStatus::Outside));
    /// ```
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let lower = label.to_ascii_lowercase();
        if lower.contains("within") {
            Some(Self::Within)
        } else if lower.contains("outside") {
            Some(Self::Outside)
        } else {
            None
        }
    }

    /// Returns a human-readable label for this status.
    #[inline]
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Within => "Within the PAR",
            Self::Outside => "Outside the PAR",
        }
    }
}

/// A single typhoon record from the compiled-in archive.
///
/// Most text fields come straight from the source bulletins and are kept
/// verbatim, malformed stamps and all. Accessors provide the lenient,
/// normalized views the queries and the UI need.
///
/// # Examples
///
/// ```
/// use cs_core::{Crossing, Month, ParStatus, TyphoonRecord};
///
/// let record = TyphoonRecord {
///     name: "Aghon".to_owned(),
///     season: 2024,
///     arrival: "2000_05/23".to_owned(),
///     departure: "1200_05/29".to_owned(),
///     month: Month::May,
///     interval: "6".to_owned(),
///     crossing: Crossing::Land,
///     landfall: "5/24/2024 23:20:00".to_owned(),
///     developed: ParStatus::Within,
///     path: "East to Northeast".to_owned(),
///     category: "Tropical Depression".to_owned(),
///     wind_speed_kph: 140,
///     casualties: 6,
///     damage_php: 1_030_000_000.0,
///     places: "Region III | Aurora | Zambales".to_owned(),
/// };
///
/// assert_eq!(record.interval_days(), Some(6));
/// assert!(record.made_landfall());
/// assert_eq!(record.places().count(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TyphoonRecord {
    /// Local (PAGASA) name of the storm.
    pub name: String,

    /// Season year the record belongs to.
    pub season: u16,

    /// PAR arrival stamp, `HHMM_MM/DD` free text.
    pub arrival: String,

    /// PAR departure stamp, `HHMM_MM/DD` free text.
    pub departure: String,

    /// Month the storm entered the PAR.
    pub month: Month,

    /// PAR interval free text, usually a day count.
    pub interval: String,

    /// Whether the track crossed land or stayed over water.
    pub crossing: Crossing,

    /// Time of landfall free text. `"None"` or empty means no recorded
    /// landfall.
    pub landfall: String,

    /// Where the storm developed relative to the PAR.
    pub developed: ParStatus,

    /// Track path description.
    pub path: String,

    /// Category label free text, kept verbatim from the source.
    pub category: String,

    /// Peak wind speed in km/h.
    pub wind_speed_kph: u32,

    /// Reported casualties.
    pub casualties: u32,

    /// Damage cost in Philippine pesos.
    pub damage_php: f64,

    /// Affected places, a single `|`-separated free-text field.
    pub places: String,
}

impl TyphoonRecord {
    /// Leniently parses the PAR interval as a day count.
    ///
    /// Returns `None` when the interval field is not a plain number.
    #[must_use]
    pub fn interval_days(&self) -> Option<u32> {
        interval_days(&self.interval)
    }

    /// Returns the recorded time of landfall, if any.
    ///
    /// The source data writes `"None"` (or leaves the field empty) for
    /// storms without a recorded landfall time.
    #[must_use]
    pub fn landfall_time(&self) -> Option<&str> {
        let landfall = self.landfall.trim();
        if landfall.is_empty() || landfall.eq_ignore_ascii_case("none") {
            None
        } else {
            Some(landfall)
        }
    }

    /// Returns `true` if the storm's track crossed land.
    #[inline]
    #[must_use]
    pub const fn made_landfall(&self) -> bool {
        matches!(self.crossing, Crossing::Land)
    }

    /// Classifies the free-text category label.
    #[must_use]
    pub fn level(&self) -> StormLevel {
        StormLevel::from_label(&self.category)
    }

    /// Iterates over the affected places.
    ///
    /// Splits the `|`-separated field, trimming whitespace and skipping
    /// empty segments.
    pub fn places(&self) -> impl Iterator<Item = &str> {
        self.places
            .split('|')
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TyphoonRecord {
        TyphoonRecord {
            name: "Querubin".to_owned(),
            season: 2024,
            arrival: "0000_12/24".to_owned(),
            departure: "0000_12/25".to_owned(),
            month: Month::December,
            interval: "1".to_owned(),
            crossing: Crossing::Water,
            landfall: "None".to_owned(),
            developed: ParStatus::Outside,
            path: "East - Northwestward".to_owned(),
            category: "Tropical Depression".to_owned(),
            wind_speed_kph: 55,
            casualties: 0,
            damage_php: 0.0,
            places: "Region V | Albay | Sorsogon".to_owned(),
        }
    }

    #[test]
    fn test_crossing_from_label() {
        assert_eq!(Crossing::from_label("Land"), Some(Crossing::Land));
        assert_eq!(Crossing::from_label(" WATER "), Some(Crossing::Water));
        assert_eq!(Crossing::from_label("landfall"), None);
    }

    #[test]
    fn test_par_status_from_label() {
        assert_eq!(
            ParStatus::from_label("WITHIN THE PAR"),
            Some(ParStatus::Within)
        );
        assert_eq!(
            ParStatus::from_label("Within the PAR"),
            Some(ParStatus::Within)
        );
        assert_eq!(
            ParStatus::from_label("Outside the PAR"),
            Some(ParStatus::Outside)
        );
        assert_eq!(ParStatus::from_label("near the PAR"), None);
    }

    #[test]
    fn test_landfall_time_none_marker() {
        let mut record = sample();
        assert_eq!(record.landfall_time(), None);

        record.landfall = String::new();
        assert_eq!(record.landfall_time(), None);

        record.landfall = "21:10_11/09".to_owned();
        assert_eq!(record.landfall_time(), Some("21:10_11/09"));
    }

    #[test]
    fn test_interval_days_accessor() {
        let mut record = sample();
        assert_eq!(record.interval_days(), Some(1));

        record.interval = "unknown".to_owned();
        assert_eq!(record.interval_days(), None);
    }

    #[test]
    fn test_places_iterator_trims_and_skips_empty() {
        let record = sample();
        let places: Vec<_> = record.places().collect();
        assert_eq!(places, vec!["Region V", "Albay", "Sorsogon"]);
    }

    #[test]
    fn test_level_classification() {
        let mut record = sample();
        assert_eq!(record.level(), StormLevel::TropicalDepression);

        record.category = "Super Typoon".to_owned();
        assert_eq!(record.level(), StormLevel::SuperTyphoon);
    }

    #[test]
    fn test_record_serialization_round_trip() {
        let record = sample();
        let json = serde_json::to_string(&record).unwrap();
        let parsed: TyphoonRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, parsed);
    }
}
