//! Compiled-in season tables.
//!
//! The archive ships its data as static tables, one per season, transcribed
//! field-for-field from the source bulletins. Free-text fields are kept
//! verbatim, including the malformed stamps and misspelled category labels
//! that appear in the source; normalization happens at the accessor level in
//! `cs-core`, never in the data.

use cs_core::{Crossing, Month, ParStatus, TyphoonRecord};

mod y2024;
mod y2025;

/// A borrowed, compile-time typhoon record.
///
/// Mirrors [`TyphoonRecord`] with `&'static str` text fields so season
/// tables can live in read-only data.
pub(crate) struct RawRecord {
    pub name: &'static str,
    pub arrival: &'static str,
    pub departure: &'static str,
    pub month: Month,
    pub interval: &'static str,
    pub crossing: Crossing,
    pub landfall: &'static str,
    pub developed: ParStatus,
    pub path: &'static str,
    pub category: &'static str,
    pub wind_speed_kph: u32,
    pub casualties: u32,
    pub damage_php: f64,
    pub places: &'static str,
}

impl RawRecord {
    /// Converts this table entry into an owned record for the given season.
    pub(crate) fn to_record(&self, season: u16) -> TyphoonRecord {
        TyphoonRecord {
            name: self.name.to_owned(),
            season,
            arrival: self.arrival.to_owned(),
            departure: self.departure.to_owned(),
            month: self.month,
            interval: self.interval.to_owned(),
            crossing: self.crossing,
            landfall: self.landfall.to_owned(),
            developed: self.developed,
            path: self.path.to_owned(),
            category: self.category.to_owned(),
            wind_speed_kph: self.wind_speed_kph,
            casualties: self.casualties,
            damage_php: self.damage_php,
            places: self.places.to_owned(),
        }
    }
}

/// The seasons the archive covers, in chronological order.
pub const SEASONS: [u16; 2] = [2024, 2025];

/// Returns the raw table for a season, if it is archived.
pub(crate) fn table(season: u16) -> Option<&'static [RawRecord]> {
    match season {
        2024 => Some(y2024::RECORDS),
        2025 => Some(y2025::RECORDS),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_tables_exist() {
        for season in SEASONS {
            assert!(table(season).is_some());
        }
        assert!(table(2023).is_none());
        assert!(table(2026).is_none());
    }

    #[test]
    fn test_season_record_counts() {
        assert_eq!(table(2024).unwrap().len(), 17);
        assert_eq!(table(2025).unwrap().len(), 23);
    }

    #[test]
    fn test_to_record_carries_season() {
        let raw = &table(2024).unwrap()[0];
        let record = raw.to_record(2024);
        assert_eq!(record.season, 2024);
        assert_eq!(record.name, raw.name);
        assert_eq!(record.month, raw.month);
    }
}
