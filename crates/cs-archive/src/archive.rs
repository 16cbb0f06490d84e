//! The in-memory archive and its lookups.
//!
//! [`Archive`] owns every typhoon record from the compiled-in season tables
//! and answers the lookups the queries and the UI are built on: whole
//! seasons, season-and-month slices, and the derived month menus.

use std::ops::Range;

use cs_core::{DataError, Month, TyphoonRecord};
use rustc_hash::FxHashMap;
use tracing::{debug, info};

use crate::seasons::{self, SEASONS};
use crate::stats::ArchiveStats;

/// The compiled-in typhoon archive.
///
/// Records are stored in season order (2024 first), each season in the
/// order the storms entered the PAR. Lookups that miss return
/// [`DataError`]; month slices within a known season may legitimately be
/// empty.
///
/// # Examples
///
/// ```
/// use cs_archive::Archive;
///
/// let archive = Archive::new();
/// assert_eq!(archive.len(), 40);
/// assert_eq!(archive.season(2024).unwrap().len(), 17);
/// assert!(archive.season(1999).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Archive {
    /// All records, contiguous per season.
    records: Vec<TyphoonRecord>,

    /// Index range of each season within `records`.
    by_season: FxHashMap<u16, Range<usize>>,
}

impl Archive {
    /// Loads the archive from the compiled-in season tables.
    #[must_use]
    pub fn new() -> Self {
        let mut records = Vec::new();
        let mut by_season = FxHashMap::default();

        for season in SEASONS {
            let start = records.len();
            if let Some(table) = seasons::table(season) {
                records.extend(table.iter().map(|raw| raw.to_record(season)));
            }
            debug!(season, count = records.len() - start, "Season loaded");
            by_season.insert(season, start..records.len());
        }

        info!(records = records.len(), seasons = SEASONS.len(), "Archive loaded");
        Self { records, by_season }
    }

    /// Returns every record, season order then PAR-entry order.
    #[inline]
    #[must_use]
    pub fn records(&self) -> &[TyphoonRecord] {
        &self.records
    }

    /// Returns the seasons the archive covers, in chronological order.
    #[inline]
    #[must_use]
    pub fn seasons(&self) -> &'static [u16] {
        &SEASONS
    }

    /// Returns all records for a season.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::UnknownSeason`] if the season is not archived.
    pub fn season(&self, season: u16) -> Result<&[TyphoonRecord], DataError> {
        self.by_season
            .get(&season)
            .map(|range| &self.records[range.clone()])
            .ok_or(DataError::UnknownSeason(season))
    }

    /// Returns the records for a given month of a season.
    ///
    /// An empty result is not an error; the UI renders it as "No typhoons
    /// recorded for this month."
    ///
    /// # Errors
    ///
    /// Returns [`DataError::UnknownSeason`] if the season is not archived.
    pub fn month_records(
        &self,
        season: u16,
        month: Month,
    ) -> Result<Vec<&TyphoonRecord>, DataError> {
        Ok(self
            .season(season)?
            .iter()
            .filter(|r| r.month == month)
            .collect())
    }

    /// Returns the months of a season that have at least one record,
    /// in calendar order.
    ///
    /// Derived from the data rather than hardcoded, so the month menus
    /// cannot drift from the season tables.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::UnknownSeason`] if the season is not archived.
    pub fn months_with_records(&self, season: u16) -> Result<Vec<Month>, DataError> {
        let mut months: Vec<Month> = self.season(season)?.iter().map(|r| r.month).collect();
        months.sort_unstable();
        months.dedup();
        Ok(months)
    }

    /// Computes an aggregate statistics snapshot over the whole archive.
    #[must_use]
    pub fn stats(&self) -> ArchiveStats {
        ArchiveStats::from_records(&self.records)
    }

    /// Returns the number of records in the archive.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the archive holds no records.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for Archive {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cs_core::Crossing;

    #[test]
    fn test_archive_loads_both_seasons() {
        let archive = Archive::new();
        assert_eq!(archive.len(), 40);
        assert_eq!(archive.season(2024).unwrap().len(), 17);
        assert_eq!(archive.season(2025).unwrap().len(), 23);
    }

    #[test]
    fn test_unknown_season_is_an_error() {
        let archive = Archive::new();
        assert!(matches!(
            archive.season(2023),
            Err(DataError::UnknownSeason(2023))
        ));
        assert!(archive.month_records(2026, Month::July).is_err());
        assert!(archive.months_with_records(1999).is_err());
    }

    #[test]
    fn test_records_are_in_season_order() {
        let archive = Archive::new();
        let records = archive.records();
        assert_eq!(records[0].name, "Aghon");
        assert_eq!(records[0].season, 2024);
        assert_eq!(records[16].name, "Querubin");
        assert_eq!(records[17].name, "Auring");
        assert_eq!(records[17].season, 2025);
        assert_eq!(records[39].name, "Wilma");
    }

    #[test]
    fn test_month_records() {
        let archive = Archive::new();

        let may_2024 = archive.month_records(2024, Month::May).unwrap();
        assert_eq!(may_2024.len(), 1);
        assert_eq!(may_2024[0].name, "Aghon");

        let september_2024 = archive.month_records(2024, Month::September).unwrap();
        assert_eq!(september_2024.len(), 5);

        // A known season with no records that month is empty, not an error.
        let march_2024 = archive.month_records(2024, Month::March).unwrap();
        assert!(march_2024.is_empty());
    }

    #[test]
    fn test_months_with_records_are_derived() {
        let archive = Archive::new();

        let months_2024 = archive.months_with_records(2024).unwrap();
        assert_eq!(
            months_2024,
            vec![
                Month::May,
                Month::July,
                Month::August,
                Month::September,
                Month::October,
                Month::November,
                Month::December,
            ]
        );

        let months_2025 = archive.months_with_records(2025).unwrap();
        assert_eq!(
            months_2025,
            vec![
                Month::July,
                Month::August,
                Month::September,
                Month::October,
                Month::November,
                Month::December,
            ]
        );
    }

    #[test]
    fn test_dataset_kept_verbatim() {
        let archive = Archive::new();
        let records = archive.records();

        // Misspelled category labels are data, not defects.
        assert!(records.iter().any(|r| r.category == "Tropical Depresion"));
        assert!(records.iter().any(|r| r.category == "Super Typoon"));
        assert!(records.iter().any(|r| r.category == "Severe Typhoon Storm"));

        // Landfall field keeps its "None" and empty markers.
        assert!(records.iter().any(|r| r.landfall == "None"));
        assert!(records.iter().any(|r| r.landfall.is_empty()));
    }

    #[test]
    fn test_known_extremes() {
        let archive = Archive::new();
        let records = archive.records();

        let nando = records.iter().find(|r| r.name == "Nando").unwrap();
        assert_eq!(nando.wind_speed_kph, 215);
        assert_eq!(nando.crossing, Crossing::Land);

        let dante = records.iter().find(|r| r.name == "Dante").unwrap();
        assert!((dante.damage_php - 196_700_000_000.0).abs() < f64::EPSILON);
    }
}
