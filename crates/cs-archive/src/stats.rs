//! Archive-wide statistics.
//!
//! This module provides [`ArchiveStats`], a serializable aggregate view of
//! the archive used by the TUI stats strip and the report command.

use cs_core::{StormLevel, TyphoonRecord};
use serde::{Deserialize, Serialize};

/// An aggregate statistics snapshot over a set of records.
///
/// Safe to store, serialize, and send between threads.
///
/// # Examples
///
/// ```
/// use cs_archive::Archive;
///
/// let stats = Archive::new().stats();
/// assert_eq!(stats.records, 40);
/// println!("Landfall share: {:.1}%", stats.landfall_percent());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ArchiveStats {
    /// Total number of records.
    pub records: u64,
    /// Number of records whose track crossed land.
    pub landfalls: u64,
    /// Total reported casualties.
    pub casualties: u64,
    /// Total damage cost in Philippine pesos.
    pub damage_php: f64,
    /// Records classified as tropical depressions.
    pub depressions: u64,
    /// Records classified as tropical storms.
    pub storms: u64,
    /// Records classified as severe tropical storms.
    pub severe_storms: u64,
    /// Records classified as typhoons.
    pub typhoons: u64,
    /// Records classified as super typhoons.
    pub super_typhoons: u64,
    /// Records whose category label did not classify.
    pub unclassified: u64,
}

impl ArchiveStats {
    /// Aggregates statistics over a slice of records.
    #[must_use]
    pub fn from_records(records: &[TyphoonRecord]) -> Self {
        let mut stats = Self {
            records: records.len() as u64,
            ..Self::default()
        };

        for record in records {
            if record.made_landfall() {
                stats.landfalls += 1;
            }
            stats.casualties += u64::from(record.casualties);
            stats.damage_php += record.damage_php;

            match record.level() {
                StormLevel::TropicalDepression => stats.depressions += 1,
                StormLevel::TropicalStorm => stats.storms += 1,
                StormLevel::SevereTropicalStorm => stats.severe_storms += 1,
                StormLevel::Typhoon => stats.typhoons += 1,
                StormLevel::SuperTyphoon => stats.super_typhoons += 1,
                _ => stats.unclassified += 1,
            }
        }

        stats
    }

    /// Returns the share of records that made landfall as a percentage.
    ///
    /// Returns 0.0 for an empty archive.
    ///
    /// # Examples
    ///
    /// ```
    /// use cs_archive::ArchiveStats;
    ///
    /// let stats = ArchiveStats {
    ///     records: 40,
    ///     landfalls: 20,
    ///     ..ArchiveStats::default()
    /// };
    /// assert!((stats.landfall_percent() - 50.0).abs() < 0.1);
    /// ```
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // Acceptable for statistics display
    pub fn landfall_percent(&self) -> f64 {
        if self.records == 0 {
            return 0.0;
        }

        (self.landfalls as f64 / self.records as f64) * 100.0
    }

    /// Returns the number of records at typhoon strength or above.
    #[inline]
    #[must_use]
    pub const fn typhoon_strength(&self) -> u64 {
        self.typhoons + self.super_typhoons
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Archive;

    #[test]
    fn test_stats_over_full_archive() {
        let stats = Archive::new().stats();
        assert_eq!(stats.records, 40);

        // Per-level counts cover every record.
        let classified = stats.depressions
            + stats.storms
            + stats.severe_storms
            + stats.typhoons
            + stats.super_typhoons
            + stats.unclassified;
        assert_eq!(classified, stats.records);

        // The source typos still classify, so nothing is left over.
        assert_eq!(stats.unclassified, 0);
        assert!(stats.landfalls > 0);
        assert!(stats.casualties > 0);
        assert!(stats.damage_php > 0.0);
    }

    #[test]
    fn test_landfall_percent_empty() {
        let stats = ArchiveStats::default();
        assert!((stats.landfall_percent() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_stats_serialization() {
        let stats = Archive::new().stats();
        let json = serde_json::to_string(&stats).unwrap();
        let parsed: ArchiveStats = serde_json::from_str(&json).unwrap();
        assert_eq!(stats, parsed);
    }
}
