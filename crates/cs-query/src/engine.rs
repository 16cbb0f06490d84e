//! The search engine over the archive.

use cs_archive::Archive;
use cs_core::{SearchConfig, TyphoonRecord};
use tracing::debug;

use crate::kind::SearchKind;
use crate::report::SearchReport;

/// Rendered when a search that needs records finds none.
const NO_DATA: &str = "No typhoon data available.";

/// Runs the canned searches over a set of records.
///
/// Borrows the archive; construct one per query batch. Every search spans
/// both seasons combined, in archive order.
///
/// # Examples
///
/// ```
/// use cs_archive::Archive;
/// use cs_core::SearchConfig;
/// use cs_query::{SearchEngine, SearchKind};
///
/// let archive = Archive::new();
/// let engine = SearchEngine::new(&archive, SearchConfig::default());
///
/// let strongest = engine.strongest();
/// assert_eq!(strongest.len(), 3);
/// assert_eq!(strongest[0].name, "Nando");
/// ```
#[derive(Debug, Clone)]
pub struct SearchEngine<'a> {
    records: &'a [TyphoonRecord],
    config: SearchConfig,
}

impl<'a> SearchEngine<'a> {
    /// Creates an engine over the whole archive.
    #[must_use]
    pub fn new(archive: &'a Archive, config: SearchConfig) -> Self {
        Self::over(archive.records(), config)
    }

    /// Creates an engine over an explicit slice of records.
    #[must_use]
    pub const fn over(records: &'a [TyphoonRecord], config: SearchConfig) -> Self {
        Self { records, config }
    }

    /// Returns the top-N records by peak wind speed, strongest first.
    ///
    /// N comes from [`SearchConfig::top_n`]. Ties are broken by name so the
    /// order is stable.
    #[must_use]
    pub fn strongest(&self) -> Vec<&'a TyphoonRecord> {
        let mut all: Vec<_> = self.records.iter().collect();
        all.sort_by(|a, b| {
            b.wind_speed_kph
                .cmp(&a.wind_speed_kph)
                .then_with(|| a.name.cmp(&b.name))
        });
        all.truncate(self.config.top_n);
        all
    }

    /// Returns the record with the highest damage cost, if any.
    ///
    /// On ties the earliest record in archive order wins.
    #[must_use]
    pub fn most_damaging(&self) -> Option<&'a TyphoonRecord> {
        self.records.iter().fold(None, |best, record| match best {
            Some(b) if record.damage_php <= b.damage_php => Some(b),
            _ => Some(record),
        })
    }

    /// Returns all records sorted by name, A-Z.
    #[must_use]
    pub fn alphabetical(&self) -> Vec<&'a TyphoonRecord> {
        let mut all: Vec<_> = self.records.iter().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        all
    }

    /// Returns the record with the longest PAR stay, if any.
    ///
    /// Unparsable interval fields rank as zero days; on ties the earliest
    /// record in archive order wins.
    #[must_use]
    pub fn longest_stay(&self) -> Option<&'a TyphoonRecord> {
        self.records.iter().fold(None, |best, record| match best {
            Some(b) if days(record) <= days(b) => Some(b),
            _ => Some(record),
        })
    }

    /// Returns the records whose track crossed land, in archive order.
    #[must_use]
    pub fn landfall(&self) -> Vec<&'a TyphoonRecord> {
        self.records.iter().filter(|r| r.made_landfall()).collect()
    }

    /// Runs a search and renders its report.
    #[must_use]
    pub fn run(&self, kind: SearchKind) -> SearchReport {
        debug!(?kind, records = self.records.len(), "Running search");

        let lines = match kind {
            SearchKind::Strongest => self
                .strongest()
                .iter()
                .enumerate()
                .map(|(i, r)| format!("{}. {} - {} km/h", i + 1, r.name, r.wind_speed_kph))
                .collect(),
            SearchKind::MostDamaging => match self.most_damaging() {
                Some(r) => vec![format!(
                    "The {} is considered the most damaging typhoon that entered the \
                     Philippines with {:.2} pesos in cost of damage.",
                    r.name, r.damage_php
                )],
                None => vec![NO_DATA.to_owned()],
            },
            SearchKind::Alphabetical => self
                .alphabetical()
                .iter()
                .map(|r| r.name.clone())
                .collect(),
            SearchKind::LongestStay => match self.longest_stay() {
                Some(r) => vec![format!(
                    "The {} had the longest stay with {} days.",
                    r.name, r.interval
                )],
                None => vec![NO_DATA.to_owned()],
            },
            SearchKind::Landfall => self.landfall().iter().map(|r| r.name.clone()).collect(),
        };

        SearchReport::new(kind, lines)
    }
}

/// Interval ranking for the longest-stay search.
fn days(record: &TyphoonRecord) -> u32 {
    record.interval_days().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cs_core::SearchConfig;

    fn engine(archive: &Archive) -> SearchEngine<'_> {
        SearchEngine::new(archive, SearchConfig::default())
    }

    #[test]
    fn test_strongest_top_three() {
        let archive = Archive::new();
        let top = engine(&archive).strongest();

        assert_eq!(top.len(), 3);
        assert_eq!(top[0].name, "Nando");
        assert_eq!(top[0].wind_speed_kph, 215);
        assert_eq!(top[1].name, "Julian");
        assert_eq!(top[1].wind_speed_kph, 195);
        // Four records share 185 km/h; the name tie-break keeps it stable.
        assert_eq!(top[2].name, "Carina");
        assert_eq!(top[2].wind_speed_kph, 185);
    }

    #[test]
    fn test_strongest_honors_top_n() {
        let archive = Archive::new();
        let config = SearchConfig { top_n: 5 };
        let top = SearchEngine::new(&archive, config).strongest();
        assert_eq!(top.len(), 5);
        assert!(top[3].wind_speed_kph >= top[4].wind_speed_kph);
    }

    #[test]
    fn test_most_damaging_is_dante() {
        let archive = Archive::new();
        let most = engine(&archive).most_damaging().unwrap();
        assert_eq!(most.name, "Dante");
        assert!((most.damage_php - 196_700_000_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_alphabetical_order() {
        let archive = Archive::new();
        let all = engine(&archive).alphabetical();

        assert_eq!(all.len(), 40);
        assert_eq!(all[0].name, "Aghon");
        assert!(all.windows(2).all(|w| w[0].name <= w[1].name));
    }

    #[test]
    fn test_longest_stay_first_wins_on_ties() {
        let archive = Archive::new();
        // Aghon (2024) and Nando (2025) both stayed 6 days; the earlier
        // record in archive order wins.
        let longest = engine(&archive).longest_stay().unwrap();
        assert_eq!(longest.name, "Aghon");
        assert_eq!(longest.interval_days(), Some(6));
    }

    #[test]
    fn test_landfall_filter() {
        let archive = Archive::new();
        let landfall = engine(&archive).landfall();

        assert!(landfall.iter().all(|r| r.made_landfall()));
        assert_eq!(landfall[0].name, "Aghon");
        let expected = archive.records().iter().filter(|r| r.made_landfall()).count();
        assert_eq!(landfall.len(), expected);
    }

    #[test]
    fn test_empty_records_report_no_data() {
        let config = SearchConfig::default();
        let engine = SearchEngine::over(&[], config);

        assert!(engine.most_damaging().is_none());
        assert!(engine.longest_stay().is_none());
        assert!(engine.strongest().is_empty());

        let report = engine.run(SearchKind::MostDamaging);
        assert_eq!(report.lines, vec!["No typhoon data available.".to_owned()]);
        let report = engine.run(SearchKind::LongestStay);
        assert_eq!(report.lines, vec!["No typhoon data available.".to_owned()]);
    }

    #[test]
    fn test_run_renders_sentences() {
        let archive = Archive::new();
        let engine = engine(&archive);

        let report = engine.run(SearchKind::MostDamaging);
        assert_eq!(
            report.lines[0],
            "The Dante is considered the most damaging typhoon that entered the \
             Philippines with 196700000000.00 pesos in cost of damage."
        );

        let report = engine.run(SearchKind::LongestStay);
        assert_eq!(report.lines[0], "The Aghon had the longest stay with 6 days.");

        let report = engine.run(SearchKind::Strongest);
        assert_eq!(report.lines[0], "1. Nando - 215 km/h");
    }
}
