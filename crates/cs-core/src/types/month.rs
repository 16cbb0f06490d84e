//! Calendar months and lenient stamp parsing.
//!
//! This module provides the [`Month`] enum along with the lenient parsers
//! used to pull a month out of the archive's free-text fields.

use serde::{Deserialize, Serialize};

/// A calendar month.
///
/// Months are the browsing unit of the archive: records are grouped by the
/// month they entered the Philippine Area of Responsibility.
///
/// # Examples
///
/// ```
/// use cs_core::Month;
///
/// let month = Month::May;
/// assert_eq!(month.number(), 5);
/// assert_eq!(month.label(), "May");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Month {
    /// January (1).
    January,
    /// February (2).
    February,
    /// March (3).
    March,
    /// April (4).
    April,
    /// May (5).
    May,
    /// June (6).
    June,
    /// July (7).
    July,
    /// August (8).
    August,
    /// September (9).
    September,
    /// October (10).
    October,
    /// November (11).
    November,
    /// December (12).
    December,
}

impl Month {
    /// Returns the 1-based month number.
    ///
    /// # Examples
    ///
    /// ```
    /// use cs_core::Month;
    ///
    /// assert_eq!(Month::January.number(), 1);
    /// assert_eq!(Month::December.number(), 12);
    /// ```
    #[inline]
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Returns a human-readable label for this month.
    ///
    /// # Examples
    ///
    /// ```
    /// use cs_core::Month;
    ///
    /// assert_eq!(Month::September.label(), "September");
    /// ```
    #[inline]
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::January => "January",
            Self::February => "February",
            Self::March => "March",
            Self::April => "April",
            Self::May => "May",
            Self::June => "June",
            Self::July => "July",
            Self::August => "August",
            Self::September => "September",
            Self::October => "October",
            Self::November => "November",
            Self::December => "December",
        }
    }

    /// Converts a 1-based month number into a [`Month`].
    ///
    /// Returns `None` for anything outside `1..=12`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cs_core::Month;
    ///
    /// assert_eq!(Month::from_number(5), Some(Month::May));
    /// assert_eq!(Month::from_number(0), None);
    /// assert_eq!(Month::from_number(13), None);
    /// ```
    #[must_use]
    pub const fn from_number(number: u8) -> Option<Self> {
        Some(match number {
            1 => Self::January,
            2 => Self::February,
            3 => Self::March,
            4 => Self::April,
            5 => Self::May,
            6 => Self::June,
            7 => Self::July,
            8 => Self::August,
            9 => Self::September,
            10 => Self::October,
            11 => Self::November,
            12 => Self::December,
            _ => return None,
        })
    }

    /// Parses a month from its English name, case-insensitively.
    ///
    /// # Examples
    ///
    /// ```
    /// use cs_core::Month;
    ///
    /// assert_eq!(Month::from_name("July"), Some(Month::July));
    /// assert_eq!(Month::from_name("july"), Some(Month::July));
    /// assert_eq!(Month::from_name("Smarch"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        const ALL: [Month; 12] = [
            Month::January,
            Month::February,
            Month::March,
            Month::April,
            Month::May,
            Month::June,
            Month::July,
            Month::August,
            Month::September,
            Month::October,
            Month::November,
            Month::December,
        ];
        ALL.into_iter()
            .find(|m| m.label().eq_ignore_ascii_case(name.trim()))
    }

    /// Leniently extracts the month from an `HHMM_MM/DD` arrival or
    /// departure stamp.
    ///
    /// The stamps in the archive are free text and several are malformed;
    /// anything that does not carry a `_MM/` segment with a month number in
    /// `1..=12` yields `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cs_core::Month;
    ///
    /// assert_eq!(Month::from_stamp("2000_05/23"), Some(Month::May));
    /// assert_eq!(Month::from_stamp("0800_13/01"), None);
    /// assert_eq!(Month::from_stamp("not a stamp"), None);
    /// ```
    #[must_use]
    pub fn from_stamp(stamp: &str) -> Option<Self> {
        let (_, mmdd) = stamp.split_once('_')?;
        let (mm, _) = mmdd.split_once('/')?;
        Self::from_number(mm.trim().parse().ok()?)
    }
}

/// Leniently parses a day count out of the free-text PAR interval field.
///
/// Returns `None` when the field does not hold a plain number. Queries that
/// rank by interval treat unparsable values as zero days.
///
/// # Examples
///
/// ```
/// use cs_core::types::interval_days;
///
/// assert_eq!(interval_days("6"), Some(6));
/// assert_eq!(interval_days(" 3 "), Some(3));
/// assert_eq!(interval_days("about a week"), None);
/// ```
#[must_use]
pub fn interval_days(interval: &str) -> Option<u32> {
    interval.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_numbers_round_trip() {
        for n in 1..=12 {
            let month = Month::from_number(n).unwrap();
            assert_eq!(month.number(), n);
        }
        assert_eq!(Month::from_number(0), None);
        assert_eq!(Month::from_number(13), None);
    }

    #[test]
    fn test_month_from_name() {
        assert_eq!(Month::from_name("May"), Some(Month::May));
        assert_eq!(Month::from_name("DECEMBER"), Some(Month::December));
        assert_eq!(Month::from_name(" October "), Some(Month::October));
        assert_eq!(Month::from_name(""), None);
        assert_eq!(Month::from_name("Mayhem"), None);
    }

    #[test]
    fn test_month_from_stamp() {
        assert_eq!(Month::from_stamp("2000_05/23"), Some(Month::May));
        assert_eq!(Month::from_stamp("0000_12/24"), Some(Month::December));
        assert_eq!(Month::from_stamp("1520_07/12"), Some(Month::July));
    }

    #[test]
    fn test_month_from_stamp_malformed() {
        assert_eq!(Month::from_stamp(""), None);
        assert_eq!(Month::from_stamp("200005/23"), None);
        assert_eq!(Month::from_stamp("2000_0523"), None);
        assert_eq!(Month::from_stamp("2000_xx/23"), None);
        assert_eq!(Month::from_stamp("2000_00/23"), None);
        assert_eq!(Month::from_stamp("2000_13/23"), None);
    }

    #[test]
    fn test_interval_days() {
        assert_eq!(interval_days("1"), Some(1));
        assert_eq!(interval_days("6"), Some(6));
        assert_eq!(interval_days(""), None);
        assert_eq!(interval_days("n/a"), None);
        assert_eq!(interval_days("-2"), None);
    }

    #[test]
    fn test_month_serialization() {
        assert_eq!(serde_json::to_string(&Month::May).unwrap(), r#""may""#);
        let month: Month = serde_json::from_str(r#""november""#).unwrap();
        assert_eq!(month, Month::November);
    }

    #[test]
    fn test_month_ordering() {
        assert!(Month::May < Month::July);
        assert!(Month::November < Month::December);
    }
}
