//! Error types for the cs-core crate.
//!
//! This module provides [`ConfigError`] for configuration loading failures
//! and [`DataError`] for archive lookups that miss.

use crate::types::Month;

/// Errors that can occur during configuration loading and validation.
///
/// # Examples
///
/// ```
/// use cs_core::ConfigError;
///
/// let error = ConfigError::InvalidOption {
///     option: "search.top_n".to_owned(),
///     reason: "must be at least 1".to_owned(),
/// };
/// assert!(error.to_string().contains("search.top_n"));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A configuration option has an invalid value.
    #[error("invalid configuration option '{option}': {reason}")]
    InvalidOption {
        /// The name of the invalid option.
        option: String,
        /// Explanation of why the option is invalid.
        reason: String,
    },

    /// An I/O error occurred while reading configuration.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse the configuration file.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors that can occur when looking records up in the archive.
///
/// # Examples
///
/// ```
/// use cs_core::DataError;
///
/// let error = DataError::UnknownSeason(2023);
/// assert!(error.to_string().contains("2023"));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    /// The requested season is not in the archive.
    #[error("no records for season {0}; only 2024 and 2025 are archived")]
    UnknownSeason(u16),

    /// The requested month has no records in the given season.
    #[error("no typhoons recorded for {} {season}", month.label())]
    EmptyMonth {
        /// The season that was queried.
        season: u16,
        /// The month with no records.
        month: Month,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_option_display() {
        let error = ConfigError::InvalidOption {
            option: "tui.tick_rate_ms".to_owned(),
            reason: "must be at least 1".to_owned(),
        };
        let msg = error.to_string();
        assert!(msg.contains("tui.tick_rate_ms"));
        assert!(msg.contains("must be at least 1"));
    }

    #[test]
    fn test_unknown_season_display() {
        let error = DataError::UnknownSeason(1999);
        assert!(error.to_string().contains("1999"));
    }

    #[test]
    fn test_empty_month_display() {
        let error = DataError::EmptyMonth {
            season: 2024,
            month: Month::March,
        };
        let msg = error.to_string();
        assert!(msg.contains("March"));
        assert!(msg.contains("2024"));
    }
}
