//! Rendered search results.

use serde::Serialize;

use crate::kind::SearchKind;

/// A rendered search result, usable by both the CLI printer and the TUI
/// detail pane.
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
/// let report = engine.run(SearchKind::Strongest);
/// assert_eq!(report.title, "Top 3 Strongest Typhoons from 2024 - 2025");
/// assert_eq!(report.lines.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchReport {
    /// Which search produced this report.
    pub kind: SearchKind,

    /// Report heading.
    pub title: &'static str,

    /// The result lines, one per row of output.
    pub lines: Vec<String>,

    /// Commentary paragraph attached to the results.
    pub commentary: &'static str,
}

impl SearchReport {
    /// Creates a report for a kind from its rendered result lines.
    #[must_use]
    pub fn new(kind: SearchKind, lines: Vec<String>) -> Self {
        Self {
            kind,
            title: kind.title(),
            lines,
            commentary: kind.commentary(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_carries_kind_text() {
        let report = SearchReport::new(SearchKind::Landfall, vec!["Aghon".to_owned()]);
        assert_eq!(report.title, SearchKind::Landfall.title());
        assert_eq!(report.commentary, SearchKind::Landfall.commentary());
    }

    #[test]
    fn test_report_serialization() {
        let report = SearchReport::new(SearchKind::Alphabetical, vec!["Aghon".to_owned()]);
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains(r#""kind":"alphabetical""#));
        assert!(json.contains("Aghon"));
    }
}
