//! Per-season advisories.
//!
//! Each archived season carries a set of resolutions and recommendations in
//! four sections, shown from the record browser and the `advisories`
//! command. The text is carried verbatim from the source bulletins.

/// A titled advisory section with five bullets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvisorySection {
    /// Section title, e.g. "Government".
    pub title: &'static str,
    /// The section's recommendations.
    pub bullets: [&'static str; 5],
}

/// The advisory sections for 2024.
static ADVISORIES_2024: [AdvisorySection; 4] = [
    AdvisorySection {
        title: "Government",
        bullets: [
            "Increase funding for rapid evacuation systems due to high casualty rates.",
            "Implement stricter zoning laws in coastal areas affected by multiple typhoons.",
            "Enhance collaboration with local governments for real-time data sharing.",
            "Invest in mental health support for disaster survivors.",
            "Develop national typhoon preparedness campaigns targeting vulnerable populations.",
        ],
    },
    AdvisorySection {
        title: "Community",
        bullets: [
            "Organize local training sessions on first aid and emergency response.",
            "Establish community watch groups for early typhoon warnings.",
            "Promote household emergency kits with focus on food and water storage.",
            "Foster neighborhood support networks for post-typhoon recovery.",
            "Encourage sustainable farming practices to reduce environmental vulnerability.",
        ],
    },
    AdvisorySection {
        title: "Improvements",
        bullets: [
            "Upgrade weather radar systems for better storm tracking accuracy.",
            "Integrate AI-driven prediction models for casualty minimization.",
            "Improve data collection on human impacts for future planning.",
            "Develop mobile apps for personalized evacuation alerts.",
            "Enhance communication infrastructure to prevent information gaps.",
        ],
    },
    AdvisorySection {
        title: "Advance Preparedness",
        bullets: [
            "Conduct annual simulation drills in high-risk areas.",
            "Stockpile medical supplies in advance of typhoon season.",
            "Train volunteers in search and rescue operations.",
            "Create digital maps for safe evacuation routes.",
            "Implement early warning systems in schools and hospitals.",
        ],
    },
];

/// The advisory sections for 2025.
static ADVISORIES_2025: [AdvisorySection; 4] = [
    AdvisorySection {
        title: "Government",
        bullets: [
            "Allocate budgets for infrastructure repair following extensive damages.",
            "Enforce building codes with typhoon-resistant materials.",
            "Partner with international aid for long-term recovery.",
            "Introduce tax incentives for disaster-resilient construction.",
            "Establish a national fund for typhoon damage compensation.",
        ],
    },
    AdvisorySection {
        title: "Community",
        bullets: [
            "Build community shelters with improved durability.",
            "Educate on insurance options for property protection.",
            "Promote reforestation to mitigate future storm intensity.",
            "Organize workshops on damage assessment and reporting.",
            "Strengthen family emergency plans with focus on economic recovery.",
        ],
    },
    AdvisorySection {
        title: "Improvements",
        bullets: [
            "Invest in satellite technology for precise damage mapping.",
            "Develop predictive analytics for economic impact reduction.",
            "Upgrade communication networks for uninterrupted service.",
            "Integrate drone technology for rapid post-storm surveys.",
            "Enhance data analytics for trend analysis in typhoon patterns.",
        ],
    },
    AdvisorySection {
        title: "Advance Preparedness",
        bullets: [
            "Create regional stockpiles of construction materials.",
            "Train engineers in quick infrastructure restoration.",
            "Develop apps for real-time damage reporting.",
            "Conduct vulnerability assessments annually.",
            "Establish partnerships with NGOs for sustained support.",
        ],
    },
];

/// Returns the advisory sections for a season, if it has any.
///
/// # Examples
///
/// ```
/// use cs_archive::advisories;
///
/// let sections = advisories::for_season(2024).unwrap();
/// assert_eq!(sections.len(), 4);
/// assert_eq!(sections[0].title, "Government");
///
/// assert!(advisories::for_season(1999).is_none());
/// ```
#[must_use]
pub fn for_season(season: u16) -> Option<&'static [AdvisorySection; 4]> {
    match season {
        2024 => Some(&ADVISORIES_2024),
        2025 => Some(&ADVISORIES_2025),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_seasons_have_advisories() {
        for season in [2024, 2025] {
            let sections = for_season(season).unwrap();
            let titles: Vec<_> = sections.iter().map(|s| s.title).collect();
            assert_eq!(
                titles,
                vec![
                    "Government",
                    "Community",
                    "Improvements",
                    "Advance Preparedness"
                ]
            );
        }
    }

    #[test]
    fn test_seasons_differ() {
        let a = for_season(2024).unwrap();
        let b = for_season(2025).unwrap();
        assert_ne!(a[0].bullets, b[0].bullets);
    }

    #[test]
    fn test_unarchived_season_has_none() {
        assert!(for_season(2023).is_none());
        assert!(for_season(2026).is_none());
    }
}
