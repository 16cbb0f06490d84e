//! Theme and styling for the TUI.
//!
//! The [`Theme`] struct carries all colors and styles used by the
//! interface, with dark and light variants selected from the configured
//! [`ColorScheme`].
//!
//! # Example
//!
//! ```
//! use cs_tui::Theme;
//! use cs_core::StormLevel;
//!
//! let theme = Theme::dark();
//! let style = theme.level_style(StormLevel::SuperTyphoon);
//! ```

use cs_core::{ColorScheme, StormLevel};
use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI.
///
/// Use [`Theme::dark()`] or [`Theme::light()`] for the predefined themes,
/// or [`Theme::from_scheme()`] to pick one from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    // =========================================================================
    // Storm Level Colors
    // =========================================================================
    /// Foreground color for tropical depressions.
    pub depression_fg: Color,

    /// Foreground color for tropical storms.
    pub storm_fg: Color,

    /// Foreground color for severe tropical storms.
    pub severe_fg: Color,

    /// Foreground color for typhoons.
    pub typhoon_fg: Color,

    /// Foreground color for super typhoons.
    pub super_typhoon_fg: Color,

    /// Foreground color for unclassified records.
    pub unclassified_fg: Color,

    // =========================================================================
    // Base Colors
    // =========================================================================
    /// Primary foreground color.
    pub fg: Color,

    /// Primary background color.
    pub bg: Color,

    /// Dimmed/secondary text color.
    pub dimmed_fg: Color,

    /// Accent color for highlights.
    pub accent: Color,

    /// Error/warning color.
    pub error_fg: Color,

    // =========================================================================
    // Border Styles
    // =========================================================================
    /// Style for normal borders.
    pub border_style: Style,

    /// Style for focused borders.
    pub focused_border_style: Style,

    // =========================================================================
    // Component Styles
    // =========================================================================
    /// Style for highlighted/selected menu entries.
    pub highlight_style: Style,

    /// Style for the header bar.
    pub header_style: Style,

    /// Style for the status bar.
    pub status_bar_style: Style,
}

impl Theme {
    /// Creates a dark theme (light text on dark background).
    ///
    /// This is the default theme, optimized for dark terminal backgrounds.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            // Storm level colors
            depression_fg: Color::Rgb(128, 200, 255),   // Pale blue
            storm_fg: Color::Rgb(100, 255, 100),        // Soft green
            severe_fg: Color::Rgb(255, 230, 100),       // Soft yellow
            typhoon_fg: Color::Rgb(255, 160, 80),       // Orange
            super_typhoon_fg: Color::Rgb(255, 90, 90),  // Soft red
            unclassified_fg: Color::Rgb(128, 128, 128), // Gray

            // Base colors
            fg: Color::Rgb(220, 220, 220),
            bg: Color::Reset,
            dimmed_fg: Color::Rgb(128, 128, 128),
            accent: Color::Rgb(100, 150, 255), // Soft blue
            error_fg: Color::Rgb(255, 80, 80),

            // Border styles
            border_style: Style::default().fg(Color::Rgb(80, 80, 100)),
            focused_border_style: Style::default().fg(Color::Rgb(100, 150, 255)),

            // Component styles
            highlight_style: Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(60, 60, 80))
                .add_modifier(Modifier::BOLD),
            header_style: Style::default()
                .fg(Color::Rgb(100, 150, 255))
                .add_modifier(Modifier::BOLD),
            status_bar_style: Style::default()
                .fg(Color::Rgb(180, 180, 180))
                .bg(Color::Rgb(40, 40, 50)),
        }
    }

    /// Creates a light theme (dark text on light background).
    #[must_use]
    pub fn light() -> Self {
        Self {
            // Storm level colors
            depression_fg: Color::Rgb(40, 110, 180),    // Dark blue
            storm_fg: Color::Rgb(50, 150, 50),          // Dark green
            severe_fg: Color::Rgb(160, 130, 30),        // Dark yellow
            typhoon_fg: Color::Rgb(190, 100, 30),       // Dark orange
            super_typhoon_fg: Color::Rgb(180, 50, 50),  // Dark red
            unclassified_fg: Color::Rgb(100, 100, 100), // Dark gray

            // Base colors
            fg: Color::Rgb(30, 30, 30),
            bg: Color::Reset,
            dimmed_fg: Color::Rgb(100, 100, 100),
            accent: Color::Rgb(50, 100, 200), // Dark blue
            error_fg: Color::Rgb(180, 50, 50),

            // Border styles
            border_style: Style::default().fg(Color::Rgb(150, 150, 170)),
            focused_border_style: Style::default().fg(Color::Rgb(50, 100, 200)),

            // Component styles
            highlight_style: Style::default()
                .fg(Color::Black)
                .bg(Color::Rgb(200, 200, 220))
                .add_modifier(Modifier::BOLD),
            header_style: Style::default()
                .fg(Color::Rgb(50, 100, 200))
                .add_modifier(Modifier::BOLD),
            status_bar_style: Style::default()
                .fg(Color::Rgb(60, 60, 60))
                .bg(Color::Rgb(220, 220, 230)),
        }
    }

    /// Creates a theme from a [`ColorScheme`] configuration.
    ///
    /// If the scheme is [`ColorScheme::Auto`], defaults to dark theme.
    #[must_use]
    pub fn from_scheme(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Light => Self::light(),
            ColorScheme::Dark | ColorScheme::Auto | _ => Self::dark(),
        }
    }

    /// Returns the style for a given storm level.
    #[must_use]
    pub fn level_style(&self, level: StormLevel) -> Style {
        let color = self.level_color(level);
        Style::default().fg(color)
    }

    /// Returns the color for a given storm level.
    #[must_use]
    pub const fn level_color(&self, level: StormLevel) -> Color {
        match level {
            StormLevel::TropicalDepression => self.depression_fg,
            StormLevel::TropicalStorm => self.storm_fg,
            StormLevel::SevereTropicalStorm => self.severe_fg,
            StormLevel::Typhoon => self.typhoon_fg,
            StormLevel::SuperTyphoon => self.super_typhoon_fg,
            StormLevel::Unclassified | _ => self.unclassified_fg,
        }
    }

    /// Returns the short indicator for a storm level.
    #[must_use]
    pub const fn level_indicator(level: StormLevel) -> &'static str {
        match level {
            StormLevel::TropicalDepression => "[TD]",
            StormLevel::TropicalStorm => "[TS]",
            StormLevel::SevereTropicalStorm => "[STS]",
            StormLevel::Typhoon => "[TY]",
            StormLevel::SuperTyphoon => "[STY]",
            StormLevel::Unclassified | _ => "[--]",
        }
    }

    /// Returns a style with the base foreground color.
    #[must_use]
    pub fn base_style(&self) -> Style {
        Style::default().fg(self.fg)
    }

    /// Returns a style for dimmed/secondary text.
    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed_fg)
    }

    /// Returns a style for accent/highlighted text.
    #[must_use]
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Returns a style for error text.
    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error_fg)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_dark() {
        let theme = Theme::dark();
        assert_eq!(theme.fg, Color::Rgb(220, 220, 220));
    }

    #[test]
    fn test_theme_light() {
        let theme = Theme::light();
        assert_eq!(theme.fg, Color::Rgb(30, 30, 30));
    }

    #[test]
    fn test_theme_from_scheme() {
        let dark = Theme::from_scheme(ColorScheme::Dark);
        let light = Theme::from_scheme(ColorScheme::Light);
        let auto = Theme::from_scheme(ColorScheme::Auto);

        assert_eq!(dark, Theme::dark());
        assert_eq!(light, Theme::light());
        assert_eq!(auto, Theme::dark()); // Auto defaults to dark
    }

    #[test]
    fn test_level_color() {
        let theme = Theme::dark();

        assert_eq!(
            theme.level_color(StormLevel::SuperTyphoon),
            theme.super_typhoon_fg
        );
        assert_eq!(
            theme.level_color(StormLevel::Unclassified),
            theme.unclassified_fg
        );
    }

    #[test]
    fn test_level_indicator() {
        assert_eq!(Theme::level_indicator(StormLevel::Typhoon), "[TY]");
        assert_eq!(Theme::level_indicator(StormLevel::SuperTyphoon), "[STY]");
        assert_eq!(Theme::level_indicator(StormLevel::Unclassified), "[--]");
    }

    #[test]
    fn test_theme_default() {
        assert_eq!(Theme::default(), Theme::dark());
    }
}
