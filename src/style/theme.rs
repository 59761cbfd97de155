//! Predefined themes for plot series.

use super::color::{Color, TAB10};
use super::line_style::DashPattern;
use super::text_style::{DominantBaseline, TextStyle};

/// Predefined plot themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Default theme with white background
    #[default]
    Default,
    /// Dark theme with dark background
    Dark,
    /// Minimal theme with thin lines
    Minimal,
    /// Seaborn-inspired theme
    Seaborn,
    /// High contrast theme for accessibility
    HighContrast,
}

impl Theme {
    /// Get the configuration for this theme.
    pub fn config(&self) -> ThemeConfig {
        match self {
            Theme::Default => ThemeConfig::default_theme(),
            Theme::Dark => ThemeConfig::dark_theme(),
            Theme::Minimal => ThemeConfig::minimal_theme(),
            Theme::Seaborn => ThemeConfig::seaborn_theme(),
            Theme::HighContrast => ThemeConfig::high_contrast_theme(),
        }
    }

    /// Look a theme up by its lowercase name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" => Some(Theme::Default),
            "dark" => Some(Theme::Dark),
            "minimal" => Some(Theme::Minimal),
            "seaborn" => Some(Theme::Seaborn),
            "high_contrast" | "high-contrast" => Some(Theme::HighContrast),
            _ => None,
        }
    }
}

/// Theme settings a path renderer reads at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeConfig {
    /// Background color for the drawing surface
    pub background: Color,
    /// Color cycle for plot series
    pub color_cycle: Vec<Color>,
    /// Default line width
    pub line_width: f64,
    /// Default dash pattern for series lines
    pub dash: DashPattern,
    /// Style for legend labels
    pub legend_label_style: TextStyle,
}

impl ThemeConfig {
    /// Series color for the given index, cycling through the palette.
    pub fn series_color(&self, index: usize) -> Color {
        if self.color_cycle.is_empty() {
            return Color::default();
        }
        self.color_cycle[index % self.color_cycle.len()].clone()
    }

    fn default_theme() -> Self {
        ThemeConfig {
            background: Color::WHITE,
            color_cycle: TAB10.to_vec(),
            line_width: 1.5,
            dash: DashPattern::Solid,
            legend_label_style: label_style(10.0, Color::BLACK),
        }
    }

    fn dark_theme() -> Self {
        ThemeConfig {
            background: Color::rgb(30, 30, 30),
            color_cycle: vec![
                Color::rgb(0x58, 0xa6, 0xff),
                Color::rgb(0xf0, 0x88, 0x3e),
                Color::rgb(0x3f, 0xb9, 0x50),
                Color::rgb(0xf8, 0x51, 0x49),
                Color::rgb(0xa3, 0x71, 0xf7),
                Color::rgb(0xd2, 0x99, 0x22),
            ],
            line_width: 1.5,
            dash: DashPattern::Solid,
            legend_label_style: label_style(10.0, Color::rgb(220, 220, 220)),
        }
    }

    fn minimal_theme() -> Self {
        ThemeConfig {
            background: Color::WHITE,
            color_cycle: TAB10.to_vec(),
            line_width: 1.0,
            dash: DashPattern::Solid,
            legend_label_style: label_style(9.0, Color::DARK_GRAY),
        }
    }

    fn seaborn_theme() -> Self {
        ThemeConfig {
            background: Color::rgb(234, 234, 242),
            color_cycle: vec![
                Color::rgb(0x4c, 0x72, 0xb0),
                Color::rgb(0xdd, 0x84, 0x52),
                Color::rgb(0x55, 0xa8, 0x68),
                Color::rgb(0xc4, 0x4e, 0x52),
                Color::rgb(0x81, 0x72, 0xb3),
                Color::rgb(0x93, 0x78, 0x60),
            ],
            line_width: 1.75,
            dash: DashPattern::Solid,
            legend_label_style: label_style(10.0, Color::rgb(50, 50, 50)),
        }
    }

    fn high_contrast_theme() -> Self {
        ThemeConfig {
            background: Color::WHITE,
            color_cycle: vec![
                Color::BLUE,
                Color::RED,
                Color::GREEN,
                Color::rgb(0xff, 0x8c, 0x00),
                Color::rgb(0x80, 0x00, 0x80),
                Color::BLACK,
            ],
            line_width: 2.5,
            dash: DashPattern::Solid,
            legend_label_style: label_style(12.0, Color::BLACK).bold(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self::default_theme()
    }
}

fn label_style(size: f64, color: Color) -> TextStyle {
    TextStyle::new()
        .font_size(size)
        .color(color)
        .baseline(DominantBaseline::Middle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_lookup() {
        assert_eq!(Theme::from_name("Dark"), Some(Theme::Dark));
        assert_eq!(Theme::from_name("high-contrast"), Some(Theme::HighContrast));
        assert_eq!(Theme::from_name("neon"), None);
    }

    #[test]
    fn test_series_color_cycles() {
        let config = Theme::HighContrast.config();
        assert_eq!(config.series_color(0), Color::BLUE);
        assert_eq!(config.series_color(6), Color::BLUE);

        let empty = ThemeConfig {
            color_cycle: Vec::new(),
            ..ThemeConfig::default()
        };
        assert_eq!(empty.series_color(3), Color::default());
    }

    #[test]
    fn test_themes_differ_in_label_style() {
        let light = Theme::Default.config();
        let dark = Theme::Dark.config();
        assert_ne!(light.legend_label_style.color, dark.legend_label_style.color);
        assert_eq!(light.legend_label_style.baseline, DominantBaseline::Middle);
    }
}
