//! Renderer configuration.
//!
//! Everything a path renderer takes from the theme is resolved into a
//! [`RendererConfig`] once, at construction. The config can also be loaded
//! from JSON; missing fields fall back to the defaults listed on
//! [`RendererConfig::default`].

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use crate::error::{PlotError, PlotResult};
use crate::style::{Color, DashPattern, DominantBaseline, TextStyle, ThemeConfig};

/// Styling of one plot series' path and legend label.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RendererConfig {
    /// Stroke width in pixels
    pub stroke_width: f64,
    /// Stroke color
    pub color: Color,
    /// Dash pattern of the path and its legend sample
    pub dash: DashPattern,
    /// Legend label font size in pixels
    pub label_font_size: f64,
    /// Legend label color
    pub label_color: Color,
    /// Legend label font family
    pub label_font_family: String,
}

impl Default for RendererConfig {
    /// Stroke 1.5px, palette color C0, solid, labels 10px black sans-serif.
    fn default() -> Self {
        RendererConfig {
            stroke_width: 1.5,
            color: Color::default(),
            dash: DashPattern::Solid,
            label_font_size: 10.0,
            label_color: Color::BLACK,
            label_font_family: "sans-serif".to_string(),
        }
    }
}

impl RendererConfig {
    /// Resolve the theme defaults for the series at `series_index`.
    pub fn from_theme(theme: &ThemeConfig, series_index: usize) -> Self {
        let label = &theme.legend_label_style;
        RendererConfig {
            stroke_width: theme.line_width,
            color: theme.series_color(series_index),
            dash: theme.dash.clone(),
            label_font_size: label.font_size,
            label_color: label.color.clone(),
            label_font_family: label.font_family.clone(),
        }
    }

    /// Load a configuration from a JSON file and validate it.
    pub fn load(path: impl AsRef<Path>) -> PlotResult<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Read a configuration from JSON and validate it.
    pub fn from_reader<R: Read>(reader: R) -> PlotResult<Self> {
        let config: RendererConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the renderer cannot draw with.
    pub fn validate(&self) -> PlotResult<()> {
        if !self.stroke_width.is_finite() || self.stroke_width < 0.0 {
            return Err(PlotError::InvalidConfig(format!(
                "stroke_width must be a finite, non-negative number, got {}",
                self.stroke_width
            )));
        }
        if !self.label_font_size.is_finite() || self.label_font_size <= 0.0 {
            return Err(PlotError::InvalidConfig(format!(
                "label_font_size must be positive, got {}",
                self.label_font_size
            )));
        }
        self.dash.validate()
    }

    /// Text style for the legend label.
    pub fn label_style(&self) -> TextStyle {
        TextStyle::new()
            .font_family(self.label_font_family.clone())
            .font_size(self.label_font_size)
            .color(self.label_color.clone())
            .baseline(DominantBaseline::Middle)
    }
}
