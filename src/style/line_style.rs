//! Line styling options.

use serde::Deserialize;

use super::color::Color;
use crate::error::{PlotError, PlotResult};

const DASHED: &[f64] = &[8.0, 4.0];
const DOTTED: &[f64] = &[2.0, 2.0];
const DASH_DOT: &[f64] = &[8.0, 4.0, 2.0, 4.0];
const DASH_DOT_DOT: &[f64] = &[8.0, 4.0, 2.0, 4.0, 2.0, 4.0];

/// Dash pattern for lines: alternating on/off lengths, solid when empty.
///
/// In JSON the presets are plain strings (`"dashed"`) and a custom pattern is
/// `{"custom": [6, 3]}`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashPattern {
    /// Solid line
    #[default]
    Solid,
    /// Dashed line (8 on, 4 off)
    Dashed,
    /// Dotted line
    Dotted,
    /// Alternating dash-dot pattern
    DashDot,
    /// Alternating dash-dot-dot pattern
    DashDotDot,
    /// Custom dash array [dash_length, gap_length, ...]
    Custom(Vec<f64>),
}

impl DashPattern {
    /// Build a custom pattern, rejecting negative or non-finite entries.
    ///
    /// An empty vector is a solid line.
    pub fn custom(segments: Vec<f64>) -> PlotResult<Self> {
        let pattern = DashPattern::Custom(segments);
        pattern.validate()?;
        Ok(pattern)
    }

    /// Check that every entry is finite and non-negative.
    pub fn validate(&self) -> PlotResult<()> {
        match self
            .segments()
            .iter()
            .find(|v| !v.is_finite() || **v < 0.0)
        {
            Some(bad) => Err(PlotError::InvalidDashPattern(format!(
                "entry {} must be a finite, non-negative length",
                bad
            ))),
            None => Ok(()),
        }
    }

    /// The on/off lengths of this pattern.
    pub fn segments(&self) -> &[f64] {
        match self {
            DashPattern::Solid => &[],
            DashPattern::Dashed => DASHED,
            DashPattern::Dotted => DOTTED,
            DashPattern::DashDot => DASH_DOT,
            DashPattern::DashDotDot => DASH_DOT_DOT,
            DashPattern::Custom(arr) => arr.as_slice(),
        }
    }

    pub fn is_solid(&self) -> bool {
        self.segments().is_empty()
    }

    /// Convert to SVG stroke-dasharray value.
    pub fn to_svg_dasharray(&self) -> Option<String> {
        if self.is_solid() {
            return None;
        }
        Some(
            self.segments()
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(","),
        )
    }

    /// Parse from matplotlib-style format string (prefix match).
    pub fn from_format_str(s: &str) -> Option<Self> {
        // Check longest patterns first
        if s.starts_with("--") {
            Some(DashPattern::Dashed)
        } else if s.starts_with("-.") {
            Some(DashPattern::DashDot)
        } else if s.starts_with(':') {
            Some(DashPattern::Dotted)
        } else if s.starts_with('-') {
            Some(DashPattern::Solid)
        } else {
            None
        }
    }
}

/// Stroke styling applied to a polyline.
#[derive(Debug, Clone, PartialEq)]
pub struct LineStyle {
    /// Line color
    pub color: Color,
    /// Line width in pixels
    pub width: f64,
    /// Dash pattern
    pub dash: DashPattern,
}

impl LineStyle {
    /// Create a new line style with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the line color.
    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.color = color.into();
        self
    }

    /// Set the line width.
    pub fn width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    /// Set the dash pattern.
    pub fn dash(mut self, dash: DashPattern) -> Self {
        self.dash = dash;
        self
    }

    /// Generate SVG style attributes.
    ///
    /// Caps are always butt so dashes keep their nominal length.
    pub fn to_svg_style(&self) -> String {
        let mut attrs = vec![
            format!("stroke=\"{}\"", self.color.to_svg_string()),
            format!("stroke-width=\"{}\"", self.width),
            "stroke-linecap=\"butt\" stroke-linejoin=\"round\"".to_string(),
            "fill=\"none\"".to_string(),
        ];

        if let Some(dasharray) = self.dash.to_svg_dasharray() {
            attrs.push(format!("stroke-dasharray=\"{}\"", dasharray));
        }

        attrs.join(" ")
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        LineStyle {
            color: Color::default(),
            width: 1.5,
            dash: DashPattern::Solid,
        }
    }
}
