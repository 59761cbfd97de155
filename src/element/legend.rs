//! Legend contribution of a path renderer.

use log::warn;

use crate::drawable::Drawable;

/// Swatch length used for solid lines, and the length dashed swatches are
/// extended towards.
pub const LEGEND_BASE_LENGTH: f64 = 8.0;

/// What a renderer contributes to the plot legend.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LegendContext {
    /// No legend entry
    #[default]
    Empty,
    /// A sample line paired with its label
    Entry { sample: Drawable, label: Drawable },
}

impl LegendContext {
    /// Create an entry from a sample drawable and a label drawable.
    pub fn entry(sample: Drawable, label: Drawable) -> Self {
        LegendContext::Entry { sample, label }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, LegendContext::Empty)
    }

    pub fn sample(&self) -> Option<&Drawable> {
        match self {
            LegendContext::Entry { sample, .. } => Some(sample),
            LegendContext::Empty => None,
        }
    }

    pub fn label(&self) -> Option<&Drawable> {
        match self {
            LegendContext::Entry { label, .. } => Some(label),
            LegendContext::Empty => None,
        }
    }
}

/// Length of a legend sample line for the given dash pattern.
///
/// The sample shows at least two full periods of the pattern (four for a
/// single-entry pattern) and, when that is shorter than
/// [`LEGEND_BASE_LENGTH`], is extended by whole periods towards it. A solid
/// pattern gets the base length. Negative or non-finite entries count as zero.
pub fn legend_stroke_length(pattern: &[f64]) -> f64 {
    if pattern.is_empty() {
        return LEGEND_BASE_LENGTH;
    }

    let pattern_length: f64 = pattern
        .iter()
        .map(|&v| {
            if v.is_finite() && v >= 0.0 {
                v
            } else {
                warn!("Ignoring dash entry {} in legend sample length", v);
                0.0
            }
        })
        .sum();
    if pattern_length <= 0.0 {
        return LEGEND_BASE_LENGTH;
    }

    let minimum_length = if pattern.len() == 1 {
        4.0 * pattern_length
    } else {
        2.0 * pattern_length
    };

    if minimum_length < LEGEND_BASE_LENGTH {
        let diff = LEGEND_BASE_LENGTH - minimum_length;
        let multiplier = (diff / pattern_length).floor().max(1.0);
        minimum_length + pattern_length * multiplier
    } else {
        minimum_length
    }
}
