//! Text styling options for legend labels.

use super::color::Color;

/// Font weight options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl FontWeight {
    pub fn to_svg_string(&self) -> &'static str {
        match self {
            FontWeight::Normal => "normal",
            FontWeight::Bold => "bold",
        }
    }
}

/// Vertical alignment for text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DominantBaseline {
    #[default]
    Auto,
    /// Centered on the anchor point; used for legend labels next to a swatch
    Middle,
}

impl DominantBaseline {
    pub fn to_svg_string(&self) -> &'static str {
        match self {
            DominantBaseline::Auto => "auto",
            DominantBaseline::Middle => "middle",
        }
    }
}

/// Style configuration for text elements.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// Font family (e.g., "Arial", "sans-serif")
    pub font_family: String,
    /// Font size in pixels
    pub font_size: f64,
    pub weight: FontWeight,
    pub color: Color,
    pub baseline: DominantBaseline,
}

impl TextStyle {
    /// Create a new text style with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the font family.
    pub fn font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    /// Set the font size.
    pub fn font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    /// Set bold weight.
    pub fn bold(mut self) -> Self {
        self.weight = FontWeight::Bold;
        self
    }

    /// Set the text color.
    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.color = color.into();
        self
    }

    /// Set the dominant baseline.
    pub fn baseline(mut self, baseline: DominantBaseline) -> Self {
        self.baseline = baseline;
        self
    }

    /// Generate SVG style attributes (excluding positioning attributes).
    pub fn to_svg_attrs(&self) -> String {
        let mut attrs = vec![
            format!("font-family=\"{}\"", self.font_family),
            format!("font-size=\"{}\"", self.font_size),
            format!("font-weight=\"{}\"", self.weight.to_svg_string()),
            format!("fill=\"{}\"", self.color.to_svg_string()),
        ];
        if self.baseline != DominantBaseline::Auto {
            attrs.push(format!(
                "dominant-baseline=\"{}\"",
                self.baseline.to_svg_string()
            ));
        }
        attrs.join(" ")
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        TextStyle {
            font_family: "sans-serif".to_string(),
            font_size: 12.0,
            weight: FontWeight::Normal,
            color: Color::BLACK,
            baseline: DominantBaseline::Auto,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_svg_attrs() {
        let style = TextStyle::new().font_size(10.0).color(Color::RED);
        let attrs = style.to_svg_attrs();
        assert!(attrs.contains("font-size=\"10\""));
        assert!(attrs.contains("fill=\"rgb(255,0,0)\""));
        assert!(!attrs.contains("dominant-baseline"));

        let attrs = style.baseline(DominantBaseline::Middle).bold().to_svg_attrs();
        assert!(attrs.contains("dominant-baseline=\"middle\""));
        assert!(attrs.contains("font-weight=\"bold\""));
    }
}
