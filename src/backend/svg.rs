//! SVG rendering backend for drawables.

use crate::drawable::{Drawable, Stroke};
use crate::element::{Extent, Point, Text};
use crate::style::{Color, LineStyle};

/// Accumulates drawables into an SVG document.
#[derive(Debug)]
pub struct SvgBackend {
    /// Image width in pixels
    pub width: f64,
    /// Image height in pixels
    pub height: f64,
    /// SVG content accumulated during rendering
    content: Vec<String>,
}

impl SvgBackend {
    /// Create a new SVG backend with the given dimensions.
    pub fn new(width: f64, height: f64) -> Self {
        SvgBackend {
            width,
            height,
            content: Vec::new(),
        }
    }

    /// Create a backend sized to an extent.
    pub fn for_extent(extent: &Extent) -> Self {
        Self::new(extent.width(), extent.height())
    }

    /// Fill the whole canvas.
    pub fn fill_background(&mut self, color: &Color) {
        self.content.push(format!(
            "<rect width=\"{}\" height=\"{}\" fill=\"{}\"/>",
            self.width,
            self.height,
            color.to_svg_string()
        ));
    }

    /// Emit a drawable and all of its children.
    pub fn draw(&mut self, drawable: &Drawable) {
        match drawable {
            Drawable::Empty => {}
            Drawable::Stroke(Stroke { points, style }) => self.draw_polyline(points, style),
            Drawable::Text(text) => self.draw_text(text),
            Drawable::Group(children) => {
                if children.is_empty() {
                    return;
                }
                self.start_group("");
                for child in children {
                    self.draw(child);
                }
                self.end_group();
            }
        }
    }

    /// Emit a drawable shifted by `(dx, dy)`.
    pub fn draw_at(&mut self, drawable: &Drawable, dx: f64, dy: f64) {
        if drawable.is_empty() {
            return;
        }
        self.start_group(&format!("transform=\"translate({:.2},{:.2})\"", dx, dy));
        self.draw(drawable);
        self.end_group();
    }

    /// Draw a polyline.
    pub fn draw_polyline(&mut self, points: &[Point], style: &LineStyle) {
        if points.is_empty() {
            return;
        }

        let points_str: String = points
            .iter()
            .map(|p| format!("{:.2},{:.2}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ");

        self.content.push(format!(
            "<polyline points=\"{}\" {}/>",
            points_str,
            style.to_svg_style()
        ));
    }

    /// Draw text.
    pub fn draw_text(&mut self, text: &Text) {
        self.content.push(text.to_svg());
    }

    /// Start a group with optional attributes.
    pub fn start_group(&mut self, attrs: &str) {
        if attrs.is_empty() {
            self.content.push("<g>".to_string());
        } else {
            self.content.push(format!("<g {}>", attrs));
        }
    }

    /// End the current group.
    pub fn end_group(&mut self) {
        self.content.push("</g>".to_string());
    }

    /// Render the final SVG string.
    pub fn render(self) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">
  {}
</svg>"#,
            self.width,
            self.height,
            self.width,
            self.height,
            self.content.join("\n  ")
        )
    }
}
