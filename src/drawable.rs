//! Drawable tree produced by path renderers.
//!
//! A drawable is either a styled polyline, a text label, a group of drawables
//! rendered in order, or explicitly nothing. Backends walk the tree; the
//! renderers only ever build it.

use crate::element::{PlotPoint, Point, Text};
use crate::style::{Color, DashPattern, LineStyle};

/// A stroked polyline.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub points: Vec<Point>,
    pub style: LineStyle,
}

/// A renderable unit.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Drawable {
    /// Draws nothing
    #[default]
    Empty,
    Stroke(Stroke),
    Text(Text),
    /// Children drawn in order, later ones on top
    Group(Vec<Drawable>),
}

impl Drawable {
    /// Stroke a polyline through `points` with the given width.
    ///
    /// The stroke starts out solid in the default color; see
    /// [`with_color`](Self::with_color) and [`with_dash`](Self::with_dash).
    pub fn stroke<T: PlotPoint>(points: &[T], width: f64) -> Self {
        Drawable::Stroke(Stroke {
            points: points.iter().map(|p| Point::new(p.x(), p.y())).collect(),
            style: LineStyle::new().width(width),
        })
    }

    /// A horizontal line from the origin, as used for legend samples.
    pub fn line(length: f64, width: f64) -> Self {
        Drawable::stroke(&[Point::new(0.0, 0.0), Point::new(length, 0.0)], width)
    }

    /// A text label.
    pub fn text(text: Text) -> Self {
        Drawable::Text(text)
    }

    /// Merge drawables into one, dropping those that draw nothing.
    pub fn group(children: impl IntoIterator<Item = Drawable>) -> Self {
        Drawable::Group(children.into_iter().filter(|d| !d.is_empty()).collect())
    }

    /// Set the stroke color on every stroke in this drawable.
    pub fn with_color(mut self, color: &Color) -> Self {
        self.for_each_stroke(&mut |stroke: &mut Stroke| stroke.style.color = color.clone());
        self
    }

    /// Set the dash pattern on every stroke in this drawable.
    pub fn with_dash(mut self, dash: &DashPattern) -> Self {
        self.for_each_stroke(&mut |stroke: &mut Stroke| stroke.style.dash = dash.clone());
        self
    }

    /// Whether rendering this drawable would produce no output.
    pub fn is_empty(&self) -> bool {
        match self {
            Drawable::Empty => true,
            Drawable::Group(children) => children.iter().all(Drawable::is_empty),
            Drawable::Stroke(_) | Drawable::Text(_) => false,
        }
    }

    /// All strokes in drawing order.
    pub fn strokes(&self) -> Vec<&Stroke> {
        let mut out = Vec::new();
        self.collect_strokes(&mut out);
        out
    }

    fn collect_strokes<'a>(&'a self, out: &mut Vec<&'a Stroke>) {
        match self {
            Drawable::Stroke(stroke) => out.push(stroke),
            Drawable::Group(children) => {
                for child in children {
                    child.collect_strokes(out);
                }
            }
            Drawable::Empty | Drawable::Text(_) => {}
        }
    }

    fn for_each_stroke(&mut self, f: &mut dyn FnMut(&mut Stroke)) {
        match self {
            Drawable::Stroke(stroke) => f(stroke),
            Drawable::Group(children) => {
                for child in children {
                    child.for_each_stroke(f);
                }
            }
            Drawable::Empty | Drawable::Text(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stroke_copies_positions() {
        let d = Drawable::stroke(&[(1.0, 2.0), (3.0, 4.0)], 2.0);
        let strokes = d.strokes();
        assert_eq!(strokes.len(), 1);
        assert_eq!(strokes[0].points, vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)]);
        assert_eq!(strokes[0].style.width, 2.0);
        assert!(strokes[0].style.dash.is_solid());
    }

    #[test]
    fn test_styling_reaches_nested_strokes() {
        let d = Drawable::group(vec![
            Drawable::line(5.0, 1.0),
            Drawable::group(vec![Drawable::line(3.0, 1.0)]),
            Drawable::text(Text::new("label", 0.0, 0.0)),
        ])
        .with_color(&Color::RED)
        .with_dash(&DashPattern::Dotted);

        let strokes = d.strokes();
        assert_eq!(strokes.len(), 2);
        for stroke in strokes {
            assert_eq!(stroke.style.color, Color::RED);
            assert_eq!(stroke.style.dash, DashPattern::Dotted);
        }
    }

    #[test]
    fn test_group_drops_empty_children() {
        let d = Drawable::group(vec![Drawable::Empty, Drawable::group(vec![])]);
        assert_eq!(d, Drawable::Group(vec![]));
        assert!(d.is_empty());

        let d = Drawable::group(vec![Drawable::Empty, Drawable::line(1.0, 1.0)]);
        assert!(!d.is_empty());
        assert_eq!(d.strokes().len(), 1);
    }
}
